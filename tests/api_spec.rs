use axum::http::StatusCode;
use axum_test::TestServer;
use uuid::Uuid;
use wsjf::api::create_router;
use wsjf::models::*;
use wsjf::session::{ConfigReport, Prioritizer};

fn setup() -> TestServer {
    let app = create_router(Prioritizer::new());
    TestServer::new(app).expect("Failed to create test server")
}

fn draft(name: &str, scores: [u8; 4], job_size: u32) -> CreateInitiativeInput {
    let [uv, tc, rr, cr] = scores;
    CreateInitiativeInput::named(name)
        .with_scores(uv, tc, rr, cr)
        .with_job_size(job_size)
}

async fn create_test_initiative(server: &TestServer, input: CreateInitiativeInput) -> Initiative {
    server
        .post("/api/v1/initiatives")
        .json(&input)
        .await
        .json::<Initiative>()
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

mod initiatives {
    use super::*;

    #[tokio::test]
    async fn returns_empty_list_initially() {
        let server = setup();

        let response = server.get("/api/v1/initiatives").await;

        response.assert_status_ok();
        let initiatives: Vec<Initiative> = response.json();
        assert!(initiatives.is_empty());
    }

    #[tokio::test]
    async fn creates_initiative_with_fresh_id() {
        let server = setup();

        let response = server
            .post("/api/v1/initiatives")
            .json(&draft("Automate readiness report", [10, 8, 6, 3], 5))
            .await;

        response.assert_status(StatusCode::CREATED);
        let created: Initiative = response.json();
        assert_eq!(created.name, "Automate readiness report");
        assert_eq!(created.uv.value(), 10);
        assert_eq!(created.job_size.value(), 5);
        assert!(!created.id.is_nil());
    }

    #[tokio::test]
    async fn fills_omitted_scores_with_form_defaults() {
        let server = setup();

        let response = server
            .post("/api/v1/initiatives")
            .json(&serde_json::json!({ "name": "Defaults" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let created: Initiative = response.json();
        assert_eq!(
            [created.uv.value(), created.tc.value(), created.rr.value(), created.cr.value()],
            [3, 3, 3, 1]
        );
        assert_eq!(created.job_size.value(), 8);
    }

    #[tokio::test]
    async fn rejects_blank_name_without_storing() {
        let server = setup();

        let response = server
            .post("/api/v1/initiatives")
            .json(&CreateInitiativeInput::named("   "))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("name must not be empty"));

        let initiatives: Vec<Initiative> = server.get("/api/v1/initiatives").await.json();
        assert!(initiatives.is_empty());
    }

    #[tokio::test]
    async fn rejects_off_scale_score() {
        let server = setup();

        let response = server
            .post("/api/v1/initiatives")
            .json(&draft("Bad", [5, 3, 3, 1], 8))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("uv"));
    }

    #[tokio::test]
    async fn rejects_non_fibonacci_job_size() {
        let server = setup();

        let response = server
            .post("/api/v1/initiatives")
            .json(&draft("Bad", [3, 3, 3, 1], 7))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn lists_in_insertion_order() {
        let server = setup();
        create_test_initiative(&server, CreateInitiativeInput::named("Zebra")).await;
        create_test_initiative(&server, CreateInitiativeInput::named("Alpha")).await;

        let initiatives: Vec<Initiative> = server.get("/api/v1/initiatives").await.json();

        let names: Vec<&str> = initiatives.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Alpha"]);
    }

    #[tokio::test]
    async fn deletes_initiative() {
        let server = setup();
        let keep = create_test_initiative(&server, CreateInitiativeInput::named("Keep")).await;
        let gone = create_test_initiative(&server, CreateInitiativeInput::named("Drop")).await;

        let response = server
            .delete(&format!("/api/v1/initiatives/{}", gone.id))
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
        let initiatives: Vec<Initiative> = server.get("/api/v1/initiatives").await.json();
        assert_eq!(initiatives, vec![keep]);
    }

    #[tokio::test]
    async fn deleting_unknown_id_is_a_no_op() {
        let server = setup();
        create_test_initiative(&server, CreateInitiativeInput::named("Keep")).await;

        let response = server
            .delete(&format!("/api/v1/initiatives/{}", Uuid::new_v4()))
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
        let initiatives: Vec<Initiative> = server.get("/api/v1/initiatives").await.json();
        assert_eq!(initiatives.len(), 1);
    }

    #[tokio::test]
    async fn deleting_non_uuid_id_is_a_no_op() {
        let server = setup();
        create_test_initiative(&server, CreateInitiativeInput::named("Keep")).await;

        let response = server.delete("/api/v1/initiatives/1700000000000").await;

        response.assert_status(StatusCode::NO_CONTENT);
        let initiatives: Vec<Initiative> = server.get("/api/v1/initiatives").await.json();
        assert_eq!(initiatives.len(), 1);
    }

    #[tokio::test]
    async fn rejects_malformed_body_as_bad_request() {
        let server = setup();

        let response = server
            .post("/api/v1/initiatives")
            .json(&serde_json::json!({ "name": "Huge", "uv": 300 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let initiatives: Vec<Initiative> = server.get("/api/v1/initiatives").await.json();
        assert!(initiatives.is_empty());
    }
}

mod ranking {
    use super::*;

    #[tokio::test]
    async fn ranks_by_wsjf_descending() {
        let server = setup();
        create_test_initiative(&server, draft("B", [1, 1, 1, 1], 1)).await;
        create_test_initiative(&server, draft("A", [10, 10, 10, 10], 1)).await;

        let response = server.get("/api/v1/ranked").await;

        response.assert_status_ok();
        let ranked: Vec<RankedInitiative> = response.json();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].initiative.name, "A");
        assert_eq!(ranked[0].cost_of_delay, 40);
        assert_eq!(ranked[0].wsjf, 40.0);
        assert_eq!(ranked[1].initiative.name, "B");
        assert_eq!(ranked[1].wsjf, 4.0);
    }

    #[tokio::test]
    async fn flattens_initiative_fields() {
        let server = setup();
        create_test_initiative(&server, draft("Flat", [3, 3, 3, 1], 8)).await;

        let body: serde_json::Value = server.get("/api/v1/ranked").await.json();

        assert_eq!(body[0]["name"], "Flat");
        assert_eq!(body[0]["job_size"], 8);
        assert_eq!(body[0]["cost_of_delay"], 10);
        assert_eq!(body[0]["wsjf"], 1.25);
    }

    #[tokio::test]
    async fn reflects_weight_changes_immediately() {
        let server = setup();
        create_test_initiative(&server, draft("C", [1, 10, 10, 10], 8)).await;

        server
            .put("/api/v1/weights/uv")
            .json(&serde_json::json!({ "value": 10 }))
            .await
            .assert_status_ok();

        let ranked: Vec<RankedInitiative> = server.get("/api/v1/ranked").await.json();
        assert_eq!(ranked[0].cost_of_delay, 40);
        assert_eq!(ranked[0].wsjf, 5.0);
    }

    #[tokio::test]
    async fn is_stable_across_reads() {
        let server = setup();
        create_test_initiative(&server, draft("X", [6, 6, 6, 6], 2)).await;
        create_test_initiative(&server, draft("Y", [6, 6, 6, 6], 2)).await;

        let first: Vec<RankedInitiative> = server.get("/api/v1/ranked").await.json();
        let second: Vec<RankedInitiative> = server.get("/api/v1/ranked").await.json();

        assert_eq!(first, second);
        assert_eq!(first[0].initiative.name, "X");
    }
}

mod weights {
    use super::*;

    #[tokio::test]
    async fn starts_at_unit_weights() {
        let server = setup();

        let weights: WeightVector = server.get("/api/v1/weights").await.json();

        assert_eq!(weights, WeightVector::default());
    }

    #[tokio::test]
    async fn sets_single_weight() {
        let server = setup();

        let response = server
            .put("/api/v1/weights/rr")
            .json(&serde_json::json!({ "value": 7 }))
            .await;

        response.assert_status_ok();
        let weights: WeightVector = response.json();
        assert_eq!(weights, WeightVector { uv: 1, tc: 1, rr: 7, cr: 1 });
    }

    #[tokio::test]
    async fn rejects_out_of_range_weight() {
        let server = setup();

        let response = server
            .put("/api/v1/weights/tc")
            .json(&serde_json::json!({ "value": 11 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let weights: WeightVector = server.get("/api/v1/weights").await.json();
        assert_eq!(weights, WeightVector::default());
    }

    #[tokio::test]
    async fn rejects_unknown_factor() {
        let server = setup();

        let response = server
            .put("/api/v1/weights/jobSize")
            .json(&serde_json::json!({ "value": 3 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("Unknown factor"));
    }

    #[tokio::test]
    async fn replaces_whole_vector() {
        let server = setup();
        let target = WeightVector { uv: 10, tc: 5, rr: 2, cr: 8 };

        let response = server.put("/api/v1/weights").json(&target).await;

        response.assert_status_ok();
        let weights: WeightVector = server.get("/api/v1/weights").await.json();
        assert_eq!(weights, target);
    }

    #[tokio::test]
    async fn rejects_vector_with_zero_weight() {
        let server = setup();

        let response = server
            .put("/api/v1/weights")
            .json(&WeightVector { uv: 0, tc: 1, rr: 1, cr: 1 })
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_weight_too_large_for_its_field() {
        let server = setup();

        let response = server
            .put("/api/v1/weights/uv")
            .json(&serde_json::json!({ "value": 300 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let weights: WeightVector = server.get("/api/v1/weights").await.json();
        assert_eq!(weights, WeightVector::default());
    }

    #[tokio::test]
    async fn rejects_vector_with_weight_too_large_for_its_field() {
        let server = setup();

        let response = server
            .put("/api/v1/weights")
            .json(&serde_json::json!({ "uv": 1, "tc": 300, "rr": 1, "cr": 1 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let weights: WeightVector = server.get("/api/v1/weights").await.json();
        assert_eq!(weights, WeightVector::default());
    }
}

mod config_report {
    use super::*;

    #[tokio::test]
    async fn reports_current_state() {
        let server = setup();
        create_test_initiative(&server, CreateInitiativeInput::named("One")).await;
        create_test_initiative(&server, CreateInitiativeInput::named("Two")).await;
        server
            .put("/api/v1/weights/cr")
            .json(&serde_json::json!({ "value": 4 }))
            .await;

        let report: ConfigReport = server.get("/api/v1/config").await.json();

        assert_eq!(report.storage_mode, "in-memory");
        assert_eq!(report.data_count, 2);
        assert_eq!(report.weights, WeightVector { uv: 1, tc: 1, rr: 1, cr: 4 });
    }

    #[tokio::test]
    async fn uses_weights_the_session_started_with() {
        let weights = WeightVector::new(2, 3, 4, 5).expect("valid weights");
        let server = TestServer::new(create_router(Prioritizer::with_weights(weights)))
            .expect("Failed to create test server");

        let report: ConfigReport = server.get("/api/v1/config").await.json();

        assert_eq!(report.weights, weights);
        assert_eq!(report.data_count, 0);
    }
}

mod factors {
    use super::*;

    #[tokio::test]
    async fn lists_catalogue() {
        let server = setup();

        let response = server.get("/api/v1/factors").await;

        response.assert_status_ok();
        let catalogue: FactorCatalogue = response.json();
        let keys: Vec<Factor> = catalogue.factors.iter().map(|f| f.key).collect();
        assert_eq!(keys, Factor::ALL.to_vec());
        assert_eq!(catalogue.job_size.allowed, FIBONACCI_SCORES.to_vec());
    }
}
