//! Plain-text rendering of rankings and the factor catalogue.
//!
//! Rounding happens only here: WSJF is shown with two decimals. Cost of
//! Delay is already a whole number and is printed as is. The values being
//! rendered are never modified.

use crate::models::{FactorCatalogue, RankedInitiative};

const NAME_HEADER: &str = "Initiative";

/// Cost of Delay for display.
pub fn format_cost_of_delay(cost_of_delay: u32) -> String {
    cost_of_delay.to_string()
}

/// WSJF rounded to two decimal places for display.
pub fn format_wsjf(wsjf: f64) -> String {
    format!("{:.2}", wsjf)
}

/// Render a ranking as an aligned table.
///
/// Example output:
/// ```text
/// Rank  Initiative    CoD    WSJF  Size
///    1  A              40   40.00     1
///    2  B               4    4.00     1
/// ```
pub fn render_table(ranked: &[RankedInitiative]) -> String {
    if ranked.is_empty() {
        return "No initiatives to rank.\n".to_string();
    }

    let name_width = ranked
        .iter()
        .map(|r| r.initiative.name.chars().count())
        .chain(std::iter::once(NAME_HEADER.len()))
        .max()
        .unwrap_or(NAME_HEADER.len());

    let mut output = format!(
        "{:>4}  {:<name_width$}  {:>5}  {:>6}  {:>4}\n",
        "Rank", NAME_HEADER, "CoD", "WSJF", "Size"
    );

    for (i, item) in ranked.iter().enumerate() {
        output.push_str(&format!(
            "{:>4}  {:<name_width$}  {:>5}  {:>6}  {:>4}\n",
            i + 1,
            item.initiative.name,
            format_cost_of_delay(item.cost_of_delay),
            format_wsjf(item.wsjf),
            item.initiative.job_size.value(),
        ));
    }

    output
}

/// Render the scoring scales with the meaning of each step.
pub fn render_factors(catalogue: &FactorCatalogue) -> String {
    let mut output = String::new();

    for info in &catalogue.factors {
        output.push_str(&format!("{} ({})\n", info.label, info.key));
        output.push_str(&format!("  {}\n", info.help));
        for definition in &info.definitions {
            output.push_str(&format!("  {:>2}: {}\n", definition.score, definition.meaning));
        }
        output.push('\n');
    }

    let sizes: Vec<String> = catalogue
        .job_size
        .allowed
        .iter()
        .map(u32::to_string)
        .collect();
    output.push_str(&format!("{}\n", catalogue.job_size.label));
    output.push_str(&format!("  {}\n", catalogue.job_size.help));
    output.push_str(&format!("  Allowed: {}\n", sizes.join(", ")));

    output
}
