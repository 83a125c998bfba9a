//! Result table rendering.
//!
//! One row per variant in engine-sorted order, one weighted column per
//! criterion, a final Utility column.

use crate::model::{Criterion, ScoreResult};

const UTILITY_HEADER: &str = "Utility";

/// Render the score results as an aligned text table.
///
/// Rows follow the order of `results` (already ranked by the engine);
/// columns follow criterion input order.
pub fn render_table(criteria: &[Criterion], results: &[ScoreResult]) -> String {
    let headers: Vec<String> = std::iter::once("Variant".to_string())
        .chain(criteria.iter().map(|c| format!("{} (weighted)", c.name)))
        .chain(std::iter::once(UTILITY_HEADER.to_string()))
        .collect();

    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|result| {
            let mut row = vec![result.variant_name.clone()];
            for criterion in criteria {
                let score = result
                    .weighted_scores
                    .get(&criterion.name)
                    .copied()
                    .unwrap_or(0.0);
                row.push(format!("{:.2}", score));
            }
            row.push(format!("{:.2}", result.total_utility));
            row
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();
    output.push_str(&format_row(&headers, &widths));
    output.push('\n');
    output.push_str(&"-".repeat(widths.iter().sum::<usize>() + 3 * (widths.len() - 1)));
    output.push('\n');
    for row in &rows {
        output.push_str(&format_row(row, &widths));
        output.push('\n');
    }

    output
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("   ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Variant;
    use crate::scoring::compute_scores;

    #[test]
    fn test_table_rows_follow_result_order() {
        let criteria = vec![Criterion::new("Cost", 5.0), Criterion::new("Quality", 5.0)];
        let variants = vec![
            Variant::new("Make").rate("Cost", 2.0).rate("Quality", 2.0),
            Variant::new("Buy").rate("Cost", 9.0).rate("Quality", 9.0),
        ];
        let results = compute_scores(&criteria, &variants);
        let table = render_table(&criteria, &results);

        let buy_pos = table.find("Buy").unwrap();
        let make_pos = table.find("Make").unwrap();
        assert!(buy_pos < make_pos, "higher utility should render first");
        assert!(table.contains("Cost (weighted)"));
        assert!(table.contains("Utility"));
    }
}
