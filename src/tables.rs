use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{catalog::Catalog, search_result::SearchResult},
    quantity::earnings::Earnings,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

const fn earnings_color(earnings: Earnings) -> Color {
    if earnings.0 > 0 { Color::Green } else { Color::Reset }
}

/// One row per optimal allocation, one column per project type.
pub fn build_result_table(result: &SearchResult, catalog: &Catalog) -> Table {
    let mut table = new_table();
    let mut header = vec![Cell::new("#"), Cell::new("Earnings")];
    header.extend(
        catalog.iter().map(|(_, project_type)| {
            Cell::new(format!("{}\n{}", project_type.name, project_type.id))
        }),
    );
    table.set_header(header);

    for (number, solution) in result.solutions.iter().enumerate() {
        let mut row = vec![
            Cell::new(number + 1).add_attribute(Attribute::Dim),
            Cell::new(result.max_earnings)
                .set_alignment(CellAlignment::Right)
                .fg(earnings_color(result.max_earnings)),
        ];
        row.extend(catalog.iter().map(|(index, _)| {
            let count = solution.get(index);
            let cell = Cell::new(count).set_alignment(CellAlignment::Right);
            if count == 0 { cell.add_attribute(Attribute::Dim) } else { cell }
        }));
        table.add_row(row);
    }
    table
}

/// One row per time budget.
pub fn build_sweep_table(results: &[SearchResult], catalog: &Catalog) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Budget", "Earnings", "Solutions"]);
    for result in results {
        let solutions = result
            .solutions
            .iter()
            .map(|solution| solution.display(catalog).to_string())
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(result.time_budget).set_alignment(CellAlignment::Right),
            Cell::new(result.max_earnings)
                .set_alignment(CellAlignment::Right)
                .fg(earnings_color(result.max_earnings)),
            Cell::new(solutions),
        ]);
    }
    table
}

pub fn build_catalog_table(catalog: &Catalog) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Time cost", "Earnings rate"]);
    for (_, project_type) in catalog.iter() {
        table.add_row(vec![
            Cell::new(&project_type.id).add_attribute(Attribute::Bold),
            Cell::new(&project_type.name),
            Cell::new(project_type.time_cost).set_alignment(CellAlignment::Right),
            Cell::new(project_type.earnings_rate).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::{core::count_vector::CountVector, quantity::time::TimeUnits};

    fn result() -> SearchResult {
        SearchResult {
            time_budget: TimeUnits(9),
            max_earnings: Earnings(6000),
            solutions: BTreeSet::from([
                CountVector::from(vec![0, 2, 0]),
                CountVector::from(vec![1, 0, 0]),
                CountVector::from(vec![1, 1, 0]),
            ]),
        }
    }

    #[test]
    fn test_result_table() {
        let table = build_result_table(&result(), &Catalog::default());
        assert_eq!(table.row_count(), 3);
        assert!(table.to_string().contains("Commercial Park"));
    }

    #[test]
    fn test_sweep_table() {
        let table = build_sweep_table(&[result()], &Catalog::default());
        assert_eq!(table.row_count(), 1);
        assert!(table.to_string().contains("T:1 P:1 C:0"));
    }

    #[test]
    fn test_catalog_table() {
        assert_eq!(build_catalog_table(&Catalog::default()).row_count(), 3);
    }
}
