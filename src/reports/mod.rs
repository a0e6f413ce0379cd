use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use cohort::export::GroupingReport;

pub fn print_groups(report: &GroupingReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Group").add_attribute(Attribute::Bold),
        Cell::new("Size"),
        Cell::new("Members").fg(Color::Cyan),
    ]);

    for (i, names) in report.names.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(names.len()).set_alignment(CellAlignment::Right),
            Cell::new(names.join(", ")),
        ]);
    }

    println!(
        "\nGroups: {} | Trials: {} | Scoring: {}",
        report.num_groups, report.trials, report.scoring_mode
    );
    println!("{}", table);
}
