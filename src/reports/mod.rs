use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use qea::api::RunSummary;
use qea::cost::Benchmark;

const POINT_PREVIEW: usize = 4;

pub fn runs(summaries: &[RunSummary]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Run").add_attribute(Attribute::Bold),
        Cell::new("Seed"),
        Cell::new("Best Cost").fg(Color::Cyan),
        Cell::new("Gens"),
        Cell::new("Time (ms)"),
        Cell::new("Best Point"),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, s) in summaries.iter().enumerate() {
        let cost_cell = Cell::new(format!("{:.6}", s.best_cost)).fg(Color::Cyan);
        let cost_cell = if rank == 0 {
            cost_cell.add_attribute(Attribute::Bold)
        } else {
            cost_cell
        };

        table.add_row(vec![
            Cell::new(s.run).add_attribute(Attribute::Bold),
            Cell::new(s.seed.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())),
            cost_cell,
            Cell::new(s.generations),
            Cell::new(s.elapsed_ms),
            Cell::new(format_point(&s.best_point)),
        ]);
    }
    println!("\n{}", table);
}

pub fn evaluation(function: Benchmark, point: &[f64], single: f64, batched: f64) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Function").add_attribute(Attribute::Bold),
        Cell::new("Dims"),
        Cell::new("Point"),
        Cell::new("Cost").fg(Color::Cyan),
        Cell::new("Batch Cost"),
    ]);

    let agree = if (single - batched).abs() <= 1e-12 {
        Color::Green
    } else {
        Color::Red
    };

    table.add_row(vec![
        Cell::new(function).add_attribute(Attribute::Bold),
        Cell::new(point.len()),
        Cell::new(format_point(point)),
        Cell::new(format!("{:.6}", single)).fg(Color::Cyan),
        Cell::new(format!("{:.6}", batched)).fg(agree),
    ]);
    println!("\n{}", table);
}

fn format_point(point: &[f64]) -> String {
    let head: Vec<String> = point
        .iter()
        .take(POINT_PREVIEW)
        .map(|v| format!("{:.4}", v))
        .collect();

    if point.len() > POINT_PREVIEW {
        format!("[{}, … +{}]", head.join(", "), point.len() - POINT_PREVIEW)
    } else {
        format!("[{}]", head.join(", "))
    }
}
