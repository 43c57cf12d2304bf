//! Terminal rendering of submission frames.

use client_core::view::{RenderFrame, ResultRenderer, TableRow, NO_RESULTS_NOTICE, RESULT_COLUMNS};

pub struct TerminalRenderer;

impl ResultRenderer for TerminalRenderer {
    fn render(&mut self, frame: &RenderFrame) {
        if frame.surfaces.loading {
            println!("Looking up matching colleges...");
        }
        if let Some(message) = &frame.error_message {
            eprintln!("Error: {message}");
        }
        if frame.surfaces.empty_notice {
            println!("{NO_RESULTS_NOTICE}");
        }
        if frame.surfaces.table {
            print!("{}", format_table(&frame.rows));
        }
    }
}

/// Left-aligned six-column table with a header and dashed rule, sized to
/// the widest cell per column.
pub fn format_table(rows: &[TableRow]) -> String {
    let mut widths: Vec<usize> = RESULT_COLUMNS.iter().map(|title| title.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    write_row(
        &mut out,
        &RESULT_COLUMNS.map(|title| title.to_string()),
        &widths,
    );
    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in rows {
        write_row(&mut out, row, &widths);
    }
    out
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        for _ in cell.len()..widths[i] {
            out.push(' ');
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}
