//! Console rendering of equity results.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use itertools::Itertools;

use crate::equity::{Completeness, EquityResult};
use crate::hand_evaluator::Category;

fn pocket(cards: &[crate::cards::Card; 2]) -> String {
    cards.iter().join(" ")
}

fn pct(n: u64, total: u64) -> String {
    if total == 0 {
        "-".to_string()
    } else {
        format!("{:.2}%", n as f64 * 100.0 / total as f64)
    }
}

pub fn print_summary(result: &EquityResult) {
    let [p1, p2] = &result.pockets;
    println!();
    println!(
        "  {} {} wins {}",
        "You".bold(),
        format!("[{}]", pocket(p1)).cyan(),
        format!("{:.2}%", result.p1_win).green().bold()
    );
    println!(
        "  {} {} wins {}",
        "Opponent".bold(),
        format!("[{}]", pocket(p2)).cyan(),
        format!("{:.2}%", result.p2_win).red().bold()
    );
    println!(
        "  {} {}",
        "Tie".bold(),
        format!("{:.2}%", result.tie).yellow().bold()
    );
    println!();

    match result.completeness {
        Completeness::Exact => println!(
            "  {} iterations in {:.3} seconds ({:.0} iterations/sec)",
            result.iterations,
            result.elapsed_secs,
            result.iterations_per_sec()
        ),
        Completeness::Partial { visited, total } => println!(
            "  {} only {} of {} boards visited in {:.3} seconds, percentages are not exact",
            "PARTIAL:".yellow().bold(),
            visited,
            total,
            result.elapsed_secs
        ),
    }
    println!();
}

/// Per-category frequency table for both players.
pub fn category_table(result: &EquityResult) -> Table {
    let [p1, p2] = &result.pockets;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Category"),
            Cell::new(pocket(p1)),
            Cell::new(pocket(p2)),
        ]);

    for category in Category::ALL {
        table.add_row(vec![
            Cell::new(category.name()),
            Cell::new(pct(
                result.tally.category_count(0, category),
                result.iterations,
            ))
            .set_alignment(CellAlignment::Right),
            Cell::new(pct(
                result.tally.category_count(1, category),
                result.iterations,
            ))
            .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
