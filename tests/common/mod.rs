#![allow(dead_code)] // Not every test binary uses every helper

use cohort::roster::{Roster, RosterBuilder};

/// Builds a frozen roster from names and the triangular rows
/// (`rows[i][j]` = score between `i` and `i + j + 1`).
pub fn roster_from_rows(names: &[&str], rows: Vec<Vec<f64>>) -> Roster {
    let mut builder = RosterBuilder::new();
    for name in names {
        builder.register(name);
    }
    for row in rows {
        builder.append_row(row);
    }
    builder.freeze().expect("test roster should be triangular")
}

/// Roster whose scores all equal zero.
pub fn zero_roster(names: &[&str]) -> Roster {
    let n = names.len();
    let rows = (0..n).map(|i| vec![0.0; n - i - 1]).collect();
    roster_from_rows(names, rows)
}

/// Roster of `n` entities named `S0..S{n-1}` with varied, deterministic,
/// partly negative scores.
pub fn mixed_roster(n: usize) -> Roster {
    let names: Vec<String> = (0..n).map(|i| format!("S{}", i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let rows = (0..n)
        .map(|i| {
            ((i + 1)..n)
                .map(|j| ((i * 7 + j * 13) % 11) as f64 - 3.0)
                .collect()
        })
        .collect();
    roster_from_rows(&refs, rows)
}

/// Four entities where only the A-B pairing costs anything.
pub fn conflict_roster() -> Roster {
    roster_from_rows(
        &["A", "B", "C", "D"],
        vec![vec![10.0, 0.0, 0.0], vec![0.0, 0.0], vec![0.0], vec![]],
    )
}
