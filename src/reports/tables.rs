use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use cribforge::config::SolverConfig;
use cribforge::frequency::{rank, LetterCounts};
use cribforge::solver::Candidate;

pub fn mapping(pairs: &[(char, char)]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Cipher").add_attribute(Attribute::Bold),
        Cell::new("Plain").add_attribute(Attribute::Bold),
    ]);

    for (cipher, plain) in pairs {
        table.add_row(vec![
            Cell::new(cipher).set_alignment(CellAlignment::Center),
            Cell::new(plain).set_alignment(CellAlignment::Center),
        ]);
    }
    println!("\n{}", table);
}

pub fn survey(candidates: &[Candidate], config: &SolverConfig, preview: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Index").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Pass"),
        Cell::new("Decrypted"),
    ]);

    for i in 0..=1 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    // solve() picks the first passing candidate in index order.
    let winner = candidates.iter().position(|c| config.accepts(c.score));

    for (i, c) in candidates.iter().enumerate() {
        let passes = config.accepts(c.score);
        let mark = match (passes, winner == Some(i)) {
            (true, true) => Cell::new("WIN").fg(Color::Green),
            (true, false) => Cell::new("yes").fg(Color::Green),
            _ => Cell::new("no").fg(Color::Red),
        };

        let text: String = c.decrypted.split_whitespace().collect::<Vec<_>>().join(" ");
        let shown = if text.chars().count() > preview {
            let cut: String = text.chars().take(preview).collect();
            format!("{}…", cut)
        } else {
            text
        };

        table.add_row(vec![
            Cell::new(c.index),
            Cell::new(c.score).fg(Color::Cyan),
            mark,
            Cell::new(shown),
        ]);
    }
    println!("\n{}", table);

    if winner.is_none() {
        println!(
            "⚠️  No candidate scored above {}. solve would fall back to @{}.",
            config.accept_threshold,
            candidates.first().map(|c| c.index).unwrap_or_default()
        );
    }
}

pub fn frequencies(counts: &LetterCounts) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Letter").fg(Color::Cyan),
        Cell::new("Count"),
        Cell::new("%"),
        Cell::new("English").fg(Color::Green),
    ]);

    for i in [0, 2, 3] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let total = counts.total().max(1) as f32;
    for (i, (letter, n)) in counts.sorted().into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(letter).fg(Color::Cyan),
            Cell::new(n),
            Cell::new(format!("{:.1}", n as f32 * 100.0 / total)),
            Cell::new(rank()[i]).fg(Color::Green),
        ]);
    }
    println!("\n{}", table);
    println!(
        "{} letters, {} distinct.",
        counts.total(),
        counts.distinct()
    );
}
