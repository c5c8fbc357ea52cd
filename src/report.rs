// SPDX: CC0-1.0

//! Writes the session table out: a CSV file, a plain text report and a
//! console table. Everything written here depends only on the table, so
//! exporting the same table twice produces identical files.

use crate::{config::Config, record::SessionTable};
use anyhow::Context;
use log::info;
use serde::Serialize;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};
use unicode_width::UnicodeWidthStr;

pub const HEADERS: [&str; 3] = ["Points", "DMGE", "Answer"];

#[derive(Debug, Serialize)]
struct Row<'a> {
    points: String,
    dmge: &'a str,
    answer: String,
}

fn rows(table: &SessionTable) -> impl Iterator<Item = Row<'static>> + '_ {
    table.iter().map(|record| Row {
        points: record.points_description(),
        dmge: record.operation.label(),
        answer: record.answer.to_string(),
    })
}

pub fn write_csv<W: Write>(table: &SessionTable, out: W) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);
    // written by hand so an empty table still gets a header
    wtr.write_record(HEADERS)?;
    for row in rows(table) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_text<W: Write>(table: &SessionTable, mut out: W, separator: &str) -> io::Result<()> {
    for row in rows(table) {
        writeln!(out, "Points: {}", row.points)?;
        writeln!(out, "DMGE: {}", row.dmge)?;
        writeln!(out, "Answer: {}", row.answer)?;
        writeln!(out)?;
        writeln!(out, "{separator}")?;
    }
    writeln!(out, "{separator}")
}

/// Right aligned columns, like a dataframe dump.
pub fn write_table<W: Write>(table: &SessionTable, mut out: W) -> io::Result<()> {
    let cells: Vec<[String; 3]> = rows(table)
        .map(|row| [row.points, row.dmge.to_string(), row.answer])
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header = HEADERS.map(String::from);
    for row in core::iter::once(&header).chain(&cells) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{}{cell}", " ".repeat(width - cell.width())))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn create(path: &Path) -> anyhow::Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Overwrites both report files and tells the user where they went.
pub fn export<W: Write>(table: &SessionTable, config: &Config, mut out: W) -> anyhow::Result<()> {
    let mut csv_file = create(&config.csv_path)?;
    write_csv(table, &mut csv_file).context("failed to write csv report")?;
    csv_file.flush()?;
    info!(
        "wrote {} records to {}",
        table.len(),
        config.csv_path.display()
    );
    writeln!(out)?;
    writeln!(
        out,
        "Results have been saved to '{}'.",
        config.csv_path.display()
    )?;

    let mut text_file = create(&config.text_path)?;
    write_text(table, &mut text_file, &config.separator())
        .context("failed to write text report")?;
    text_file.flush()?;
    info!(
        "wrote {} records to {}",
        table.len(),
        config.text_path.display()
    );
    writeln!(
        out,
        "Results have been written to '{}'.",
        config.text_path.display()
    )?;
    Ok(())
}
