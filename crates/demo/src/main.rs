// File: crates/demo/src/main.rs
// Summary: Demo loads a delimited numeric table and exports a pgfplots figure from it.

use anyhow::{Context, Result};
use pgf_core::{Dataset, Figure, PlotMode};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

fn main() -> Result<()> {
    // Accept path from CLI or fall back to sample filename; a second
    // "scatter" argument switches the plot styling.
    let raw = std::env::args().nth(1).unwrap_or_else(|| "samples.csv".to_string());
    let scatter = std::env::args().nth(2).map_or(false, |mode| mode == "scatter");

    let path = Path::new(&raw);
    let delimiter = detect_delimiter(path)?;
    println!("Using input file: {} (delimiter '{}')", path.display(), delimiter as char);

    let (headers, columns) = load_columns(path, delimiter)
        .with_context(|| format!("failed to load table '{}'", path.display()))?;
    let samples = columns.first().map_or(0, Vec::len);
    println!("Loaded {} columns x {} samples", columns.len(), samples);

    if columns.len() < 2 {
        anyhow::bail!("need an x column plus at least one series, found {}", columns.len());
    }
    if samples == 0 {
        anyhow::bail!("no numeric rows loaded, check headers/delimiter.");
    }

    let data = Dataset::from_rows(columns)?;
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("figure");

    let mut figure = Figure::new(data, stem)?;
    figure.set_axis_option("xlabel", headers[0].as_str());
    figure.set_legend(headers[1..].to_vec());
    figure.set_caption(format!("Series read from {}.", raw));
    if scatter {
        figure.set_plot_mode(PlotMode::Scatter);
        println!("Plot mode: scatter");
    }

    figure.export()?;
    println!("Wrote {}", figure.csv_path().display());
    println!("Wrote {}", figure.tex_path().display());

    Ok(())
}

/// Pick the field separator from the first line: semicolon when present,
/// comma otherwise.
fn detect_delimiter(path: &Path) -> Result<u8> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut first = String::new();
    BufReader::new(file).read_line(&mut first)?;
    if first.contains(';') {
        Ok(b';')
    } else {
        Ok(b',')
    }
}

/// Load a delimited table into per-column vectors. The first record is the
/// header row; records with non-numeric or missing fields are skipped.
fn load_columns(path: &Path, delimiter: u8) -> Result<(Vec<String>, Vec<Vec<f64>>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    println!("Headers: {:?}", headers);

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let fields: Option<Vec<f64>> =
            rec.iter().map(|s| s.trim().parse::<f64>().ok()).collect();
        match fields {
            Some(values) if values.len() == headers.len() => {
                for (col, v) in columns.iter_mut().zip(values) {
                    col.push(v);
                }
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        println!("Skipped {} non-numeric rows", skipped);
    }
    Ok((headers, columns))
}
