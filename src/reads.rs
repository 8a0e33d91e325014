use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use log::*;

/// A line containing any of these characters is a header or metadata line
/// rather than sequence content and is discarded.
const MARKERS: [char; 4] = ['@', '+', 'h', '>'];

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open input file {}", path.display()))?;

    if path.extension().map_or(false, |ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Extract the sequence lines from a read file, in file order.
///
/// Every line that contains a marker character is dropped; every other
/// non-empty line is one read. Files ending in `.gz` are decompressed
/// transparently.
pub fn read_sequences(path: &Path) -> Result<Vec<String>> {
    let reader = open_input(path)?;

    let mut reads = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        if line.contains(|c| MARKERS.contains(&c)) {
            continue;
        }
        let read = line.trim().to_string();
        if !read.is_empty() {
            reads.push(read);
        }
    }

    debug!("extracted {} sequence lines from {}", reads.len(), path.display());
    Ok(reads)
}
