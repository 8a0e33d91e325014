use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use log::*;

use crate::debruijn::DebruijnGraph;
use crate::overlap::OverlapGraph;

/// One DOT edge statement group: `copies` parallel arrows from `from` to
/// `to`, each carrying the same optional weight label.
struct DotEdge<'a> {
    from: &'a str,
    to: &'a str,
    label: Option<usize>,
    copies: u32,
}

fn escape_label(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn write_dot<W: Write>(out: &mut W, title: &str, edges: &[DotEdge]) -> Result<()> {
    // Assign node ids in first-appearance order; only nodes touched by an
    // edge are declared.
    let mut ids: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for edge in edges {
        for node in [edge.from, edge.to] {
            if !ids.contains_key(node) {
                ids.insert(node, order.len());
                order.push(node);
            }
        }
    }

    let mut outdegree = vec![0usize; order.len()];
    let mut indegree = vec![0usize; order.len()];
    for edge in edges {
        outdegree[ids[edge.from]] += edge.copies as usize;
        indegree[ids[edge.to]] += edge.copies as usize;
    }
    let terminal_count = (0..order.len())
        .filter(|&id| outdegree[id] == 0 || indegree[id] == 0)
        .count();
    let edge_count: u32 = edges.iter().map(|e| e.copies).sum();

    writeln!(out, "digraph {} {{", title)?;
    writeln!(
        out,
        "    label=\"{} graph\\nNodes: {}  Edges: {}  Terminal: {}\"",
        title,
        order.len(),
        edge_count,
        terminal_count
    )?;
    writeln!(out, "    labelloc=\"t\"")?;
    writeln!(out, "    node [shape=box]")?;

    for (id, node) in order.iter().enumerate() {
        let color = if outdegree[id] == 0 || indegree[id] == 0 {
            "#ff110030" // terminal nodes
        } else {
            "#4895fa30" // internal nodes
        };
        writeln!(
            out,
            "    n{} [label=\"{}\" style=filled fillcolor=\"{}\"]",
            id,
            escape_label(node),
            color
        )?;
    }

    for edge in edges {
        let from = ids[edge.from];
        let to = ids[edge.to];
        for _ in 0..edge.copies {
            match edge.label {
                Some(weight) => {
                    writeln!(out, "    n{} -> n{} [label=\"{}\"]", from, to, weight)?
                }
                None => writeln!(out, "    n{} -> n{}", from, to)?,
            }
        }
    }

    writeln!(out, "}}")?;
    Ok(())
}

/// Write an overlap graph as DOT text, one labeled arrow per edge.
pub fn export_overlap_graph<W: Write>(graph: &OverlapGraph, out: &mut W) -> Result<()> {
    let edges: Vec<DotEdge> = graph
        .edges()
        .iter()
        .map(|edge| DotEdge {
            from: &edge.source,
            to: &edge.target,
            label: Some(edge.overlap),
            copies: 1,
        })
        .collect();
    write_dot(out, "overlap", &edges)
}

/// Write a de Bruijn graph as DOT text. Multiplicity renders as repeated
/// parallel arrows, one per occurrence, with no label.
pub fn export_debruijn_graph<W: Write>(graph: &DebruijnGraph, out: &mut W) -> Result<()> {
    let edges: Vec<DotEdge> = graph
        .edges()
        .iter()
        .map(|edge| DotEdge {
            from: &edge.prefix,
            to: &edge.suffix,
            label: None,
            copies: edge.multiplicity,
        })
        .collect();
    write_dot(out, "deBruijn", &edges)
}

pub fn write_overlap_dot(graph: &OverlapGraph, path: &Path) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    export_overlap_graph(graph, &mut file)?;
    info!("exported overlap graph to {}", path.display());
    Ok(())
}

pub fn write_debruijn_dot(graph: &DebruijnGraph, path: &Path) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    export_debruijn_graph(graph, &mut file)?;
    info!("exported de Bruijn graph to {}", path.display());
    Ok(())
}
