use itertools::Itertools;
use log::*;

/// Minimum suffix/prefix match length for an edge to qualify.
pub const MIN_OVERLAP: usize = 10;

/// A directed edge recording that `source`'s suffix matches `target`'s
/// prefix exactly over `overlap` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapEdge {
    pub source: String,
    pub target: String,
    pub overlap: usize,
}

/// Overlap graph over whole reads. Node identity is the read text itself,
/// so two reads with identical content are the same node.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OverlapGraph {
    edges: Vec<OverlapEdge>,
}

impl OverlapGraph {
    /// Compare every ordered pair of value-distinct reads and collect one
    /// edge per qualifying pair. Quadratic in the number of reads, which is
    /// fine for the small read sets this tool targets.
    pub fn build(reads: &[String], min_overlap: usize) -> Self {
        info!("building overlap graph from {} reads", reads.len());

        let mut edges = Vec::new();
        for (read1, read2) in reads.iter().cartesian_product(reads.iter()) {
            if read1 == read2 {
                continue;
            }
            if let Some(overlap) = suffix_prefix_match(read1, read2, min_overlap) {
                debug!("overlap of {} between {} and {}", overlap, read1, read2);
                edges.push(OverlapEdge {
                    source: read1.clone(),
                    target: read2.clone(),
                    overlap,
                });
            }
        }

        info!("overlap graph has {} edges", edges.len());
        OverlapGraph { edges }
    }

    /// Edges in the order they were recorded.
    pub fn edges(&self) -> &[OverlapEdge] {
        &self.edges
    }

    /// Edges originating from the given read.
    pub fn edges_from<'a>(&'a self, read: &'a str) -> impl Iterator<Item = &'a OverlapEdge> {
        self.edges.iter().filter(move |edge| edge.source == read)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Length of the shortest exact suffix(read1)/prefix(read2) match of at
/// least `min_overlap` characters, or `None` when no such match exists.
///
/// The scan anchors at `min_overlap` and widens both windows one character
/// at a time (one more of read1's tail, one more of read2's head), stopping
/// at the first equal pair. It does not look for a longer match once one
/// qualifies.
pub fn suffix_prefix_match(read1: &str, read2: &str, min_overlap: usize) -> Option<usize> {
    let suffix_side = read1.as_bytes();
    let prefix_side = read2.as_bytes();

    let mut len = min_overlap;
    while len <= suffix_side.len() && len <= prefix_side.len() {
        if suffix_side[suffix_side.len() - len..] == prefix_side[..len] {
            return Some(len);
        }
        len += 1;
    }
    None
}
