use std::collections::HashMap;

use log::*;

/// Window length for k-mer decomposition. Nodes are the (K-1)-length
/// prefix and suffix of each window.
pub const K: usize = 10;

/// A directed edge between the (k-1)-mer prefix and suffix of a k-mer,
/// counted once per occurrence in the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebruijnEdge {
    pub prefix: String,
    pub suffix: String,
    pub multiplicity: u32,
}

/// De Bruijn graph in first-occurrence order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DebruijnGraph {
    edges: Vec<DebruijnEdge>,
    index: HashMap<(String, String), usize>,
}

impl DebruijnGraph {
    /// Decompose the concatenated read stream into k-mers and count one
    /// edge increment per processed k-mer.
    ///
    /// Reads are joined with no separator, so a k-mer may straddle the
    /// junction between two reads. A final window shorter than `k` is
    /// dropped, and the last full k-mer is left unprocessed: counting it
    /// over-counts the edge of the trailing repeat.
    pub fn build(reads: &[String], k: usize) -> Self {
        let stream: String = reads.concat();
        info!(
            "building de Bruijn graph over a {}-character stream with k={}",
            stream.len(),
            k
        );

        if k < 2 {
            warn!("k={} cannot produce prefix/suffix nodes", k);
            return DebruijnGraph::default();
        }

        let kmers: Vec<&[u8]> = stream.as_bytes().windows(k).collect();
        debug!("stream decomposes into {} k-mers", kmers.len());

        let mut graph = DebruijnGraph::default();
        let processed = kmers.len().saturating_sub(1);
        for kmer in &kmers[..processed] {
            let prefix = &kmer[..k - 1];
            let suffix = &kmer[1..];

            // prefix and suffix come from the same window, so their shared
            // core must agree; a mismatch means the decomposition is broken
            if !consistent_core(prefix, suffix) {
                warn!(
                    "inconsistent k-mer decomposition skipped: {}",
                    String::from_utf8_lossy(kmer)
                );
                continue;
            }
            if prefix == suffix {
                continue;
            }
            graph.record(prefix, suffix);
        }

        info!("de Bruijn graph has {} edges", graph.edges.len());
        graph
    }

    fn record(&mut self, prefix: &[u8], suffix: &[u8]) {
        let key = (
            String::from_utf8_lossy(prefix).into_owned(),
            String::from_utf8_lossy(suffix).into_owned(),
        );
        match self.index.get(&key) {
            Some(&at) => self.edges[at].multiplicity += 1,
            None => {
                self.index.insert(key.clone(), self.edges.len());
                self.edges.push(DebruijnEdge {
                    prefix: key.0,
                    suffix: key.1,
                    multiplicity: 1,
                });
            }
        }
    }

    /// Edges in first-occurrence order.
    pub fn edges(&self) -> &[DebruijnEdge] {
        &self.edges
    }

    /// Occurrence count for the given ordered node pair, 0 when absent.
    pub fn multiplicity(&self, prefix: &str, suffix: &str) -> u32 {
        self.index
            .get(&(prefix.to_string(), suffix.to_string()))
            .map_or(0, |&at| self.edges[at].multiplicity)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

fn consistent_core(prefix: &[u8], suffix: &[u8]) -> bool {
    prefix.len() == suffix.len()
        && !prefix.is_empty()
        && prefix[1..] == suffix[..suffix.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn reads(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn counts_repeat_edges_without_the_final_kmer() {
        // concatenates to "GAAAGAAAGAAAGAAAGA": nine k-mers, of which the
        // last (a third occurrence of GAAAGAAAG -> AAAGAAAGA) is skipped
        let reads = reads(&["GAAAGAAAG", "AAAGAAAGA"]);
        let graph = DebruijnGraph::build(&reads, K);

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.multiplicity("GAAAGAAAG", "AAAGAAAGA"), 2);
        assert_eq!(graph.multiplicity("AAAGAAAGA", "AAGAAAGAA"), 2);
        assert_eq!(graph.multiplicity("AAGAAAGAA", "AGAAAGAAA"), 2);
        assert_eq!(graph.multiplicity("AGAAAGAAA", "GAAAGAAAG"), 2);
    }

    #[test]
    fn first_occurrence_order_is_preserved() {
        let reads = reads(&["GAAAGAAAG", "AAAGAAAGA"]);
        let graph = DebruijnGraph::build(&reads, K);

        let pairs: Vec<(&str, &str)> = graph
            .edges()
            .iter()
            .map(|e| (e.prefix.as_str(), e.suffix.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("GAAAGAAAG", "AAAGAAAGA"),
                ("AAAGAAAGA", "AAGAAAGAA"),
                ("AAGAAAGAA", "AGAAAGAAA"),
                ("AGAAAGAAA", "GAAAGAAAG"),
            ]
        );
    }

    #[test]
    fn self_loops_are_suppressed() {
        // every window of a homopolymer decomposes into identical
        // prefix and suffix nodes
        let reads = reads(&["AAAAAAAAAAAA"]);
        let graph = DebruijnGraph::build(&reads, K);
        assert!(graph.is_empty());
    }

    #[test]
    fn kmers_straddle_read_boundaries() {
        // no single read is long enough for a window, but the
        // concatenated stream is
        let reads = reads(&["ACGTA", "CGTACG"]);
        let graph = DebruijnGraph::build(&reads, K);

        // stream "ACGTACGTACG": two k-mers, one processed
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.multiplicity("ACGTACGTA", "CGTACGTAC"), 1);
    }

    #[test]
    fn short_streams_produce_no_edges() {
        let graph = DebruijnGraph::build(&reads(&["ACGTACGT"]), K);
        assert!(graph.is_empty());
    }

    #[test]
    fn a_single_full_window_is_left_unprocessed() {
        // exactly one k-mer in the stream, and it is the final one
        let graph = DebruijnGraph::build(&reads(&["ACGTACGTAC"]), K);
        assert!(graph.is_empty());
    }

    #[test]
    fn multiplicity_of_absent_pairs_is_zero() {
        let graph = DebruijnGraph::build(&reads(&["GAAAGAAAG", "AAAGAAAGA"]), K);
        assert_eq!(graph.multiplicity("AAAAAAAAA", "AAAAAAAAA"), 0);
    }

    #[test]
    fn construction_is_deterministic() {
        let reads = reads(&["GAAAGAAAG", "AAAGAAAGA", "GAAAGAAAG"]);
        let first = DebruijnGraph::build(&reads, K);
        let second = DebruijnGraph::build(&reads, K);
        assert_eq!(first, second);
    }
}
