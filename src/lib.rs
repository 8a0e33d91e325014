//! Graph construction from short DNA sequencing reads.
//!
//! Two pipelines share the same shape (extract reads, build edges, emit DOT):
//! - [`overlap`] connects whole reads whose suffix/prefix regions match
//!   exactly over at least [`overlap::MIN_OVERLAP`] characters.
//! - [`debruijn`] decomposes the concatenated read stream into k-mers and
//!   connects their (k-1)-length prefix and suffix substrings.
//!
//! [`reads`] extracts sequence lines from the input file and [`graph_viz`]
//! writes either edge collection as Graphviz DOT text.

pub mod debruijn;
pub mod graph_viz;
pub mod overlap;
pub mod reads;
