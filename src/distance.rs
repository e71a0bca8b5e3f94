//! Edit distance metrics.
//!
//! Both metrics compare strings by Unicode scalar value and build a full
//! `(len(a) + 1) x (len(b) + 1)` cost matrix per call. Nothing is cached
//! between calls, so every function here is safe to call from any thread.

pub mod damerau;
pub mod levenshtein;
pub mod metric;

pub use damerau::damerau_levenshtein_distance;
pub use levenshtein::levenshtein_distance;
pub use metric::EditDistanceMetric;
