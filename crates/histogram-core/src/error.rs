// File: crates/histogram-core/src/error.rs
// Summary: Error type for construction and dashboard lookup failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The one fatal configuration condition: a numeric-keyed histogram
    /// cannot lay out bars without a bin width.
    #[error("bin_width is a required option for a non-date histogram ('{widget}')")]
    MissingBinWidth { widget: String },

    #[error("group bound to '{widget}' has no buckets")]
    EmptyGroup { widget: String },

    #[error("dimension '{name}' extracts keys of mixed kinds")]
    MixedKeyKinds { name: String },

    #[error("unknown widget id {0}")]
    UnknownWidget(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
