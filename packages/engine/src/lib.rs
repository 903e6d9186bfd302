//! dialrange Engine
//!
//! A Rust implementation of the dialrange DID range engine.
//! This library provides functionality for:
//! - Compiling a numeric range into a regular expression that matches
//!   exactly the numbers in the range
//! - Computing the overlap and tagged remainders of two dial-string ranges
//! - Resolving a labeled dial plan into a disjoint partition with
//!   traceable overlap provenance
//!
//! Dial strings are decimal numerals kept as text because leading zeros
//! are significant ("0500"-"0599" is not "500"-"599"). The whole engine is
//! pure computation over immutable values; there is no I/O and no shared
//! state, so independent calls are safe to run in parallel.
//!
//! # Example
//!
//! ```
//! use dialrange_engine::service::{compile_range_regex, resolve_overlaps, LabeledRangeSpec};
//!
//! let pattern = compile_range_regex("1000", "1999")?;
//! assert_eq!(pattern, "1[0-9]{3}");
//!
//! let plan = vec![
//!     LabeledRangeSpec::new("0100", "0200", "site A"),
//!     LabeledRangeSpec::new("0150", "0250", "site B"),
//! ];
//! let parts = resolve_overlaps(&plan, 4)?;
//! assert_eq!(parts.len(), 3);
//! # Ok::<(), dialrange_engine::RangeError>(())
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod overlap;
pub mod pattern;
pub mod service;
pub mod splitter;
pub mod trace;
pub mod types;

// Re-export commonly used items
pub use error::{RangeError, Result};
pub use service::{
    compile_range_regex, compute_overlap, resolve_overlaps, resolve_overlaps_traced,
    LabeledRangeSpec, OverlapRun, RangeSpec, ResolvedRange,
};
pub use trace::{SplitStep, SplitTrace};
pub use types::{DigitString, IntRange, LabeledRange, Range, RangeKind, RangeSource, SubRange};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
