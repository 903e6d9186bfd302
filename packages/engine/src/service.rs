//! External interface of the dialrange engine
//!
//! The three call shapes the surrounding tooling (GUI, importers, scripts)
//! uses, with every `InvalidArgument`/precondition check performed here at
//! the boundary so the pure components below can assume well-formed input:
//!
//! - [`compile_range_regex`]: numeric range to regular expression
//! - [`compute_overlap`]: overlap or (tagged) inverse of two ranges
//! - [`resolve_overlaps`]: full dial-plan resolution into a disjoint
//!   partition; [`resolve_overlaps_traced`] additionally returns the split
//!   audit trail
//!
//! # Example
//!
//! ```
//! use dialrange_engine::service::{resolve_overlaps, LabeledRangeSpec};
//!
//! let plan = vec![
//!     LabeledRangeSpec::new("0100", "0200", "site A"),
//!     LabeledRangeSpec::new("0150", "0250", "site B"),
//! ];
//! let parts = resolve_overlaps(&plan, 4).unwrap();
//! assert_eq!(parts.len(), 3);
//! assert!(parts[1].overlapped);
//! ```

use crate::config::MAX_INPUT_RANGES;
use crate::error::{RangeError, Result};
use crate::overlap::{self, contiguous_runs};
use crate::pattern;
use crate::splitter;
use crate::trace::SplitTrace;
use crate::types::{IntRange, LabeledRange, Range, RangeKind, RangeSource};
use serde::{Deserialize, Serialize};

/// Raw endpoints of a single range, as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub start: String,
    pub end: String,
}

impl RangeSpec {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Raw labeled range of a dial plan, as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledRangeSpec {
    pub start: String,
    pub end: String,
    pub label: String,
    #[serde(default)]
    pub kind: RangeKind,
}

impl LabeledRangeSpec {
    pub fn new(start: impl Into<String>, end: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            label: label.into(),
            kind: RangeKind::default(),
        }
    }

    pub fn with_kind(mut self, kind: RangeKind) -> Self {
        self.kind = kind;
        self
    }
}

/// One piece of a resolved partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRange {
    pub start: String,
    pub end: String,
    pub label: String,
    pub kind: RangeKind,
    pub overlapped: bool,
    pub index: u32,
}

/// One overlap or inverse run, expressed as dial strings again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapRun {
    pub start: String,
    pub end: String,
    /// Contributing range for tagged inverse results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<RangeSource>,
}

/// Compile the regular expression matching exactly `[start, end]`.
///
/// # Errors
///
/// [`RangeError::EmptyInput`] / [`RangeError::NotDigits`] /
/// [`RangeError::InconsistentOrder`] on malformed endpoints.
pub fn compile_range_regex(start: &str, end: &str) -> Result<String> {
    pattern::generate(start, end)
}

/// Overlap or inverse of two ranges.
///
/// With `inverse` unset, returns the runs both ranges share (empty when
/// disjoint). With `inverse` set, returns the symmetric difference; `tagged`
/// then controls whether each run carries its contributing range, or the
/// untagged union is regrouped into runs as one set (adjacent contributions
/// may fuse into a single run).
pub fn compute_overlap(
    r1: &RangeSpec,
    r2: &RangeSpec,
    inverse: bool,
    tagged: bool,
) -> Result<Vec<OverlapRun>> {
    let first = overlap::encode_range(&Range::parse(&r1.start, &r1.end)?)?;
    let second = overlap::encode_range(&Range::parse(&r2.start, &r2.end)?)?;

    if !inverse {
        let values = overlap::overlap(first, second);
        return runs_to_output(&contiguous_runs(&values), None);
    }

    let pairs = overlap::overlap_inverse(first, second);
    if tagged {
        let firsts: Vec<i64> = pairs
            .iter()
            .filter(|(_, s)| *s == RangeSource::First)
            .map(|(v, _)| *v)
            .collect();
        let seconds: Vec<i64> = pairs
            .iter()
            .filter(|(_, s)| *s == RangeSource::Second)
            .map(|(v, _)| *v)
            .collect();
        let mut out = runs_to_output(&contiguous_runs(&firsts), Some(RangeSource::First))?;
        out.extend(runs_to_output(&contiguous_runs(&seconds), Some(RangeSource::Second))?);
        Ok(out)
    } else {
        let values: Vec<i64> = pairs.into_iter().map(|(v, _)| v).collect();
        runs_to_output(&contiguous_runs(&values), None)
    }
}

/// Resolve a dial plan into a disjoint partition.
///
/// `digit_count` is the plan's declared significant width: it must be at
/// least one and no endpoint may have fewer digits.
///
/// # Errors
///
/// - [`RangeError::TooManyRanges`] for oversized plans
/// - [`RangeError::InvalidDigitCount`] on a digit-count precondition
///   violation
/// - endpoint validation errors as in [`compile_range_regex`]
pub fn resolve_overlaps(
    ranges: &[LabeledRangeSpec],
    digit_count: usize,
) -> Result<Vec<ResolvedRange>> {
    let plan = validate_plan(ranges, digit_count)?;
    let resolved = splitter::resolve(plan, None)?;
    Ok(resolved.iter().map(to_resolved).collect())
}

/// Like [`resolve_overlaps`], also returning the split audit trail.
pub fn resolve_overlaps_traced(
    ranges: &[LabeledRangeSpec],
    digit_count: usize,
) -> Result<(Vec<ResolvedRange>, SplitTrace)> {
    let plan = validate_plan(ranges, digit_count)?;
    let mut trace = SplitTrace::new();
    let resolved = splitter::resolve(plan, Some(&mut trace))?;
    Ok((resolved.iter().map(to_resolved).collect(), trace))
}

/// Boundary validation: size limit, endpoint syntax, digit-count
/// precondition. Indices are assigned here, in input order.
fn validate_plan(ranges: &[LabeledRangeSpec], digit_count: usize) -> Result<Vec<LabeledRange>> {
    if ranges.len() > MAX_INPUT_RANGES {
        return Err(RangeError::TooManyRanges {
            count: ranges.len(),
            max: MAX_INPUT_RANGES,
        });
    }
    if digit_count == 0 {
        return Err(RangeError::InvalidDigitCount {
            digit_count,
            endpoint_len: 0,
        });
    }
    let mut plan = Vec::with_capacity(ranges.len());
    for (i, spec) in ranges.iter().enumerate() {
        let range = Range::parse(&spec.start, &spec.end)?;
        for endpoint in [range.start(), range.end()] {
            if digit_count > endpoint.digit_count() {
                return Err(RangeError::InvalidDigitCount {
                    digit_count,
                    endpoint_len: endpoint.digit_count(),
                });
            }
        }
        plan.push(LabeledRange::new(range, spec.label.clone(), spec.kind, i as u32));
    }
    tracing::debug!(ranges = plan.len(), digit_count, "validated dial plan");
    Ok(plan)
}

fn to_resolved(range: &LabeledRange) -> ResolvedRange {
    ResolvedRange {
        start: range.range.start().as_str().to_string(),
        end: range.range.end().as_str().to_string(),
        label: range.label.clone(),
        kind: range.kind,
        overlapped: range.overlapped,
        index: range.index,
    }
}

fn runs_to_output(runs: &[IntRange], source: Option<RangeSource>) -> Result<Vec<OverlapRun>> {
    runs.iter()
        .map(|run| {
            Ok(OverlapRun {
                start: overlap::decode_padded(run.begin)?.to_string(),
                end: overlap::decode_padded(run.end)?.to_string(),
                source,
            })
        })
        .collect()
}
