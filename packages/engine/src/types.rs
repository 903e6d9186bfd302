//! Core types for the dialrange engine

use crate::compare;
use crate::error::{RangeError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A decimal numeral kept as text because leading zeros are significant.
///
/// "0500" and "500" are different dial strings even though they parse to the
/// same integer. Invariant: non-empty, ASCII digits only. Construction goes
/// through [`DigitString::parse`]; there is no unchecked constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    /// Validate and wrap a digit string.
    ///
    /// # Errors
    ///
    /// - [`RangeError::EmptyInput`] for the empty string
    /// - [`RangeError::NotDigits`] when any byte is not an ASCII digit
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(RangeError::EmptyInput);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RangeError::NotDigits {
                input: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }

    /// The underlying digit text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits, leading zeros included.
    pub fn digit_count(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialOrd for DigitString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DigitString {
    fn cmp(&self, other: &Self) -> Ordering {
        compare::numeric_cmp(&self.0, &other.0)
    }
}

/// An inclusive range of dial strings with `start <= end`.
///
/// The constructor normalizes reversed endpoints by swapping, so callers
/// always observe an ordered range regardless of input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    start: DigitString,
    end: DigitString,
}

impl Range {
    /// Build a range from two endpoints, swapping when given reversed.
    pub fn new(a: DigitString, b: DigitString) -> Self {
        if compare::numeric_cmp(a.as_str(), b.as_str()) == Ordering::Greater {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// Validate two raw endpoints and build an ordered range.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(DigitString::parse(start)?, DigitString::parse(end)?))
    }

    /// Lower endpoint.
    pub fn start(&self) -> &DigitString {
        &self.start
    }

    /// Upper endpoint.
    pub fn end(&self) -> &DigitString {
        &self.end
    }

    /// True when the range covers a single value.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// A same-length sub-range produced by the pattern compiler's divide phase.
///
/// `is_big` marks a full power-of-ten block (all k-digit numbers), the case
/// the build phase may chain into a `{min,max}` quantifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubRange {
    pub lo: DigitString,
    pub hi: DigitString,
    pub is_big: bool,
}

impl SubRange {
    pub fn new(lo: DigitString, hi: DigitString, is_big: bool) -> Self {
        debug_assert_eq!(
            lo.digit_count(),
            hi.digit_count(),
            "sub-ranges are same-length by construction"
        );
        Self { lo, hi, is_big }
    }
}

/// An inclusive integer run, the unit of overlap arithmetic.
///
/// Values are pad-encoded dial strings (see [`crate::overlap`]); the type
/// itself is plain interval math. The constructor flips reversed bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntRange {
    pub begin: i64,
    pub end: i64,
}

impl IntRange {
    /// Build a run, swapping reversed bounds.
    pub fn new(begin: i64, end: i64) -> Self {
        if begin <= end {
            Self { begin, end }
        } else {
            Self { begin: end, end: begin }
        }
    }

    /// Whether `value` lies inside the run.
    pub fn contains(&self, value: i64) -> bool {
        self.begin <= value && value <= self.end
    }

    /// Number of integers covered; a one-element run counts 1.
    pub fn count(&self) -> i64 {
        self.end - self.begin + 1
    }
}

/// Which of the two input ranges contributed a symmetric-difference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeSource {
    First,
    Second,
}

/// Classification of a DID range within the dial plan.
///
/// Locality and publicness derive from the variant; only ranges sharing a
/// numbering space are ever resolved against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeKind {
    /// Internal extensions owned by this site
    #[default]
    LocalPrivate,
    /// Internal extensions owned by another site
    NonLocalPrivate,
    /// Public DID numbers owned by this site
    LocalPublic,
    /// Public DID numbers owned by another site
    NonLocalPublic,
}

impl RangeKind {
    /// Explicit flag-to-kind mapping table.
    pub fn from_flags(local: bool, public: bool) -> Self {
        match (local, public) {
            (true, false) => RangeKind::LocalPrivate,
            (false, false) => RangeKind::NonLocalPrivate,
            (true, true) => RangeKind::LocalPublic,
            (false, true) => RangeKind::NonLocalPublic,
        }
    }

    /// True for ranges owned by this site.
    pub fn is_local(&self) -> bool {
        matches!(self, RangeKind::LocalPrivate | RangeKind::LocalPublic)
    }

    /// True for public DID ranges.
    pub fn is_public(&self) -> bool {
        matches!(self, RangeKind::LocalPublic | RangeKind::NonLocalPublic)
    }

    /// Whether two kinds draw from the same numbering space.
    ///
    /// Private extensions form one space across sites; public DIDs form the
    /// E.164 space. A private range can never conflict with a public one.
    pub fn same_numbering_space(&self, other: &RangeKind) -> bool {
        self.is_public() == other.is_public()
    }

    /// Kind assigned to an overlap piece cut from two conflicting ranges.
    ///
    /// Identical kinds carry through; a conflict spanning local and
    /// non-local ownership is no longer purely local.
    pub fn combined(a: RangeKind, b: RangeKind) -> Self {
        debug_assert!(a.same_numbering_space(&b));
        match (a, b) {
            _ if a == b => a,
            (RangeKind::LocalPrivate, RangeKind::NonLocalPrivate)
            | (RangeKind::NonLocalPrivate, RangeKind::LocalPrivate) => RangeKind::NonLocalPrivate,
            (RangeKind::LocalPublic, RangeKind::NonLocalPublic)
            | (RangeKind::NonLocalPublic, RangeKind::LocalPublic) => RangeKind::NonLocalPublic,
            // Cross-space pairs are filtered out before splitting; fall back
            // to the first kind if one ever reaches here in release builds.
            _ => a,
        }
    }
}

/// The unit the overlap resolver operates on: a range plus its plan metadata.
///
/// `index` is assigned monotonically at creation and reused across split
/// generations, which is what lets a partition piece be traced back to its
/// labeled origin. `overlapped` marks pieces produced by splitting; two such
/// pieces are never split against each other again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRange {
    pub range: Range,
    pub label: String,
    pub kind: RangeKind,
    pub overlapped: bool,
    pub index: u32,
}

impl LabeledRange {
    /// A fresh, never-split range.
    pub fn new(range: Range, label: impl Into<String>, kind: RangeKind, index: u32) -> Self {
        Self {
            range,
            label: label.into(),
            kind,
            overlapped: false,
            index,
        }
    }

    /// New value with replaced bounds, keeping label, kind, flag and index.
    pub fn with_range(&self, range: Range) -> Self {
        Self {
            range,
            label: self.label.clone(),
            kind: self.kind,
            overlapped: self.overlapped,
            index: self.index,
        }
    }
}
