//! Dial-plan overlap resolution
//!
//! Repeatedly resolves pairwise conflicts in a set of labeled ranges until
//! no pair overlaps, producing a disjoint partition of the input coverage.
//! Each found conflict is cut into the overlap (a fresh range marked
//! `overlapped` with a fresh shared index) and the remainders (which keep
//! their origin's index, label and kind), and the scan restarts, since new
//! boundaries can expose conflicts between pairs that were clean before.
//!
//! Two ranges already marked `overlapped` are never matched against each
//! other; that rule is what makes the iteration terminate, because every
//! split moves coverage into overlap pieces that are final among
//! themselves. Each pass rebuilds a fresh generation of immutable values
//! keyed by stable index, so a range is never duplicated or mutated in
//! place across passes.

use crate::config::MAX_SPLIT_PASSES;
use crate::error::{RangeError, Result};
use crate::overlap::{self, contiguous_runs};
use crate::trace::{SplitStep, SplitTrace};
use crate::types::{IntRange, LabeledRange, RangeKind, RangeSource};

/// One range of the current generation, with its bounds encoded for
/// integer arithmetic.
#[derive(Debug, Clone)]
struct WorkRange {
    run: IntRange,
    label: String,
    kind: RangeKind,
    overlapped: bool,
    index: u32,
}

impl WorkRange {
    fn from_labeled(range: &LabeledRange) -> Result<Self> {
        Ok(Self {
            run: overlap::encode_range(&range.range)?,
            label: range.label.clone(),
            kind: range.kind,
            overlapped: range.overlapped,
            index: range.index,
        })
    }

    fn to_labeled(&self) -> Result<LabeledRange> {
        Ok(LabeledRange {
            range: overlap::decode_range(self.run)?,
            label: self.label.clone(),
            kind: self.kind,
            overlapped: self.overlapped,
            index: self.index,
        })
    }

    /// New generation member with narrowed bounds, everything else kept.
    fn with_run(&self, run: IntRange) -> Self {
        Self {
            run,
            label: self.label.clone(),
            kind: self.kind,
            overlapped: self.overlapped,
            index: self.index,
        }
    }
}

/// Resolve all overlaps in `ranges` into a disjoint partition.
///
/// Output ranges are sorted by start. When `trace` is given, every resolved
/// conflict is recorded as a [`SplitStep`].
///
/// Input validation (digit counts, range counts) happens at the service
/// boundary; this function only reports encoding-capacity violations and
/// the pass-budget guard.
pub fn resolve(
    ranges: Vec<LabeledRange>,
    mut trace: Option<&mut SplitTrace>,
) -> Result<Vec<LabeledRange>> {
    let mut generation: Vec<WorkRange> = ranges
        .iter()
        .map(WorkRange::from_labeled)
        .collect::<Result<_>>()?;
    let mut next_index = generation.iter().map(|r| r.index + 1).max().unwrap_or(0);

    let mut pass = 0usize;
    loop {
        pass += 1;
        if pass > MAX_SPLIT_PASSES {
            return Err(RangeError::PassLimitExceeded {
                passes: MAX_SPLIT_PASSES,
            });
        }
        generation.sort_by_key(|r| (r.run.begin, r.index));

        let Some((i, j)) = find_conflict(&generation) else {
            break;
        };
        let first = generation[i].clone();
        let second = generation[j].clone();

        let shared = overlap::overlap(first.run, second.run);
        let overlap_runs = contiguous_runs(&shared);
        let inverse = overlap::overlap_inverse(first.run, second.run);
        let first_rest: Vec<i64> = inverse
            .iter()
            .filter(|(_, source)| *source == RangeSource::First)
            .map(|(value, _)| *value)
            .collect();
        let second_rest: Vec<i64> = inverse
            .iter()
            .filter(|(_, source)| *source == RangeSource::Second)
            .map(|(value, _)| *value)
            .collect();

        let produced_index = next_index;
        next_index += 1;

        let mut next_generation: Vec<WorkRange> = generation
            .iter()
            .enumerate()
            .filter(|(k, _)| *k != i && *k != j)
            .map(|(_, r)| r.clone())
            .collect();

        let combined_label = format!("{} & {}", first.label, second.label);
        let combined_kind = RangeKind::combined(first.kind, second.kind);
        for run in &overlap_runs {
            next_generation.push(WorkRange {
                run: *run,
                label: combined_label.clone(),
                kind: combined_kind,
                overlapped: true,
                index: produced_index,
            });
        }
        let mut remainder_indices = Vec::new();
        for run in contiguous_runs(&first_rest) {
            next_generation.push(first.with_run(run));
            remainder_indices.push(first.index);
        }
        for run in contiguous_runs(&second_rest) {
            next_generation.push(second.with_run(run));
            remainder_indices.push(second.index);
        }

        tracing::debug!(
            pass,
            first = %first.label,
            second = %second.label,
            produced_index,
            remainders = remainder_indices.len(),
            "split overlapping pair"
        );

        if let Some(sink) = trace.as_deref_mut() {
            if let Some(run) = overlap_runs.first() {
                sink.record(SplitStep {
                    pass,
                    first_index: first.index,
                    first_label: first.label.clone(),
                    second_index: second.index,
                    second_label: second.label.clone(),
                    overlap_start: overlap::decode_padded(run.begin)?.to_string(),
                    overlap_end: overlap::decode_padded(run.end)?.to_string(),
                    produced_index,
                    remainder_indices,
                });
            }
        }

        generation = next_generation;
    }

    generation.sort_by_key(|r| (r.run.begin, r.index));
    generation.iter().map(WorkRange::to_labeled).collect()
}

/// First eligible overlapping pair in the current generation, if any.
///
/// A pair is eligible unless both members are already overlap pieces, and
/// only when both draw from the same numbering space.
fn find_conflict(generation: &[WorkRange]) -> Option<(usize, usize)> {
    for i in 0..generation.len() {
        for j in (i + 1)..generation.len() {
            let (a, b) = (&generation[i], &generation[j]);
            if a.overlapped && b.overlapped {
                continue;
            }
            if !a.kind.same_numbering_space(&b.kind) {
                continue;
            }
            if a.run.begin.max(b.run.begin) <= a.run.end.min(b.run.end) {
                return Some((i, j));
            }
        }
    }
    None
}
