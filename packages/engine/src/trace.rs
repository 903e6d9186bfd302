//! Split audit trail
//!
//! Records how a dial plan's conflicts were resolved. This is useful for:
//!
//! - **Audit trails**: documenting exactly why a range was cut apart
//! - **Debugging**: understanding which inputs produced a partition piece
//! - **Provenance**: following a fresh overlap index back to its parents
//!
//! Each resolved conflict becomes one [`SplitStep`]; the whole run is a
//! [`SplitTrace`] that can be serialized or rendered as a readable tree.

use serde::Serialize;

/// One resolved conflict: the pair that overlapped and what it produced.
#[derive(Debug, Clone, Serialize)]
pub struct SplitStep {
    /// Splitter pass in which the conflict was found (1-based)
    pub pass: usize,

    /// Index of the first conflicting range
    pub first_index: u32,

    /// Label of the first conflicting range
    pub first_label: String,

    /// Index of the second conflicting range
    pub second_index: u32,

    /// Label of the second conflicting range
    pub second_label: String,

    /// Lower bound of the overlap, as a dial string
    pub overlap_start: String,

    /// Upper bound of the overlap, as a dial string
    pub overlap_end: String,

    /// Fresh index assigned to the overlap piece
    pub produced_index: u32,

    /// Indices of the remainder pieces kept from the parents
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remainder_indices: Vec<u32>,
}

/// Full audit trail of one resolution run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SplitTrace {
    /// Steps in the order the conflicts were resolved
    pub steps: Vec<SplitStep>,
}

impl SplitTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolved conflict.
    pub fn record(&mut self, step: SplitStep) {
        self.steps.push(step);
    }

    /// Number of conflicts resolved.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the run found no conflicts at all.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Render the trail as a human-readable tree string.
    ///
    /// Produces output like:
    /// ```text
    /// resolution (3 splits)
    /// +-- pass 1: "site A" (#0) x "site B" (#1) -> 0150-0200 (#3)
    /// +-- pass 2: "site B" (#1) x "hotdesks" (#2) -> 0230-0249 (#6)
    /// `-- pass 3: "overflow" (#4) x "hotdesks" (#2) -> 0250-0255 (#9)
    /// ```
    pub fn render_tree(&self) -> String {
        let mut lines = vec![format!("resolution ({} splits)", self.steps.len())];
        let count = self.steps.len();
        for (i, step) in self.steps.iter().enumerate() {
            let prefix = if i == count - 1 { "`-- " } else { "+-- " };
            lines.push(format!(
                "{}pass {}: {:?} (#{}) x {:?} (#{}) -> {}-{} (#{})",
                prefix,
                step.pass,
                step.first_label,
                step.first_index,
                step.second_label,
                step.second_index,
                step.overlap_start,
                step.overlap_end,
                step.produced_index,
            ));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(pass: usize, produced: u32) -> SplitStep {
        SplitStep {
            pass,
            first_index: 0,
            first_label: "site A".to_string(),
            second_index: 1,
            second_label: "site B".to_string(),
            overlap_start: "0150".to_string(),
            overlap_end: "0200".to_string(),
            produced_index: produced,
            remainder_indices: vec![0, 1],
        }
    }

    #[test]
    fn test_empty_trace() {
        let trace = SplitTrace::new();
        assert!(trace.is_empty());
        assert_eq!(trace.render_tree(), "resolution (0 splits)");
    }

    #[test]
    fn test_render_tree() {
        let mut trace = SplitTrace::new();
        trace.record(step(1, 2));
        trace.record(step(2, 5));
        assert_eq!(trace.len(), 2);
        let rendered = trace.render_tree();
        assert_eq!(
            rendered,
            "resolution (2 splits)\n\
             +-- pass 1: \"site A\" (#0) x \"site B\" (#1) -> 0150-0200 (#2)\n\
             `-- pass 2: \"site A\" (#0) x \"site B\" (#1) -> 0150-0200 (#5)"
        );
    }

    #[test]
    fn test_serializes_without_empty_remainders() {
        let mut trace = SplitTrace::new();
        let mut s = step(1, 2);
        s.remainder_indices.clear();
        trace.record(s);
        let json = serde_json::to_string(&trace).unwrap();
        assert!(!json.contains("remainder_indices"));
        assert!(json.contains("\"produced_index\":2"));
    }
}
