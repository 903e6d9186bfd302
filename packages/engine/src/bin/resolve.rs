//! CLI binary for resolving a dial plan via stdin.
//!
//! Usage:
//!   echo '{"ranges": [{"start": "0100", "end": "0200", "label": "site A"},
//!                     {"start": "0150", "end": "0250", "label": "site B"}],
//!          "digit_count": 4, "trace": true}' \
//!     | cargo run --bin resolve
//!
//! Input (JSON on stdin):
//!   - ranges: Array — labeled ranges {start, end, label, kind?}
//!   - digit_count: Number — declared significant width of the plan
//!   - trace: Optional<bool> — include the split audit trail
//!
//! Output (JSON on stdout):
//!   - ranges: Optional<Array> — the disjoint partition
//!   - trace: Optional<Object> — audit trail when requested
//!   - error: Optional<String> — error message if resolution failed

use dialrange_engine::{
    resolve_overlaps, resolve_overlaps_traced, LabeledRangeSpec, ResolvedRange, SplitTrace,
};
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(serde::Deserialize)]
struct ResolveRequest {
    ranges: Vec<LabeledRangeSpec>,
    digit_count: usize,
    #[serde(default)]
    trace: bool,
}

#[derive(serde::Serialize)]
struct ResolveResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    ranges: Option<Vec<ResolvedRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<SplitTrace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn error_response(msg: String) -> ResolveResponse {
    ResolveResponse {
        ranges: None,
        trace: None,
        error: Some(msg),
    }
}

fn run() -> ResolveResponse {
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        return error_response(format!("Failed to read stdin: {e}"));
    }
    let request: ResolveRequest = match serde_json::from_str(&input) {
        Ok(req) => req,
        Err(e) => return error_response(format!("Invalid request JSON: {e}")),
    };

    if request.trace {
        match resolve_overlaps_traced(&request.ranges, request.digit_count) {
            Ok((ranges, trace)) => ResolveResponse {
                ranges: Some(ranges),
                trace: Some(trace),
                error: None,
            },
            Err(e) => error_response(e.to_string()),
        }
    } else {
        match resolve_overlaps(&request.ranges, request.digit_count) {
            Ok(ranges) => ResolveResponse {
                ranges: Some(ranges),
                trace: None,
                error: None,
            },
            Err(e) => error_response(e.to_string()),
        }
    }
}

fn main() {
    // Initialize tracing with WARN level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let response = run();
    match serde_json::to_string(&response) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
