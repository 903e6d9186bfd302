//! CLI binary for compiling a range pattern via stdin.
//!
//! Usage:
//!   echo '{"start": "1000", "end": "1999"}' | cargo run --bin compile
//!
//! Input (JSON on stdin):
//!   - start: String — lower endpoint as a dial string
//!   - end: String — upper endpoint as a dial string
//!
//! Output (JSON on stdout):
//!   - pattern: Optional<String> — the compiled regular expression
//!   - error: Optional<String> — error message if compilation failed

use dialrange_engine::compile_range_regex;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(serde::Deserialize)]
struct CompileRequest {
    start: String,
    end: String,
}

#[derive(serde::Serialize)]
struct CompileResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn error_response(msg: String) -> CompileResponse {
    CompileResponse {
        pattern: None,
        error: Some(msg),
    }
}

fn run() -> CompileResponse {
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        return error_response(format!("Failed to read stdin: {e}"));
    }
    let request: CompileRequest = match serde_json::from_str(&input) {
        Ok(req) => req,
        Err(e) => return error_response(format!("Invalid request JSON: {e}")),
    };
    match compile_range_regex(&request.start, &request.end) {
        Ok(pattern) => CompileResponse {
            pattern: Some(pattern),
            error: None,
        },
        Err(e) => error_response(e.to_string()),
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
