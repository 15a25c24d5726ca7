//! # Fluid Scale CLI
//!
//! Reads a calculation request as JSON and prints the result as JSON.
//!
//! ## Usage
//!
//! ```bash
//! fluid_cli request.json
//! echo '{"type": "clamp", "minSize": 16, "maxSize": 32, "minWidth": 320, "maxWidth": 1240}' \
//!     | fluid_cli
//! RUST_LOG=fluid_core=debug fluid_cli request.json
//! ```
//!
//! Logs go to stderr so stdout stays valid JSON.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use fluid_core::{CalculationRequest, FluidError, FluidResult};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read the request document from `path`, or stdin for `None` / `-`.
fn read_input(path: Option<&str>) -> FluidResult<String> {
    match path {
        None | Some("-") => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| FluidError::file_error("read", "<stdin>", e.to_string()))?;
            Ok(input)
        }
        Some(path) => fs::read_to_string(path)
            .map_err(|e| FluidError::file_error("read", path, e.to_string())),
    }
}

fn run(path: Option<&str>) -> FluidResult<String> {
    let input = read_input(path)?;
    let request = CalculationRequest::from_json(&input)?;
    debug!(kind = request.kind(), "parsed request");
    request.run()?.to_json_pretty()
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if matches!(args.first().map(String::as_str), Some("-h" | "--help")) {
        println!("Usage: fluid_cli [REQUEST.json | -]");
        println!();
        println!("Request types: clamp, clamps, typeScale, spaceScale");
        return ExitCode::SUCCESS;
    }

    match run(args.first().map(String::as_str)) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(code = e.error_code(), "calculation failed");
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_from_file() {
        let path =
            std::env::temp_dir().join(format!("fluid_cli_test_{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"type": "clamp", "minSize": 16, "maxSize": 32, "minWidth": 320, "maxWidth": 1240,
                "usePx": true}"#,
        )
        .unwrap();

        let json = run(path.to_str()).unwrap();
        let _ = fs::remove_file(&path);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "clamp");
        assert_eq!(value["clamp"], "clamp(16px, 10.4348px + 1.7391vi, 32px)");
    }

    #[test]
    fn test_missing_file() {
        let err = run(Some("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
