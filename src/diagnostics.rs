//! Structured failure diagnostics for `--debug-json`.

use serde::Serialize;
use std::io;

/// Render a failure as pretty JSON: error, cause chain, category and hints.
pub fn format_debug_diagnostic_json(
    command: &str,
    error: &anyhow::Error,
    category: Option<&str>,
    hints: Vec<String>,
) -> String {
    #[derive(Serialize)]
    struct DebugDiagnostic {
        command: String,
        category: String,
        error: String,
        causes: Vec<String>,
        hints: Vec<String>,
        timestamp_utc: String,
    }

    let causes: Vec<String> = error.chain().skip(1).map(|c| c.to_string()).collect();
    let inferred = category
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| classify_error(error));
    let payload = DebugDiagnostic {
        command: command.to_string(),
        category: inferred,
        error: error.to_string(),
        causes,
        hints,
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
    };
    serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string())
}

fn io_kind(error: &anyhow::Error) -> Option<io::ErrorKind> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<io::Error>())
        .map(io::Error::kind)
}

/// Default hints for the failures this tool can actually hit.
pub fn default_diagnostic_hints(error: &anyhow::Error) -> Vec<String> {
    let mut hints = Vec::new();
    match io_kind(error) {
        Some(io::ErrorKind::BrokenPipe) => hints.push(
            "stdout was closed before the fragment was complete; redirect to a file instead of \
             piping into a reader that exits early"
                .to_string(),
        ),
        Some(io::ErrorKind::PermissionDenied) => {
            hints.push("Check permissions on the redirection target".to_string())
        }
        Some(_) => hints.push("Check that the output destination is writable".to_string()),
        None => {}
    }
    if hints.is_empty() {
        hints.push("Retry with `-vv` for additional generation details".to_string());
    }
    hints
}

pub fn classify_error(error: &anyhow::Error) -> String {
    if io_kind(error).is_some() {
        "io_error".to_string()
    } else if error.to_string().to_ascii_lowercase().contains("utf-8") {
        "encoding_error".to_string()
    } else {
        "internal_error".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};
    use serde_json::Value;

    fn broken_pipe() -> anyhow::Error {
        Err::<(), _>(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            .context("failed to write declaration line 3")
            .unwrap_err()
    }

    #[test]
    fn test_broken_pipe_is_io_error() {
        let err = broken_pipe();
        assert_eq!(classify_error(&err), "io_error");
        let hints = default_diagnostic_hints(&err);
        assert_eq!(hints.len(), 1);
        assert!(hints[0].contains("redirect"));
    }

    #[test]
    fn test_unknown_error_gets_fallback_hint() {
        let err = anyhow!("something odd");
        assert_eq!(classify_error(&err), "internal_error");
        assert!(default_diagnostic_hints(&err)[0].contains("-vv"));
    }

    #[test]
    fn test_diagnostic_json_payload() {
        let err = broken_pipe();
        let json = format_debug_diagnostic_json(
            "ecs-config-gen",
            &err,
            None,
            default_diagnostic_hints(&err),
        );
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["command"], "ecs-config-gen");
        assert_eq!(value["category"], "io_error");
        assert_eq!(value["error"], "failed to write declaration line 3");
        assert_eq!(value["causes"][0], "pipe closed");
        assert!(value["timestamp_utc"].as_str().is_some());
    }

    #[test]
    fn test_explicit_category_wins() {
        let err = anyhow!("boom");
        let json = format_debug_diagnostic_json("ecs-config-gen", &err, Some("custom"), vec![]);
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["category"], "custom");
        assert_eq!(value["causes"].as_array().map(Vec::len), Some(0));
    }
}
