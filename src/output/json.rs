//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Time the output was produced (RFC 3339)
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the `{data, meta}` envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::HealthReport;

    #[test]
    fn test_json_output_new() {
        let output = JsonOutput::new(vec!["octocat/Hello-World"]);

        assert_eq!(output.data, vec!["octocat/Hello-World"]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_json_envelope() {
        let report = HealthReport {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            ai_available: false,
        };

        let result = format_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["data"]["status"], "healthy");
        assert_eq!(value["data"]["ai_available"], false);
        assert_eq!(value["meta"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(value["meta"]["timestamp"].is_string());
    }

    #[test]
    fn test_format_json_empty_vec() {
        let items: Vec<String> = vec![];
        let result = format_json(&items).unwrap();

        assert!(result.contains("\"data\": []"));
    }
}
