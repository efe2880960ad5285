//! Insight texts that do not come from the generator
//!
//! Used when the generator has no credential, or when a single generation
//! exhausted its retries. Fallbacks are built only from the structured
//! facts and never carry a raw error message.

use crate::client::models::{ContributorSummary, RepoMetadata};

use super::metrics::group_thousands;

/// Content of every insight when no generator credential is configured
pub const NOT_CONFIGURED: &str = "AI service not configured.";

/// Characters of the description kept in the summary fallback
const DESCRIPTION_CHARS: usize = 100;

pub fn repository_summary(metadata: &RepoMetadata, main_language: &str) -> String {
    let description = metadata
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| d.chars().take(DESCRIPTION_CHARS).collect::<String>())
        .unwrap_or_else(|| "GitHub repository".to_string());

    format!(
        "• Repository: {} - {}\n• Stars: {} | Language: {}\n• This appears to be a {} project with development focus",
        metadata.name,
        description,
        group_thousands(metadata.stargazers_count),
        main_language,
        main_language,
    )
}

pub fn language_analysis(main_language: &str) -> String {
    let focus = match main_language {
        "JavaScript" | "TypeScript" => "Web development",
        _ => "Software development",
    };

    format!(
        "• Primary Language: {}\n• Technology Focus: {}\n• Language composition indicates modern development practices",
        main_language, focus
    )
}

pub fn contribution_patterns(contributors: &ContributorSummary) -> String {
    let scale = match contributors.total_contributors {
        n if n > 50 => "Large open-source",
        n if n > 10 => "Medium-scale",
        _ => "Small/Personal",
    };

    format!(
        "• Total Contributors: {}\n• Active Contributors: {}\n• Project Scale: {} project",
        contributors.total_contributors, contributors.active_contributors, scale
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(description: Option<&str>, stars: u64) -> RepoMetadata {
        serde_json::from_value(serde_json::json!({
            "name": "Hello-World",
            "description": description,
            "stargazers_count": stars,
        }))
        .unwrap()
    }

    #[test]
    fn test_summary_uses_facts() {
        let text = repository_summary(&metadata(Some("My first repository"), 2000), "C");
        assert_eq!(
            text,
            "• Repository: Hello-World - My first repository\n• Stars: 2,000 | Language: C\n• This appears to be a C project with development focus"
        );
    }

    #[test]
    fn test_summary_truncates_description() {
        let long = "d".repeat(300);
        let text = repository_summary(&metadata(Some(&long), 1), "Rust");
        assert!(text.contains(&format!("- {}\n", "d".repeat(100))));
    }

    #[test]
    fn test_summary_without_description() {
        let text = repository_summary(&metadata(None, 5), "Unknown");
        assert!(text.starts_with("• Repository: Hello-World - GitHub repository\n"));
    }

    #[test]
    fn test_language_focus() {
        assert!(language_analysis("TypeScript").contains("Technology Focus: Web development"));
        assert!(language_analysis("Rust").contains("Technology Focus: Software development"));
    }

    #[test]
    fn test_contribution_scale() {
        let summary = |total| ContributorSummary {
            total_contributors: total,
            active_contributors: 1,
            top_contributors: Vec::new(),
        };

        assert!(contribution_patterns(&summary(51)).contains("Large open-source project"));
        assert!(contribution_patterns(&summary(50)).contains("Medium-scale project"));
        assert!(contribution_patterns(&summary(10)).contains("Small/Personal project"));
        assert!(contribution_patterns(&summary(0)).starts_with("• Total Contributors: 0\n"));
    }
}
