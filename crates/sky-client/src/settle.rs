//! Settle-all aggregation for screens that fan out several requests.
//!
//! A screen may issue independent requests concurrently and must wait for
//! all of them before rendering. Instead of failing the whole screen when
//! one request fails, each result is settled into its named section: the
//! surviving sections render, the failed ones are reported by name.

use crate::error::ApiError;

/// Collector for per-section outcomes of concurrently issued requests.
#[derive(Debug, Default)]
pub struct Sections {
    failed: Vec<String>,
}

impl Sections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Settle one section. A failure is logged, recorded under the section
    /// name, and turned into `None` so the caller can degrade that section
    /// only.
    pub fn settle<T>(&mut self, name: &str, result: Result<T, ApiError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(section = name, %error, "section failed to load");
                self.failed.push(name.to_string());
                None
            }
        }
    }

    /// Names of the sections that failed, in settle order.
    #[must_use]
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn api_error() -> ApiError {
        ApiError::Api {
            status: 500,
            message: String::from("boom"),
        }
    }

    #[test]
    fn all_sections_ok() {
        let mut sections = Sections::new();
        let stats = sections.settle("statistics", Ok(41_u64));
        let recent = sections.settle("recent", Ok(vec!["b1", "b2"]));

        assert_eq!(stats, Some(41));
        assert_eq!(recent.as_deref(), Some(["b1", "b2"].as_slice()));
        assert!(sections.all_ok());
        assert!(sections.failed().is_empty());
    }

    #[test]
    fn failed_section_degrades_alone() {
        let mut sections = Sections::new();
        let stats = sections.settle("statistics", Ok(41_u64));
        let revenue: Option<u64> = sections.settle("revenue", Err(api_error()));

        assert_eq!(stats, Some(41));
        assert_eq!(revenue, None);
        assert!(!sections.all_ok());
        assert_eq!(sections.failed(), ["revenue".to_string()].as_slice());
    }

    #[test]
    fn failures_are_reported_in_settle_order() {
        let mut sections = Sections::new();
        let _: Option<u64> = sections.settle("a", Err(api_error()));
        let _: Option<u64> = sections.settle("b", Err(api_error()));
        assert_eq!(
            sections.failed(),
            ["a".to_string(), "b".to_string()].as_slice()
        );
    }
}
