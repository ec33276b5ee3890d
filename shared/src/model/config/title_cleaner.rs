use log::warn;
use crate::utils::{default_as_true, default_removal_patterns};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TitleCleanerConfigDto {
    /// Regular expressions removed from the title, in order.
    #[serde(default = "default_removal_patterns")]
    pub patterns: Vec<String>,
    /// Drop the release year instead of appending it as ` (YYYY)`.
    #[serde(default = "default_as_true")]
    pub remove_year: bool,
}

impl Default for TitleCleanerConfigDto {
    fn default() -> Self {
        Self {
            patterns: default_removal_patterns(),
            remove_year: default_as_true(),
        }
    }
}

impl TitleCleanerConfigDto {
    pub fn prepare(&mut self) {
        self.patterns.retain(|pattern| !pattern.trim().is_empty());
        if self.patterns.is_empty() {
            warn!("No removal patterns configured, titles will only be normalized");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::DEFAULT_REMOVAL_PATTERNS;

    #[test]
    fn test_defaults() {
        let dto: TitleCleanerConfigDto = serde_yaml::from_str("{}").unwrap();
        assert!(dto.remove_year);
        assert_eq!(dto.patterns.len(), DEFAULT_REMOVAL_PATTERNS.len());
        assert_eq!(dto, TitleCleanerConfigDto::default());
    }

    #[test]
    fn test_custom_patterns_keep_order() {
        let dto: TitleCleanerConfigDto = serde_yaml::from_str(
            "remove_year: false\npatterns:\n  - '\\bfoo\\b'\n  - '\\[.*?\\]'\n",
        ).unwrap();
        assert!(!dto.remove_year);
        assert_eq!(dto.patterns, vec![r"\bfoo\b".to_string(), r"\[.*?\]".to_string()]);
    }

    #[test]
    fn test_prepare_drops_blank_patterns() {
        let mut dto = TitleCleanerConfigDto {
            patterns: vec![String::new(), "  ".to_string(), r"\bAAC\b".to_string()],
            remove_year: true,
        };
        dto.prepare();
        assert_eq!(dto.patterns, vec![r"\bAAC\b".to_string()]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_yaml::from_str::<TitleCleanerConfigDto>("remove_years: true").is_err());
    }
}
