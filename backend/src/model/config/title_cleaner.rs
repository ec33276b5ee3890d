use fancy_regex::Regex as FancyRegex;
use log::warn;
use shared::error::{info_err, CleartitleError};
use shared::model::TitleCleanerConfigDto;
use crate::model::macros;

/// A compiled, case-insensitive removal pattern.
#[derive(Debug, Clone)]
pub struct RemovalPattern {
    pub pattern: String,
    pub re: FancyRegex,
}

impl RemovalPattern {
    pub fn new(pattern: &str) -> Result<Self, CleartitleError> {
        match FancyRegex::new(&format!("(?i){pattern}")) {
            Ok(re) => Ok(Self { pattern: pattern.to_string(), re }),
            Err(err) => Err(info_err!("cant parse regex: {pattern} {err}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TitleCleanerConfig {
    pub patterns: Vec<RemovalPattern>,
    pub remove_year: bool,
}

impl Default for TitleCleanerConfig {
    fn default() -> Self {
        Self::from(&TitleCleanerConfigDto::default())
    }
}

macros::from_impl!(TitleCleanerConfig);
impl From<&TitleCleanerConfigDto> for TitleCleanerConfig {
    fn from(dto: &TitleCleanerConfigDto) -> Self {
        // Order is kept, broken patterns are left out.
        let patterns = dto.patterns
            .iter()
            .filter_map(|pattern| RemovalPattern::new(pattern)
                .map_err(|err| warn!("Skipping removal pattern: {err}"))
                .ok())
            .collect();

        Self {
            patterns,
            remove_year: dto.remove_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::utils::DEFAULT_REMOVAL_PATTERNS;

    #[test]
    fn test_default_config_compiles_all_patterns() {
        let config = TitleCleanerConfig::default();
        assert!(config.remove_year);
        assert_eq!(config.patterns.len(), DEFAULT_REMOVAL_PATTERNS.len());
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let dto = TitleCleanerConfigDto {
            patterns: vec![r"\bAAC\b".to_string(), "([unclosed".to_string(), r"\[.*?\]".to_string()],
            remove_year: false,
        };
        let config = TitleCleanerConfig::from(dto);
        let patterns: Vec<&str> = config.patterns.iter().map(|p| p.pattern.as_str()).collect();
        assert_eq!(patterns, vec![r"\bAAC\b", r"\[.*?\]"]);
        assert!(!config.remove_year);
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let pattern = RemovalPattern::new(r"\bbluray\b").unwrap();
        assert!(pattern.re.is_match("Movie BLURAY").unwrap());
    }
}
