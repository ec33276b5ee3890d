use crate::utils::is_blank_optional_string;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct LogConfigDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl LogConfigDto {
    pub fn is_empty(&self) -> bool {
        is_blank_optional_string(self.log_level.as_ref())
    }

    pub fn clean(&mut self) {
        if is_blank_optional_string(self.log_level.as_ref()) {
            self.log_level = None;
        }
    }
}

// We need serde for these structs to read them during
// start from the yaml file without reading the whole config.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct LogLevelConfigDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfigDto>,
}
