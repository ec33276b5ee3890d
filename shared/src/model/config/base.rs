use crate::error::CleartitleError;
use crate::model::{LibraryConfigDto, LogConfigDto, TitleCleanerConfigDto};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfigDto>,
    #[serde(default)]
    pub title_cleaner: TitleCleanerConfigDto,
    #[serde(default)]
    pub library: LibraryConfigDto,
}

impl ConfigDto {
    pub fn prepare(&mut self) -> Result<(), CleartitleError> {
        if let Some(log) = self.log.as_mut() {
            log.clean();
            if log.is_empty() {
                self.log = None;
            }
        }
        self.title_cleaner.prepare();
        self.library.prepare()
    }
}
