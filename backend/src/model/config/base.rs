use shared::model::ConfigDto;
use crate::model::{macros, LibraryConfig, TitleCleanerConfig};

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub title_cleaner: TitleCleanerConfig,
    pub library: LibraryConfig,
}

macros::from_impl!(Config);
impl From<&ConfigDto> for Config {
    fn from(dto: &ConfigDto) -> Self {
        Self {
            title_cleaner: TitleCleanerConfig::from(&dto.title_cleaner),
            library: LibraryConfig::from(&dto.library),
        }
    }
}
