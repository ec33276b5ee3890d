use shared::model::{LibraryConfigDto, LibraryScanDirectoryDto};
use crate::model::macros;

#[derive(Debug, Clone, Default)]
pub struct LibraryScanDirectory {
    pub enabled: bool,
    pub path: String,
    pub recursive: bool,
}

macros::from_impl!(LibraryScanDirectory);
impl From<&LibraryScanDirectoryDto> for LibraryScanDirectory {
    fn from(dto: &LibraryScanDirectoryDto) -> Self {
        Self {
            enabled: dto.enabled,
            path: dto.path.clone(),
            recursive: dto.recursive,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LibraryConfig {
    pub scan_directories: Vec<LibraryScanDirectory>,
    pub supported_extensions: Vec<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self::from(&LibraryConfigDto::default())
    }
}

impl LibraryConfig {
    /// Replaces the configured scan directories, e.g. with directories given on the command line.
    pub fn with_directories(mut self, paths: &[String]) -> Self {
        self.scan_directories = paths
            .iter()
            .map(|path| LibraryScanDirectory::from(LibraryScanDirectoryDto::new(path)))
            .collect();
        self
    }
}

macros::from_impl!(LibraryConfig);
impl From<&LibraryConfigDto> for LibraryConfig {
    fn from(dto: &LibraryConfigDto) -> Self {
        Self {
            scan_directories: dto.scan_directories.iter().map(LibraryScanDirectory::from).collect(),
            supported_extensions: dto
                .supported_extensions
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
        }
    }
}
