use serde::{Deserialize, Serialize};
use crate::error::{config_err_res, CleartitleError};
use crate::utils::{default_as_true, default_supported_extensions};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LibraryConfigDto {
    #[serde(default)]
    pub scan_directories: Vec<LibraryScanDirectoryDto>,
    #[serde(default = "default_supported_extensions")]
    pub supported_extensions: Vec<String>,
}

impl Default for LibraryConfigDto {
    fn default() -> Self {
        Self {
            scan_directories: vec![],
            supported_extensions: default_supported_extensions(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LibraryScanDirectoryDto {
    #[serde(default = "default_as_true")]
    pub enabled: bool,
    pub path: String,
    #[serde(default = "default_as_true")]
    pub recursive: bool,
}

impl LibraryScanDirectoryDto {
    pub fn new(path: &str) -> Self {
        Self {
            enabled: true,
            path: path.to_string(),
            recursive: true,
        }
    }
}

impl LibraryConfigDto {
    pub fn prepare(&mut self) -> Result<(), CleartitleError> {
        for dir in &mut self.scan_directories {
            dir.path = dir.path.trim().to_string();
            if dir.enabled && dir.path.is_empty() {
                return config_err_res!("Library scan directory path cannot be empty");
            }
        }

        self.supported_extensions = self.supported_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        if self.supported_extensions.is_empty() {
            return config_err_res!("Library supported_extensions cannot be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_normalizes_extensions() {
        let mut dto = LibraryConfigDto {
            scan_directories: vec![LibraryScanDirectoryDto::new(" /media/movies ")],
            supported_extensions: vec![".MKV".to_string(), "mp4".to_string(), " ".to_string()],
        };
        assert!(dto.prepare().is_ok());
        assert_eq!(dto.scan_directories[0].path, "/media/movies");
        assert_eq!(dto.supported_extensions, vec!["mkv".to_string(), "mp4".to_string()]);
    }

    #[test]
    fn test_prepare_rejects_empty_path() {
        let mut dto: LibraryConfigDto = serde_yaml::from_str("scan_directories:\n  - path: ''\n").unwrap();
        assert!(dto.prepare().is_err());

        let mut disabled: LibraryConfigDto = serde_yaml::from_str("scan_directories:\n  - path: ''\n    enabled: false\n").unwrap();
        assert!(disabled.prepare().is_ok());
    }

    #[test]
    fn test_scan_directory_defaults() {
        let dto: LibraryConfigDto = serde_yaml::from_str("scan_directories:\n  - path: /movies\n").unwrap();
        let dir = &dto.scan_directories[0];
        assert!(dir.enabled);
        assert!(dir.recursive);
        assert_eq!(dto.supported_extensions, default_supported_extensions());
    }
}
