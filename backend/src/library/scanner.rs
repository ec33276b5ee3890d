use crate::model::{LibraryConfig, LibraryScanDirectory};
use log::{debug, error, info, trace, warn};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io;

/// Represents a discovered video file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedMediaFile {
    pub path: PathBuf,
    pub file_path: String,
    pub file_stem: String,
}

impl ScannedMediaFile {
    pub fn from_path(path: PathBuf) -> Self {
        let file_stem = path
            .file_stem()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        Self {
            file_path: path.display().to_string(),
            path,
            file_stem,
        }
    }
}

/// Library file scanner for local movie directories
pub struct LibraryScanner {
    config: LibraryConfig,
}

impl LibraryScanner {
    pub fn new(config: LibraryConfig) -> Self {
        Self { config }
    }

    pub async fn scan_all(&self) -> Result<Vec<ScannedMediaFile>, io::Error> {
        let mut all_files = Vec::new();

        for scan_dir in &self.config.scan_directories {
            if !scan_dir.enabled {
                debug!("Skipping disabled scan directory: {}", scan_dir.path);
                continue;
            }

            info!("Scanning directory: {}", scan_dir.path);
            match self.scan_directory(scan_dir).await {
                Ok(mut files) => {
                    info!("Found {} video files in {}", files.len(), scan_dir.path);
                    all_files.append(&mut files);
                }
                Err(err) => {
                    error!("Failed to scan directory {}: {err}", scan_dir.path);
                }
            }
        }

        // read_dir order is platform dependent
        all_files.sort_by(|a, b| a.path.cmp(&b.path));
        info!("Total video files found: {}", all_files.len());
        Ok(all_files)
    }

    async fn scan_directory(&self, scan_directory: &LibraryScanDirectory) -> io::Result<Vec<ScannedMediaFile>> {
        let path = Path::new(&scan_directory.path);

        if !fs::try_exists(path).await.unwrap_or(false) {
            warn!("Directory does not exist: {}", &scan_directory.path);
            return Ok(Vec::new());
        }

        let dir_metadata = fs::metadata(path).await?;
        if !dir_metadata.is_dir() {
            warn!("Path is not a directory: {}", &scan_directory.path);
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        self.scan_directory_recursive(path, scan_directory.recursive, &mut files).await?;
        Ok(files)
    }

    fn scan_directory_recursive<'a>(
        &'a self,
        path: &'a Path,
        recursive: bool,
        files: &'a mut Vec<ScannedMediaFile>,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output=io::Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let mut entries = fs::read_dir(path).await?;

            while let Some(entry) = entries.next_entry().await? {
                let entry_path = entry.path();
                let metadata = match entry.metadata().await {
                    Ok(m) => m,
                    Err(err) => {
                        error!("Failed to read metadata for {}: {err}", entry_path.display());
                        continue;
                    }
                };

                if metadata.is_dir() {
                    if recursive {
                        if let Err(err) = self.scan_directory_recursive(&entry_path, recursive, files).await {
                            error!("Failed to scan subdirectory {}: {err}", entry_path.display());
                        }
                    }
                } else if metadata.is_file() && self.is_supported(&entry_path) {
                    let video_file = ScannedMediaFile::from_path(entry_path);
                    trace!("Found video file: {}", video_file.file_path);
                    files.push(video_file);
                }
            }

            Ok(())
        })
    }

    fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.config.supported_extensions.contains(&ext.to_lowercase()))
    }
}
