use crate::library::LibraryScanner;
use crate::model::LibraryConfig;
use log::info;
use shared::error::to_io_error;
use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::fs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub path: Option<PathBuf>,
}

/// Source of movie items whose names can be cleaned.
pub trait MediaCatalog {
    fn list_movies(&self) -> impl Future<Output=io::Result<Vec<CatalogItem>>> + Send;

    fn update_name(&self, item: &CatalogItem, new_name: &str) -> impl Future<Output=io::Result<()>> + Send;
}

/// Movie files found in the library scan directories. Renaming an item renames the file.
pub struct DirectoryCatalog {
    scanner: LibraryScanner,
}

impl DirectoryCatalog {
    pub fn new(config: LibraryConfig) -> Self {
        Self { scanner: LibraryScanner::new(config) }
    }
}

fn is_valid_file_stem(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}

impl MediaCatalog for DirectoryCatalog {
    async fn list_movies(&self) -> io::Result<Vec<CatalogItem>> {
        let files = self.scanner.scan_all().await?;
        Ok(files
            .into_iter()
            .map(|file| CatalogItem {
                id: file.file_path,
                name: file.file_stem,
                path: Some(file.path),
            })
            .collect())
    }

    async fn update_name(&self, item: &CatalogItem, new_name: &str) -> io::Result<()> {
        let Some(path) = item.path.as_ref() else {
            return Err(io::Error::new(io::ErrorKind::NotFound, format!("No file for item {}", item.id)));
        };
        if !is_valid_file_stem(new_name) {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("Invalid file name: {new_name}")));
        }

        let file_name = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{new_name}.{ext}"),
            None => new_name.to_string(),
        };
        let target = path.with_file_name(file_name);
        if fs::try_exists(&target).await? {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, format!("File already exists: {}", target.display())));
        }

        fs::rename(path, &target).await?;
        info!("Renamed {} to {}", path.display(), target.display());
        Ok(())
    }
}

/// In-memory catalog for titles given on the command line or stdin.
#[derive(Default)]
pub struct TitleListCatalog {
    titles: Vec<String>,
    renamed: Mutex<HashMap<String, String>>,
}

impl TitleListCatalog {
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles,
            renamed: Mutex::new(HashMap::new()),
        }
    }

    pub fn renamed(&self) -> HashMap<String, String> {
        self.renamed.lock().map(|renamed| renamed.clone()).unwrap_or_default()
    }
}

impl MediaCatalog for TitleListCatalog {
    async fn list_movies(&self) -> io::Result<Vec<CatalogItem>> {
        Ok(self.titles
            .iter()
            .enumerate()
            .map(|(idx, title)| CatalogItem {
                id: idx.to_string(),
                name: title.clone(),
                path: None,
            })
            .collect())
    }

    async fn update_name(&self, item: &CatalogItem, new_name: &str) -> io::Result<()> {
        let mut renamed = self.renamed.lock().map_err(to_io_error)?;
        renamed.insert(item.id.clone(), new_name.to_string());
        Ok(())
    }
}
