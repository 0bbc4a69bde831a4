use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use org_folders_protocol::Folder;

use crate::error::Result;

/// Produces the folder records a [`crate::FolderDirectory`] is built from.
pub trait FolderSource {
    fn load(&self) -> Result<Vec<Folder>>;
}

impl FolderSource for Vec<Folder> {
    fn load(&self) -> Result<Vec<Folder>> {
        Ok(self.clone())
    }
}

/// A JSON array of folders on disk, as written by `SampleData`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FolderSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Folder>> {
        let file = File::open(&self.path)?;
        let folders: Vec<Folder> = serde_json::from_reader(BufReader::new(file))?;
        log::debug!(
            "Loaded {} folders from {}",
            folders.len(),
            self.path.display()
        );
        Ok(folders)
    }
}

/// Writes folders in the format [`JsonFileSource`] reads back.
pub fn write_json<W: std::io::Write>(writer: W, folders: &[Folder]) -> Result<()> {
    serde_json::to_writer_pretty(writer, folders)?;
    Ok(())
}
