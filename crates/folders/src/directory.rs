use std::collections::BTreeMap;

use org_folders_protocol::{Folder, OrgId};

use crate::error::Result;
use crate::source::FolderSource;

/// Read-only, ordered set of folder records.
///
/// The directory is the sole owner of its records; every lookup hands out
/// shared references in load order.
#[derive(Debug, Clone, Default)]
pub struct FolderDirectory {
    folders: Vec<Folder>,
}

impl FolderDirectory {
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    pub fn from_source<S: FolderSource>(source: &S) -> Result<Self> {
        Ok(Self::new(source.load()?))
    }

    pub fn list(&self) -> &[Folder] {
        &self.folders
    }

    /// Folders of `org_id`, in the order of [`Self::list`]. Unknown organizations yield nothing.
    pub fn list_by_org(&self, org_id: &OrgId) -> Vec<&Folder> {
        self.folders
            .iter()
            .filter(|folder| folder.belongs_to(org_id))
            .collect()
    }

    /// Distinct organizations with their folder counts, ordered by id.
    pub fn org_counts(&self) -> BTreeMap<OrgId, usize> {
        let mut counts = BTreeMap::new();
        for folder in &self.folders {
            *counts.entry(folder.org_id).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}
