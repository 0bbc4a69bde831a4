//! # Org Folders Protocol
//!
//! Folder records and the transport-agnostic request/response shapes used to
//! list the folders of an organization.
//!
//! ```text
//! FetchFolderRequest     { org_id }         ──> FetchFolderResponse     { folders }
//! FetchFolderPageRequest { org_id, token }  ──> FetchFolderPageResponse { folders, token }
//! ```
//!
//! An empty `token` in a page request means "start of sequence"; an empty
//! `token` in a page response means "no more pages".

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Organization identifier. Only equality is ever needed.
pub type OrgId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: Uuid,
    pub name: String,
    pub org_id: OrgId,
    #[serde(default)]
    pub deleted: bool,
}

impl Folder {
    pub fn new(id: Uuid, name: impl Into<String>, org_id: OrgId) -> Self {
        Self {
            id,
            name: name.into(),
            org_id,
            deleted: false,
        }
    }

    pub fn belongs_to(&self, org_id: &OrgId) -> bool {
        self.org_id == *org_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFolderRequest {
    pub org_id: OrgId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFolderResponse {
    pub folders: Vec<Folder>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFolderPageRequest {
    pub org_id: OrgId,
    #[serde(default)]
    pub token: String,
}

impl FetchFolderPageRequest {
    pub fn first(org_id: OrgId) -> Self {
        Self {
            org_id,
            token: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFolderPageResponse {
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub token: String,
}

impl FetchFolderPageResponse {
    pub fn has_more(&self) -> bool {
        !self.token.is_empty()
    }
}
