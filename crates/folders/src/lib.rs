//! # Org Folders
//!
//! Organization-scoped folder listing with stateless cursor pagination.
//!
//! ## Pipeline
//!
//! ```text
//! FolderSource (JSON file, Vec<Folder>, SampleData)
//!     │
//!     └──> FolderDirectory (read-only, load order)
//!            │
//!            └──> FolderPager
//!                   ├─ decode token ──> start offset (reject malformed tokens first)
//!                   ├─ list_by_org  ──> ordered org result set
//!                   ├─ slice        ──> [start, start + page_size)
//!                   └─ encode end   ──> next token ("" on the last page)
//! ```
//!
//! Tokens are `base64(decimal(offset))`. They carry no server-side state and
//! no binding to the dataset they were issued from.
//!
//! ## Example
//!
//! ```
//! use org_folders::{FolderDirectory, FolderPager, PagerConfig, SampleData, DEFAULT_ORG_ID};
//!
//! # fn main() -> org_folders::Result<()> {
//! let directory = FolderDirectory::from_source(&SampleData::default())?;
//! let pager = FolderPager::new(&directory, PagerConfig::default());
//!
//! let mut seen = 0;
//! for page in pager.walk(DEFAULT_ORG_ID) {
//!     seen += page?.folders.len();
//! }
//! assert_eq!(seen, directory.list_by_org(&DEFAULT_ORG_ID).len());
//! # Ok(())
//! # }
//! ```

mod cursor;
mod directory;
mod error;
mod pager;
mod sample;
mod source;

pub use cursor::{decode_offset, encode_offset, MAX_CURSOR_BYTES};
pub use directory::FolderDirectory;
pub use error::{FolderError, Result};
pub use org_folders_protocol::{
    FetchFolderPageRequest, FetchFolderPageResponse, FetchFolderRequest, FetchFolderResponse,
    Folder, OrgId,
};
pub use pager::{
    FolderPage, FolderPager, OutOfRangePolicy, PageWalk, PagerConfig, DEFAULT_PAGE_SIZE,
};
pub use sample::{SampleData, DEFAULT_ORG_ID, DEFAULT_SAMPLE_FOLDERS, DEFAULT_SAMPLE_ORGS};
pub use source::{write_json, FolderSource, JsonFileSource};
