use std::num::NonZeroUsize;

use org_folders_protocol::{
    FetchFolderPageRequest, FetchFolderPageResponse, FetchFolderRequest, FetchFolderResponse,
    Folder, OrgId,
};
use serde::Serialize;

use crate::cursor::{decode_offset, encode_offset};
use crate::directory::FolderDirectory;
use crate::error::{FolderError, Result};

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(size) => size,
    None => unreachable!(),
};

/// What to do with a token whose offset lies past the end of the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfRangePolicy {
    /// Return an empty final page, indistinguishable from an organization without folders.
    #[default]
    EmptyPage,
    /// Fail with [`FolderError::OutOfRange`].
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerConfig {
    pub page_size: NonZeroUsize,
    pub out_of_range: OutOfRangePolicy,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            out_of_range: OutOfRangePolicy::default(),
        }
    }
}

impl PagerConfig {
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_out_of_range(mut self, policy: OutOfRangePolicy) -> Self {
        self.out_of_range = policy;
        self
    }
}

/// One page of an organization's folders. An empty `token` marks the last page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderPage<'a> {
    pub folders: Vec<&'a Folder>,
    pub token: String,
}

impl<'a> FolderPage<'a> {
    fn last(folders: Vec<&'a Folder>) -> Self {
        Self {
            folders,
            token: String::new(),
        }
    }

    pub fn has_more(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn to_response(&self) -> FetchFolderPageResponse {
        FetchFolderPageResponse {
            folders: self.folders.iter().map(|&f| f.clone()).collect(),
            token: self.token.clone(),
        }
    }
}

/// Stateless cursor pagination over a [`FolderDirectory`].
///
/// All resumption state lives in the token, so a pager can be shared freely
/// between callers and threads.
#[derive(Debug, Clone, Copy)]
pub struct FolderPager<'a> {
    directory: &'a FolderDirectory,
    config: PagerConfig,
}

impl<'a> FolderPager<'a> {
    pub fn new(directory: &'a FolderDirectory, config: PagerConfig) -> Self {
        Self { directory, config }
    }

    /// Every folder of `org_id` in one response.
    pub fn fetch_all(&self, org_id: &OrgId) -> Vec<&'a Folder> {
        self.directory.list_by_org(org_id)
    }

    /// The page starting at the offset encoded in `token` (empty = first page).
    pub fn fetch_page(&self, org_id: &OrgId, token: &str) -> Result<FolderPage<'a>> {
        let start = decode_offset(token).inspect_err(|err| {
            log::warn!("Rejected page token {token:?} for org {org_id}: {err}");
        })?;

        let mut results = self.directory.list_by_org(org_id);
        let len = results.len();

        if start > len {
            return match self.config.out_of_range {
                OutOfRangePolicy::EmptyPage => {
                    log::warn!("Token offset {start} past {len} folders for org {org_id}");
                    Ok(FolderPage::last(Vec::new()))
                }
                OutOfRangePolicy::Reject => Err(FolderError::OutOfRange { offset: start, len }),
            };
        }

        let end = start.saturating_add(self.config.page_size.get()).min(len);
        results.truncate(end);
        let folders = results.split_off(start);

        let token = if end < len {
            encode_offset(end)
        } else {
            String::new()
        };

        log::debug!(
            "Org {org_id}: served folders {start}..{end} of {len}{}",
            if token.is_empty() { " (last page)" } else { "" }
        );

        Ok(FolderPage { folders, token })
    }

    /// Pages of `org_id` from the first one until the token runs out.
    pub fn walk(&self, org_id: OrgId) -> PageWalk<'a> {
        PageWalk {
            pager: *self,
            org_id,
            next: Some(String::new()),
        }
    }

    pub fn handle(&self, request: &FetchFolderRequest) -> FetchFolderResponse {
        FetchFolderResponse {
            folders: self
                .fetch_all(&request.org_id)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    pub fn handle_page(&self, request: &FetchFolderPageRequest) -> Result<FetchFolderPageResponse> {
        self.fetch_page(&request.org_id, &request.token)
            .map(|page| page.to_response())
    }
}

/// Iterator returned by [`FolderPager::walk`]. Stops after the last page or the first error.
#[derive(Debug, Clone)]
pub struct PageWalk<'a> {
    pager: FolderPager<'a>,
    org_id: OrgId,
    next: Option<String>,
}

impl<'a> Iterator for PageWalk<'a> {
    type Item = Result<FolderPage<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next.take()?;
        let page = self.pager.fetch_page(&self.org_id, &token);
        if let Ok(page) = &page {
            if page.has_more() {
                self.next = Some(page.token.clone());
            }
        }
        Some(page)
    }
}
