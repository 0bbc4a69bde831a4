use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use org_folders::{FolderDirectory, JsonFileSource, OutOfRangePolicy, PagerConfig, SampleData};

pub const PAGE_SIZE_ENV: &str = "ORG_FOLDERS_PAGE_SIZE";

/// Page size precedence: `--page-size`, then `ORG_FOLDERS_PAGE_SIZE`, then the library default.
pub fn resolve_pager_config(page_size: Option<NonZeroUsize>, strict: bool) -> Result<PagerConfig> {
    let page_size = match (page_size, env::var(PAGE_SIZE_ENV)) {
        (Some(size), _) => Some(size),
        (None, Ok(raw)) if !raw.trim().is_empty() => Some(parse_page_size(&raw)?),
        (None, _) => None,
    };

    let mut config = PagerConfig::default();
    if let Some(size) = page_size {
        config = config.with_page_size(size);
    }
    if strict {
        config = config.with_out_of_range(OutOfRangePolicy::Reject);
    }
    Ok(config)
}

fn parse_page_size(raw: &str) -> Result<NonZeroUsize> {
    raw.trim()
        .parse::<NonZeroUsize>()
        .with_context(|| format!("{PAGE_SIZE_ENV} must be a positive integer, got {raw:?}"))
}

/// Where folder records come from: a JSON file, or a seeded sample.
#[derive(Debug, Clone)]
pub enum Dataset {
    File(JsonFileSource),
    Sample(SampleData),
}

impl Dataset {
    pub fn resolve(data: Option<PathBuf>, seed: u64) -> Self {
        match data {
            Some(path) => Self::File(JsonFileSource::new(path)),
            None => Self::Sample(SampleData {
                seed,
                ..SampleData::default()
            }),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::File(source) => source.path().display().to_string(),
            Self::Sample(sample) => format!("sample:seed={}", sample.seed),
        }
    }

    pub fn load(&self) -> Result<FolderDirectory> {
        let directory = match self {
            Self::File(source) => FolderDirectory::from_source(source),
            Self::Sample(sample) => FolderDirectory::from_source(sample),
        }
        .with_context(|| format!("load dataset {}", self.describe()))?;
        log::info!(
            "Loaded {} folders from {}",
            directory.len(),
            self.describe()
        );
        Ok(directory)
    }
}
