pub mod domain;

pub use domain::{token_error, CommandResponse, ResponseMeta};

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use org_folders::{
    write_json, FetchFolderRequest, FolderDirectory, FolderPager, OrgId, PagerConfig, SampleData,
};

use domain::{CommandOutcome, OrgSummary, SampleWritten, WalkOutput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    Sample {
        sample: SampleData,
        output: Option<PathBuf>,
    },
    Orgs,
    List {
        org: OrgId,
    },
    Page {
        org: OrgId,
        token: String,
    },
    Walk {
        org: OrgId,
    },
}

pub struct CommandHandler {
    directory: FolderDirectory,
    config: PagerConfig,
    dataset: String,
}

impl CommandHandler {
    pub fn new(directory: FolderDirectory, config: PagerConfig, dataset: impl Into<String>) -> Self {
        Self {
            directory,
            config,
            dataset: dataset.into(),
        }
    }

    pub fn meta(&self) -> ResponseMeta {
        ResponseMeta {
            dataset: Some(self.dataset.clone()),
            page_size: Some(self.config.page_size.get()),
            duration_ms: None,
        }
    }

    pub fn execute(&self, action: CommandAction) -> Result<CommandOutcome> {
        let started = Instant::now();
        let pager = FolderPager::new(&self.directory, self.config);

        let mut outcome = match action {
            CommandAction::Sample { sample, output } => {
                let folders = sample.generate();
                match output {
                    Some(path) => {
                        let file = File::create(&path)
                            .with_context(|| format!("create {}", path.display()))?;
                        write_json(BufWriter::new(file), &folders)
                            .with_context(|| format!("write {}", path.display()))?;
                        log::info!("Wrote {} sample folders to {}", folders.len(), path.display());
                        CommandOutcome::from_value(SampleWritten {
                            path: path.display().to_string(),
                            folders: folders.len(),
                        })?
                    }
                    None => CommandOutcome::from_value(folders)?,
                }
            }
            CommandAction::Orgs => {
                let orgs: Vec<OrgSummary> = self
                    .directory
                    .org_counts()
                    .into_iter()
                    .map(|(org_id, folders)| OrgSummary { org_id, folders })
                    .collect();
                CommandOutcome::from_value(orgs)?
            }
            CommandAction::List { org } => {
                CommandOutcome::from_value(pager.handle(&FetchFolderRequest { org_id: org }))?
            }
            CommandAction::Page { org, token } => {
                let page = pager.fetch_page(&org, &token).context("fetch page")?;
                CommandOutcome::from_value(page)?
            }
            CommandAction::Walk { org } => {
                let mut pages = Vec::new();
                for page in pager.walk(org) {
                    pages.push(page.context("walk pages")?);
                }
                let total = pages.iter().map(|p| p.folders.len()).sum();
                CommandOutcome::from_value(WalkOutput { pages, total })?
            }
        };

        outcome.meta = ResponseMeta {
            duration_ms: Some(started.elapsed().as_millis() as u64),
            ..self.meta()
        };
        Ok(outcome)
    }
}
