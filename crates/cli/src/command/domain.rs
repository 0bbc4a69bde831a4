use anyhow::Result;
use org_folders::FolderError;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub status: CommandStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<Hint>,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub meta: ResponseMeta,
}

impl CommandResponse {
    pub fn ok(outcome: CommandOutcome) -> Self {
        Self {
            status: CommandStatus::Ok,
            message: None,
            hints: outcome.hints,
            data: outcome.data,
            meta: outcome.meta,
        }
    }

    pub fn error(err: &anyhow::Error, meta: ResponseMeta) -> Self {
        Self {
            status: CommandStatus::Error,
            message: Some(format!("{err:#}")),
            hints: classify_error(err),
            data: Value::Null,
            meta,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize, Clone)]
pub struct Hint {
    #[serde(rename = "type")]
    pub kind: HintKind,
    pub text: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    Info,
    Action,
}

#[derive(Debug, Serialize, Default, Clone)]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

#[derive(Debug)]
pub struct CommandOutcome {
    pub data: Value,
    pub hints: Vec<Hint>,
    pub meta: ResponseMeta,
}

impl CommandOutcome {
    pub fn from_value<T: Serialize>(value: T) -> Result<Self> {
        Ok(Self {
            data: serde_json::to_value(value)?,
            hints: Vec::new(),
            meta: ResponseMeta::default(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct OrgSummary {
    pub org_id: org_folders::OrgId,
    pub folders: usize,
}

#[derive(Debug, Serialize)]
pub struct WalkOutput<'a> {
    pub pages: Vec<org_folders::FolderPage<'a>>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct SampleWritten {
    pub path: String,
    pub folders: usize,
}

/// The token/range error behind `err`, if any.
pub fn token_error(err: &anyhow::Error) -> Option<&FolderError> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<FolderError>())
        .filter(|folder_err| folder_err.is_token_error())
}

pub fn classify_error(err: &anyhow::Error) -> Vec<Hint> {
    let mut hints = Vec::new();

    match token_error(err) {
        Some(FolderError::InvalidToken | FolderError::InvalidTokenFormat) => {
            hints.push(Hint {
                kind: HintKind::Action,
                text: "Token was not issued by this service; pass the token from the previous page or omit --token to start over.".to_string(),
            });
        }
        Some(FolderError::OutOfRange { .. }) => {
            hints.push(Hint {
                kind: HintKind::Info,
                text: "Token points past the end of the result set; the dataset may have changed since it was issued.".to_string(),
            });
        }
        _ => {}
    }

    if err
        .chain()
        .any(|cause| cause.downcast_ref::<std::io::Error>().is_some())
    {
        hints.push(Hint {
            kind: HintKind::Action,
            text: "Dataset file unreadable; check --data or create one with `org-folders sample --output <path>`.".to_string(),
        });
    }

    hints
}
