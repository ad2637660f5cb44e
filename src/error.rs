use std::fmt;
use thiserror::Error;

/// Which part of processing a match reference failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Setup,
    Classify,
    Fetch,
    Parse,
    Output,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Setup => "setup",
            Stage::Classify => "classify",
            Stage::Fetch => "fetch",
            Stage::Parse => "parse",
            Stage::Output => "output",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Champion data unavailable: {0}")]
    LookupFailure(String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Unknown champion id: {0}")]
    UnknownChampionId(i64),

    #[error("Unrecognized match URL: {0}")]
    UnrecognizedUrl(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("URL shortener error: {0}")]
    ShortenerError(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("{reference} failed during {stage}: {source}")]
    Reference {
        reference: String,
        stage: Stage,
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn stage(&self) -> Stage {
        match self {
            AppError::LookupFailure(_) | AppError::ConfigError(_) => Stage::Setup,
            AppError::UnrecognizedUrl(_) => Stage::Classify,
            AppError::HttpError(_) | AppError::ShortenerError(_) => Stage::Fetch,
            AppError::MalformedDocument(_) | AppError::UnknownChampionId(_) => Stage::Parse,
            AppError::ClipboardError(_) => Stage::Output,
            AppError::Reference { stage, .. } => *stage,
        }
    }

    /// Attach the match reference being processed so the operator can tell
    /// which URL failed.
    pub fn for_reference(self, reference: &str) -> Self {
        match self {
            AppError::Reference { .. } => self,
            other => AppError::Reference {
                reference: reference.to_string(),
                stage: other.stage(),
                source: Box::new(other),
            },
        }
    }
}
