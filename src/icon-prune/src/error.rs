//! Error type shared by every stage of the pruning pipeline.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PruneError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Unexpected metadata shape: {0}")]
    Schema(String),

    #[error("Error parsing skill: {0}")]
    Classification(String),

    #[error("Unrecognized skill group: {0}")]
    SkillGroup(String),

    #[error("Element <{0}> has no attributes")]
    MissingAttribute(String),
}

impl From<quick_xml::Error> for PruneError {
    fn from(err: quick_xml::Error) -> Self {
        PruneError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for PruneError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        PruneError::Xml(err.to_string())
    }
}

impl PruneError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PruneError::Io {
            path: path.into(),
            source,
        }
    }
}
