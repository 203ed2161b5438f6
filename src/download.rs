use std::sync::OnceLock;

use async_trait::async_trait;
use mockall::automock;
use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

/// Branch names tried, in order, when resolving the default-branch archive.
pub const PRIMARY_BRANCH: &str = "main";
pub const FALLBACK_BRANCH: &str = "master";

#[derive(Debug, Clone, Error)]
#[error("invalid repository reference `{0}`: expected https://github.com/<owner>/<repo>")]
pub struct InvalidReference(pub String);

#[derive(Debug, Error)]
#[error("failed to download repository: {primary} and {fallback} are both unavailable")]
pub struct RetrievalError {
    pub primary: String,
    pub fallback: String,
}

fn reference_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(r"^https://github\.com/[^/\s]+/[^/\s]+$").expect("reference regex")
    })
}

/// A validated GitHub repository locator.
///
/// Validation happens before any network activity; a trailing `.git` or
/// slash is stripped from the raw input first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    url: String,
}

impl RepoReference {
    pub fn parse(raw: &str) -> Result<Self, InvalidReference> {
        let trimmed = raw.trim().trim_end_matches('/');
        let url = trimmed.strip_suffix(".git").unwrap_or(trimmed);
        if !reference_shape().is_match(url) {
            return Err(InvalidReference(raw.to_string()));
        }
        Ok(Self {
            url: url.to_string(),
        })
    }

    /// Downloadable ZIP archive location for the given branch.
    pub fn archive_url(&self, branch: &str) -> String {
        format!("{}/archive/{branch}.zip", self.url)
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

/// Transport seam for fetching archive bytes from a URL.
///
/// Any non-success outcome, connection failure or non-2xx status alike, is
/// an error; branch fallback does not distinguish between them.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ArchiveSource: Send + Sync {
    async fn get(&self, url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;
}

/// HTTP implementation of [`ArchiveSource`]; follows redirects, which
/// GitHub archive URLs rely on.
pub struct HttpArchiveSource {
    client: reqwest::Client,
}

impl HttpArchiveSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpArchiveSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArchiveSource for HttpArchiveSource {
    async fn get(&self, url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Fetch a default-branch archive, trying `main` then `master`.
///
/// Exactly two attempts are made; when both are non-success the error names
/// both attempted locations. Callers needing resilience against transient
/// network failures must wrap this themselves.
pub async fn fetch_archive(
    source: &dyn ArchiveSource,
    reference: &RepoReference,
) -> Result<Vec<u8>, RetrievalError> {
    let primary = reference.archive_url(PRIMARY_BRANCH);
    let fallback = reference.archive_url(FALLBACK_BRANCH);

    match source.get(&primary).await {
        Ok(bytes) => {
            info!(url = %primary, size = bytes.len(), "Downloaded repository archive");
            return Ok(bytes);
        }
        Err(e) => {
            warn!(url = %primary, error = %e, "Primary branch archive unavailable, trying fallback")
        }
    }

    match source.get(&fallback).await {
        Ok(bytes) => {
            info!(url = %fallback, size = bytes.len(), "Downloaded repository archive");
            Ok(bytes)
        }
        Err(e) => {
            warn!(url = %fallback, error = %e, "Fallback branch archive unavailable");
            Err(RetrievalError { primary, fallback })
        }
    }
}
