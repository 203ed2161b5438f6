use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

/// One product claim to be checked against the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub id: usize,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum ClaimsError {
    #[error("claims are required")]
    Missing,
    #[error("invalid claims input: provide a comma-separated string or a path to a claims file")]
    Unrecognised,
    #[error("failed to read claims file {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parse the `--claims` argument.
///
/// Input containing a comma is split into one claim per segment. Otherwise
/// the input is treated as a path to a file with one claim per non-blank
/// line. Ids are 1-based in input order.
pub fn parse_claims(input: &str) -> Result<Vec<Claim>, ClaimsError> {
    if input.is_empty() {
        return Err(ClaimsError::Missing);
    }

    let claims: Vec<Claim> = if input.contains(',') {
        input
            .split(',')
            .enumerate()
            .map(|(i, text)| Claim {
                id: i + 1,
                text: text.trim().to_string(),
            })
            .collect()
    } else if Path::new(input).is_file() {
        let content = fs::read_to_string(input).map_err(|e| ClaimsError::Unreadable {
            path: input.to_string(),
            source: e,
        })?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, text)| Claim {
                id: i + 1,
                text: text.trim().to_string(),
            })
            .collect()
    } else {
        return Err(ClaimsError::Unrecognised);
    };

    info!(count = claims.len(), "Parsed claims");
    Ok(claims)
}

/// Render claims in the structured form echoed to stdout.
pub fn claims_xml(claims: &[Claim]) -> String {
    let mut out = String::from("<claims>");
    for claim in claims {
        let _ = write!(out, "<claim id=\"{}\">{}</claim>", claim.id, claim.text);
    }
    out.push_str("</claims>");
    out
}
