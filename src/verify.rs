//! Coordinating module for the fetch-index-filter-extract-assemble-analyze
//! pipeline.

use anyhow::Result;
use tracing::{error, info};

use crate::analyze::{Analyzer, ClaimReport};
use crate::assemble::assemble;
use crate::claims::Claim;
use crate::config::VerifierConfig;
use crate::download::{fetch_archive, ArchiveSource, RepoReference};
use crate::extract::extract_entries;
use crate::filter::filter_entries;
use crate::index::index_entries;
use crate::scratch::ScratchArea;

/// Run the full acquisition-and-analysis pipeline for one repository.
///
/// Stages execute strictly in sequence; a stage-fatal error aborts the
/// rest and propagates unchanged. The scratch area lives only inside this
/// function and is removed on every exit path, early `?` returns and
/// panics included.
pub async fn verify(
    claims: &[Claim],
    reference: &RepoReference,
    config: &VerifierConfig,
    source: &dyn ArchiveSource,
    analyzer: &dyn Analyzer,
) -> Result<Vec<ClaimReport>> {
    info!(
        repository = %reference.as_str(),
        claims = claims.len(),
        "Starting claim verification pipeline"
    );

    let bytes = match fetch_archive(source, reference).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(error = %e, "Archive retrieval failed");
            return Err(e.into());
        }
    };

    let entries = match index_entries(&bytes) {
        Ok(entries) => {
            info!(entries = entries.len(), "Indexed repository archive");
            entries
        }
        Err(e) => {
            error!(error = %e, "Archive indexing failed");
            return Err(e.into());
        }
    };

    let accepted = filter_entries(&entries, &config.selection);
    info!(accepted = accepted.len(), "Selected entries for analysis");
    println!("Filtered Files:");
    println!(
        "{}",
        accepted
            .iter()
            .map(|e| e.path.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    );

    let scratch = ScratchArea::acquire()?;
    if let Err(e) = extract_entries(&bytes, &accepted, scratch.path()) {
        error!(error = %e, "Extraction failed");
        return Err(e.into());
    }

    let codebase_text = assemble(&accepted, scratch.path(), &config.assembly);
    scratch.release();

    let report = analyzer
        .analyze(claims, &codebase_text)
        .await
        .map_err(anyhow::Error::from_boxed)?;
    info!(records = report.len(), "Analysis complete");
    Ok(report)
}
