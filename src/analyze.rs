use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;

use crate::claims::Claim;

/// Verdict for a single claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerificationStatus {
    Verified,
    Refuted,
    Ambiguous,
}

/// One record of the verification report, in claim order.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimReport {
    pub claim: String,
    pub status: VerificationStatus,
    pub evidence: String,
    pub explanation: String,
}

pub type AnalyzeError = Box<dyn std::error::Error + Send + Sync>;

/// Downstream analysis collaborator: judges claims against the assembled
/// codebase text, one report record per claim, in claim order.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(
        &self,
        claims: &[Claim],
        codebase_text: &str,
    ) -> Result<Vec<ClaimReport>, AnalyzeError>;
}

/// Stand-in analyzer that marks every claim ambiguous.
// TODO: replace with a client for a real reasoning service once one is
// chosen and its API contract is settled.
pub struct PlaceholderAnalyzer;

#[async_trait]
impl Analyzer for PlaceholderAnalyzer {
    async fn analyze(
        &self,
        claims: &[Claim],
        _codebase_text: &str,
    ) -> Result<Vec<ClaimReport>, AnalyzeError> {
        Ok(claims
            .iter()
            .map(|claim| ClaimReport {
                claim: claim.text.clone(),
                status: VerificationStatus::Ambiguous,
                evidence: format!("No evidence gathered for: {}", claim.text),
                explanation:
                    "Analysis backend is not configured; every claim is reported as ambiguous."
                        .to_string(),
            })
            .collect())
    }
}
