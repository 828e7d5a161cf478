//! Resume analyzer: normalize → fingerprint → cache → model.
//!
//! Only successful, well-formed model replies are cached. Failures come back
//! as [`AnalysisOutcome::Degraded`] so the next identical request tries the
//! model again.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::analysis::cache::AnalysisCache;
use crate::analysis::fingerprint::Fingerprint;
use crate::analysis::models::{AnalysisOutcome, AnalysisResult};
use crate::analysis::normalize::normalize_text;
use crate::analysis::prompts::build_analysis_prompt;
use crate::llm_client::{parse_json_reply, GenerativeModel, LlmError};

pub struct ResumeAnalyzer {
    model: Arc<dyn GenerativeModel>,
    cache: AnalysisCache,
}

impl ResumeAnalyzer {
    pub fn new(model: Arc<dyn GenerativeModel>, cache: AnalysisCache) -> Self {
        Self { model, cache }
    }

    #[cfg(test)]
    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }

    pub async fn analyze(&self, raw_text: &str) -> AnalysisOutcome {
        let normalized = normalize_text(raw_text);
        let fingerprint = Fingerprint::of(&normalized);

        if let Some(cached) = self.cache.get(&fingerprint) {
            info!(fingerprint = %fingerprint.short(), "Returning cached analysis");
            return AnalysisOutcome::Success(cached);
        }

        info!(
            fingerprint = %fingerprint.short(),
            chars = normalized.len(),
            "Cache miss, requesting model analysis"
        );

        match self.request_analysis(&normalized).await {
            Ok(result) => {
                self.cache.put(fingerprint, result.clone());
                debug!(cached_entries = self.cache.len(), "Stored analysis");
                AnalysisOutcome::Success(result)
            }
            Err(e) => {
                warn!(fingerprint = %fingerprint.short(), "Model analysis failed: {e}");
                AnalysisOutcome::Degraded {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn request_analysis(&self, normalized: &str) -> Result<AnalysisResult, LlmError> {
        let prompt = build_analysis_prompt(normalized);
        let reply = self.model.generate(&prompt).await?;
        let result: AnalysisResult = parse_json_reply(&reply)?;

        if let Some((field, score)) = result.out_of_range_score() {
            return Err(LlmError::InvalidResponse(format!(
                "score {score} for '{field}' is outside 0-100"
            )));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedModel;

    const FENCED_REPLY: &str = "```json\n{\"overall_score\": 80, \"sections\": [{\"name\": \"Skills\", \"score\": 85, \"recommendations\": [\"Add Rust projects\"]}]}\n```";

    fn analyzer_with(model: Arc<ScriptedModel>) -> ResumeAnalyzer {
        ResumeAnalyzer::new(model, AnalysisCache::new())
    }

    fn expected_result() -> AnalysisResult {
        serde_json::from_str(
            r#"{"overall_score": 80, "sections": [{"name": "Skills", "score": 85, "recommendations": ["Add Rust projects"]}]}"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_miss_then_hit_calls_model_once() {
        let model = Arc::new(ScriptedModel::replying(FENCED_REPLY));
        let analyzer = analyzer_with(model.clone());

        let first = analyzer.analyze("John Doe\nEngineer").await;
        assert_eq!(model.calls(), 1);
        assert_eq!(first, AnalysisOutcome::Success(expected_result()));

        let second = analyzer.analyze("John Doe\nEngineer").await;
        assert_eq!(model.calls(), 1);
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn test_whitespace_variants_share_cache_entry() {
        let model = Arc::new(ScriptedModel::replying(FENCED_REPLY));
        let analyzer = analyzer_with(model.clone());

        let first = analyzer.analyze("John Doe\nEngineer").await;
        let second = analyzer.analyze("\n   John Doe  \r\n\r\n\tEngineer\n\n").await;

        assert_eq!(model.calls(), 1);
        assert_eq!(first, second);
        assert_eq!(analyzer.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_prompt_contains_normalized_text() {
        let model = Arc::new(ScriptedModel::replying(FENCED_REPLY));
        let analyzer = analyzer_with(model.clone());

        analyzer.analyze("  John Doe \n\n Engineer ").await;

        let prompt = model.last_prompt().unwrap();
        assert!(prompt.contains("John Doe\nEngineer"));
    }

    #[tokio::test]
    async fn test_model_failure_is_degraded_and_not_cached() {
        let model = Arc::new(ScriptedModel::failing("quota exhausted"));
        let analyzer = analyzer_with(model.clone());

        let outcome = analyzer.analyze("John Doe\nEngineer").await;
        let AnalysisOutcome::Degraded { reason } = &outcome else {
            panic!("expected degraded outcome, got {outcome:?}");
        };
        assert!(reason.contains("quota exhausted"));
        assert_eq!(analyzer.cache().len(), 0);

        let payload = outcome.into_result();
        assert_eq!(payload.overall_score, 50);
        assert_eq!(payload.sections[0].name, "Error");
        assert_eq!(payload.sections[0].recommendations[0], "Analysis failed.");

        // Recovery: the next identical request reaches the model again.
        model.reply_with(FENCED_REPLY);
        let retry = analyzer.analyze("John Doe\nEngineer").await;
        assert_eq!(model.calls(), 2);
        assert_eq!(retry, AnalysisOutcome::Success(expected_result()));
        assert_eq!(analyzer.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_reply_is_degraded_and_retried() {
        let model = Arc::new(ScriptedModel::replying("Sorry, I cannot help with that."));
        let analyzer = analyzer_with(model.clone());

        assert!(analyzer.analyze("John Doe").await.is_degraded());
        assert!(analyzer.analyze("John Doe").await.is_degraded());
        assert_eq!(model.calls(), 2);
        assert_eq!(analyzer.cache().len(), 0);
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_degraded() {
        let model = Arc::new(ScriptedModel::replying(
            r#"{"overall_score": 180, "sections": []}"#,
        ));
        let analyzer = analyzer_with(model.clone());

        let outcome = analyzer.analyze("John Doe").await;
        assert!(outcome.is_degraded());
        assert_eq!(analyzer.cache().len(), 0);
    }

    #[tokio::test]
    async fn test_distinct_resumes_each_call_model() {
        let model = Arc::new(ScriptedModel::replying(FENCED_REPLY));
        let analyzer = analyzer_with(model.clone());

        analyzer.analyze("John Doe").await;
        analyzer.analyze("Jane Roe").await;

        assert_eq!(model.calls(), 2);
        assert_eq!(analyzer.cache().len(), 2);
    }
}
