use serde::{Deserialize, Serialize};

pub const MAX_SCORE: u32 = 100;
const DEGRADED_SCORE: u32 = 50;

/// One scored area of the resume, as returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub score: u32, // 0 – 100
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// The evaluation returned to clients. Section order is preserved from the
/// model reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u32, // 0 – 100
    pub sections: Vec<Section>,
}

impl AnalysisResult {
    /// The fixed payload served when the model call or its parsing fails.
    pub fn degraded(reason: &str) -> Self {
        Self {
            overall_score: DEGRADED_SCORE,
            sections: vec![Section {
                name: "Error".to_string(),
                score: DEGRADED_SCORE,
                recommendations: vec!["Analysis failed.".to_string(), reason.to_string()],
            }],
        }
    }

    /// Returns the first score that falls outside 0 – 100, if any.
    pub fn out_of_range_score(&self) -> Option<(&str, u32)> {
        if self.overall_score > MAX_SCORE {
            return Some(("overall_score", self.overall_score));
        }
        self.sections
            .iter()
            .find(|s| s.score > MAX_SCORE)
            .map(|s| (s.name.as_str(), s.score))
    }
}

/// Result of one analysis request.
///
/// `Degraded` still renders as a well-formed [`AnalysisResult`], so the HTTP
/// layer can answer 200 either way while callers in-process can tell the two
/// apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Success(AnalysisResult),
    Degraded { reason: String },
}

impl AnalysisOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, AnalysisOutcome::Degraded { .. })
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            AnalysisOutcome::Success(result) => result,
            AnalysisOutcome::Degraded { reason } => AnalysisResult::degraded(&reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_payload_shape() {
        let value = serde_json::to_value(AnalysisResult::degraded("quota exceeded")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "overall_score": 50,
                "sections": [{
                    "name": "Error",
                    "score": 50,
                    "recommendations": ["Analysis failed.", "quota exceeded"]
                }]
            })
        );
    }

    #[test]
    fn test_deserialize_keeps_section_order() {
        let json = r#"{
            "overall_score": 72,
            "sections": [
                {"name": "Skills", "score": 80, "recommendations": ["Group by domain"]},
                {"name": "Education", "score": 65, "recommendations": []}
            ]
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        let names: Vec<_> = result.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Skills", "Education"]);
        assert!(result.out_of_range_score().is_none());
    }

    #[test]
    fn test_negative_score_is_rejected_by_serde() {
        let json = r#"{"overall_score": -1, "sections": []}"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_out_of_range_section_score_detected() {
        let result = AnalysisResult {
            overall_score: 90,
            sections: vec![Section {
                name: "Skills".to_string(),
                score: 140,
                recommendations: vec![],
            }],
        };
        assert_eq!(result.out_of_range_score(), Some(("Skills", 140)));
    }

    #[test]
    fn test_outcome_into_result() {
        let outcome = AnalysisOutcome::Degraded {
            reason: "boom".to_string(),
        };
        assert!(outcome.is_degraded());
        assert_eq!(outcome.into_result(), AnalysisResult::degraded("boom"));
    }
}
