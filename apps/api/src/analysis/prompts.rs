// Resume analysis prompt template.
// The resume text is substituted for {resume_text}; everything else is fixed
// so the same resume always produces the same prompt.

pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert ATS resume analyzer.
You must return STRICT deterministic scoring based ONLY on the resume text.
No randomness.

Resume:
{resume_text}

Return ONLY valid JSON with exactly this structure:
{
    "overall_score": <integer 0-100>,
    "sections": [
        {"name": "Contact Information", "score": <integer 0-100>, "recommendations": ["..."]},
        {"name": "Professional Summary", "score": <integer 0-100>, "recommendations": ["..."]},
        {"name": "Work Experience", "score": <integer 0-100>, "recommendations": ["..."]},
        {"name": "Skills", "score": <integer 0-100>, "recommendations": ["..."]},
        {"name": "Education", "score": <integer 0-100>, "recommendations": ["..."]},
        {"name": "Formatting & ATS Compatibility", "score": <integer 0-100>, "recommendations": ["..."]}
    ]
}"#;

pub fn build_analysis_prompt(normalized_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", normalized_text)
}
