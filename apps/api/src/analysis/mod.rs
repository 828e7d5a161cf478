// Resume analysis: document extraction, normalization, fingerprinting,
// the result cache and the model-backed analyzer.
// All model calls go through llm_client.

pub mod analyzer;
pub mod cache;
pub mod extract;
pub mod fingerprint;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod prompts;
