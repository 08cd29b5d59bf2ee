// Resume analysis: text extraction, LLM-based structured extraction,
// and search-query expansion. All LLM calls go through llm_client.

pub mod analyzer;
pub mod extractor;
pub mod prompts;
pub mod queries;
