// Company data: model, reserved records, store, analysis and resolution.
// All LLM calls go through llm_client via the analyzer.

pub mod analyzer;
pub mod formatting;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod reserved;
pub mod resolver;
pub mod store;

#[cfg(test)]
pub mod testing;
