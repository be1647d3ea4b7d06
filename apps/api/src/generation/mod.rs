// Caption generation path: prompt construction, the generator call, output
// normalization and the append-only generation log.
// All model calls go through llm_client::TextGenerator.

pub mod generation_log;
pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
