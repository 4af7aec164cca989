// The prediction request pipeline.
// Implements: input validation, prompt construction, strict reply parsing,
// the request lifecycle state machine, and best-effort submission logging.
// All inference calls go through llm_client — no direct Gemini calls here.

pub mod builder;
pub mod handlers;
pub mod lifecycle;
pub mod parser;
pub mod prompts;
pub mod recorder;
pub mod validation;
