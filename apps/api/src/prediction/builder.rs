//! Prompt construction: maps a validated input to the instruction text plus
//! the structural output contract sent alongside it.

use serde_json::{json, Value};

use crate::models::input::RequestInput;
use crate::prediction::prompts::{
    GUARANTEED_INCLUSION_CLAUSE, GUARANTEED_INCLUSION_THRESHOLD, PREDICTION_PROMPT_TEMPLATE,
};

/// An instruction plus the output contract the inference service must honor.
/// Immutable once built; the same input always yields the same prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionPrompt {
    pub instruction: String,
    pub response_schema: Value,
}

/// Builds the prediction prompt for a validated input. Pure, no I/O.
pub fn build_prompt(input: &RequestInput) -> PredictionPrompt {
    let mut instruction = PREDICTION_PROMPT_TEMPLATE
        .replace("{score}", &input.score.to_string())
        .replace("{category}", input.category.as_str())
        .replace("{state}", input.state.as_str());

    if let Some(clause) = guaranteed_inclusion_clause(input.score) {
        instruction.push_str(clause);
    }

    PredictionPrompt {
        instruction,
        response_schema: response_schema(),
    }
}

/// The guaranteed-inclusion policy: above the fixed score threshold, one
/// named institution is always requested in the results, independent of the
/// state/cutoff filter. Fixed business rule, not user-configurable.
pub fn guaranteed_inclusion_clause(score: u16) -> Option<&'static str> {
    (score > GUARANTEED_INCLUSION_THRESHOLD).then_some(GUARANTEED_INCLUSION_CLAUSE)
}

/// The structural output contract: an array of college objects with all six
/// string fields required on the wire. Passed to the inference service as a
/// response schema, not as free-text instruction.
fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "city": { "type": "STRING" },
                "cutoffRange": { "type": "STRING" },
                "description": { "type": "STRING" },
                "logoUrl": { "type": "STRING" },
                "website": { "type": "STRING" },
            },
            "required": ["name", "city", "cutoffRange", "description", "logoUrl", "website"],
        },
    })
}
