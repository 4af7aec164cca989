#![allow(dead_code)]

// Prompt constants for the prediction pipeline. The wording is load-bearing:
// the result surface and the output contract both assume the NO_LOGO sentinel
// and the empty-string website convention stated here.

/// Base instruction template. Replace `{score}`, `{category}`, `{state}`
/// before sending.
pub const PREDICTION_PROMPT_TEMPLATE: &str = "My NEET score is {score}, my category is {category}, \
    and my state is {state}. Find BAMS colleges in that state with an expected cutoff lower than \
    my score for my category. For each college, provide its name, city, expected cutoff score \
    range, a 1-2 sentence description (highlighting unique features, location, or affiliations), \
    a publicly accessible URL for its logo, and the official college website URL. If a logo URL \
    is not available, return the string 'NO_LOGO'. If a website is not available, return an empty \
    string for the website field.";

/// Institution that must appear in the results above the inclusion threshold.
pub const GUARANTEED_INSTITUTION: &str =
    "Bapu Ayurvedic Medical College evam Hospital Kopaganj Mau";

/// Scores strictly above this always include [`GUARANTEED_INSTITUTION`].
pub const GUARANTEED_INCLUSION_THRESHOLD: u16 = 200;

/// Clause appended when the guaranteed-inclusion policy applies. Leading
/// space matters: it is concatenated directly onto the base instruction.
pub const GUARANTEED_INCLUSION_CLAUSE: &str = " Additionally, please ensure 'Bapu Ayurvedic \
    Medical College evam Hospital Kopaganj Mau' is included in the results list. Provide all its \
    required details (city, cutoffRange, description, logoUrl, website) as a special \
    recommendation, regardless of its state or exact cutoff.";
