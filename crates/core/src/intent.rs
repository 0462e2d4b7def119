use crate::keywords::{FAREWELL_PHRASES, GREETING_PHRASES, THANKS_PHRASES};
use crate::models::Intent;

/// Lower-cases and trims an utterance. `None` when nothing is left.
pub fn normalize_utterance(input: &str) -> Option<String> {
    let normalized = input.to_lowercase().trim().to_string();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Expects an already normalized utterance. Matching is plain substring
/// containment, so "hi" also fires inside "this" and "пока" inside "покажи".
pub fn classify_intent(text: &str) -> Intent {
    if contains_any(text, THANKS_PHRASES) {
        return Intent::Thanks;
    }

    if contains_any(text, GREETING_PHRASES) {
        return Intent::Greeting;
    }

    if contains_any(text, FAREWELL_PHRASES) {
        return Intent::Farewell;
    }

    Intent::ItineraryRequest
}

pub(crate) fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
