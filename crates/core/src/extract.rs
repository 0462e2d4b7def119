use crate::intent::contains_any;
use crate::keywords::{CATEGORY_KEYWORDS, DAY_PHRASES};
use crate::models::{Category, ExtractedCriteria};

/// First day bucket (ascending) with a phrase inside `text`.
pub fn extract_days(text: &str) -> Option<u8> {
    DAY_PHRASES
        .iter()
        .find(|(_, phrases)| contains_any(text, phrases))
        .map(|(days, _)| *days)
}

/// Categories whose keywords occur in `text`, in declaration order.
pub fn extract_categories(text: &str) -> Vec<Category> {
    let mut found = Vec::new();

    for (category, keywords) in CATEGORY_KEYWORDS {
        for keyword in keywords.iter() {
            if text.contains(keyword) {
                if !found.contains(category) {
                    found.push(*category);
                }
                break;
            }
        }
    }

    found
}

pub fn extract_criteria(text: &str) -> ExtractedCriteria {
    ExtractedCriteria {
        days: extract_days(text),
        categories: extract_categories(text),
    }
}
