pub mod compose;
pub mod config;
pub mod error;
pub mod extract;
pub mod intent;
pub mod keywords;
pub mod models;
pub mod phrases;
pub mod planner;
pub mod wording;

pub use compose::{
    compose_canned_reply, compose_itinerary, compose_itinerary_reply, truncate_description,
    ADD_TO_FAVORITES, SHOW_ON_MAP,
};
pub use config::AssistantConfig;
pub use error::GuideError;
pub use extract::{extract_categories, extract_criteria, extract_days};
pub use intent::{classify_intent, normalize_utterance};
pub use models::*;
pub use phrases::{canned_reply, ChoiceSource, NO_RESULTS_REPLY};
pub use planner::{build_recommendation, distribute_by_category, partition_days};
pub use wording::{day_word, review_word};
