use serde_json::json;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::AssistantConfig;
use crate::models::{
    AssistantReply, Category, ExtractedCriteria, Intent, ItineraryReply, PointOfInterest,
    Recommendation, ReplyEntry, ReplySection, SelectionOutcome, SuggestedAction,
};
use crate::phrases::{ACTIONS_HINT, NO_RESULTS_REPLY};
use crate::wording::day_word;

pub const SHOW_ON_MAP: &str = "show_on_map";
pub const ADD_TO_FAVORITES: &str = "add_to_favorites";

const ELLIPSIS: &str = "...";

/// Cuts `text` to `limit` characters (grapheme clusters) and appends "..."
/// only when something was cut.
pub fn truncate_description(text: &str, limit: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let head = graphemes.by_ref().take(limit).collect::<String>();
    if graphemes.next().is_some() {
        head + ELLIPSIS
    } else {
        head
    }
}

pub fn compose_itinerary(
    recommendation: &Recommendation<'_>,
    days: Option<u8>,
    categories: &[Category],
    config: &AssistantConfig,
) -> ItineraryReply {
    let mut intro = match days {
        Some(days) => format!(
            "Отлично! Я подготовил маршрут на {} {}. ",
            days,
            day_word(days)
        ),
        None => "Вот подборка интересных объектов для вас. ".to_string(),
    };

    if !categories.is_empty() && categories.len() < Category::ALL.len() {
        let names = categories
            .iter()
            .map(|category| category.display_name())
            .collect::<Vec<_>>()
            .join(", ");
        intro.push_str(&format!(
            "Учитывая ваши интересы ({names}), рекомендую посетить:"
        ));
    } else {
        intro.push_str("Рекомендую посетить:");
    }

    let sections = match &recommendation.days {
        Some(itinerary_days) => itinerary_days
            .iter()
            .filter(|day| !day.points.is_empty())
            .map(|day| ReplySection {
                day: Some(day.day),
                heading: Some(format!("День {}:", day.day)),
                entries: entries(&day.points, config),
            })
            .collect(),
        None => vec![ReplySection {
            day: None,
            heading: None,
            entries: entries(&recommendation.points, config),
        }],
    };

    ItineraryReply {
        intro,
        sections,
        footer: ACTIONS_HINT.to_string(),
    }
}

fn entries(points: &[&PointOfInterest], config: &AssistantConfig) -> Vec<ReplyEntry> {
    points
        .iter()
        .enumerate()
        .map(|(idx, point)| ReplyEntry {
            position: idx + 1,
            name: point.name.clone(),
            category: point.category,
            category_label: point.category.display_name().to_string(),
            description: (!point.description.is_empty())
                .then(|| truncate_description(&point.description, config.description_limit)),
        })
        .collect()
}

impl ItineraryReply {
    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n\n", self.intro);

        for section in &self.sections {
            if let Some(heading) = &section.heading {
                out.push_str(heading);
                out.push('\n');
            }
            for entry in &section.entries {
                out.push_str(&format!(
                    "{}. {} ({})\n",
                    entry.position, entry.name, entry.category_label
                ));
                if let Some(description) = &entry.description {
                    out.push_str(&format!("   {description}\n"));
                }
            }
            if section.day.is_some() {
                out.push('\n');
            }
        }

        out.push('\n');
        out.push_str(&self.footer);
        out
    }
}

pub fn compose_canned_reply(intent: Intent, text: &str) -> AssistantReply {
    AssistantReply {
        intent,
        reply_text: text.to_string(),
        criteria: None,
        itinerary: None,
        suggested_actions: Vec::new(),
    }
}

pub fn compose_itinerary_reply(
    criteria: ExtractedCriteria,
    outcome: &SelectionOutcome<'_>,
    config: &AssistantConfig,
) -> AssistantReply {
    let recommendation = match outcome {
        SelectionOutcome::NoResults => {
            return AssistantReply {
                intent: Intent::ItineraryRequest,
                reply_text: NO_RESULTS_REPLY.to_string(),
                criteria: Some(criteria),
                itinerary: None,
                suggested_actions: Vec::new(),
            };
        }
        SelectionOutcome::Selected(recommendation) => recommendation,
    };

    let itinerary = compose_itinerary(recommendation, criteria.days, &criteria.categories, config);
    let names = recommendation.names();

    AssistantReply {
        intent: Intent::ItineraryRequest,
        reply_text: itinerary.render_text(),
        criteria: Some(criteria),
        itinerary: Some(itinerary),
        suggested_actions: vec![
            action(SHOW_ON_MAP, "Показать на карте", &names),
            action(ADD_TO_FAVORITES, "Добавить в избранное", &names),
        ],
    }
}

fn action(action_type: &str, label: &str, names: &[String]) -> SuggestedAction {
    SuggestedAction {
        action_type: action_type.to_string(),
        label: label.to_string(),
        payload: json!({ "names": names }),
    }
}
