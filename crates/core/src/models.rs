use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Architecture,
    Museum,
    Nature,
    Monastery,
    Culture,
    Archaeology,
    Settlement,
    Urban,
    Monument,
    Industrial,
    Institution,
}

impl Category {
    /// Declaration order. Keyword scanning and per-category quotas follow it.
    pub const ALL: [Category; 11] = [
        Self::Architecture,
        Self::Museum,
        Self::Nature,
        Self::Monastery,
        Self::Culture,
        Self::Archaeology,
        Self::Settlement,
        Self::Urban,
        Self::Monument,
        Self::Industrial,
        Self::Institution,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "architecture" => Some(Self::Architecture),
            "museum" => Some(Self::Museum),
            "nature" => Some(Self::Nature),
            "monastery" => Some(Self::Monastery),
            "culture" => Some(Self::Culture),
            "archaeology" => Some(Self::Archaeology),
            "settlement" => Some(Self::Settlement),
            "urban" => Some(Self::Urban),
            "monument" => Some(Self::Monument),
            "industrial" => Some(Self::Industrial),
            "institution" => Some(Self::Institution),
            _ => None,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::Museum => "museum",
            Self::Nature => "nature",
            Self::Monastery => "monastery",
            Self::Culture => "culture",
            Self::Archaeology => "archaeology",
            Self::Settlement => "settlement",
            Self::Urban => "urban",
            Self::Monument => "monument",
            Self::Industrial => "industrial",
            Self::Institution => "institution",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Architecture => "Архитектура",
            Self::Museum => "Музеи",
            Self::Nature => "Природа",
            Self::Monastery => "Монастыри",
            Self::Culture => "Культура",
            Self::Archaeology => "Археология",
            Self::Settlement => "Поселения",
            Self::Urban => "Городское",
            Self::Monument => "Памятники",
            Self::Industrial => "Промышленность",
            Self::Institution => "Учреждения",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Architecture | Self::Museum => "🏛️",
            Self::Nature => "🌲",
            Self::Monastery => "⛪",
            Self::Culture => "🎭",
            Self::Archaeology => "🔍",
            Self::Settlement => "🏘️",
            Self::Urban => "🏙️",
            Self::Monument => "🗿",
            Self::Industrial => "🏭",
            Self::Institution => "📚",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Farewell,
    Thanks,
    ItineraryRequest,
}

/// What an itinerary request asked for. `categories` empty means "everything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedCriteria {
    pub days: Option<u8>,
    pub categories: Vec<Category>,
}

impl ExtractedCriteria {
    pub fn effective_categories(&self) -> Vec<Category> {
        if self.categories.is_empty() {
            Category::ALL.to_vec()
        } else {
            self.categories.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryDay<'a> {
    pub day: u8,
    pub points: Vec<&'a PointOfInterest>,
}

/// Points borrowed from the catalog snapshot the query ran against.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    pub points: Vec<&'a PointOfInterest>,
    pub days: Option<Vec<ItineraryDay<'a>>>,
}

impl Recommendation<'_> {
    pub fn names(&self) -> Vec<String> {
        self.points.iter().map(|point| point.name.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome<'a> {
    NoResults,
    Selected(Recommendation<'a>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyEntry {
    pub position: usize,
    pub name: String,
    pub category: Category,
    pub category_label: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplySection {
    pub day: Option<u8>,
    pub heading: Option<String>,
    pub entries: Vec<ReplyEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryReply {
    pub intro: String,
    pub sections: Vec<ReplySection>,
    pub footer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedAction {
    pub action_type: String,
    pub label: String,
    pub payload: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    pub intent: Intent,
    pub reply_text: String,
    pub criteria: Option<ExtractedCriteria>,
    pub itinerary: Option<ItineraryReply>,
    pub suggested_actions: Vec<SuggestedAction>,
}

impl AssistantReply {
    /// Names carried by a suggested action, e.g. `"show_on_map"`.
    pub fn action_names(&self, action_type: &str) -> Vec<String> {
        self.suggested_actions
            .iter()
            .find(|action| action.action_type == action_type)
            .and_then(|action| action.payload.get("names"))
            .and_then(|names| names.as_array())
            .map(|names| {
                names
                    .iter()
                    .filter_map(|name| name.as_str().map(ToString::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_for_every_category() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_tag()), Some(category));
        }
        assert_eq!(Category::parse("beach"), None);
    }

    #[test]
    fn empty_criteria_means_every_category() {
        let criteria = ExtractedCriteria::default();
        assert_eq!(criteria.effective_categories().len(), Category::ALL.len());
    }
}
