use guide_core::{Category, GuideError, PointOfInterest};
use serde::{Deserialize, Serialize};

pub const CARDS_PER_PAGE: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Accepts "all", an empty value, or a category tag.
    pub fn parse(value: Option<&str>) -> Result<Self, GuideError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::All),
            Some(value) if value.eq_ignore_ascii_case("all") => Ok(Self::All),
            Some(value) => Category::parse(value)
                .map(Self::Only)
                .ok_or_else(|| GuideError::UnknownCategory(value.to_string())),
        }
    }

    pub fn matches(self, point: &PointOfInterest) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => point.category == category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub has_more: bool,
    pub items: Vec<PointOfInterest>,
}

/// Cards shown after `page` presses of "load more" (0-based).
pub fn browse_points(points: &[PointOfInterest], filter: CategoryFilter, page: usize) -> CatalogPage {
    let matching = points
        .iter()
        .filter(|point| filter.matches(point))
        .collect::<Vec<_>>();
    let total = matching.len();
    let start = page.saturating_mul(CARDS_PER_PAGE).min(total);
    let end = (start + CARDS_PER_PAGE).min(total);

    CatalogPage {
        page,
        page_size: CARDS_PER_PAGE,
        total,
        has_more: end < total,
        items: matching[start..end].iter().map(|point| (*point).clone()).collect(),
    }
}
