use std::ptr;

use tracing::debug;

use crate::config::AssistantConfig;
use crate::models::{
    Category, ExtractedCriteria, ItineraryDay, PointOfInterest, Recommendation, SelectionOutcome,
};

pub fn build_recommendation<'a>(
    points: &'a [PointOfInterest],
    criteria: &ExtractedCriteria,
    config: &AssistantConfig,
) -> SelectionOutcome<'a> {
    let effective = criteria.effective_categories();
    let filtered = points
        .iter()
        .filter(|point| effective.contains(&point.category))
        .collect::<Vec<_>>();

    if filtered.is_empty() {
        return SelectionOutcome::NoResults;
    }

    let capacity = config.capacity_for(criteria.days);
    let matched = filtered.len();
    let selected = if matched > capacity && criteria.categories.len() > 1 {
        distribute_by_category(filtered, &criteria.categories, capacity)
    } else {
        let mut filtered = filtered;
        filtered.truncate(capacity);
        filtered
    };

    debug!(
        matched,
        capacity,
        selected = selected.len(),
        days = ?criteria.days,
        "selection built"
    );

    let days = match criteria.days {
        Some(days) if days >= 2 => Some(partition_days(&selected, days)),
        _ => None,
    };

    SelectionOutcome::Selected(Recommendation {
        points: selected,
        days,
    })
}

/// Equal quota per requested category, then backfill in catalog order.
pub fn distribute_by_category<'a>(
    filtered: Vec<&'a PointOfInterest>,
    categories: &[Category],
    capacity: usize,
) -> Vec<&'a PointOfInterest> {
    if categories.is_empty() {
        let mut filtered = filtered;
        filtered.truncate(capacity);
        return filtered;
    }

    let per_category = capacity / categories.len();
    let mut selected = Vec::with_capacity(capacity.min(filtered.len()));

    for category in categories {
        selected.extend(
            filtered
                .iter()
                .filter(|point| point.category == *category)
                .take(per_category)
                .copied(),
        );
    }

    if selected.len() < capacity {
        let remaining = capacity - selected.len();
        let backfill = filtered
            .iter()
            .filter(|point| !selected.iter().any(|chosen| ptr::eq(*chosen, **point)))
            .take(remaining)
            .copied()
            .collect::<Vec<_>>();
        selected.extend(backfill);
    }

    selected
}

/// Contiguous chunks of `ceil(len / days)`; trailing days may be short or empty.
pub fn partition_days<'a>(points: &[&'a PointOfInterest], days: u8) -> Vec<ItineraryDay<'a>> {
    let day_count = usize::from(days.max(1));
    let per_day = points.len().div_ceil(day_count);

    (1..=days.max(1))
        .map(|day| {
            let index = usize::from(day) - 1;
            let start = (index * per_day).min(points.len());
            let end = ((index + 1) * per_day).min(points.len());
            ItineraryDay {
                day,
                points: points[start..end].to_vec(),
            }
        })
        .collect()
}
