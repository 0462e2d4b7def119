use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use guide_catalog::{
    base_rating, browse_points, estimate_travel_time, extended_description, find_point,
    resolve_names, CatalogPage, CatalogProvider, CategoryFilter, TravelTime,
};
use guide_core::{
    build_recommendation, canned_reply, classify_intent, compose_canned_reply,
    compose_itinerary_reply, extract_criteria, normalize_utterance, AssistantConfig,
    AssistantReply, Coordinates, GuideError, Intent, PointOfInterest, SelectionOutcome,
};
use guide_observability::AppMetrics;
use guide_storage::{FavoritesRepository, RatingRepository, RatingSummary};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub points: Vec<PointOfInterest>,
    pub focus: Option<Coordinates>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoritesUpdate {
    pub resolved: usize,
    pub newly_added: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointDetails {
    pub point: PointOfInterest,
    pub extended_description: String,
    pub category_label: &'static str,
    pub icon: &'static str,
    pub travel_time: TravelTime,
    pub travel_time_label: &'static str,
    pub base_rating: &'static str,
    pub rating: Option<RatingSummary>,
    pub rating_label: String,
    pub is_favorite: bool,
}

#[derive(Clone)]
pub struct ItineraryAssistant<S>
where
    S: FavoritesRepository + RatingRepository,
{
    catalog: Arc<dyn CatalogProvider>,
    store: Arc<S>,
    chooser: Arc<Mutex<StdRng>>,
    config: AssistantConfig,
    metrics: Arc<AppMetrics>,
}

impl<S> ItineraryAssistant<S>
where
    S: FavoritesRepository + RatingRepository,
{
    /// `seed` pins canned-reply choice; `None` seeds from OS entropy.
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        store: Arc<S>,
        config: AssistantConfig,
        metrics: Arc<AppMetrics>,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            catalog,
            store,
            chooser: Arc::new(Mutex::new(rng)),
            config,
            metrics,
        }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn catalog_size(&self) -> usize {
        self.catalog.all_points().len()
    }

    #[instrument(skip(self, text))]
    pub fn handle_message(&self, text: &str) -> Result<AssistantReply, GuideError> {
        let started = Instant::now();
        let normalized = normalize_utterance(text).ok_or(GuideError::EmptyUtterance)?;
        self.metrics.inc_query();

        let intent = classify_intent(&normalized);
        let reply = match intent {
            Intent::ItineraryRequest => self.plan_itinerary(&normalized),
            _ => {
                let picked = {
                    let mut chooser = self.chooser.lock();
                    canned_reply(intent, &mut *chooser)
                };
                self.metrics.inc_canned_reply();
                compose_canned_reply(intent, picked.unwrap_or_default())
            }
        };

        self.metrics.observe_latency(started.elapsed());
        info!(
            intent = ?reply.intent,
            recommended = reply.action_names(guide_core::SHOW_ON_MAP).len(),
            "message handled"
        );

        Ok(reply)
    }

    fn plan_itinerary(&self, normalized: &str) -> AssistantReply {
        let snapshot = self.catalog.all_points();
        let criteria = extract_criteria(normalized);
        debug!(days = ?criteria.days, categories = ?criteria.categories, "criteria extracted");

        let outcome = build_recommendation(&snapshot, &criteria, &self.config);
        match &outcome {
            SelectionOutcome::NoResults => self.metrics.inc_no_results(),
            SelectionOutcome::Selected(recommendation) => {
                self.metrics.record_itinerary(recommendation.points.len())
            }
        }

        compose_itinerary_reply(criteria, &outcome, &self.config)
    }

    pub fn show_on_map(&self, names: &[String]) -> MapView {
        let snapshot = self.catalog.all_points();
        let points = resolve_names(&snapshot, names)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();

        let message = if points.is_empty() {
            "Не удалось найти объекты на карте.".to_string()
        } else {
            format!("Показал {} объектов на карте!", points.len())
        };

        MapView {
            focus: points.first().map(|point| point.coordinates),
            points,
            message,
        }
    }

    pub fn add_to_favorites(&self, names: &[String]) -> Result<FavoritesUpdate> {
        let snapshot = self.catalog.all_points();
        let resolved = resolve_names(&snapshot, names);

        let mut newly_added = 0;
        for point in &resolved {
            if self.store.add_favorite(&point.name)? {
                newly_added += 1;
            }
        }

        info!(resolved = resolved.len(), newly_added, "favorites updated");
        Ok(FavoritesUpdate {
            resolved: resolved.len(),
            newly_added,
            message: format!("Добавил {} объектов в избранное! ❤️", resolved.len()),
        })
    }

    pub fn remove_favorite(&self, name: &str) -> Result<bool> {
        self.store.remove_favorite(name)
    }

    /// Favourite points in catalog order; names no longer in the catalog are skipped.
    pub fn favorites(&self) -> Result<Vec<PointOfInterest>> {
        let names = self.store.list_favorites()?;
        let snapshot = self.catalog.all_points();
        let points = resolve_names(&snapshot, &names)
            .into_iter()
            .cloned()
            .collect();
        Ok(points)
    }

    pub fn browse(&self, filter: CategoryFilter, page: usize) -> CatalogPage {
        browse_points(&self.catalog.all_points(), filter, page)
    }

    pub fn point_details(&self, name: &str) -> Result<PointDetails> {
        let snapshot = self.catalog.all_points();
        let point = find_point(&snapshot, name)
            .cloned()
            .ok_or_else(|| GuideError::PointNotFound(name.to_string()))?;

        let rating = self.store.rating_summary(&point.name)?;
        let rating_label = match rating.as_ref().and_then(|summary| {
            summary
                .average_label()
                .map(|average| format!("{average} {}", summary.count_label()))
        }) {
            Some(label) => label,
            None => "Пока нет оценок (0 отзывов)".to_string(),
        };
        let travel_time = estimate_travel_time(point.coordinates);

        Ok(PointDetails {
            extended_description: extended_description(&point),
            base_rating: base_rating(&point.name),
            category_label: point.category.display_name(),
            icon: point.category.icon(),
            travel_time,
            travel_time_label: travel_time.label(),
            is_favorite: self.store.is_favorite(&point.name)?,
            rating,
            rating_label,
            point,
        })
    }

    pub fn rate(&self, name: &str, stars: u8) -> Result<RatingSummary> {
        let snapshot = self.catalog.all_points();
        if find_point(&snapshot, name).is_none() {
            return Err(GuideError::PointNotFound(name.to_string()).into());
        }

        let summary = self.store.add_rating(name, stars)?;
        info!(name, stars, count = summary.count, "rating recorded");
        Ok(summary)
    }
}
