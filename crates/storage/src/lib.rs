use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use guide_core::{review_word, GuideError};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub name: String,
    pub total: u32,
    pub count: u32,
    pub user_rating: Option<u8>,
    pub updated_at: DateTime<Utc>,
}

impl RatingSummary {
    pub fn average(&self) -> Option<f32> {
        (self.count > 0).then(|| self.total as f32 / self.count as f32)
    }

    /// One decimal with ties rounded up, e.g. 4.25 -> "4.3". `None` until
    /// someone has rated.
    pub fn average_label(&self) -> Option<String> {
        if self.count == 0 {
            return None;
        }
        let total = u64::from(self.total);
        let count = u64::from(self.count);
        let tenths = (total * 20 + count) / (count * 2);
        Some(format!("{}.{}", tenths / 10, tenths % 10))
    }

    /// "(3 отзыва)".
    pub fn count_label(&self) -> String {
        format!("({} {})", self.count, review_word(self.count))
    }
}

pub trait FavoritesRepository: Send + Sync {
    fn list_favorites(&self) -> Result<Vec<String>>;
    fn is_favorite(&self, name: &str) -> Result<bool>;
    /// `true` when the name was not a favourite before.
    fn add_favorite(&self, name: &str) -> Result<bool>;
    /// `true` when the name was a favourite before.
    fn remove_favorite(&self, name: &str) -> Result<bool>;
}

pub trait RatingRepository: Send + Sync {
    fn add_rating(&self, name: &str, stars: u8) -> Result<RatingSummary>;
    fn rating_summary(&self, name: &str) -> Result<Option<RatingSummary>>;
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    favorites: Arc<RwLock<Vec<String>>>,
    ratings: Arc<RwLock<HashMap<String, RatingSummary>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesRepository for MemoryStore {
    fn list_favorites(&self) -> Result<Vec<String>> {
        Ok(self.favorites.read().clone())
    }

    fn is_favorite(&self, name: &str) -> Result<bool> {
        Ok(self.favorites.read().iter().any(|favorite| favorite == name))
    }

    fn add_favorite(&self, name: &str) -> Result<bool> {
        let mut favorites = self.favorites.write();
        if favorites.iter().any(|favorite| favorite == name) {
            return Ok(false);
        }
        favorites.push(name.to_string());
        Ok(true)
    }

    fn remove_favorite(&self, name: &str) -> Result<bool> {
        let mut favorites = self.favorites.write();
        let before = favorites.len();
        favorites.retain(|favorite| favorite != name);
        Ok(favorites.len() != before)
    }
}

impl RatingRepository for MemoryStore {
    fn add_rating(&self, name: &str, stars: u8) -> Result<RatingSummary> {
        if !(MIN_STARS..=MAX_STARS).contains(&stars) {
            return Err(GuideError::InvalidRating(stars).into());
        }

        let mut ratings = self.ratings.write();
        let summary = ratings
            .entry(name.to_string())
            .or_insert_with(|| RatingSummary {
                name: name.to_string(),
                total: 0,
                count: 0,
                user_rating: None,
                updated_at: Utc::now(),
            });

        summary.total += u32::from(stars);
        summary.count += 1;
        summary.user_rating = Some(stars);
        summary.updated_at = Utc::now();

        Ok(summary.clone())
    }

    fn rating_summary(&self, name: &str) -> Result<Option<RatingSummary>> {
        Ok(self.ratings.read().get(name).cloned())
    }
}
