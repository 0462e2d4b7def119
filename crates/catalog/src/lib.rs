mod browse;
mod geojson;
mod heritage;
mod travel;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use guide_core::PointOfInterest;
use parking_lot::RwLock;
use tracing::info;
use walkdir::WalkDir;

pub use browse::{browse_points, CatalogPage, CategoryFilter, CARDS_PER_PAGE};
pub use heritage::{base_rating, extended_description, DEFAULT_BASE_RATING};
pub use travel::{approximate_distance_km, estimate_travel_time, TravelTime, ORIGIN};

/// Read-only view of the catalog a single query runs against.
pub type CatalogSnapshot = Arc<[PointOfInterest]>;

pub trait CatalogProvider: Send + Sync {
    fn all_points(&self) -> CatalogSnapshot;
}

#[derive(Debug, Clone)]
pub struct Catalog {
    points: CatalogSnapshot,
}

impl Catalog {
    pub fn from_points(points: Vec<PointOfInterest>) -> Self {
        let mut seen = HashSet::new();
        let points = points
            .into_iter()
            .filter(|point| seen.insert(point.name.clone()))
            .collect::<Vec<_>>();
        Self {
            points: points.into(),
        }
    }

    pub fn from_geojson_str(raw: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        let points = geojson::parse_feature_collection(raw, "inline", &mut seen)?;
        Ok(Self {
            points: points.into(),
        })
    }

    /// Loads a single GeoJSON file, or every `.geojson`/`.json` file below a
    /// directory in file-name order.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let root = path.as_ref();
        let mut seen = HashSet::new();
        let mut points = Vec::new();

        if !root.exists() {
            anyhow::bail!("catalog path does not exist: {}", root.display());
        }

        if root.is_file() {
            points.extend(load_file(root, &mut seen)?);
        } else {
            for entry in WalkDir::new(root)
                .sort_by_file_name()
                .into_iter()
                .filter_map(std::result::Result::ok)
                .filter(|entry| entry.file_type().is_file())
                .filter(|entry| {
                    matches!(
                        entry.path().extension().and_then(|ext| ext.to_str()),
                        Some("geojson") | Some("json")
                    )
                })
            {
                points.extend(load_file(entry.path(), &mut seen)?);
            }
        }

        info!(path = %root.display(), points = points.len(), "catalog loaded");
        Ok(Self {
            points: points.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PointOfInterest] {
        &self.points
    }

    pub fn find(&self, name: &str) -> Option<&PointOfInterest> {
        find_point(&self.points, name)
    }
}

impl CatalogProvider for Catalog {
    fn all_points(&self) -> CatalogSnapshot {
        self.points.clone()
    }
}

/// Provider whose catalog can be swapped while queries are running; each
/// query keeps the snapshot it started with.
#[derive(Debug)]
pub struct ReloadableCatalog {
    current: RwLock<CatalogSnapshot>,
}

impl ReloadableCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(catalog.points),
        }
    }

    pub fn replace(&self, catalog: Catalog) {
        let points = catalog.points;
        info!(points = points.len(), "catalog replaced");
        *self.current.write() = points;
    }

    pub fn reload_from(&self, path: impl AsRef<Path>) -> Result<usize> {
        let catalog = Catalog::from_path(path)?;
        let loaded = catalog.len();
        self.replace(catalog);
        Ok(loaded)
    }
}

impl CatalogProvider for ReloadableCatalog {
    fn all_points(&self) -> CatalogSnapshot {
        self.current.read().clone()
    }
}

pub fn find_point<'a>(points: &'a [PointOfInterest], name: &str) -> Option<&'a PointOfInterest> {
    points.iter().find(|point| point.name == name)
}

/// Points named in `names`, in catalog order; unknown names are ignored.
pub fn resolve_names<'a>(points: &'a [PointOfInterest], names: &[String]) -> Vec<&'a PointOfInterest> {
    points
        .iter()
        .filter(|point| names.iter().any(|name| *name == point.name))
        .collect()
}

fn load_file(path: &Path, seen: &mut HashSet<String>) -> Result<Vec<PointOfInterest>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed reading catalog file: {}", path.display()))?;
    geojson::parse_feature_collection(&raw, &path.to_string_lossy(), seen)
}
