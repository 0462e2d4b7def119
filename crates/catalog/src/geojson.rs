use std::collections::HashSet;

use anyhow::{Context, Result};
use guide_core::{Category, Coordinates, PointOfInterest};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    geometry: Option<Geometry>,
    #[serde(default)]
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// GeoJSON position: longitude, latitude, then optional altitude.
    #[serde(default)]
    coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    theme: String,
}

/// Parses one FeatureCollection. `seen` carries names across files so the
/// catalog keeps a single point per name.
pub(crate) fn parse_feature_collection(
    raw: &str,
    source: &str,
    seen: &mut HashSet<String>,
) -> Result<Vec<PointOfInterest>> {
    let collection: FeatureCollection = serde_json::from_str(raw)
        .with_context(|| format!("invalid GeoJSON feature collection: {source}"))?;

    let mut points = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let name = feature.properties.name.trim().to_string();
        if name.is_empty() {
            warn!(source, "skipping feature without a name");
            continue;
        }

        let Some(category) = Category::parse(&feature.properties.theme) else {
            warn!(source, name = %name, theme = %feature.properties.theme, "skipping feature with unknown theme");
            continue;
        };

        let position = feature
            .geometry
            .as_ref()
            .map(|geometry| geometry.coordinates.as_slice())
            .unwrap_or_default();
        let &[longitude, latitude, ..] = position else {
            warn!(source, name = %name, "skipping feature without a position");
            continue;
        };

        if !seen.insert(name.clone()) {
            warn!(source, name = %name, "skipping duplicate feature name");
            continue;
        }

        points.push(PointOfInterest {
            name,
            description: feature.properties.description.trim().to_string(),
            category,
            coordinates: Coordinates {
                latitude,
                longitude,
            },
        });
    }

    Ok(points)
}
