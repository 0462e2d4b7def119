use guide_core::Coordinates;
use serde::{Deserialize, Serialize};

/// Petrozavodsk, where every trip estimate starts.
pub const ORIGIN: Coordinates = Coordinates {
    latitude: 61.79,
    longitude: 34.36,
};

const KM_PER_DEGREE: f64 = 111.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelTime {
    UpToTwoHours,
    TwoToThreeHours,
    ThreeToFourHours,
    FourToSixHours,
}

impl TravelTime {
    pub fn label(self) -> &'static str {
        match self {
            Self::UpToTwoHours => "1-2 часа",
            Self::TwoToThreeHours => "2-3 часа",
            Self::ThreeToFourHours => "3-4 часа",
            Self::FourToSixHours => "4-6 часов",
        }
    }
}

/// Rough planar distance; good enough for a "how far is it" hint.
pub fn approximate_distance_km(from: Coordinates, to: Coordinates) -> f64 {
    let dlat = to.latitude - from.latitude;
    let dlon = to.longitude - from.longitude;
    (dlat * dlat + dlon * dlon).sqrt() * KM_PER_DEGREE
}

pub fn estimate_travel_time(to: Coordinates) -> TravelTime {
    let distance = approximate_distance_km(ORIGIN, to);
    if distance < 50.0 {
        TravelTime::UpToTwoHours
    } else if distance < 150.0 {
        TravelTime::TwoToThreeHours
    } else if distance < 250.0 {
        TravelTime::ThreeToFourHours
    } else {
        TravelTime::FourToSixHours
    }
}
