use serde::{Deserialize, Serialize};

use crate::projection::AnnotatedPoi;

/// Body of POST /tracks/:id/pois
#[derive(Deserialize, Debug)]
pub struct NewPoi {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct CreatedPoi {
    pub id: i64,
}

/// A poi on the track-detail timeline. `distance_from_start` is the
/// along-track distance of the nearest track point, in kilometres rounded to
/// 2 decimals.
#[derive(Serialize, Debug)]
pub struct TimelinePoi {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
    pub distance_from_start: f64,
}

impl From<AnnotatedPoi> for TimelinePoi {
    fn from(value: AnnotatedPoi) -> Self {
        TimelinePoi {
            id: value.poi.id,
            name: value.poi.name,
            latitude: value.poi.latitude,
            longitude: value.poi.longitude,
            description: value.poi.description,
            distance_from_start: value.distance_from_start,
        }
    }
}
