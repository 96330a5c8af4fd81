use geo_types::Point;
use serde::{Deserialize, Serialize};

use super::poi::Poi;

//Whats actually stored for a track. `gpx` holds the raw uploaded document
//text; None means no GPX file was attached.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Track {
    pub id: i64,
    pub name: String,
    pub gpx: Option<String>,
    pub pois: Vec<Poi>,
}

/// A single parsed track point. `cumulative_distance` is the along-track
/// distance in metres from the first point up to this one (0 for the first
/// point, non-decreasing across the sequence). Recomputed from the stored GPX
/// on every request that needs it, never persisted.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub cumulative_distance: f64,
}

impl TrackPoint {
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}
