use geojson::GeoJson;
use serde::Serialize;

use super::poi::TimelinePoi;

#[derive(Serialize, Debug)]
pub struct CreatedTrack {
    pub id: i64,
}

#[derive(Serialize, Debug)]
pub struct ListTrack {
    pub id: i64,
    pub name: String,
    //Total distance in metres, recomputed from the gpx on every listing
    pub total_distance: f64,
    pub poi_count: usize,
}

#[derive(Serialize, Debug)]
pub struct Track {
    pub id: i64,
    pub name: String,
    pub total_distance: f64,
    //Route line plus start/end markers; None when the track has no gpx
    pub geo_json: Option<GeoJson>,
    pub pois: Vec<TimelinePoi>,
}
