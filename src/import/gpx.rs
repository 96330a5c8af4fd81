use color_eyre::Result;
use geo_types::Point;
use gpx::Gpx;
use tracing::{info, instrument};

use crate::track_geo::haversine_distance;
use crate::types::track::TrackPoint;

/// Parse a gpx document into its ordered track points.
///
/// Points come out in document order across all tracks and segments, each
/// carrying the running along-track distance in metres (0 for the first
/// point). Malformed documents are rejected with an error rather than scanned
/// loosely; a well-formed document with no track points yields an empty vec.
#[instrument(skip(gpx_text))]
pub fn parse_track_points(gpx_text: &str) -> Result<Vec<TrackPoint>> {
    let gpx_data = gpx::read(gpx_text.as_bytes())?;
    info!("number of tracks in gpx: {}", gpx_data.tracks.len());
    Ok(gpx_data.track_points())
}

pub trait IntoTrackPoints {
    fn track_points(&self) -> Vec<TrackPoint>;
}

impl IntoTrackPoints for Gpx {
    fn track_points(&self) -> Vec<TrackPoint> {
        let mut cumulative = 0.0;
        let mut previous: Option<Point<f64>> = None;
        let mut points = Vec::new();
        for waypoint in self
            .tracks
            .iter()
            .flat_map(|track| track.segments.iter())
            .flat_map(|segment| segment.points.iter())
        {
            let point = waypoint.point();
            if let Some(previous) = previous {
                cumulative += haversine_distance(&previous, &point);
            }
            previous = Some(point);
            points.push(TrackPoint {
                latitude: point.y(),
                longitude: point.x(),
                cumulative_distance: cumulative,
            });
        }
        points
    }
}
