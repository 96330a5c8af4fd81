use color_eyre::eyre::{eyre, Result};
use geo_types::{coord, LineString, Point};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry};

use crate::track_geo::{EndPoint, IntoTrackFeature, StartPoint};
use crate::types::track::TrackPoint;

/// Build the geojson for a track detail view: the route line (with bbox and
/// distance/name properties) plus "start" and "end" point markers.
pub fn track_geo_json(name: &str, points: &[TrackPoint]) -> Result<GeoJson> {
    let start_point = points
        .start_point()
        .ok_or(eyre!("No start point on track"))?;
    let end_point = points.end_point().ok_or(eyre!("No end point on track"))?;
    let line: LineString<f64> = points
        .iter()
        .map(|p| coord! { x: p.longitude, y: p.latitude })
        .collect();
    let mut route = line.into_track_feature()?;
    route.set_property("name", name);
    let bbox = route.bbox.clone();
    let feature_collection = FeatureCollection {
        bbox,
        features: vec![
            route,
            feature_point(String::from("start"), &start_point),
            feature_point(String::from("end"), &end_point),
        ],
        foreign_members: None,
    };
    Ok(feature_collection.into())
}

fn feature_point(id: String, point: &Point<f64>) -> Feature {
    Feature {
        id: Some(geojson::feature::Id::String(id)),
        geometry: Some(Geometry::new(point.into())),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track_point(latitude: f64, longitude: f64, cumulative_distance: f64) -> TrackPoint {
        TrackPoint {
            latitude,
            longitude,
            cumulative_distance,
        }
    }

    #[test]
    fn geo_json_carries_route_and_start_end_markers() {
        let points = [
            track_point(47.0, 8.0, 0.0),
            track_point(47.001, 8.001, 140.0),
        ];
        let geo_json = track_geo_json("morning ride", &points).unwrap();
        let GeoJson::FeatureCollection(collection) = geo_json else {
            panic!("expected a feature collection");
        };
        assert_eq!(collection.features.len(), 3);
        let route = &collection.features[0];
        assert_eq!(
            route.property("name"),
            Some(&serde_json::json!("morning ride"))
        );
        assert!(route.bbox.is_some());
        let ids: Vec<_> = collection.features[1..]
            .iter()
            .filter_map(|f| f.id.clone())
            .collect();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn geo_json_requires_at_least_one_point() {
        assert!(track_geo_json("empty", &[]).is_err());
    }
}
