use tracing::instrument;

use crate::track_geo::haversine_distance;
use crate::types::poi::Poi;
use crate::types::track::TrackPoint;

/// A poi paired with the along-track distance of its nearest track point, in
/// kilometres rounded to 2 decimals.
#[derive(Clone, Debug)]
pub struct AnnotatedPoi {
    pub poi: Poi,
    pub distance_from_start: f64,
}

/// Annotate each poi with how far along the track it sits.
///
/// The matching track point is the one nearest to the poi by straight-line
/// distance; what gets reported is that point's cumulative along-track
/// distance, not the straight-line gap. With no track points to project
/// against every poi ends up at 0. The result is sorted ascending by
/// `distance_from_start`, input order preserved between equals.
#[instrument(skip_all, fields(track_points = track_points.len(), pois = pois.len()))]
pub fn annotate_pois(track_points: &[TrackPoint], pois: Vec<Poi>) -> Vec<AnnotatedPoi> {
    let mut annotated: Vec<AnnotatedPoi> = pois
        .into_iter()
        .map(|poi| {
            let distance_from_start = nearest_track_point(track_points, &poi)
                .map_or(0.0, |track_point| {
                    round_km(track_point.cumulative_distance)
                });
            AnnotatedPoi {
                poi,
                distance_from_start,
            }
        })
        .collect();
    annotated.sort_by(|a, b| a.distance_from_start.total_cmp(&b.distance_from_start));
    annotated
}

//Linear scan; track and poi counts stay small enough that a spatial index
//would be overkill.
fn nearest_track_point<'a>(track_points: &'a [TrackPoint], poi: &Poi) -> Option<&'a TrackPoint> {
    let target = poi.point();
    track_points.iter().min_by(|a, b| {
        haversine_distance(&a.point(), &target).total_cmp(&haversine_distance(&b.point(), &target))
    })
}

fn round_km(meters: f64) -> f64 {
    (meters / 10.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::gpx::parse_track_points;

    fn poi(id: i64, latitude: f64, longitude: f64) -> Poi {
        Poi {
            id,
            name: format!("poi {id}"),
            latitude,
            longitude,
            description: None,
        }
    }

    fn track_point(latitude: f64, longitude: f64, cumulative_distance: f64) -> TrackPoint {
        TrackPoint {
            latitude,
            longitude,
            cumulative_distance,
        }
    }

    #[test]
    fn empty_track_annotates_every_poi_with_zero() {
        let pois = vec![poi(1, 10.0, 10.0), poi(2, 20.0, 20.0), poi(3, 30.0, 30.0)];
        let annotated = annotate_pois(&[], pois);
        assert_eq!(annotated.len(), 3);
        assert!(annotated.iter().all(|a| a.distance_from_start == 0.0));
        // stable sort keeps the input order between equals
        let ids: Vec<i64> = annotated.iter().map(|a| a.poi.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_poi_list_yields_empty_result() {
        let points = [track_point(0.0, 0.0, 0.0), track_point(0.0, 0.001, 111.2)];
        assert!(annotate_pois(&points, vec![]).is_empty());
    }

    #[test]
    fn pois_are_sorted_by_distance_from_start() {
        let points = [
            track_point(0.0, 0.0, 500.0),
            track_point(1.0, 1.0, 100.0),
            track_point(2.0, 2.0, 1000.0),
        ];
        // each poi sits exactly on one track point
        let pois = vec![poi(1, 0.0, 0.0), poi(2, 1.0, 1.0), poi(3, 2.0, 2.0)];
        let annotated = annotate_pois(&points, pois);
        let ids: Vec<i64> = annotated.iter().map(|a| a.poi.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        let distances: Vec<f64> = annotated.iter().map(|a| a.distance_from_start).collect();
        assert_eq!(distances, vec![0.10, 0.50, 1.00]);
    }

    #[test]
    fn reports_along_track_distance_not_straight_line_gap() {
        // poi slightly off the second point; its annotation is still that
        // point's cumulative distance
        let points = [
            track_point(0.0, 0.0, 0.0),
            track_point(0.0, 0.01, 1_112.0),
            track_point(0.0, 0.02, 2_224.0),
        ];
        let annotated = annotate_pois(&points, vec![poi(1, 0.0001, 0.0101)]);
        assert_eq!(annotated[0].distance_from_start, 1.11);
    }

    #[test]
    fn rounds_to_two_decimal_kilometres() {
        let points = [track_point(5.0, 5.0, 1234.5)];
        let annotated = annotate_pois(&points, vec![poi(1, 5.0, 5.0)]);
        assert_eq!(annotated[0].distance_from_start, 1.23);
    }

    #[test]
    fn parsed_gpx_projects_onto_the_nearest_point() {
        // three points ~111m apart along the equator; the poi hugs the middle
        // one, so it lands at its cumulative distance (~0.11 km)
        let gpx_text = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="trackside-test" xmlns="http://www.topografix.com/GPX/1/1">
  <trk><trkseg>
    <trkpt lat="0.0" lon="0.0"></trkpt>
    <trkpt lat="0.0" lon="0.001"></trkpt>
    <trkpt lat="0.0" lon="0.002"></trkpt>
  </trkseg></trk>
</gpx>"#;
        let points = parse_track_points(gpx_text).unwrap();
        let annotated = annotate_pois(&points, vec![poi(7, 0.0001, 0.00105)]);
        assert_eq!(annotated.len(), 1);
        assert_eq!(annotated[0].distance_from_start, 0.11);
    }
}
