use color_eyre::eyre::Result;
use geo::{BoundingRect, HaversineDistance};
use geo_types::{CoordFloat, CoordNum, LineString, Point};
use geojson::{Feature, Geometry};

use crate::types::feature::FeatureProperties;
use crate::types::track::TrackPoint;

/// Great-circle distance between two points in metres.
///
/// Pure and symmetric; returns 0 for identical points. No range checks are
/// applied to the coordinates, and NaN inputs propagate as NaN.
pub fn haversine_distance(a: &Point<f64>, b: &Point<f64>) -> f64 {
    a.haversine_distance(b)
}

pub trait IntoTrackFeature<'a> {
    fn into_track_feature(&'a self) -> Result<Feature>;
}

impl<'a, S> IntoTrackFeature<'a> for S
where
    S: BoundingBox<f64> + Distance<f64>,
    &'a S: Into<geojson::Value> + 'a,
{
    fn into_track_feature(&'a self) -> Result<Feature> {
        let bounding_box = self.bounding_box();
        let geom = Geometry {
            bbox: bounding_box.to_owned(),
            value: <&'a S as Into<geojson::Value>>::into(self),
            foreign_members: None,
        };
        let distance = self.distance();
        Ok(Feature {
            bbox: bounding_box,
            geometry: Some(geom),
            properties: Some(
                FeatureProperties {
                    distance,
                    name: None,
                }
                .try_into()?,
            ),
            ..Default::default()
        })
    }
}

//Get the bounding box for a geometry as a vector
pub trait BoundingBox<N> {
    fn bounding_box(&self) -> Option<Vec<N>>;
}

impl<T, N> BoundingBox<N> for T
where
    T: BoundingRect<N>,
    N: CoordNum,
{
    fn bounding_box(&self) -> Option<Vec<N>> {
        self.bounding_rect()
            .into()
            .map(|r| vec![r.min().x, r.min().y, r.max().x, r.max().y])
    }
}

/// Total length of a geometry in metres
pub trait Distance<N> {
    fn distance(&self) -> N;
}

impl<N> Distance<N> for LineString<N>
where
    N: std::iter::Sum + CoordFloat,
    Point<N>: HaversineDistance<N>,
{
    fn distance(&self) -> N {
        self.points()
            .collect::<Vec<Point<N>>>()
            .windows(2)
            .map(|p| p[0].haversine_distance(&p[1]))
            .sum()
    }
}

//Parsed track points already carry their running total, so the length of the
//whole track is just the last point's cumulative distance.
impl Distance<f64> for [TrackPoint] {
    fn distance(&self) -> f64 {
        self.last().map_or(0.0, |p| p.cumulative_distance)
    }
}

pub trait StartPoint {
    fn start_point(&self) -> Option<Point<f64>>;
}

impl StartPoint for [TrackPoint] {
    fn start_point(&self) -> Option<Point<f64>> {
        self.first().map(TrackPoint::point)
    }
}

pub trait EndPoint {
    fn end_point(&self) -> Option<Point<f64>>;
}

impl EndPoint for [TrackPoint] {
    fn end_point(&self) -> Option<Point<f64>> {
        self.last().map(TrackPoint::point)
    }
}
