use geo_types::Point;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Poi {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
}

impl Poi {
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}
