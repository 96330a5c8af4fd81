pub mod gpx;
