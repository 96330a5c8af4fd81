use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::OnceLock;

use color_eyre::eyre::{eyre, Result};
use tokio::sync::RwLock;

use crate::types::dto::poi::NewPoi;
use crate::types::poi::Poi;
use crate::types::track::Track;

pub static STORE: OnceLock<TrackStore> = OnceLock::new();

pub fn get_store() -> Result<&'static TrackStore> {
    STORE.get().ok_or(eyre!("Failed to get track store"))
}

/// In-process track storage. Tracks hold their raw gpx text; parsed geometry
/// and poi annotations are derived per request, never stored.
pub struct TrackStore {
    tracks: RwLock<HashMap<i64, Track>>,
    next_track_id: AtomicI64,
    next_poi_id: AtomicI64,
}

impl TrackStore {
    pub fn new() -> Self {
        TrackStore {
            tracks: RwLock::new(HashMap::new()),
            next_track_id: AtomicI64::new(1),
            next_poi_id: AtomicI64::new(1),
        }
    }

    pub async fn insert_track(&self, name: String, gpx: Option<String>) -> i64 {
        let id = self.next_track_id.fetch_add(1, Ordering::Relaxed);
        self.tracks.write().await.insert(
            id,
            Track {
                id,
                name,
                gpx,
                pois: Vec::new(),
            },
        );
        id
    }

    pub async fn track(&self, id: i64) -> Option<Track> {
        self.tracks.read().await.get(&id).cloned()
    }

    pub async fn list_tracks(&self) -> Vec<Track> {
        let mut tracks: Vec<Track> = self.tracks.read().await.values().cloned().collect();
        tracks.sort_by_key(|track| track.id);
        tracks
    }

    pub async fn remove_track(&self, id: i64) -> bool {
        self.tracks.write().await.remove(&id).is_some()
    }

    /// Returns the new poi's id, or None when the track doesn't exist.
    pub async fn add_poi(&self, track_id: i64, new_poi: NewPoi) -> Option<i64> {
        let mut tracks = self.tracks.write().await;
        let track = tracks.get_mut(&track_id)?;
        let id = self.next_poi_id.fetch_add(1, Ordering::Relaxed);
        track.pois.push(Poi {
            id,
            name: new_poi.name,
            latitude: new_poi.latitude,
            longitude: new_poi.longitude,
            description: new_poi.description,
        });
        Some(id)
    }
}

impl Default for TrackStore {
    fn default() -> Self {
        Self::new()
    }
}
