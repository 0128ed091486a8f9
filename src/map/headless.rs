use crate::error::MapError;
use crate::map::loader::ScriptLoader;
use crate::map::widget::{MapWidget, MarkerCallback, MarkerSpec};
use crate::models::LatLng;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::debug;

struct HeadlessMarker {
    spec: MarkerSpec,
    on_click: MarkerCallback,
}

/// In-memory map widget: keeps markers and viewport state without drawing.
/// Used by the command line front end and by tests.
pub struct HeadlessMap {
    next_handle: u64,
    markers: BTreeMap<u64, HeadlessMarker>,
    center: LatLng,
    zoom_level: u8,
    bounds: Option<Vec<LatLng>>,
    created: usize,
    removed: usize,
}

impl HeadlessMap {
    pub fn new(center: LatLng, zoom_level: u8) -> Self {
        Self {
            next_handle: 0,
            markers: BTreeMap::new(),
            center,
            zoom_level,
            bounds: None,
            created: 0,
            removed: 0,
        }
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom_level(&self) -> u8 {
        self.zoom_level
    }

    /// Points of the last `fit_bounds` call
    pub fn bounds(&self) -> Option<&[LatLng]> {
        self.bounds.as_deref()
    }

    /// Room ids of every attached marker, in creation order
    pub fn marker_room_ids(&self) -> Vec<&str> {
        self.markers.values().map(|m| m.spec.room_id.as_str()).collect()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn created_count(&self) -> usize {
        self.created
    }

    pub fn removed_count(&self) -> usize {
        self.removed
    }

    /// Simulate a click on the marker for `room_id`. Returns false when no
    /// such marker is attached.
    pub fn click(&self, room_id: &str) -> bool {
        match self.markers.values().find(|m| m.spec.room_id == room_id) {
            Some(marker) => {
                (marker.on_click)(marker.spec.room_id.as_str());
                true
            }
            None => false,
        }
    }
}

impl MapWidget for HeadlessMap {
    type Marker = u64;

    fn create_marker(&mut self, spec: MarkerSpec, on_click: MarkerCallback) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.created += 1;
        debug!("marker {} attached for room {}", handle, spec.room_id);
        self.markers.insert(handle, HeadlessMarker { spec, on_click });
        handle
    }

    fn remove_marker(&mut self, marker: u64) {
        if self.markers.remove(&marker).is_some() {
            self.removed += 1;
        }
    }

    fn pan_to(&mut self, at: LatLng) {
        self.center = at;
    }

    fn set_center(&mut self, at: LatLng) {
        self.center = at;
    }

    fn fit_bounds(&mut self, points: &[LatLng]) {
        if points.is_empty() {
            return;
        }
        let n = points.len() as f64;
        let lat = points.iter().map(|p| p.lat).sum::<f64>() / n;
        let lng = points.iter().map(|p| p.lng).sum::<f64>() / n;
        self.center = LatLng::new(lat, lng);
        self.bounds = Some(points.to_vec());
    }
}

/// Script loader for the headless widget: there is nothing to fetch
pub struct HeadlessScript;

#[async_trait]
impl ScriptLoader for HeadlessScript {
    async fn load(&self, _app_key: &str) -> Result<(), MapError> {
        Ok(())
    }
}
