use crate::models::LatLng;
use std::sync::Arc;

/// Called with the room id when a marker is clicked
pub type MarkerCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// What a new marker needs to know
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub room_id: String,
    pub position: LatLng,
}

/// The narrow slice of a map SDK the room map needs.
/// Adapters wrap the concrete widget; nothing else depends on its type.
pub trait MapWidget {
    /// Opaque handle to a marker attached to this map
    type Marker;

    /// Build a marker, wire its click handler and attach it to the map
    fn create_marker(&mut self, spec: MarkerSpec, on_click: MarkerCallback) -> Self::Marker;

    /// Detach a marker from the map
    fn remove_marker(&mut self, marker: Self::Marker);

    /// Animate the viewport to `at`
    fn pan_to(&mut self, at: LatLng);

    /// Jump the viewport to `at`
    fn set_center(&mut self, at: LatLng);

    /// Move the viewport so every point is visible
    fn fit_bounds(&mut self, points: &[LatLng]);
}
