use crate::error::MapError;
use crate::map::reconcile::{OverlayReconciler, ReconcileReport};
use crate::map::widget::{MapWidget, MarkerCallback};
use crate::models::{LatLng, Room};
use tracing::{debug, info, warn};

/// The home screen map: the widget once it is up, plus the rooms it shows.
///
/// Until the widget is ready every operation only records state; a load
/// failure leaves the view inert for good.
pub struct MapView<W: MapWidget> {
    default_center: LatLng,
    widget: Option<W>,
    error: Option<MapError>,
    overlays: OverlayReconciler<W::Marker>,
    visible: Vec<Room>,
    has_condition: bool,
    on_select: MarkerCallback,
}

impl<W: MapWidget> MapView<W> {
    pub fn new(default_center: LatLng, on_select: MarkerCallback) -> Self {
        Self {
            default_center,
            widget: None,
            error: None,
            overlays: OverlayReconciler::new(),
            visible: Vec::new(),
            has_condition: false,
            on_select,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.widget.is_some()
    }

    pub fn error(&self) -> Option<&MapError> {
        self.error.as_ref()
    }

    pub fn widget(&self) -> Option<&W> {
        self.widget.as_ref()
    }

    /// Room ids that currently have a marker
    pub fn marker_ids(&self) -> Vec<&str> {
        self.overlays.room_ids()
    }

    /// The widget finished loading; draw whatever is already visible
    pub fn attach(&mut self, widget: W) -> ReconcileReport {
        if self.error.is_some() {
            warn!("Ignoring map widget after a load failure");
            return ReconcileReport::default();
        }
        info!("🗺️ Map ready");
        self.widget = Some(widget);
        self.render().unwrap_or_default()
    }

    /// The widget failed to load. Markers already drawn are removed before
    /// the widget is dropped.
    pub fn fail(&mut self, error: MapError) {
        warn!("Map unavailable: {}", error);
        if let Some(mut widget) = self.widget.take() {
            self.overlays.clear(&mut widget);
        }
        self.error = Some(error);
    }

    /// Center on the first fetched room, once the map is ready
    pub fn center_on_first(&mut self, rooms: &[Room]) {
        if let (Some(widget), Some(first)) = (self.widget.as_mut(), rooms.first()) {
            widget.set_center(first.position());
        }
    }

    /// Show a new filtered list. When the user has narrowed the results and
    /// something matched, the viewport is fitted to the matches.
    pub fn show(&mut self, rooms: Vec<Room>, has_condition: bool) -> Option<ReconcileReport> {
        self.visible = rooms;
        self.has_condition = has_condition;

        let report = self.render()?;
        self.fit_to_results();
        Some(report)
    }

    /// The viewport settled; redraw the last filtered list
    pub fn on_idle(&mut self) -> Option<ReconcileReport> {
        self.render()
    }

    /// Fit to the current results when there are any, else go back home
    pub fn recenter(&mut self) {
        if self.fit_to_results() {
            return;
        }
        if let Some(widget) = self.widget.as_mut() {
            widget.pan_to(self.default_center);
        }
    }

    /// Remove every marker and hand the widget back
    pub fn detach(&mut self) -> Option<W> {
        let mut widget = self.widget.take()?;
        self.overlays.clear(&mut widget);
        Some(widget)
    }

    fn render(&mut self) -> Option<ReconcileReport> {
        let widget = self.widget.as_mut()?;
        Some(self.overlays.reconcile(widget, &self.visible, &self.on_select))
    }

    fn fit_to_results(&mut self) -> bool {
        if !self.has_condition || self.visible.is_empty() {
            return false;
        }
        let Some(widget) = self.widget.as_mut() else {
            return false;
        };
        let points: Vec<LatLng> = self.visible.iter().map(Room::position).collect();
        debug!("Fitting map to {} rooms", points.len());
        widget.fit_bounds(&points);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::headless::HeadlessMap;
    use std::sync::Arc;

    fn room(id: &str, lat: f64, lng: f64) -> Room {
        Room {
            id: id.to_string(),
            name: format!("Room {id}"),
            address: String::new(),
            image_url: String::new(),
            open_status: String::new(),
            latitude: lat,
            longitude: lng,
            price_per_hour: 10_000,
            capacity: 4,
            discount_eligible: false,
            rating: 0.0,
            review_count: 0,
        }
    }

    fn home() -> LatLng {
        LatLng::new(37.5563, 126.922)
    }

    fn view() -> MapView<HeadlessMap> {
        MapView::new(home(), Arc::new(|_: &str| {}))
    }

    #[test]
    fn draws_pending_rooms_once_ready() {
        let mut view = view();
        assert!(view.show(vec![room("1", 37.0, 127.0)], false).is_none());

        let report = view.attach(HeadlessMap::new(home(), 5));
        assert_eq!(report.added, vec!["1"]);
        assert_eq!(view.marker_ids(), vec!["1"]);
    }

    #[test]
    fn fits_only_when_narrowed() {
        let mut view = view();
        view.attach(HeadlessMap::new(home(), 5));

        view.show(vec![room("1", 37.0, 127.0), room("2", 38.0, 127.0)], false);
        assert!(view.widget().unwrap().bounds().is_none());

        view.show(vec![room("1", 37.0, 127.0), room("2", 38.0, 127.0)], true);
        let widget = view.widget().unwrap();
        assert_eq!(widget.bounds().map(<[LatLng]>::len), Some(2));
        assert_eq!(widget.center(), LatLng::new(37.5, 127.0));
    }

    #[test]
    fn recenter_falls_back_to_default_center() {
        let mut view = view();
        view.attach(HeadlessMap::new(LatLng::new(0.0, 0.0), 5));
        view.show(Vec::new(), true);

        view.recenter();
        assert_eq!(view.widget().unwrap().center(), home());
    }

    #[test]
    fn idle_is_idempotent() {
        let mut view = view();
        view.attach(HeadlessMap::new(home(), 5));
        view.show(vec![room("1", 37.0, 127.0)], false);

        assert_eq!(view.on_idle().map(|r| r.is_noop()), Some(true));
        assert_eq!(view.widget().unwrap().created_count(), 1);
    }

    #[test]
    fn centers_on_first_room() {
        let mut view = view();
        view.attach(HeadlessMap::new(home(), 5));
        view.center_on_first(&[room("3", 35.0, 129.0), room("4", 36.0, 128.0)]);
        assert_eq!(view.widget().unwrap().center(), LatLng::new(35.0, 129.0));
    }

    #[test]
    fn failed_map_stays_inert() {
        let mut view = view();
        view.fail(MapError::MissingAppKey);

        assert!(view.attach(HeadlessMap::new(home(), 5)).is_noop());
        assert!(!view.is_ready());
        assert!(view.show(vec![room("1", 37.0, 127.0)], true).is_none());
        assert_eq!(view.error(), Some(&MapError::MissingAppKey));
    }

    #[test]
    fn failure_after_attach_drops_the_markers() {
        let mut view = view();
        view.attach(HeadlessMap::new(home(), 5));
        view.show(vec![room("1", 37.0, 127.0), room("2", 38.0, 127.0)], false);
        assert_eq!(view.marker_ids(), vec!["1", "2"]);

        view.fail(MapError::LoadFailed("script error".to_string()));
        assert!(view.marker_ids().is_empty());
        assert!(view.widget().is_none());
        assert!(view.on_idle().is_none());
    }

    #[test]
    fn detach_removes_markers() {
        let mut view = view();
        view.attach(HeadlessMap::new(home(), 5));
        view.show(vec![room("1", 37.0, 127.0)], false);

        let widget = view.detach().unwrap();
        assert!(widget.marker_room_ids().is_empty());
        assert_eq!(widget.removed_count(), 1);
        assert!(!view.is_ready());
    }
}
