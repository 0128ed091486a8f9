//! Home screen: room list, filter chips and the map, kept in step

use crate::error::MapError;
use crate::filter::{filter_rooms, FilterStore};
use crate::map::{MapView, MapWidget, MarkerCallback, ReconcileReport};
use crate::models::{LatLng, Room};
use crate::sources::RoomSource;
use anyhow::Result;
use tracing::{info, warn};

pub struct HomeScreen<W: MapWidget> {
    rooms: Vec<Room>,
    store: FilterStore,
    view: MapView<W>,
    fetch_error: Option<String>,
}

impl<W: MapWidget> HomeScreen<W> {
    pub fn new(default_center: LatLng, on_select: MarkerCallback) -> Self {
        Self {
            rooms: Vec::new(),
            store: FilterStore::new(),
            view: MapView::new(default_center, on_select),
            fetch_error: None,
        }
    }

    /// Fetch the room snapshot once. A failure is kept for display and
    /// returned; there is no retry.
    pub async fn load(&mut self, source: &dyn RoomSource) -> Result<()> {
        match source.fetch_rooms().await {
            Ok(rooms) => {
                info!("Loaded {} rooms from {}", rooms.len(), source.source_name());
                self.rooms = rooms;
                self.fetch_error = None;
                self.view.center_on_first(&self.rooms);
                self.refresh();
                Ok(())
            }
            Err(e) => {
                warn!("Room fetch failed: {:#}", e);
                self.fetch_error = Some(format!("{e:#}"));
                Err(e)
            }
        }
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    pub fn map_error(&self) -> Option<&MapError> {
        self.view.error()
    }

    pub fn store(&self) -> &FilterStore {
        &self.store
    }

    pub fn view(&self) -> &MapView<W> {
        &self.view
    }

    /// Change filters through the store's setters, then redraw
    pub fn update_filters(&mut self, f: impl FnOnce(&mut FilterStore)) -> Option<ReconcileReport> {
        f(&mut self.store);
        self.refresh()
    }

    /// Rooms matching the current filters
    pub fn visible_rooms(&self) -> Vec<Room> {
        filter_rooms(&self.rooms, &self.store.criteria())
    }

    /// The result list stays hidden until the user narrows the search
    pub fn shows_list(&self) -> bool {
        self.store.has_any_condition()
    }

    pub fn attach_map(&mut self, widget: W) -> ReconcileReport {
        let report = self.view.attach(widget);
        self.view.center_on_first(&self.rooms);
        report
    }

    pub fn map_failed(&mut self, error: MapError) {
        self.view.fail(error);
    }

    pub fn on_idle(&mut self) -> Option<ReconcileReport> {
        self.view.on_idle()
    }

    pub fn recenter(&mut self) {
        self.view.recenter();
    }

    fn refresh(&mut self) -> Option<ReconcileReport> {
        let visible = self.visible_rooms();
        self.view.show(visible, self.store.has_any_condition())
    }
}
