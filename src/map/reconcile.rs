use crate::map::widget::{MapWidget, MarkerCallback, MarkerSpec};
use crate::models::Room;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Room ids touched by one reconcile pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl ReconcileReport {
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Owns the markers currently on the map, keyed by room id.
///
/// After [`reconcile`](Self::reconcile) the key set equals the ids of the
/// target rooms. Markers for rooms that stay in the set are never rebuilt.
pub struct OverlayReconciler<M> {
    overlays: HashMap<String, M>,
}

impl<M> Default for OverlayReconciler<M> {
    fn default() -> Self {
        Self {
            overlays: HashMap::new(),
        }
    }
}

impl<M> OverlayReconciler<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    pub fn contains(&self, room_id: &str) -> bool {
        self.overlays.contains_key(room_id)
    }

    /// Room ids with a marker, sorted
    pub fn room_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.overlays.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Bring the markers on `map` in line with `rooms`: drop markers whose
    /// room left the set, then add one for every room that has none.
    pub fn reconcile<W>(
        &mut self,
        map: &mut W,
        rooms: &[Room],
        on_select: &MarkerCallback,
    ) -> ReconcileReport
    where
        W: MapWidget<Marker = M>,
    {
        let target: HashSet<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
        let mut report = ReconcileReport::default();

        let mut stale: Vec<String> = self
            .overlays
            .keys()
            .filter(|id| !target.contains(id.as_str()))
            .cloned()
            .collect();
        stale.sort_unstable();

        for id in stale {
            if let Some(marker) = self.overlays.remove(&id) {
                map.remove_marker(marker);
                report.removed.push(id);
            }
        }

        for room in rooms {
            if self.overlays.contains_key(&room.id) {
                continue;
            }
            let spec = MarkerSpec {
                room_id: room.id.clone(),
                position: room.position(),
            };
            let marker = map.create_marker(spec, on_select.clone());
            self.overlays.insert(room.id.clone(), marker);
            report.added.push(room.id.clone());
        }

        if !report.is_noop() {
            debug!(
                "Reconciled markers: +{} -{} ({} on map)",
                report.added.len(),
                report.removed.len(),
                self.overlays.len()
            );
        }
        report
    }

    /// Detach every marker, e.g. before the map itself goes away
    pub fn clear<W>(&mut self, map: &mut W)
    where
        W: MapWidget<Marker = M>,
    {
        for (_, marker) in self.overlays.drain() {
            map.remove_marker(marker);
        }
    }
}
