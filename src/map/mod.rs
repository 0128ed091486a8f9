pub mod headless;
pub mod loader;
pub mod reconcile;
pub mod view;
pub mod widget;

pub use headless::{HeadlessMap, HeadlessScript};
pub use loader::{ScriptLoader, SdkLoader};
pub use reconcile::{OverlayReconciler, ReconcileReport};
pub use view::MapView;
pub use widget::{MapWidget, MarkerCallback, MarkerSpec};
