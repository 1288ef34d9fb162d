pub mod balloon;
pub mod config;
pub mod connector;
pub mod error;
pub mod geometry;
pub mod outline;
pub mod placement;
pub mod watcher;

pub use balloon::{Balloon, RecomputeScheduler, RunOutcome};
pub use config::{load_config, BalloonConfig, DockPriorities};
pub use connector::{chrome_bounds, resolve_connector_point, ConnectorState};
pub use error::ConnectorError;
pub use geometry::{put_rect_inside, Point, Rect, Size, Thickness};
pub use outline::{notched_outline, path_data, rounded_outline, PathCommand, CORNER_RADIUS};
pub use placement::{compute_placement, ChosenPlacement, Side};
pub use watcher::{PositionWatcher, ScreenProbe, WatchTick};
