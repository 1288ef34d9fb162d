// Screen-position watcher: a periodic task that notices the host
// window dragging the balloon around without any layout notification.

use std::time::Duration;

use crate::geometry::Point;

/// Delay before the connector is first rendered after opening.
pub const DELAY_RENDER_INTERVAL: Duration = Duration::from_millis(30);
/// Interval between screen-position samples while tracking.
pub const CHECK_POSITION_INTERVAL: Duration = Duration::from_millis(20);

/// Host-supplied capability for reading the balloon's absolute screen
/// origin. `None` means the balloon is not attached to any display
/// surface right now.
pub trait ScreenProbe {
    fn screen_origin(&self) -> Option<Point>;
}

/// What one watcher tick observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WatchTick {
    /// The watcher is not running; nothing was sampled.
    Stopped,
    /// No display surface available; the loop pauses until one returns.
    Suspended,
    /// First tick after starting: the connector may now be rendered.
    RenderEnabled,
    /// The balloon moved on screen; re-resolve the connector point and
    /// invalidate rendering.
    Moved,
    Unchanged,
}

/// Polls the balloon's screen origin while it is open and connected.
///
/// The first tick after starting only enables connector rendering and
/// records the origin; later ticks compare against the last sample.
/// Closing or disconnecting stops the loop and resets both phases.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionWatcher {
    running: bool,
    render_enabled: bool,
    last_origin: Option<Point>,
}

impl PositionWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts or stops the loop from the host's open/connected state.
    /// Stopping resets the render phase and the stored origin.
    pub fn set_state(&mut self, open: bool, connected: bool) {
        let should_run = open && connected;
        if should_run != self.running {
            self.running = should_run;
            self.render_enabled = false;
            self.last_origin = None;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time until the next tick is due.
    pub fn interval(&self) -> Duration {
        if self.render_enabled {
            CHECK_POSITION_INTERVAL
        } else {
            DELAY_RENDER_INTERVAL
        }
    }

    /// Samples the probe once and reports what changed.
    pub fn tick(&mut self, probe: &dyn ScreenProbe) -> WatchTick {
        if !self.running {
            return WatchTick::Stopped;
        }
        let Some(origin) = probe.screen_origin() else {
            // Detached from the display surface: hold position until
            // the surface comes back.
            self.last_origin = None;
            return WatchTick::Suspended;
        };
        if !self.render_enabled {
            self.render_enabled = true;
            self.last_origin = Some(origin);
            return WatchTick::RenderEnabled;
        }
        if self.last_origin != Some(origin) {
            self.last_origin = Some(origin);
            return WatchTick::Moved;
        }
        WatchTick::Unchanged
    }
}
