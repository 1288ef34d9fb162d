// Host-facing balloon state: placement inputs, the committed result,
// and the cached connector geometry.

use crate::config::BalloonConfig;
use crate::connector::{resolve_connector_point, ConnectorState};
use crate::geometry::{Point, Rect, Size};
use crate::outline::{notched_outline, rounded_outline, PathCommand};
use crate::placement::{compute_placement, ChosenPlacement};

/// Everything the placement pipeline needs about one balloon, plus the
/// last committed outcome. Owned by a single host thread; all updates
/// go through `&mut self`.
#[derive(Debug, Clone)]
pub struct Balloon {
    pub config: BalloonConfig,
    /// Region the balloon must not overlap.
    pub flow_around: Rect,
    /// Explicit placement bounds; when unset the anchor's own render
    /// rect is used.
    pub placement_rect: Option<Rect>,
    /// Render size of the anchored target.
    pub anchor_size: Size,
    position: Option<ChosenPlacement>,
    connector: Option<ConnectorState>,
}

impl Balloon {
    pub fn new(config: BalloonConfig) -> Self {
        Balloon {
            config,
            flow_around: Rect::ZERO,
            placement_rect: None,
            anchor_size: Size::default(),
            position: None,
            connector: None,
        }
    }

    /// Bounds the balloon has to fit into.
    pub fn placement_area(&self) -> Rect {
        self.placement_rect
            .unwrap_or_else(|| Rect::from_size(self.anchor_size))
    }

    /// Last committed placement, if any.
    pub fn position(&self) -> Option<ChosenPlacement> {
        self.position
    }

    /// Last resolved connector geometry, if any.
    pub fn connector(&self) -> Option<ConnectorState> {
        self.connector
    }

    /// Runs the placement pipeline for the given balloon size and
    /// commits the outcome. `None` means every docking side is
    /// excluded; the previous position is discarded and the balloon
    /// stays unpositioned.
    pub fn recompute(&mut self, own_size: Size) -> Option<ChosenPlacement> {
        self.position = compute_placement(
            own_size,
            self.anchor_size,
            self.flow_around,
            self.placement_area(),
            &self.config.priorities,
            self.config.effective_connector_size(),
        );
        self.position
    }

    /// Re-resolves the connector apex against the current screen
    /// position. A detached balloon (no screen origin) keeps its
    /// previous connector state untouched.
    pub fn resolve_connector(
        &mut self,
        screen_origin: Option<Point>,
        render_size: Size,
        anchor_point: Point,
    ) -> Option<ConnectorState> {
        let placement = self.position?;
        let connector_size = self.config.effective_connector_size();
        if let Ok(point) = resolve_connector_point(
            placement.side,
            placement.is_centered,
            connector_size,
            screen_origin,
            render_size,
            anchor_point,
        ) {
            self.connector = Some(ConnectorState {
                side: placement.side,
                is_centered: placement.is_centered,
                connector_size,
                point,
            });
        }
        self.connector
    }

    /// Outline path for the given body rect: notched toward the
    /// connector apex while a visible connector is resolved, a plain
    /// rounded rectangle otherwise.
    pub fn outline(&self, body: Rect) -> Vec<PathCommand> {
        match self.connector {
            Some(state) if self.config.is_connector_visible => {
                notched_outline(body, state.side, state.point, state.connector_size)
            }
            _ => rounded_outline(body),
        }
    }
}

/// Outcome of one scheduler pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing was invalidated since the last run.
    Clean,
    /// Layout was not valid yet; the recompute re-posted itself.
    Deferred,
    /// The recompute ran.
    Computed,
}

/// Coalesces recompute requests and defers across an unfinished layout
/// pass at most once.
///
/// Input mutations call [`invalidate`](RecomputeScheduler::invalidate);
/// the host calls [`run`](RecomputeScheduler::run) at its yield point.
/// A run that arrives before layout has settled defers itself so it
/// can see final sizes; a second consecutive run computes regardless,
/// so a host stuck mid-layout cannot starve the placement forever.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecomputeScheduler {
    dirty: bool,
    deferred: bool,
}

impl RecomputeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the placement stale. Repeated calls coalesce into one run.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Runs `compute` if a recompute is pending and layout allows it.
    pub fn run<F: FnOnce()>(&mut self, layout_valid: bool, compute: F) -> RunOutcome {
        if !self.dirty {
            return RunOutcome::Clean;
        }
        if !layout_valid && !self.deferred {
            self.deferred = true;
            return RunOutcome::Deferred;
        }
        compute();
        self.dirty = false;
        self.deferred = false;
        RunOutcome::Computed
    }
}
