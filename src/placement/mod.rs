// Placement pipeline: candidate generation, selection, then boundary
// correction, in one pass over shared-coordinate-space inputs.

pub mod candidates;
pub mod corrector;
pub mod selector;

pub use candidates::{placement_candidates, Axis, PlacementCandidate, Side};
pub use corrector::correct_placement;
pub use selector::select_placement;

use crate::config::DockPriorities;
use crate::geometry::{Rect, Size};

/// Final outcome of the placement pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChosenPlacement {
    /// Balloon bounds, in the same coordinate space as the inputs.
    pub bounds: Rect,
    /// Docking side the bounds were generated for.
    pub side: Side,
    /// True when no correction moved the bounds, so the connector may
    /// sit at the midpoint of the docking edge.
    pub is_centered: bool,
}

/// Runs the full pipeline: generate docking candidates, pick the best
/// one, then nudge it back into `placement_area`.
///
/// All rect inputs must share one coordinate space. Returns `None` when
/// every side is excluded by a negative priority; the caller leaves the
/// balloon unpositioned in that case.
pub fn compute_placement(
    own_size: Size,
    anchor_size: Size,
    flow_around: Rect,
    placement_area: Rect,
    priorities: &DockPriorities,
    connector_size: f64,
) -> Option<ChosenPlacement> {
    let candidates = placement_candidates(own_size, anchor_size, flow_around, priorities);
    let (bounds, side) = select_placement(&candidates, placement_area, flow_around, own_size)?;
    let (corrected, is_centered) =
        correct_placement(bounds, placement_area, flow_around, side, connector_size);
    Some(ChosenPlacement {
        bounds: corrected,
        side,
        is_centered,
    })
}
