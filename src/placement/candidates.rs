// Candidate generation: one potential balloon position per docking side,
// placed flush against the flow-around rect and centered on the cross
// axis, then filtered and ordered by the configured priorities.

use crate::config::DockPriorities;
use crate::geometry::{Point, Rect, Size, Thickness};

/// Edge of the flow-around rect the balloon docks against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Side {
    /// Primary axis of a docking side: Top/Bottom placements slide
    /// horizontally, Left/Right placements slide vertically.
    pub fn axis(self) -> Axis {
        match self {
            Side::Top | Side::Bottom => Axis::Horizontal,
            Side::Left | Side::Right => Axis::Vertical,
        }
    }

    /// One-sided inset of the given depth on this side.
    pub fn inset(self, amount: f64) -> Thickness {
        match self {
            Side::Left => Thickness::new(amount, 0.0, 0.0, 0.0),
            Side::Top => Thickness::new(0.0, amount, 0.0, 0.0),
            Side::Right => Thickness::new(0.0, 0.0, amount, 0.0),
            Side::Bottom => Thickness::new(0.0, 0.0, 0.0, amount),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementCandidate {
    /// Top-left corner of the balloon for this docking side, relative to
    /// the placement area origin.
    pub point: Point,
    pub side: Side,
    pub axis: Axis,
    pub priority: i32,
}

/// Produces the docking candidates for a balloon of `own_size` around
/// `flow_around`, anchored to a target of `anchor_size`.
///
/// Sides with a negative priority are excluded; the rest are ordered by
/// priority descending. Ties keep the declaration order Top, Bottom,
/// Left, Right. The result may be empty.
pub fn placement_candidates(
    own_size: Size,
    anchor_size: Size,
    flow_around: Rect,
    priorities: &DockPriorities,
) -> Vec<PlacementCandidate> {
    let half = Size::new(anchor_size.width / 2.0, anchor_size.height / 2.0);
    let center = Point::new(
        half.width - own_size.width / 2.0,
        half.height - own_size.height / 2.0,
    );
    let flow_center = flow_around.center();

    let sides = [
        (
            Side::Top,
            priorities.top,
            Point::new(
                center.x + flow_center.x,
                half.height - own_size.height + flow_around.top(),
            ),
        ),
        (
            Side::Bottom,
            priorities.bottom,
            Point::new(center.x + flow_center.x, half.height + flow_around.bottom()),
        ),
        (
            Side::Left,
            priorities.left,
            Point::new(
                half.width - own_size.width + flow_around.left(),
                center.y + flow_center.y,
            ),
        ),
        (
            Side::Right,
            priorities.right,
            Point::new(half.width + flow_around.right(), center.y + flow_center.y),
        ),
    ];

    let mut candidates: Vec<PlacementCandidate> = sides
        .into_iter()
        .filter(|(_, priority, _)| *priority >= 0)
        .map(|(side, priority, point)| PlacementCandidate {
            point,
            side,
            axis: side.axis(),
            priority,
        })
        .collect();
    // Stable sort keeps the declaration order for equal priorities.
    candidates.sort_by(|a, b| b.priority.cmp(&a.priority));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priorities(top: i32, bottom: i32, left: i32, right: i32) -> DockPriorities {
        DockPriorities {
            top,
            bottom,
            left,
            right,
        }
    }

    #[test]
    fn candidates_are_sorted_by_priority_descending() {
        let candidates = placement_candidates(
            Size::new(50.0, 30.0),
            Size::default(),
            Rect::new(100.0, 100.0, 25.0, 25.0),
            &priorities(1, 2, 4, 3),
        );
        let sides: Vec<Side> = candidates.iter().map(|c| c.side).collect();
        assert_eq!(sides, vec![Side::Left, Side::Right, Side::Bottom, Side::Top]);
    }

    #[test]
    fn negative_priority_excludes_side() {
        let candidates = placement_candidates(
            Size::new(10.0, 10.0),
            Size::default(),
            Rect::new(0.0, 0.0, 20.0, 20.0),
            &priorities(3, -1, 1, -5),
        );
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| c.side != Side::Bottom));
        assert!(candidates.iter().all(|c| c.side != Side::Right));
    }

    #[test]
    fn all_negative_priorities_yield_empty_list() {
        let candidates = placement_candidates(
            Size::new(10.0, 10.0),
            Size::default(),
            Rect::new(0.0, 0.0, 20.0, 20.0),
            &priorities(-1, -1, -1, -1),
        );
        assert!(candidates.is_empty());
    }

    #[test]
    fn equal_priorities_keep_declaration_order() {
        let candidates = placement_candidates(
            Size::new(10.0, 10.0),
            Size::default(),
            Rect::new(0.0, 0.0, 20.0, 20.0),
            &priorities(1, 1, 1, 1),
        );
        let sides: Vec<Side> = candidates.iter().map(|c| c.side).collect();
        assert_eq!(sides, vec![Side::Top, Side::Bottom, Side::Left, Side::Right]);
    }

    #[test]
    fn left_candidate_sits_flush_with_flow_around() {
        // Zero anchor: the left candidate ends at flow_around.left and is
        // vertically centered on the flow-around rect.
        let candidates = placement_candidates(
            Size::new(50.0, 30.0),
            Size::default(),
            Rect::new(100.0, 100.0, 25.0, 25.0),
            &priorities(-1, -1, 0, -1),
        );
        assert_eq!(candidates.len(), 1);
        let left = &candidates[0];
        assert_eq!(left.point, Point::new(50.0, 97.5));
        assert_eq!(left.axis, Axis::Vertical);
    }

    #[test]
    fn anchor_size_shifts_candidates_by_half() {
        let flow = Rect::new(0.0, 0.0, 10.0, 10.0);
        let own = Size::new(20.0, 20.0);
        let zero = placement_candidates(own, Size::default(), flow, &DockPriorities::default());
        let sized = placement_candidates(own, Size::new(8.0, 6.0), flow, &DockPriorities::default());
        let zero_top = zero.iter().find(|c| c.side == Side::Top).unwrap();
        let sized_top = sized.iter().find(|c| c.side == Side::Top).unwrap();
        assert_eq!(sized_top.point.x - zero_top.point.x, 4.0);
        assert_eq!(sized_top.point.y - zero_top.point.y, 3.0);
    }
}
