// Candidate selection: first fit wins, otherwise the candidate covering
// the most of the placement area.

use crate::geometry::{Rect, Size};

use super::candidates::{PlacementCandidate, Side};

/// Picks the placement to use from the priority-ordered candidate list.
///
/// The first candidate whose bounds are fully contained in
/// `placement_area` and clear of `flow_around` wins. When no candidate
/// fits, the one with the largest intersection area with the placement
/// area is chosen; equal areas keep the earlier (higher-priority)
/// candidate. Returns `None` only for an empty candidate list.
pub fn select_placement(
    candidates: &[PlacementCandidate],
    placement_area: Rect,
    flow_around: Rect,
    own_size: Size,
) -> Option<(Rect, Side)> {
    if candidates.is_empty() {
        return None;
    }

    let bounds: Vec<Rect> = candidates
        .iter()
        .map(|candidate| {
            Rect::new(
                candidate.point.x,
                candidate.point.y,
                own_size.width,
                own_size.height,
            )
        })
        .collect();

    let mut overlap_areas = vec![0.0f64; bounds.len()];
    let mut chosen = bounds.len();
    for (index, rect) in bounds.iter().enumerate() {
        let flow_intersection = rect.intersect(&flow_around);
        // A sliver thinner than machine epsilon counts as clear.
        let clear_of_flow = flow_intersection.is_empty()
            || flow_intersection.width < f64::EPSILON
            || flow_intersection.height < f64::EPSILON;
        if placement_area.contains_rect(rect) && clear_of_flow {
            chosen = index;
            break;
        }
        overlap_areas[index] = placement_area.intersect(rect).area();
    }

    if chosen == bounds.len() {
        // Nothing fits outright; keep the earliest maximum so that ties
        // resolve toward higher priority.
        chosen = 0;
        let mut max_area = overlap_areas[0];
        for (index, area) in overlap_areas.iter().enumerate().skip(1) {
            if *area > max_area {
                max_area = *area;
                chosen = index;
            }
        }
    }

    Some((bounds[chosen], candidates[chosen].side))
}
