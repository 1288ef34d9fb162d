// Connector point resolution: where the leader notch meets the balloon
// edge, in the balloon's local coordinate space.

use crate::error::ConnectorError;
use crate::geometry::{Point, Rect, Size, Thickness};
use crate::placement::Side;

/// Resolved connector geometry cached by the host for rendering.
///
/// Recomputed from scratch whenever any placement input changes; on a
/// resolution failure the previous state is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorState {
    pub side: Side,
    pub is_centered: bool,
    pub connector_size: f64,
    /// Apex of the notch in balloon-local coordinates.
    pub point: Point,
}

/// Balloon body rect in screen space, inset uniformly by the connector
/// depth; the connector lives in the margin around it.
pub fn chrome_bounds(screen_origin: Point, render_size: Size, connector_size: f64) -> Rect {
    Rect::from_point_and_size(screen_origin, render_size)
        .deflate(Thickness::uniform(connector_size))
}

/// Computes the connector apex in balloon-local coordinates.
///
/// A centered connector sits at the midpoint of the docking edge; an
/// off-center one lines up with the anchor's screen-space connection
/// point. The anchor point feeds the arithmetic directly; the
/// half-connector neighborhood rect some hosts build around it has no
/// effect on the result and is not computed here. Fails when the
/// balloon has no screen position yet, in which case the caller keeps
/// its previous [`ConnectorState`].
pub fn resolve_connector_point(
    side: Side,
    is_centered: bool,
    connector_size: f64,
    screen_origin: Option<Point>,
    render_size: Size,
    anchor_point: Point,
) -> Result<Point, ConnectorError> {
    let origin = screen_origin.ok_or(ConnectorError::NotPositioned)?;
    let chrome = chrome_bounds(origin, render_size, connector_size);

    let point = match side {
        Side::Top | Side::Bottom => {
            let x = if is_centered {
                connector_size + chrome.width / 2.0
            } else {
                connector_size + (anchor_point.x - chrome.left())
            };
            let y = match side {
                Side::Top => 0.0,
                _ => chrome.height + 2.0 * connector_size,
            };
            Point::new(x, y)
        }
        Side::Left | Side::Right => {
            let y = if is_centered {
                connector_size + chrome.height / 2.0
            } else {
                connector_size + (anchor_point.y - chrome.top())
            };
            let x = match side {
                Side::Left => 0.0,
                _ => chrome.width + 2.0 * connector_size,
            };
            Point::new(x, y)
        }
    };
    Ok(point)
}
