// Balloon outline path: a rounded rectangle with, when a connector is
// shown, one edge broken by a two-leg notch converging on the apex.

use crate::geometry::{Point, Rect, Size, Thickness};
use crate::placement::Side;

/// Radius of the quarter-round corners.
pub const CORNER_RADIUS: f64 = 2.0;

/// Width of the notch opening relative to the connector depth.
const NOTCH_WIDTH_FACTOR: f64 = 1.5;

/// One step of an outline path, ready for any path-based backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    Close,
}

/// Serializes path commands as SVG path data.
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut data = String::new();
    for command in commands {
        if !data.is_empty() {
            data.push(' ');
        }
        match command {
            PathCommand::MoveTo(p) => data.push_str(&format!("M {:.2} {:.2}", p.x, p.y)),
            PathCommand::LineTo(p) => data.push_str(&format!("L {:.2} {:.2}", p.x, p.y)),
            PathCommand::CubicTo(c1, c2, p) => data.push_str(&format!(
                "C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                c1.x, c1.y, c2.x, c2.y, p.x, p.y
            )),
            PathCommand::Close => data.push('Z'),
        }
    }
    data
}

// Straight run plus quarter-round corner for one side, walking the
// body clockwise. Each side ends where the next one picks up.
fn push_side(commands: &mut Vec<PathCommand>, body: Rect, side: Side) {
    let r = CORNER_RADIUS;
    let (l, t, rt, b) = (body.left(), body.top(), body.right(), body.bottom());
    match side {
        Side::Left => {
            commands.push(PathCommand::LineTo(Point::new(l, t + r)));
            commands.push(PathCommand::CubicTo(
                Point::new(l, t),
                Point::new(l + r, t),
                Point::new(l + r, t),
            ));
        }
        Side::Top => {
            commands.push(PathCommand::LineTo(Point::new(rt - r, t)));
            commands.push(PathCommand::CubicTo(
                Point::new(rt, t),
                Point::new(rt, t + r),
                Point::new(rt, t + r),
            ));
        }
        Side::Right => {
            commands.push(PathCommand::LineTo(Point::new(rt, b - r)));
            commands.push(PathCommand::CubicTo(
                Point::new(rt, b - r),
                Point::new(rt, b),
                Point::new(rt - r, b),
            ));
        }
        Side::Bottom => {
            commands.push(PathCommand::LineTo(Point::new(l + r, b)));
            commands.push(PathCommand::CubicTo(
                Point::new(l, b),
                Point::new(l, b - r),
                Point::new(l, b - r),
            ));
        }
    }
}

// Clockwise side order beginning at the docking side.
fn sides_clockwise(start: Side) -> [Side; 4] {
    match start {
        Side::Left => [Side::Left, Side::Top, Side::Right, Side::Bottom],
        Side::Top => [Side::Top, Side::Right, Side::Bottom, Side::Left],
        Side::Right => [Side::Right, Side::Bottom, Side::Left, Side::Top],
        Side::Bottom => [Side::Bottom, Side::Left, Side::Top, Side::Right],
    }
}

/// Outline with the docking edge broken by a notch toward `apex`.
///
/// The notch legs are clamped so they never run into the rounded
/// corners of the docking edge.
pub fn notched_outline(
    body: Rect,
    side: Side,
    apex: Point,
    connector_size: f64,
) -> Vec<PathCommand> {
    let half_notch = connector_size * NOTCH_WIDTH_FACTOR / 2.0;
    let align_x = |x: f64| {
        x.max(body.left() + CORNER_RADIUS)
            .min(body.right() - CORNER_RADIUS)
    };
    let align_y = |y: f64| {
        y.max(body.top() + CORNER_RADIUS)
            .min(body.bottom() - CORNER_RADIUS)
    };

    let (leg_in, leg_out) = match side {
        Side::Left => (
            Point::new(body.left(), align_y(apex.y - half_notch)),
            Point::new(body.left(), align_y(apex.y + half_notch)),
        ),
        Side::Top => (
            Point::new(align_x(apex.x + half_notch), body.top()),
            Point::new(align_x(apex.x - half_notch), body.top()),
        ),
        Side::Right => (
            Point::new(body.right(), align_y(apex.y + half_notch)),
            Point::new(body.right(), align_y(apex.y - half_notch)),
        ),
        Side::Bottom => (
            Point::new(align_x(apex.x - half_notch), body.bottom()),
            Point::new(align_x(apex.x + half_notch), body.bottom()),
        ),
    };

    let mut commands = vec![PathCommand::MoveTo(apex), PathCommand::LineTo(leg_in)];
    for walk in sides_clockwise(side) {
        push_side(&mut commands, body, walk);
    }
    commands.push(PathCommand::LineTo(leg_out));
    commands.push(PathCommand::Close);
    commands
}

/// Plain rounded-rectangle outline, used when the connector is hidden
/// or the balloon is not connected to a target.
pub fn rounded_outline(body: Rect) -> Vec<PathCommand> {
    let mut commands = vec![PathCommand::MoveTo(Point::new(
        body.left(),
        body.top() + CORNER_RADIUS,
    ))];
    commands.push(PathCommand::CubicTo(
        Point::new(body.left(), body.top()),
        Point::new(body.left() + CORNER_RADIUS, body.top()),
        Point::new(body.left() + CORNER_RADIUS, body.top()),
    ));
    for side in [Side::Top, Side::Right, Side::Bottom] {
        push_side(&mut commands, body, side);
    }
    commands.push(PathCommand::Close);
    commands
}

/// Total edge insets around hosted content: the control padding, the
/// body padding, and the connector margin on the docking side while a
/// visible connector is attached.
pub fn total_padding(
    padding: Thickness,
    body_padding: Thickness,
    connected_side: Option<Side>,
    connector_size: f64,
) -> Thickness {
    let connector = match connected_side {
        Some(side) => side.inset(connector_size),
        None => Thickness::default(),
    };
    Thickness::new(
        padding.left + body_padding.left + connector.left,
        padding.top + body_padding.top + connector.top,
        padding.right + body_padding.right + connector.right,
        padding.bottom + body_padding.bottom + connector.bottom,
    )
}

/// Rect available to the balloon body inside the rendered size, after
/// reserving the connector margin on the docking side.
pub fn content_bounds(
    render_size: Size,
    body_padding: Thickness,
    connected_side: Option<Side>,
    connector_size: f64,
) -> Rect {
    let body = Rect::from_size(render_size).deflate(body_padding);
    match connected_side {
        Some(side) => body.deflate(side.inset(connector_size)),
        None => body,
    }
}
