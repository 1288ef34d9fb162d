// Rectangle algebra shared by the placement pipeline and the outline
// builder. All coordinates are doubles; an empty rect has zero area and
// contains nothing.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Per-side insets used to grow or shrink a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Thickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Thickness {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size anchored at the origin.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn from_point_and_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn area(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.width * self.height
        }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrinks the rect by the given insets. Dimensions clamp at zero; the
    /// origin always moves by the left/top inset.
    pub fn deflate(&self, thickness: Thickness) -> Self {
        Self::new(
            self.x + thickness.left,
            self.y + thickness.top,
            (self.width - thickness.left - thickness.right).max(0.0),
            (self.height - thickness.top - thickness.bottom).max(0.0),
        )
    }

    /// Grows the rect by the given insets, the inverse of [`Rect::deflate`]
    /// for non-negative insets. Dimensions clamp at zero.
    pub fn inflate(&self, thickness: Thickness) -> Self {
        Self::new(
            self.x - thickness.left,
            self.y - thickness.top,
            (self.width + thickness.left + thickness.right).max(0.0),
            (self.height + thickness.top + thickness.bottom).max(0.0),
        )
    }

    /// Intersection of two rects. Disjoint rects yield a zero-size rect,
    /// never an error.
    pub fn intersect(&self, other: &Rect) -> Self {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return Rect::ZERO;
        }
        Self::new(left, top, right - left, bottom - top)
    }

    /// Smallest rect containing both inputs. Zero-size rects still
    /// contribute their origin point.
    pub fn union(&self, other: &Rect) -> Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.left() <= other.left()
            && self.top() <= other.top()
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// Slides `original` fully inside `area`, right/left then bottom/top, so
/// the left and top edges win when `original` is larger than `area`.
pub fn put_rect_inside(original: Rect, area: Rect) -> Rect {
    let mut result = original;
    if result.right() > area.right() {
        result = result.offset(area.right() - result.right(), 0.0);
    }
    if result.left() < area.left() {
        result = result.offset(area.left() - result.left(), 0.0);
    }
    if result.bottom() > area.bottom() {
        result = result.offset(0.0, area.bottom() - result.bottom());
    }
    if result.top() < area.top() {
        result = result.offset(0.0, area.top() - result.top());
    }
    result
}
