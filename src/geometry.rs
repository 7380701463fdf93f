// ── Logical geometry ──────────────────────────────────────────────────────────
//
// Layout hands us bounds in logical units plus the transform that maps them
// into the top-level's coordinate space.  This module turns that into the
// device-pixel rectangle a native window can be moved to.
// Pure Rust; no native calls.

use crate::platform::PixelRect;

/// A rectangle in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A logical size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A 2-D affine transform in row-vector convention:
///
/// ```text
/// x' = x * m11 + y * m21 + m31
/// y' = x * m12 + y * m22 + m32
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub m31: f64,
    pub m32: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix { m11: 1.0, m12: 0.0, m21: 0.0, m22: 1.0, m31: 0.0, m32: 0.0 };

    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self { m31: dx, m32: dy, ..Self::IDENTITY }
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self { m11: sx, m22: sy, ..Self::IDENTITY }
    }

    /// `self` applied first, then `other`.
    pub fn then(&self, other: &Matrix) -> Matrix {
        Matrix {
            m11: self.m11 * other.m11 + self.m12 * other.m21,
            m12: self.m11 * other.m12 + self.m12 * other.m22,
            m21: self.m21 * other.m11 + self.m22 * other.m21,
            m22: self.m21 * other.m12 + self.m22 * other.m22,
            m31: self.m31 * other.m11 + self.m32 * other.m21 + other.m31,
            m32: self.m31 * other.m12 + self.m32 * other.m22 + other.m32,
        }
    }

    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.m11 + y * self.m21 + self.m31,
            x * self.m12 + y * self.m22 + self.m32,
        )
    }
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Axis-aligned bounding box of this rectangle after `transform`.
    pub fn transform_to_aabb(&self, transform: &Matrix) -> Rect {
        // Scale + translate maps a rect to a rect; computing the extent
        // directly keeps widths exact instead of `right - left`.
        if transform.m12 == 0.0 && transform.m21 == 0.0 {
            let (x, width) = axis_extent(self.x, self.width, transform.m11, transform.m31);
            let (y, height) = axis_extent(self.y, self.height, transform.m22, transform.m32);
            return Rect::new(x, y, width, height);
        }

        let corners = [
            transform.transform_point(self.x, self.y),
            transform.transform_point(self.right(), self.y),
            transform.transform_point(self.x, self.bottom()),
            transform.transform_point(self.right(), self.bottom()),
        ];

        let (mut left, mut top) = corners[0];
        let (mut right, mut bottom) = corners[0];
        for &(x, y) in &corners[1..] {
            left = left.min(x);
            top = top.min(y);
            right = right.max(x);
            bottom = bottom.max(y);
        }

        Rect::new(left, top, right - left, bottom - top)
    }

    /// Multiply every component by `factor`.
    pub fn scale(&self, factor: f64) -> Rect {
        Rect::new(self.x * factor, self.y * factor, self.width * factor, self.height * factor)
    }
}

fn axis_extent(origin: f64, length: f64, factor: f64, offset: f64) -> (f64, f64) {
    if factor >= 0.0 {
        (origin * factor + offset, length * factor)
    } else {
        ((origin + length) * factor + offset, length * -factor)
    }
}

/// Bounds as produced by layout: a logical rectangle and the transform into
/// the top-level's client space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformedBounds {
    pub bounds: Rect,
    pub transform: Matrix,
}

impl TransformedBounds {
    pub fn new(bounds: Rect, transform: Matrix) -> Self {
        Self { bounds, transform }
    }

    /// Device-pixel rectangle for these bounds on a top-level scaled by
    /// `scale_factor`.
    pub fn to_pixels(&self, scale_factor: f64) -> PixelRect {
        PixelRect::from_rect_truncated(&self.bounds.transform_to_aabb(&self.transform).scale(scale_factor))
    }
}

impl PixelRect {
    /// Truncate toward zero.  Width and height are clamped to at least one
    /// pixel because native windows cannot be zero-sized.
    pub fn from_rect_truncated(rect: &Rect) -> PixelRect {
        PixelRect {
            x: rect.x as i32,
            y: rect.y as i32,
            width: (rect.width as i32).max(1),
            height: (rect.height as i32).max(1),
        }
    }
}

/// Scale a logical size to device pixels, clamped to at least 1×1.
pub(crate) fn size_to_pixels(size: Size, scale_factor: f64) -> (i32, i32) {
    (
        ((size.width * scale_factor) as i32).max(1),
        ((size.height * scale_factor) as i32).max(1),
    )
}
