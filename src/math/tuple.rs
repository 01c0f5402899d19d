//! Homogeneous 4-component tuple
//!
//! A single value type plays three roles: a point (`w == 1`), a direction
//! vector (`w == 0`) or an RGBA color (`x, y, z` = red, green, blue; `w` =
//! alpha). Arithmetic is component-wise and always includes `w`, so the
//! result's role follows from the operands: point - point is a vector,
//! point - vector is a point, vector +/- vector is a vector. point + point
//! yields `w == 2`, which has no meaning and is left unguarded.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::approx_eq;

/// Point, vector or color with four `f32` components.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Tuple4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Point at (x, y, z) with `w == 1`.
pub fn point(x: f32, y: f32, z: f32) -> Tuple4 {
    Tuple4::new(x, y, z, 1.0)
}

/// Direction vector (x, y, z) with `w == 0`.
pub fn vector(x: f32, y: f32, z: f32) -> Tuple4 {
    Tuple4::new(x, y, z, 0.0)
}

/// Opaque color; same layout as a point.
pub fn rgb(r: f32, g: f32, b: f32) -> Tuple4 {
    point(r, g, b)
}

/// Color with an explicit alpha.
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Tuple4 {
    Tuple4::new(r, g, b, a)
}

impl Tuple4 {
    pub const ZERO: Tuple4 = Tuple4::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn r(&self) -> f32 {
        self.x
    }

    pub fn g(&self) -> f32 {
        self.y
    }

    pub fn b(&self) -> f32 {
        self.z
    }

    pub fn a(&self) -> f32 {
        self.w
    }

    /// Exact tag check, `w == 0`.
    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    /// Exact tag check, `w == 1`.
    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    /// Approximate equality: every component pair must differ by less than
    /// [`EPSILON`](super::EPSILON).
    pub fn equals(&self, other: &Tuple4) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.z, other.z)
            && approx_eq(self.w, other.w)
    }

    /// Multiply every component, `w` included, by `scalar`.
    pub fn scale(self, scalar: f32) -> Tuple4 {
        Tuple4::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }

    /// Component-wise (Hadamard/Schur) product. Blends two colors.
    pub fn hadamard(self, other: Tuple4) -> Tuple4 {
        Tuple4::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }

    /// Euclidean norm over all four components, `w` included.
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length in place.
    ///
    /// A zero-length tuple divides by zero and ends up as NaN components.
    pub fn normalize(&mut self) {
        *self /= self.length();
    }

    /// Unit-length copy; see [`Tuple4::normalize`].
    pub fn normalized(mut self) -> Tuple4 {
        self.normalize();
        self
    }

    /// Sum of component-wise products over all four components.
    pub fn dot(&self, other: &Tuple4) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Cross product over x, y and z. The result is always a vector; the
    /// inputs' `w` is ignored and not validated.
    pub fn cross(&self, other: &Tuple4) -> Tuple4 {
        vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Clamp every component independently into `[0, 1]` in place.
    pub fn saturate(&mut self) {
        self.x = self.x.clamp(0.0, 1.0);
        self.y = self.y.clamp(0.0, 1.0);
        self.z = self.z.clamp(0.0, 1.0);
        self.w = self.w.clamp(0.0, 1.0);
    }

    /// Copy clamped into `[0, 1]`; see [`Tuple4::saturate`].
    pub fn saturated(mut self) -> Tuple4 {
        self.saturate();
        self
    }
}

impl Add for Tuple4 {
    type Output = Tuple4;

    fn add(self, rhs: Tuple4) -> Tuple4 {
        Tuple4::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl AddAssign for Tuple4 {
    fn add_assign(&mut self, rhs: Tuple4) {
        *self = *self + rhs;
    }
}

impl Sub for Tuple4 {
    type Output = Tuple4;

    fn sub(self, rhs: Tuple4) -> Tuple4 {
        Tuple4::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl SubAssign for Tuple4 {
    fn sub_assign(&mut self, rhs: Tuple4) {
        *self = *self - rhs;
    }
}

impl Neg for Tuple4 {
    type Output = Tuple4;

    fn neg(self) -> Tuple4 {
        Tuple4::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f32> for Tuple4 {
    type Output = Tuple4;

    fn mul(self, rhs: f32) -> Tuple4 {
        self.scale(rhs)
    }
}

impl MulAssign<f32> for Tuple4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

// Tuple * Tuple is the color blend, not a geometric product.
impl Mul for Tuple4 {
    type Output = Tuple4;

    fn mul(self, rhs: Tuple4) -> Tuple4 {
        self.hadamard(rhs)
    }
}

impl MulAssign for Tuple4 {
    fn mul_assign(&mut self, rhs: Tuple4) {
        *self = self.hadamard(rhs);
    }
}

/// Division follows IEEE semantics; a zero divisor yields inf/NaN.
impl Div<f32> for Tuple4 {
    type Output = Tuple4;

    fn div(self, rhs: f32) -> Tuple4 {
        Tuple4::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl DivAssign<f32> for Tuple4 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl From<[f32; 4]> for Tuple4 {
    fn from(v: [f32; 4]) -> Self {
        Tuple4::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Tuple4> for [f32; 4] {
    fn from(t: Tuple4) -> Self {
        [t.x, t.y, t.z, t.w]
    }
}

impl From<glam::Vec4> for Tuple4 {
    fn from(v: glam::Vec4) -> Self {
        Tuple4::from(v.to_array())
    }
}

impl From<Tuple4> for glam::Vec4 {
    fn from(t: Tuple4) -> Self {
        glam::Vec4::from_array(t.into())
    }
}
