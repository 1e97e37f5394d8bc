//! Value kinds and typed values the engine knows how to blend.
//!
//! The set is a closed tagged union: every animatable quantity is carried as a
//! `Value`, and the interpolation registry dispatches on its `ValueKind`. Hosts
//! can override how any kind blends via `InterpRegistry::register`.

use serde::{Deserialize, Serialize};

/// 2D integer point.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Integer rectangle (position + size).
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Float rectangle (position + size).
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RectF {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// RGBA color with 8-bit channels. Canonical channel order is r, g, b, a.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Coarse kind tag used as the interpolation registry key.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Float,
    Int,
    Byte,
    Vec2,
    Vec3,
    Vec4,
    Point,
    Rect,
    RectF,
    Color,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    /// Scalar float
    Float(f32),
    /// Scalar integer; blended results truncate toward zero
    Int(i32),
    /// Scalar byte; blended results truncate and clamp to 0..=255
    Byte(u8),
    /// 2D vector
    Vec2([f32; 2]),
    /// 3D vector
    Vec3([f32; 3]),
    /// 4D vector
    Vec4([f32; 4]),
    /// 2D integer point
    Point(Point),
    /// Integer rectangle (x, y, w, h blended independently)
    Rect(Rect),
    /// Float rectangle
    RectF(RectF),
    /// RGBA color, channels clamped to 0..=255 after blending
    Color(Color),
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_) => ValueKind::Float,
            Value::Int(_) => ValueKind::Int,
            Value::Byte(_) => ValueKind::Byte,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::Vec3(_) => ValueKind::Vec3,
            Value::Vec4(_) => ValueKind::Vec4,
            Value::Point(_) => ValueKind::Point,
            Value::Rect(_) => ValueKind::Rect,
            Value::RectF(_) => ValueKind::RectF,
            Value::Color(_) => ValueKind::Color,
        }
    }

    /// Convenience constructors
    pub fn f(v: f32) -> Self {
        Value::Float(v)
    }

    pub fn i(v: i32) -> Self {
        Value::Int(v)
    }

    pub fn vec2(x: f32, y: f32) -> Self {
        Value::Vec2([x, y])
    }

    pub fn vec3(x: f32, y: f32, z: f32) -> Self {
        Value::Vec3([x, y, z])
    }

    pub fn color(r: u8, g: u8, b: u8, a: u8) -> Self {
        Value::Color(Color::new(r, g, b, a))
    }
}
