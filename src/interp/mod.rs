//! Interpolation registry: how a pair of same-kind values blends.
//!
//! Each entry reduces to calling the shaped scalar lerp once per independent
//! channel with that channel's own (from, to) pair and the shared progress t;
//! channels are never cross-mixed. Built-ins cover every `ValueKind`; hosts
//! may overwrite them (or register replacements) through `register`.

pub mod functions;

use crate::error::TweenError;
use crate::value::{Color, Point, Rect, RectF, Value, ValueKind};
use hashbrown::HashMap;

/// A shaped scalar lerp: blends one scalar pair at progress t.
pub type ScalarFn = fn(f32, f32, f32) -> f32;

/// A registered blend resolver for one value kind.
pub type BlendFn = Box<dyn Fn(Value, Value, f32, ScalarFn) -> Value>;

pub struct InterpRegistry {
    resolvers: HashMap<ValueKind, BlendFn>,
}

impl Default for InterpRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InterpRegistry {
    /// Build a registry with all built-in kinds registered.
    pub fn new() -> Self {
        let mut reg = Self {
            resolvers: HashMap::new(),
        };
        reg.register(ValueKind::Float, Box::new(blend_float));
        reg.register(ValueKind::Int, Box::new(blend_int));
        reg.register(ValueKind::Byte, Box::new(blend_byte));
        reg.register(ValueKind::Vec2, Box::new(blend_vec2));
        reg.register(ValueKind::Vec3, Box::new(blend_vec3));
        reg.register(ValueKind::Vec4, Box::new(blend_vec4));
        reg.register(ValueKind::Point, Box::new(blend_point));
        reg.register(ValueKind::Rect, Box::new(blend_rect));
        reg.register(ValueKind::RectF, Box::new(blend_rectf));
        reg.register(ValueKind::Color, Box::new(blend_color));
        reg
    }

    /// Insert or overwrite the resolver for a kind. Re-registration is
    /// permitted so hosts can customize built-in behavior.
    pub fn register(&mut self, kind: ValueKind, blend: BlendFn) {
        self.resolvers.insert(kind, blend);
    }

    /// Blend `a` toward `b` at progress `t` using the resolver for `kind`.
    pub fn resolve(
        &self,
        kind: ValueKind,
        a: Value,
        b: Value,
        t: f32,
        scalar: ScalarFn,
    ) -> Result<Value, TweenError> {
        match self.resolvers.get(&kind) {
            Some(blend) => Ok(blend(a, b, t, scalar)),
            None => Err(TweenError::UnsupportedType(kind)),
        }
    }
}

impl std::fmt::Debug for InterpRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpRegistry")
            .field("kinds", &self.resolvers.len())
            .finish()
    }
}

// Built-in resolvers. Pairs are kind-checked before dispatch (at build for
// fixed ends, per apply for providers), so the mismatch arms are a fail-soft
// fallback for direct registry calls.

fn blend_float(a: Value, b: Value, t: f32, f: ScalarFn) -> Value {
    match (a, b) {
        (Value::Float(va), Value::Float(vb)) => Value::Float(f(va, vb, t)),
        _ => a,
    }
}

fn blend_int(a: Value, b: Value, t: f32, f: ScalarFn) -> Value {
    match (a, b) {
        // Truncate toward zero from the raw scalar result, consistent across runs.
        (Value::Int(va), Value::Int(vb)) => Value::Int(f(va as f32, vb as f32, t) as i32),
        _ => a,
    }
}

fn blend_byte(a: Value, b: Value, t: f32, f: ScalarFn) -> Value {
    match (a, b) {
        (Value::Byte(va), Value::Byte(vb)) => {
            Value::Byte(f(va as f32, vb as f32, t).clamp(0.0, 255.0) as u8)
        }
        _ => a,
    }
}

fn blend_vec2(a: Value, b: Value, t: f32, f: ScalarFn) -> Value {
    match (a, b) {
        (Value::Vec2(va), Value::Vec2(vb)) => {
            Value::Vec2([f(va[0], vb[0], t), f(va[1], vb[1], t)])
        }
        _ => a,
    }
}

fn blend_vec3(a: Value, b: Value, t: f32, f: ScalarFn) -> Value {
    match (a, b) {
        (Value::Vec3(va), Value::Vec3(vb)) => Value::Vec3([
            f(va[0], vb[0], t),
            f(va[1], vb[1], t),
            f(va[2], vb[2], t),
        ]),
        _ => a,
    }
}

fn blend_vec4(a: Value, b: Value, t: f32, f: ScalarFn) -> Value {
    match (a, b) {
        (Value::Vec4(va), Value::Vec4(vb)) => Value::Vec4([
            f(va[0], vb[0], t),
            f(va[1], vb[1], t),
            f(va[2], vb[2], t),
            f(va[3], vb[3], t),
        ]),
        _ => a,
    }
}

fn blend_point(a: Value, b: Value, t: f32, f: ScalarFn) -> Value {
    match (a, b) {
        (Value::Point(va), Value::Point(vb)) => Value::Point(Point {
            x: f(va.x as f32, vb.x as f32, t) as i32,
            y: f(va.y as f32, vb.y as f32, t) as i32,
        }),
        _ => a,
    }
}

fn blend_rect(a: Value, b: Value, t: f32, f: ScalarFn) -> Value {
    match (a, b) {
        (Value::Rect(va), Value::Rect(vb)) => Value::Rect(Rect {
            x: f(va.x as f32, vb.x as f32, t) as i32,
            y: f(va.y as f32, vb.y as f32, t) as i32,
            w: f(va.w as f32, vb.w as f32, t) as i32,
            h: f(va.h as f32, vb.h as f32, t) as i32,
        }),
        _ => a,
    }
}

fn blend_rectf(a: Value, b: Value, t: f32, f: ScalarFn) -> Value {
    match (a, b) {
        (Value::RectF(va), Value::RectF(vb)) => Value::RectF(RectF {
            x: f(va.x, vb.x, t),
            y: f(va.y, vb.y, t),
            w: f(va.w, vb.w, t),
            h: f(va.h, vb.h, t),
        }),
        _ => a,
    }
}

fn blend_color(a: Value, b: Value, t: f32, f: ScalarFn) -> Value {
    #[inline]
    fn channel(f: ScalarFn, a: u8, b: u8, t: f32) -> u8 {
        f(a as f32, b as f32, t).clamp(0.0, 255.0) as u8
    }
    match (a, b) {
        (Value::Color(va), Value::Color(vb)) => Value::Color(Color {
            r: channel(f, va.r, vb.r, t),
            g: channel(f, va.g, vb.g, t),
            b: channel(f, va.b, vb.b, t),
            a: channel(f, va.a, vb.a, t),
        }),
        _ => a,
    }
}
