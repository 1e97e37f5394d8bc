#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use tween_core::{AnimTarget, Color, MemberRef, MemberTable, Point, Value, ValueKind};

pub fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// Minimal host object: a sprite with a handful of typed members.
#[derive(Debug)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub width: i32,
    pub pos: Point,
    pub tint: Color,
    /// Total member writes observed, all channels.
    pub writes: u32,
    members: MemberTable,
}

impl Sprite {
    pub fn new() -> Rc<RefCell<Sprite>> {
        Rc::new(RefCell::new(Sprite {
            x: 0.0,
            y: 0.0,
            width: 0,
            pos: Point::new(0, 0),
            tint: Color::new(0, 0, 0, 255),
            writes: 0,
            members: MemberTable::new()
                .with("x", ValueKind::Float)
                .with("y", ValueKind::Float)
                .with("width", ValueKind::Int)
                .with("pos", ValueKind::Point)
                .with("tint", ValueKind::Color),
        }))
    }
}

impl AnimTarget for Sprite {
    fn resolve_member(&self, name: &str) -> Option<MemberRef> {
        self.members.resolve(name)
    }

    fn write_member(&mut self, member: MemberRef, value: &Value) {
        self.writes += 1;
        match (member.slot, value) {
            (0, Value::Float(v)) => self.x = *v,
            (1, Value::Float(v)) => self.y = *v,
            (2, Value::Int(v)) => self.width = *v,
            (3, Value::Point(v)) => self.pos = *v,
            (4, Value::Color(v)) => self.tint = *v,
            _ => {}
        }
    }
}

/// Shared sink that records every value a callback channel delivers.
pub fn recording_sink() -> (Rc<RefCell<Vec<Value>>>, impl Fn(&Value) + 'static) {
    let seen: Rc<RefCell<Vec<Value>>> = Rc::new(RefCell::new(Vec::new()));
    let writer = seen.clone();
    (seen, move |v: &Value| writer.borrow_mut().push(*v))
}
