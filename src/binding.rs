//! Property binding: "a place to put a computed value".
//!
//! Two variants exist. A member binding is resolved once at build time against
//! the target's declared shape (`AnimTarget::resolve_member`) and reused every
//! tick; resolution failure surfaces as a build error, never per tick. A
//! callback binding is a plain sink invoked with each computed value, and is
//! the only mechanism when the animated thing is held by copy rather than
//! behind a shared reference.

use crate::value::{Value, ValueKind};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a host object the engine writes into.
pub type TargetRef = Rc<RefCell<dyn AnimTarget>>;

/// Callback sink invoked with each computed value.
pub type SinkFn = Rc<dyn Fn(&Value)>;

/// A resolved accessor over one typed slot of a target's shape. `slot` is an
/// opaque index the target assigned during resolution; `kind` is the declared
/// value kind of that slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MemberRef {
    pub slot: u32,
    pub kind: ValueKind,
}

impl MemberRef {
    pub fn new(slot: u32, kind: ValueKind) -> Self {
        Self { slot, kind }
    }
}

/// Host-implemented write surface over an animatable object.
///
/// `resolve_member` maps a declared member name to an accessor once, at build
/// time; `write_member` applies a computed value through that accessor every
/// tick. Implementations typically match on `member.slot`.
pub trait AnimTarget {
    fn resolve_member(&self, name: &str) -> Option<MemberRef>;
    fn write_member(&mut self, member: MemberRef, value: &Value);
}

/// Explicit owned name -> accessor table for hosts that prefer declaring their
/// shape as data. Slots are assigned in declaration order.
#[derive(Clone, Debug, Default)]
pub struct MemberTable {
    entries: Vec<(String, MemberRef)>,
}

impl MemberTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the next member; its slot is the current entry count.
    pub fn with(mut self, name: &str, kind: ValueKind) -> Self {
        let slot = self.entries.len() as u32;
        self.entries.push((name.to_string(), MemberRef::new(slot, kind)));
        self
    }

    pub fn resolve(&self, name: &str) -> Option<MemberRef> {
        self.entries
            .iter()
            .find_map(|(n, m)| if n == name { Some(*m) } else { None })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The compiled sink of one channel.
#[derive(Clone)]
pub enum Binding {
    /// Write through a resolved member accessor on the animation's target.
    Member(MemberRef),
    /// Invoke a host callback with the computed value.
    Callback(SinkFn),
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Binding::Member(m) => f.debug_tuple("Member").field(m).finish(),
            Binding::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}
