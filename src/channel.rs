//! One animated channel: (binding, from, to-or-provider, scalar fn) compiled
//! by the builder and replayed in declaration order every tick.

use crate::binding::Binding;
use crate::interp::ScalarFn;
use crate::value::{Value, ValueKind};
use std::rc::Rc;

/// Live-polled end value: lets a channel chase a moving target.
pub type ToProvider = Rc<dyn Fn() -> Value>;

/// The end of a channel's value range.
#[derive(Clone)]
pub enum ToEnd {
    Fixed(Value),
    /// Re-evaluated on every apply call.
    Provider(ToProvider),
}

impl std::fmt::Debug for ToEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToEnd::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            ToEnd::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// One compiled animated channel.
#[derive(Clone, Debug)]
pub struct Channel {
    pub binding: Binding,
    pub from: Value,
    pub to: ToEnd,
    pub scalar: ScalarFn,
    pub kind: ValueKind,
}

impl Channel {
    /// Current end value; providers are polled here, once per apply.
    #[inline]
    pub fn resolve_to(&self) -> Value {
        match &self.to {
            ToEnd::Fixed(v) => *v,
            ToEnd::Provider(get) => get(),
        }
    }
}
