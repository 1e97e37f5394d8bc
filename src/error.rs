//! Error taxonomy for build, lifecycle, and step operations.
//!
//! Everything is reported synchronously to the caller of the triggering
//! operation; nothing is retried or swallowed internally.

use crate::ids::AnimId;
use crate::value::ValueKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TweenError {
    /// Declared channel could not be resolved on the target's shape.
    #[error("no member named '{0}' on animation target")]
    MemberNotFound(String),

    /// from/to (or member) value kinds disagree at build time.
    #[error("value kind mismatch: expected {expected:?}, got {got:?}")]
    TypeMismatch { expected: ValueKind, got: ValueKind },

    /// No blend resolver registered for a bound value's kind. Surfaces the
    /// first time the channel is applied, since registration may happen after
    /// construction.
    #[error("no interpolation resolver registered for value kind {0:?}")]
    UnsupportedType(ValueKind),

    /// Host misuse of the lifecycle surface (e.g. mutating repeat/once flags
    /// or cloning while playing).
    #[error("invalid animation state: {0}")]
    StateViolation(&'static str),

    /// `step` was called with a negative delta time.
    #[error("negative delta time: {0}")]
    NegativeDelta(f32),

    /// Duration must be strictly positive.
    #[error("animation duration must be positive, got {0} seconds")]
    InvalidDuration(f32),

    /// A member channel was declared but the builder has no target to resolve
    /// it against.
    #[error("animation has member channels but no target")]
    MissingTarget,

    /// The id does not refer to a live engine slot.
    #[error("unknown animation id {0:?}")]
    UnknownAnimation(AnimId),
}
