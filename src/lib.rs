//! Property tweening engine.
//!
//! Animations interpolate typed values over a normalized [0,1] offset and
//! write them into host objects through member bindings or callbacks. An
//! [`Engine`] owns all instance state behind [`AnimId`] handles and drives it
//! from explicit [`Engine::step`] calls with sub-stepping for large deltas;
//! [`TweenBuilder`] is the staged construction surface; the
//! [`interp::InterpRegistry`] maps each [`ValueKind`] to its blend resolver
//! and is open to host extension.

pub mod animation;
pub mod binding;
pub mod builder;
pub mod channel;
pub mod config;
pub mod ease;
pub mod engine;
pub mod error;
pub mod ids;
pub mod interp;
pub mod value;

// Re-exports for consumers
pub use animation::Animation;
pub use binding::{AnimTarget, Binding, MemberRef, MemberTable, SinkFn, TargetRef};
pub use builder::{FromStage, MemberStage, TweenBuilder};
pub use channel::{Channel, ToEnd, ToProvider};
pub use config::Config;
pub use engine::Engine;
pub use error::TweenError;
pub use ids::AnimId;
pub use interp::{functions, BlendFn, InterpRegistry, ScalarFn};
pub use value::{Color, Point, Rect, RectF, Value, ValueKind};
