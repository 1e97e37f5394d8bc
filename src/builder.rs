//! Staged fluent construction of animations.
//!
//! The grammar is enforced by types: `TweenBuilder::member`/`setter` yields a
//! `MemberStage`, which only offers `from`, which yields a `FromStage`, which
//! only offers the `to` family. Completing a channel hands the builder back,
//! so channels chain naturally:
//!
//! ```ignore
//! let id = TweenBuilder::animate(sprite.clone())
//!     .member("x")?
//!     .from(Value::f(0.0))
//!     .to(Value::f(100.0))?
//!     .duration_secs(0.5)
//!     .start(&mut engine)?;
//! ```
//!
//! Terminal calls take `&mut self`, so one builder can stamp out any number of
//! instances; the compiled channel list is built once and shared between them.

use crate::binding::{Binding, TargetRef};
use crate::channel::{Channel, ToEnd, ToProvider};
use crate::engine::Engine;
use crate::error::TweenError;
use crate::ids::AnimId;
use crate::interp::{functions, ScalarFn};
use crate::value::{Value, ValueKind};
use std::rc::Rc;

pub struct TweenBuilder {
    target: Option<TargetRef>,
    channels: Vec<Channel>,
    duration_secs: f32,
    on_complete: Option<Rc<dyn Fn()>>,
    /// Shared compiled form handed to spawned instances; invalidated whenever
    /// a channel is added.
    compiled: Option<Rc<[Channel]>>,
}

impl TweenBuilder {
    /// Build animations against a target object.
    pub fn animate(target: TargetRef) -> Self {
        Self {
            target: Some(target),
            channels: Vec::new(),
            duration_secs: 1.0,
            on_complete: None,
            compiled: None,
        }
    }

    /// Build a target-less animation; only callback channels are available,
    /// and member channels can be bound later by spawning onto a target.
    pub fn animate_detached() -> Self {
        Self {
            target: None,
            channels: Vec::new(),
            duration_secs: 1.0,
            on_complete: None,
            compiled: None,
        }
    }

    /// Open a channel writing through a named member of the target. The name
    /// is resolved against the target's shape now; an unknown name fails here,
    /// not at play time.
    pub fn member(mut self, name: &str) -> Result<MemberStage, TweenError> {
        let target = self.target.as_ref().ok_or(TweenError::MissingTarget)?;
        let member = target
            .borrow()
            .resolve_member(name)
            .ok_or_else(|| TweenError::MemberNotFound(name.to_string()))?;
        self.compiled = None;
        Ok(MemberStage {
            builder: self,
            binding: Binding::Member(member),
            declared: Some(member.kind),
        })
    }

    /// Open a channel delivering each computed value to a callback.
    pub fn setter(mut self, sink: impl Fn(&Value) + 'static) -> MemberStage {
        self.compiled = None;
        MemberStage {
            builder: self,
            binding: Binding::Callback(Rc::new(sink)),
            declared: None,
        }
    }

    /// Total play time for one run. Defaults to one second.
    pub fn duration_secs(mut self, secs: f32) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Install a completion callback on every spawned instance.
    pub fn then(mut self, cb: impl Fn() + 'static) -> Self {
        self.on_complete = Some(Rc::new(cb));
        self
    }

    fn compile(&mut self) -> Rc<[Channel]> {
        match &self.compiled {
            Some(shared) => shared.clone(),
            None => {
                let shared: Rc<[Channel]> = self.channels.clone().into();
                self.compiled = Some(shared.clone());
                shared
            }
        }
    }

    fn spawn_inner(
        &mut self,
        engine: &mut Engine,
        target: Option<TargetRef>,
        speed: f32,
        pooled: bool,
    ) -> Result<AnimId, TweenError> {
        if self.duration_secs <= 0.0 || !self.duration_secs.is_finite() {
            return Err(TweenError::InvalidDuration(self.duration_secs));
        }
        let channels = self.compile();
        let target = target.or_else(|| self.target.clone());
        Ok(engine.insert(
            target,
            channels,
            1.0 / self.duration_secs,
            self.on_complete.clone(),
            speed,
            pooled,
        ))
    }

    /// Create a stopped, unenrolled, host-managed instance. The host owns its
    /// lifecycle and the slot is never pooled automatically.
    pub fn spawn(&mut self, engine: &mut Engine) -> Result<AnimId, TweenError> {
        self.spawn_inner(engine, None, 1.0, false)
    }

    /// Like `spawn`, but bound to a different target than the builder's own.
    pub fn spawn_on(
        &mut self,
        engine: &mut Engine,
        target: TargetRef,
    ) -> Result<AnimId, TweenError> {
        self.spawn_inner(engine, Some(target), 1.0, false)
    }

    /// Fire-and-forget: spawn a pooled instance and start it forward.
    pub fn start(&mut self, engine: &mut Engine) -> Result<AnimId, TweenError> {
        let id = self.spawn_inner(engine, None, 1.0, true)?;
        engine.start(id)?;
        Ok(id)
    }

    /// Fire-and-forget, playing from the to-values back to the from-values.
    pub fn start_reversed(&mut self, engine: &mut Engine) -> Result<AnimId, TweenError> {
        let id = self.spawn_inner(engine, None, -1.0, true)?;
        engine.start(id)?;
        Ok(id)
    }

    /// Fire-and-forget onto a different target at the given playback rate.
    pub fn start_on(
        &mut self,
        engine: &mut Engine,
        target: TargetRef,
        speed: f32,
    ) -> Result<AnimId, TweenError> {
        let id = self.spawn_inner(engine, Some(target), speed, true)?;
        engine.start(id)?;
        Ok(id)
    }

    /// Fire-and-forget onto a different target, played backward.
    pub fn start_reversed_on(
        &mut self,
        engine: &mut Engine,
        target: TargetRef,
        speed: f32,
    ) -> Result<AnimId, TweenError> {
        let id = self.spawn_inner(engine, Some(target), -speed, true)?;
        engine.start(id)?;
        Ok(id)
    }
}

impl std::fmt::Debug for TweenBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenBuilder")
            .field("channels", &self.channels.len())
            .field("duration_secs", &self.duration_secs)
            .field("has_target", &self.target.is_some())
            .finish()
    }
}

/// A channel with its sink chosen, waiting for its start value.
pub struct MemberStage {
    builder: TweenBuilder,
    binding: Binding,
    /// Kind declared by the resolved member, if any; callback channels take
    /// their kind from the from-value.
    declared: Option<ValueKind>,
}

impl std::fmt::Debug for MemberStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberStage")
            .field("builder", &self.builder)
            .field("binding", &self.binding)
            .field("declared", &self.declared)
            .finish()
    }
}

impl MemberStage {
    pub fn from(self, value: Value) -> FromStage {
        FromStage {
            builder: self.builder,
            binding: self.binding,
            declared: self.declared,
            from: value,
        }
    }
}

/// A channel with sink and start value chosen, waiting for its end.
pub struct FromStage {
    builder: TweenBuilder,
    binding: Binding,
    declared: Option<ValueKind>,
    from: Value,
}

impl std::fmt::Debug for FromStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromStage")
            .field("builder", &self.builder)
            .field("binding", &self.binding)
            .field("declared", &self.declared)
            .field("from", &self.from)
            .finish()
    }
}

impl FromStage {
    /// Close the channel with a fixed end value and linear easing.
    pub fn to(self, value: Value) -> Result<TweenBuilder, TweenError> {
        let kind = value.kind();
        self.finish(ToEnd::Fixed(value), kind, functions::DEFAULT)
    }

    /// Close the channel with a fixed end value and an explicit scalar shape.
    pub fn to_with(self, value: Value, scalar: ScalarFn) -> Result<TweenBuilder, TweenError> {
        let kind = value.kind();
        self.finish(ToEnd::Fixed(value), kind, scalar)
    }

    /// Close the channel with a live end value, re-polled every tick. Each
    /// poll must return the same kind as the build-time sample; a provider
    /// that drifts surfaces `TypeMismatch` from the applying operation.
    pub fn to_provider(
        self,
        provider: impl Fn() -> Value + 'static,
    ) -> Result<TweenBuilder, TweenError> {
        self.provider_inner(Rc::new(provider), functions::DEFAULT)
    }

    /// Live end value with an explicit scalar shape.
    pub fn to_provider_with(
        self,
        provider: impl Fn() -> Value + 'static,
        scalar: ScalarFn,
    ) -> Result<TweenBuilder, TweenError> {
        self.provider_inner(Rc::new(provider), scalar)
    }

    fn provider_inner(
        self,
        provider: ToProvider,
        scalar: ScalarFn,
    ) -> Result<TweenBuilder, TweenError> {
        // Sample once to learn the provider's kind; later polls must match.
        let kind = provider().kind();
        self.finish(ToEnd::Provider(provider), kind, scalar)
    }

    fn finish(
        self,
        to: ToEnd,
        to_kind: ValueKind,
        scalar: ScalarFn,
    ) -> Result<TweenBuilder, TweenError> {
        let expected = self.declared.unwrap_or_else(|| self.from.kind());
        if self.from.kind() != expected {
            return Err(TweenError::TypeMismatch {
                expected,
                got: self.from.kind(),
            });
        }
        if to_kind != expected {
            return Err(TweenError::TypeMismatch {
                expected,
                got: to_kind,
            });
        }
        let mut builder = self.builder;
        builder.channels.push(Channel {
            binding: self.binding,
            from: self.from,
            to,
            scalar,
            kind: expected,
        });
        Ok(builder)
    }
}
