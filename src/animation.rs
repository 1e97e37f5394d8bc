//! One tween instance: offset/speed/repeat state plus its compiled channels.
//!
//! Instances live in engine slots and are driven by the engine's step loop;
//! the methods here are the pure per-instance pieces (offset math, the
//! apply-properties pass, pool-safe clearing). Lifecycle transitions that
//! touch the scheduler live on `Engine`.

use crate::binding::{Binding, TargetRef};
use crate::channel::Channel;
use crate::error::TweenError;
use crate::ids::AnimId;
use crate::interp::InterpRegistry;
use std::rc::Rc;

/// A follow-up animation spawned (as a clone) when this one completes.
#[derive(Copy, Clone, Debug)]
pub struct Chain {
    /// Template to clone; the template itself is never played.
    pub next: AnimId,
    /// If true, the clone plays on the completed animation's target instead of
    /// the template's own target.
    pub target_self: bool,
}

pub struct Animation {
    pub(crate) target: Option<TargetRef>,
    pub(crate) channels: Rc<[Channel]>,
    pub(crate) offset: f32,
    pub(crate) speed: f32,
    /// Precomputed 1/duration; converts wall-clock delta into offset delta.
    pub(crate) duration_factor: f32,
    pub(crate) playing: bool,
    pub(crate) repeating: bool,
    pub(crate) in_scheduler: bool,
    /// Return this slot to the free-list when the run finishes.
    pub(crate) pooled: bool,
    /// Step pass in which this instance joined the active set; instances are
    /// never advanced within the pass that enlisted them.
    pub(crate) enlisted_pass: u64,
    pub(crate) on_complete: Option<Rc<dyn Fn()>>,
    pub(crate) chain: Option<Chain>,
}

impl Animation {
    pub(crate) fn empty() -> Self {
        Self {
            target: None,
            channels: Rc::from([]),
            offset: 0.0,
            speed: 1.0,
            duration_factor: 1.0,
            playing: false,
            repeating: false,
            in_scheduler: false,
            pooled: false,
            enlisted_pass: 0,
            on_complete: None,
            chain: None,
        }
    }

    /// Reset every field to its pool-safe default. Runs on the issue-from-pool
    /// path, so a fresh instance inherits nothing from the slot's previous
    /// occupant.
    pub(crate) fn clear(&mut self) {
        *self = Self::empty();
    }

    /// Drop the references a retired instance must not keep alive (target,
    /// channels, callbacks, chain). Scalar state such as the final offset
    /// stays readable through the id until the slot is reissued. The pooled
    /// flag drops too, so a stale id restarted by the host cannot push the
    /// same slot onto the free-list twice.
    pub(crate) fn clear_transient(&mut self) {
        self.target = None;
        self.channels = Rc::from([]);
        self.on_complete = None;
        self.chain = None;
        self.pooled = false;
    }

    /// Progress along the animation's own timeline, in [0,1].
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    pub fn is_repeating(&self) -> bool {
        self.repeating
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Terminal-offset test for the current direction.
    #[inline]
    pub(crate) fn is_done(&self) -> bool {
        (self.speed > 0.0 && self.offset >= 1.0) || (self.speed < 0.0 && self.offset <= 0.0)
    }

    /// Cycle-start offset for the current direction.
    #[inline]
    pub(crate) fn direction_start(&self) -> f32 {
        if self.speed < 0.0 {
            1.0
        } else {
            0.0
        }
    }

    /// Boundary offset the current direction terminates at.
    #[inline]
    pub(crate) fn direction_end(&self) -> f32 {
        if self.speed < 0.0 {
            0.0
        } else {
            1.0
        }
    }

    /// Carry overshoot past the boundary into the next cycle so large steps
    /// preserve average rate instead of discarding the excess. Floor-based so
    /// pathological overshoots (tiny durations, oversized remainder steps)
    /// wrap in one operation; a subtract-1 loop would not terminate once the
    /// offset outgrows f32 integer precision.
    pub(crate) fn wrap_overshoot(&mut self) {
        if self.speed > 0.0 && self.offset >= 1.0 {
            self.offset -= self.offset.floor();
        } else if self.speed < 0.0 && self.offset <= 0.0 {
            self.offset -= self.offset.floor();
            // landing exactly on a cycle boundary seeds the next reverse
            // cycle from its start
            if self.offset == 0.0 {
                self.offset = 1.0;
            }
        }
    }

    /// Write every channel at the given progress, in declaration order.
    /// Progress is clamped to [0,1]; providers are re-polled; channels are
    /// independent within one tick.
    pub(crate) fn apply(
        &self,
        interp: &InterpRegistry,
        progress: f32,
    ) -> Result<(), TweenError> {
        let t = progress.clamp(0.0, 1.0);
        for ch in self.channels.iter() {
            let to = ch.resolve_to();
            // fixed ends were checked at build time; this catches a provider
            // whose kind drifted between polls
            if to.kind() != ch.kind {
                return Err(TweenError::TypeMismatch {
                    expected: ch.kind,
                    got: to.kind(),
                });
            }
            let value = interp.resolve(ch.kind, ch.from, to, t, ch.scalar)?;
            match &ch.binding {
                Binding::Member(member) => {
                    let target = self.target.as_ref().ok_or(TweenError::MissingTarget)?;
                    target.borrow_mut().write_member(*member, &value);
                }
                Binding::Callback(sink) => sink(&value),
            }
        }
        Ok(())
    }

    /// Copy the shared definition from a template (channels, flags, triggers,
    /// timing). The target is assigned separately by the caller.
    pub(crate) fn copy_from(&mut self, other: &Animation) {
        self.channels = other.channels.clone();
        self.offset = other.offset;
        self.speed = other.speed;
        self.duration_factor = other.duration_factor;
        self.repeating = other.repeating;
        self.on_complete = other.on_complete.clone();
        self.chain = other.chain;
    }
}

impl std::fmt::Debug for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animation")
            .field("offset", &self.offset)
            .field("speed", &self.speed)
            .field("duration_factor", &self.duration_factor)
            .field("playing", &self.playing)
            .field("repeating", &self.repeating)
            .field("in_scheduler", &self.in_scheduler)
            .field("pooled", &self.pooled)
            .field("channels", &self.channels.len())
            .field("chain", &self.chain)
            .finish()
    }
}
