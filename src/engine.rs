//! The engine: slot storage, free-list pool, active set, and the step loop.
//!
//! All animation state lives in engine-owned slots addressed by `AnimId`;
//! every lifecycle operation goes through the engine so there is exactly one
//! place that maintains the scheduler and pool invariants. Targets are
//! `Rc<RefCell<_>>` handles, so an engine is single-threaded by construction.

use crate::animation::{Animation, Chain};
use crate::binding::TargetRef;
use crate::channel::Channel;
use crate::config::Config;
use crate::error::TweenError;
use crate::ids::AnimId;
use crate::interp::{BlendFn, InterpRegistry};
use crate::value::ValueKind;
use std::rc::Rc;

pub struct Engine {
    cfg: Config,
    interp: InterpRegistry,
    slots: Vec<Animation>,
    /// Cleared slots available for reuse.
    free: Vec<AnimId>,
    /// Ids currently enrolled in the step loop, in enrollment order.
    active: Vec<AnimId>,
    /// Monotonic sub-step counter; `Animation::enlisted_pass` compares
    /// against this to defer newly enlisted instances by one sub-step.
    pass: u64,
    pool_reuse: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Engine {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            interp: InterpRegistry::new(),
            slots: Vec::new(),
            free: Vec::new(),
            active: Vec::new(),
            pass: 0,
            pool_reuse: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.cfg
    }

    /// Insert or overwrite the blend resolver for a value kind.
    pub fn register_resolver(&mut self, kind: ValueKind, blend: BlendFn) {
        self.interp.register(kind, blend);
    }

    // ---------------------------------------------------------------- slots

    fn slot(&self, id: AnimId) -> Result<&Animation, TweenError> {
        self.slots
            .get(id.index())
            .ok_or(TweenError::UnknownAnimation(id))
    }

    fn slot_mut(&mut self, id: AnimId) -> Result<&mut Animation, TweenError> {
        self.slots
            .get_mut(id.index())
            .ok_or(TweenError::UnknownAnimation(id))
    }

    /// Read-only view of one animation's state.
    pub fn animation(&self, id: AnimId) -> Result<&Animation, TweenError> {
        self.slot(id)
    }

    pub fn offset(&self, id: AnimId) -> Result<f32, TweenError> {
        Ok(self.slot(id)?.offset())
    }

    pub fn is_playing(&self, id: AnimId) -> Result<bool, TweenError> {
        Ok(self.slot(id)?.is_playing())
    }

    pub fn is_repeating(&self, id: AnimId) -> Result<bool, TweenError> {
        Ok(self.slot(id)?.is_repeating())
    }

    /// Take a slot from the free-list, or grow storage. Retirement only drops
    /// references; the full reset happens here so a fresh instance never
    /// inherits the previous occupant's state.
    pub(crate) fn acquire(&mut self) -> AnimId {
        if let Some(id) = self.free.pop() {
            self.pool_reuse += 1;
            self.slots[id.index()].clear();
            id
        } else {
            let id = AnimId(self.slots.len() as u32);
            self.slots.push(Animation::empty());
            id
        }
    }

    /// Populate a fresh slot from builder output.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn insert(
        &mut self,
        target: Option<TargetRef>,
        channels: Rc<[Channel]>,
        duration_factor: f32,
        on_complete: Option<Rc<dyn Fn()>>,
        speed: f32,
        pooled: bool,
    ) -> AnimId {
        let id = self.acquire();
        let anim = &mut self.slots[id.index()];
        anim.target = target;
        anim.channels = channels;
        anim.duration_factor = duration_factor;
        anim.on_complete = on_complete;
        anim.speed = speed;
        anim.pooled = pooled;
        id
    }

    fn retire(&mut self, id: AnimId) {
        // References are dropped now; the full reset happens when the slot is
        // reissued, so the final offset stays inspectable in the meantime.
        self.slots[id.index()].clear_transient();
        self.free.push(id);
        log::debug!("retired animation {:?} to pool (free={})", id, self.free.len());
    }

    /// Slots handed out since pool reuse last happened, i.e. the free-list
    /// length right now.
    pub fn pool_len(&self) -> usize {
        self.free.len()
    }

    /// How many times a slot has been reissued from the pool.
    pub fn pool_reuse(&self) -> u64 {
        self.pool_reuse
    }

    /// Drop every pooled slot. Ids of the dropped slots become permanently
    /// dead (their storage is never reissued); live instances are untouched.
    /// Lets long-lived hosts shed a pool grown by a burst of animations.
    pub fn clear_pool(&mut self) {
        if !self.free.is_empty() {
            log::debug!("dropped {} pooled slots", self.free.len());
            self.free.clear();
        }
    }

    // ------------------------------------------------------------ scheduler

    /// Number of animations enrolled in the step loop.
    pub fn count(&self) -> usize {
        self.active.len()
    }

    /// Enroll an animation in the step loop. Idempotent: an already enrolled
    /// id is left where it is. The instance will not advance within the
    /// sub-step that enlisted it.
    pub fn add(&mut self, id: AnimId) -> Result<(), TweenError> {
        let pass = self.pass;
        let anim = self.slot_mut(id)?;
        if anim.in_scheduler {
            return Ok(());
        }
        anim.in_scheduler = true;
        anim.enlisted_pass = pass;
        self.active.push(id);
        Ok(())
    }

    /// Withdraw an animation from the step loop. Safe mid-iteration. A pooled
    /// instance whose run has finished is retired to the free-list here; a
    /// still-running or unpooled instance keeps its state.
    pub fn remove(&mut self, id: AnimId) -> Result<(), TweenError> {
        let should_retire = {
            let anim = self.slot_mut(id)?;
            if !anim.in_scheduler {
                return Ok(());
            }
            anim.in_scheduler = false;
            anim.pooled && !anim.repeating && anim.is_done()
        };
        if let Some(pos) = self.active.iter().position(|a| *a == id) {
            self.active.remove(pos);
        }
        if should_retire {
            self.retire(id);
        }
        Ok(())
    }

    /// Hard reset: drop every enrollment and stop every enrolled animation.
    /// Nothing is pooled; slot state other than playing/membership survives.
    pub fn clear(&mut self) {
        let dropped = self.active.len();
        for id in std::mem::take(&mut self.active) {
            if let Some(anim) = self.slots.get_mut(id.index()) {
                anim.in_scheduler = false;
                anim.playing = false;
            }
        }
        if dropped > 0 {
            log::debug!("cleared scheduler ({dropped} animations dropped)");
        }
    }

    // ------------------------------------------------------------- stepping

    /// Advance time by `dt` seconds. A delta above `max_step_seconds` is split
    /// into up to `max_sub_steps` equal sub-steps; whatever remains after the
    /// cap is applied as one final oversized step so no time is lost.
    pub fn step(&mut self, dt: f32) -> Result<(), TweenError> {
        if dt < 0.0 {
            return Err(TweenError::NegativeDelta(dt));
        }
        match self.cfg.max_step_seconds {
            Some(max) if dt > max => {
                let mut left = dt;
                let mut budget = self.cfg.max_sub_steps;
                while left > 0.0 && budget > 0 {
                    self.step_once(left.min(max))?;
                    left -= max;
                    budget -= 1;
                }
                if left > 0.0 {
                    log::warn!(
                        "step of {dt}s exceeded {} sub-steps of {max}s; applying {left}s in one final step",
                        self.cfg.max_sub_steps
                    );
                    self.step_once(left)?;
                }
            }
            _ => self.step_once(dt)?,
        }
        Ok(())
    }

    fn step_once(&mut self, dt: f32) -> Result<(), TweenError> {
        self.pass = self.pass.wrapping_add(1);
        let mut i = 0;
        while i < self.active.len() {
            let id = self.active[i];
            self.update_one(id, dt)?;
            let finished = {
                let anim = &self.slots[id.index()];
                anim.in_scheduler && !anim.repeating && anim.is_done()
            };
            if finished {
                self.remove(id)?;
            }
            // Completion triggers may have mutated the active set. Only move
            // the cursor when the entry under it is still the id just
            // processed; otherwise a removal has already shifted the next
            // element into place.
            if self.active.get(i).copied() == Some(id) {
                i += 1;
            }
        }
        Ok(())
    }

    fn update_one(&mut self, id: AnimId, dt: f32) -> Result<(), TweenError> {
        let (reached_end, progress) = {
            let pass = self.pass;
            let anim = &mut self.slots[id.index()];
            if anim.enlisted_pass == pass {
                return Ok(());
            }
            if !anim.playing || anim.is_done() {
                return Ok(());
            }
            anim.offset += dt * anim.speed * anim.duration_factor;
            if anim.is_done() {
                let end = anim.direction_end();
                if anim.repeating {
                    anim.wrap_overshoot();
                } else {
                    anim.offset = end;
                    anim.playing = false;
                }
                (true, end)
            } else {
                (false, anim.offset)
            }
        };
        self.slots[id.index()].apply(&self.interp, progress)?;
        if reached_end {
            let (on_complete, chain, own_target) = {
                let anim = &self.slots[id.index()];
                (anim.on_complete.clone(), anim.chain, anim.target.clone())
            };
            if let Some(cb) = on_complete {
                cb();
            }
            if let Some(chain) = chain {
                let target = if chain.target_self { own_target } else { None };
                self.spawn_chained(chain.next, target)?;
            }
        }
        Ok(())
    }

    /// Clone the chain template and start the clone, possibly retargeted onto
    /// the completed animation's target. Clones of chain templates are always
    /// pooled single-run instances.
    fn spawn_chained(
        &mut self,
        template: AnimId,
        target: Option<TargetRef>,
    ) -> Result<(), TweenError> {
        let id = self.clone_slot(template, target)?;
        {
            let anim = &mut self.slots[id.index()];
            anim.pooled = true;
            anim.repeating = false;
            anim.offset = anim.direction_start();
        }
        self.start(id)
    }

    /// Copy a non-playing, non-enrolled template into a fresh slot. The clone
    /// gets `target` if given, else the template's own target; poolability is
    /// not inherited.
    fn clone_slot(
        &mut self,
        src: AnimId,
        target: Option<TargetRef>,
    ) -> Result<AnimId, TweenError> {
        {
            let tmpl = self.slot(src)?;
            if tmpl.playing {
                return Err(TweenError::StateViolation(
                    "cannot clone a playing animation",
                ));
            }
            if tmpl.in_scheduler {
                return Err(TweenError::StateViolation(
                    "cannot clone an animation enrolled in the scheduler",
                ));
            }
        }
        let id = self.acquire();
        // Slot indices are stable across acquire (push only), so re-borrow.
        let (tmpl_target, snapshot) = {
            let tmpl = &self.slots[src.index()];
            let mut copy = Animation::empty();
            copy.copy_from(tmpl);
            (tmpl.target.clone(), copy)
        };
        let anim = &mut self.slots[id.index()];
        anim.copy_from(&snapshot);
        anim.target = target.or(tmpl_target);
        Ok(id)
    }

    // ------------------------------------------------------------ lifecycle

    /// Begin (or resume) playback: a finished run rewinds to its direction
    /// start, the animation is enrolled, and, when configured, the from-values
    /// are written immediately so the target snaps to the starting pose.
    pub fn start(&mut self, id: AnimId) -> Result<(), TweenError> {
        let progress = {
            let anim = self.slot_mut(id)?;
            if anim.is_done() {
                anim.offset = anim.direction_start();
            }
            anim.offset
        };
        self.add(id)?;
        if self.cfg.apply_on_start {
            self.slots[id.index()].apply(&self.interp, progress)?;
        }
        self.slots[id.index()].playing = true;
        Ok(())
    }

    /// Pause playback and leave the step loop. Offset is kept, so `start`
    /// resumes mid-flight. A finished pooled instance is retired here.
    pub fn stop(&mut self, id: AnimId) -> Result<(), TweenError> {
        self.slot_mut(id)?.playing = false;
        self.remove(id)
    }

    /// Rewind to the direction start and write the starting pose immediately.
    /// Playing and enrollment are untouched.
    pub fn reset(&mut self, id: AnimId) -> Result<(), TweenError> {
        let progress = {
            let anim = self.slot_mut(id)?;
            anim.offset = anim.direction_start();
            anim.offset
        };
        self.slots[id.index()].apply(&self.interp, progress)
    }

    /// Jump to an arbitrary offset (clamped to [0,1]) and write that pose.
    pub fn set_offset(&mut self, id: AnimId, offset: f32) -> Result<(), TweenError> {
        let progress = {
            let anim = self.slot_mut(id)?;
            anim.offset = offset.clamp(0.0, 1.0);
            anim.offset
        };
        self.slots[id.index()].apply(&self.interp, progress)
    }

    /// Flip the playback direction in place. Offset is untouched, so a
    /// mid-flight animation plays back the way it came.
    pub fn reverse(&mut self, id: AnimId) -> Result<(), TweenError> {
        let anim = self.slot_mut(id)?;
        anim.speed = -anim.speed;
        Ok(())
    }

    /// Set the playback rate. Negative plays backward; magnitude scales time.
    pub fn set_speed(&mut self, id: AnimId, speed: f32) -> Result<(), TweenError> {
        self.slot_mut(id)?.speed = speed;
        Ok(())
    }

    /// Run once and finish. Rejected while playing.
    pub fn set_once(&mut self, id: AnimId) -> Result<(), TweenError> {
        let anim = self.slot_mut(id)?;
        if anim.playing {
            return Err(TweenError::StateViolation(
                "cannot change repeat mode while playing",
            ));
        }
        anim.repeating = false;
        Ok(())
    }

    /// Wrap at the boundary and keep running. Rejected while playing.
    pub fn set_repeat(&mut self, id: AnimId) -> Result<(), TweenError> {
        let anim = self.slot_mut(id)?;
        if anim.playing {
            return Err(TweenError::StateViolation(
                "cannot change repeat mode while playing",
            ));
        }
        anim.repeating = true;
        Ok(())
    }

    /// Invoke a callback each time the animation reaches its end boundary.
    /// Replaces any previously installed completion callback.
    pub fn then(&mut self, id: AnimId, cb: impl Fn() + 'static) -> Result<(), TweenError> {
        self.slot_mut(id)?.on_complete = Some(Rc::new(cb));
        Ok(())
    }

    /// When the animation completes, clone `next` and play the clone. The
    /// template `next` itself never plays. With `target_self`, the clone is
    /// retargeted onto the completed animation's target.
    pub fn then_animation(
        &mut self,
        id: AnimId,
        next: AnimId,
        target_self: bool,
    ) -> Result<(), TweenError> {
        self.slot(next)?;
        self.slot_mut(id)?.chain = Some(Chain { next, target_self });
        Ok(())
    }

    /// Clone a non-playing animation onto another target. The clone starts at
    /// its direction-appropriate bound, stopped and unenrolled.
    pub fn clone_onto(&mut self, id: AnimId, target: TargetRef) -> Result<AnimId, TweenError> {
        let clone = self.clone_slot(id, Some(target))?;
        let anim = &mut self.slots[clone.index()];
        anim.offset = anim.direction_start();
        Ok(clone)
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("slots", &self.slots.len())
            .field("active", &self.active.len())
            .field("free", &self.free.len())
            .field("pass", &self.pass)
            .finish()
    }
}
