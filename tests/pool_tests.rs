mod common;

use common::{approx, Sprite};
use std::cell::Cell;
use std::rc::Rc;
use tween_core::{Config, Engine, TweenBuilder, Value};

fn engine_unsplit() -> Engine {
    Engine::new(Config {
        max_step_seconds: None,
        ..Config::default()
    })
}

/// it should retire fire-and-forget instances to the pool and reuse the slot
#[test]
fn finished_pooled_instance_is_reused() {
    let mut engine = engine_unsplit();
    let sprite = Sprite::new();

    let first = TweenBuilder::animate(sprite.clone())
        .member("x")
        .unwrap()
        .from(Value::f(0.0))
        .to(Value::f(100.0))
        .unwrap()
        .duration_secs(1.0)
        .start(&mut engine)
        .unwrap();

    engine.step(2.0).unwrap();
    assert_eq!(engine.count(), 0);
    assert_eq!(engine.pool_len(), 1);
    assert_eq!(engine.pool_reuse(), 0);

    let second = TweenBuilder::animate(sprite.clone())
        .member("y")
        .unwrap()
        .from(Value::f(0.0))
        .to(Value::f(1.0))
        .unwrap()
        .start(&mut engine)
        .unwrap();

    assert_eq!(second, first);
    assert_eq!(engine.pool_len(), 0);
    assert_eq!(engine.pool_reuse(), 1);
}

/// it should hand out a reused slot with no stale state
#[test]
fn reused_slot_carries_no_stale_state() {
    let mut engine = engine_unsplit();
    let sprite = Sprite::new();
    let fired = Rc::new(Cell::new(0u32));

    let cb = fired.clone();
    let first = TweenBuilder::animate(sprite.clone())
        .member("x")
        .unwrap()
        .from(Value::f(0.0))
        .to(Value::f(100.0))
        .unwrap()
        .duration_secs(0.5)
        .then(move || cb.set(cb.get() + 1))
        .start(&mut engine)
        .unwrap();
    engine.step(1.0).unwrap();
    assert_eq!(fired.get(), 1);
    assert_eq!(engine.pool_len(), 1);

    // new instance in the same slot, no callback of its own
    let second = TweenBuilder::animate(sprite.clone())
        .member("y")
        .unwrap()
        .from(Value::f(0.0))
        .to(Value::f(10.0))
        .unwrap()
        .duration_secs(0.5)
        .start(&mut engine)
        .unwrap();
    assert_eq!(second, first);
    approx(engine.offset(second).unwrap(), 0.0, 1e-6);

    engine.step(1.0).unwrap();
    // the old completion callback must not fire again
    assert_eq!(fired.get(), 1);
    approx(sprite.borrow().y, 10.0, 1e-4);
}

/// it should keep a retired instance's final offset readable until reissue
#[test]
fn retired_slot_keeps_final_offset_until_reissue() {
    let mut engine = engine_unsplit();
    let sprite = Sprite::new();

    let id = TweenBuilder::animate(sprite.clone())
        .member("x")
        .unwrap()
        .from(Value::f(0.0))
        .to(Value::f(100.0))
        .unwrap()
        .duration_secs(1.0)
        .start(&mut engine)
        .unwrap();

    engine.step(2.0).unwrap();
    assert_eq!(engine.pool_len(), 1);
    // retirement drops references, not the run's outcome
    approx(engine.offset(id).unwrap(), 1.0, 1e-6);
    assert!(!engine.is_playing(id).unwrap());
}

/// it should drop pooled slots on clear_pool and allocate fresh ones after
#[test]
fn clear_pool_drops_free_slots() {
    let mut engine = engine_unsplit();
    let sprite = Sprite::new();

    let first = TweenBuilder::animate(sprite.clone())
        .member("x")
        .unwrap()
        .from(Value::f(0.0))
        .to(Value::f(1.0))
        .unwrap()
        .start(&mut engine)
        .unwrap();
    engine.step(2.0).unwrap();
    assert_eq!(engine.pool_len(), 1);

    engine.clear_pool();
    assert_eq!(engine.pool_len(), 0);

    // the dropped slot is never reissued
    let second = TweenBuilder::animate(sprite.clone())
        .member("y")
        .unwrap()
        .from(Value::f(0.0))
        .to(Value::f(1.0))
        .unwrap()
        .start(&mut engine)
        .unwrap();
    assert_ne!(second, first);
    assert_eq!(engine.pool_reuse(), 0);
}

/// it should keep host-managed spawns out of the pool when they finish
#[test]
fn spawned_instances_are_never_pooled() {
    let mut engine = engine_unsplit();
    let sprite = Sprite::new();

    let id = TweenBuilder::animate(sprite.clone())
        .member("x")
        .unwrap()
        .from(Value::f(0.0))
        .to(Value::f(100.0))
        .unwrap()
        .duration_secs(1.0)
        .spawn(&mut engine)
        .unwrap();
    engine.start(id).unwrap();
    engine.step(2.0).unwrap();

    assert_eq!(engine.pool_len(), 0);
    // state survives completion for host inspection and replay
    approx(engine.offset(id).unwrap(), 1.0, 1e-6);
    assert!(!engine.is_playing(id).unwrap());
}

/// it should not pool a pooled instance that is stopped before finishing
#[test]
fn stopping_mid_flight_does_not_pool() {
    let mut engine = engine_unsplit();
    let sprite = Sprite::new();

    let id = TweenBuilder::animate(sprite.clone())
        .member("x")
        .unwrap()
        .from(Value::f(0.0))
        .to(Value::f(100.0))
        .unwrap()
        .duration_secs(1.0)
        .start(&mut engine)
        .unwrap();

    engine.step(0.4).unwrap();
    engine.stop(id).unwrap();
    assert_eq!(engine.pool_len(), 0);
    approx(engine.offset(id).unwrap(), 0.4, 1e-6);
}

/// it should grow distinct slots while instances are live
#[test]
fn live_instances_get_distinct_slots() {
    let mut engine = engine_unsplit();
    let sprite = Sprite::new();

    let a = TweenBuilder::animate(sprite.clone())
        .member("x")
        .unwrap()
        .from(Value::f(0.0))
        .to(Value::f(1.0))
        .unwrap()
        .start(&mut engine)
        .unwrap();
    let b = TweenBuilder::animate(sprite.clone())
        .member("y")
        .unwrap()
        .from(Value::f(0.0))
        .to(Value::f(1.0))
        .unwrap()
        .start(&mut engine)
        .unwrap();

    assert_ne!(a, b);
    assert_eq!(engine.count(), 2);
    assert_eq!(engine.pool_reuse(), 0);
}
