mod common;

use common::{approx, Sprite};
use std::cell::RefCell;
use std::rc::Rc;
use tween_core::{AnimId, Config, Engine, TweenBuilder, TweenError, Value};

fn engine_unsplit() -> Engine {
    Engine::new(Config {
        max_step_seconds: None,
        ..Config::default()
    })
}

fn float_tween(
    engine: &mut Engine,
    sprite: &Rc<RefCell<Sprite>>,
    member: &str,
    secs: f32,
) -> AnimId {
    TweenBuilder::animate(sprite.clone())
        .member(member)
        .unwrap()
        .from(Value::f(0.0))
        .to(Value::f(100.0))
        .unwrap()
        .duration_secs(secs)
        .spawn(engine)
        .unwrap()
}

/// it should treat add and remove as idempotent membership operations
#[test]
fn add_remove_idempotent() {
    let mut engine = engine_unsplit();
    let sprite = Sprite::new();
    let id = float_tween(&mut engine, &sprite, "x", 1.0);

    assert_eq!(engine.count(), 0);
    engine.add(id).unwrap();
    engine.add(id).unwrap();
    assert_eq!(engine.count(), 1);

    engine.remove(id).unwrap();
    engine.remove(id).unwrap();
    assert_eq!(engine.count(), 0);
}

/// it should reject negative step deltas without touching any state
#[test]
fn negative_delta_is_an_error() {
    let mut engine = engine_unsplit();
    let sprite = Sprite::new();
    let id = float_tween(&mut engine, &sprite, "x", 1.0);
    engine.start(id).unwrap();

    let err = engine.step(-0.1).unwrap_err();
    assert!(matches!(err, TweenError::NegativeDelta(_)));
    approx(engine.offset(id).unwrap(), 0.0, 1e-6);

    // zero is a valid no-advance tick
    engine.step(0.0).unwrap();
    approx(engine.offset(id).unwrap(), 0.0, 1e-6);
}

/// it should split an oversized delta into capped sub-steps with no time lost
#[test]
fn sub_stepping_preserves_total_time() {
    let mut engine = Engine::new(Config {
        max_step_seconds: Some(0.1),
        ..Config::default()
    });
    let sprite = Sprite::new();
    let id = float_tween(&mut engine, &sprite, "x", 2.0);
    engine.start(id).unwrap();

    engine.step(0.35).unwrap();
    approx(engine.offset(id).unwrap(), 0.175, 1e-5);
    approx(sprite.borrow().x, 17.5, 1e-3);
}

/// it should apply the leftover delta as one final step when the sub-step cap
/// is exhausted
#[test]
fn sub_step_cap_applies_remainder_in_one_step() {
    let mut engine = Engine::new(Config {
        max_step_seconds: Some(0.1),
        max_sub_steps: 2,
        ..Config::default()
    });
    let sprite = Sprite::new();
    let id = float_tween(&mut engine, &sprite, "x", 4.0);
    engine.start(id).unwrap();

    // 2 sub-steps of 0.1 then 0.8 in one go
    engine.step(1.0).unwrap();
    approx(engine.offset(id).unwrap(), 0.25, 1e-5);
}

/// it should remove a finished animation without skipping the next element
#[test]
fn finish_removal_does_not_skip_following_animation() {
    let mut engine = engine_unsplit();
    let sprite = Sprite::new();

    let short = float_tween(&mut engine, &sprite, "x", 0.5);
    let long = float_tween(&mut engine, &sprite, "y", 2.0);
    engine.start(short).unwrap();
    engine.start(long).unwrap();

    // short finishes and is removed mid-iteration; long must still advance in
    // this same pass
    engine.step(1.0).unwrap();
    assert_eq!(engine.count(), 1);
    approx(sprite.borrow().x, 100.0, 1e-4);
    approx(engine.offset(long).unwrap(), 0.5, 1e-6);
    approx(sprite.borrow().y, 50.0, 1e-4);
}

/// it should drop all enrollment and playback on clear without pooling
#[test]
fn clear_drops_everything_without_pooling() {
    let mut engine = engine_unsplit();
    let sprite = Sprite::new();

    let a = float_tween(&mut engine, &sprite, "x", 1.0);
    let b = float_tween(&mut engine, &sprite, "y", 1.0);
    engine.start(a).unwrap();
    engine.start(b).unwrap();
    engine.step(0.3).unwrap();

    engine.clear();
    assert_eq!(engine.count(), 0);
    assert_eq!(engine.pool_len(), 0);
    assert!(!engine.is_playing(a).unwrap());
    assert!(!engine.is_playing(b).unwrap());
    // offsets survive the hard reset
    approx(engine.offset(a).unwrap(), 0.3, 1e-6);

    // cleared animations can be re-enrolled
    engine.start(a).unwrap();
    engine.step(0.2).unwrap();
    approx(engine.offset(a).unwrap(), 0.5, 1e-6);
}

/// it should error on ids that never referred to a slot
#[test]
fn unknown_id_is_an_error() {
    let mut engine = engine_unsplit();
    let bogus = AnimId(42);
    assert!(matches!(
        engine.start(bogus),
        Err(TweenError::UnknownAnimation(_))
    ));
    assert!(matches!(
        engine.offset(bogus),
        Err(TweenError::UnknownAnimation(_))
    ));
}

/// it should keep a stopped-at-boundary animation out of advancement but
/// remove it when enrolled again
#[test]
fn finished_animation_added_back_is_swept_out() {
    let mut engine = engine_unsplit();
    let sprite = Sprite::new();
    let id = float_tween(&mut engine, &sprite, "x", 1.0);
    engine.start(id).unwrap();
    engine.step(2.0).unwrap();
    assert_eq!(engine.count(), 0);

    engine.add(id).unwrap();
    assert_eq!(engine.count(), 1);
    engine.step(0.1).unwrap();
    engine.step(0.1).unwrap();
    assert_eq!(engine.count(), 0);
    approx(engine.offset(id).unwrap(), 1.0, 1e-6);
}

/// it should stamp independent instances from one compiled definition
#[test]
fn shared_definition_plays_on_many_targets() {
    let mut engine = engine_unsplit();
    let slow = Sprite::new();
    let fast = Sprite::new();

    let mut builder = TweenBuilder::animate(slow.clone())
        .member("x")
        .unwrap()
        .from(Value::f(0.0))
        .to(Value::f(10.0))
        .unwrap()
        .duration_secs(1.0);

    let a = builder.start_on(&mut engine, slow.clone(), 1.0).unwrap();
    let b = builder.start_on(&mut engine, fast.clone(), 2.0).unwrap();
    assert_ne!(a, b);

    engine.step(0.5).unwrap();
    approx(slow.borrow().x, 5.0, 1e-4);
    // the fast instance covered a whole run and finished
    approx(fast.borrow().x, 10.0, 1e-4);
    assert_eq!(engine.count(), 1);
}

/// it should keep independent engines fully isolated
#[test]
fn engines_are_isolated() {
    let mut a = engine_unsplit();
    let mut b = engine_unsplit();
    let sprite_a = Sprite::new();
    let sprite_b = Sprite::new();

    let id_a = float_tween(&mut a, &sprite_a, "x", 1.0);
    let id_b = float_tween(&mut b, &sprite_b, "x", 2.0);
    a.start(id_a).unwrap();
    b.start(id_b).unwrap();

    a.step(0.5).unwrap();
    approx(a.offset(id_a).unwrap(), 0.5, 1e-6);
    approx(b.offset(id_b).unwrap(), 0.0, 1e-6);
    assert_eq!(b.count(), 1);
}
