//! Shaped scalar lerps: the `ScalarFn`s channels carry.
//!
//! Each function blends one scalar pair at progress t, with the progress
//! reshaped by an easing curve from `crate::ease`. `linear` is the identity
//! shape and the default for channels built without an explicit easing.

use crate::ease;
use crate::interp::ScalarFn;

/// Linear interpolation (identity easing).
#[inline]
pub fn linear(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

macro_rules! shaped {
    ($($(#[$meta:meta])* $name:ident => $curve:path),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(a: f32, b: f32, t: f32) -> f32 {
                linear(a, b, $curve(t))
            }
        )+
    };
}

shaped! {
    /// Quadratic easing
    quadratic_in => ease::in_quad,
    quadratic_out => ease::out_quad,
    quadratic_in_out => ease::in_out_quad,
    /// Cubic easing
    cubic_in => ease::in_cubic,
    cubic_out => ease::out_cubic,
    cubic_in_out => ease::in_out_cubic,
    /// Quartic easing
    quartic_in => ease::in_quart,
    quartic_out => ease::out_quart,
    quartic_in_out => ease::in_out_quart,
    /// Quintic easing
    quintic_in => ease::in_quint,
    quintic_out => ease::out_quint,
    quintic_in_out => ease::in_out_quint,
    /// Sinusoidal easing
    sinusoidal_in => ease::in_sine,
    sinusoidal_out => ease::out_sine,
    sinusoidal_in_out => ease::in_out_sine,
    /// Exponential easing
    exponential_in => ease::in_expo,
    exponential_out => ease::out_expo,
    exponential_in_out => ease::in_out_expo,
    /// Circular easing
    circular_in => ease::in_circ,
    circular_out => ease::out_circ,
    circular_in_out => ease::in_out_circ,
    /// Back easing (overshoots)
    back_in => ease::in_back,
    back_out => ease::out_back,
    back_in_out => ease::in_out_back,
    /// Elastic easing
    elastic_in => ease::in_elastic,
    elastic_out => ease::out_elastic,
    elastic_in_out => ease::in_out_elastic,
    /// Bounce easing
    bounce_in => ease::in_bounce,
    bounce_out => ease::out_bounce,
    bounce_in_out => ease::in_out_bounce,
}

/// The default scalar function for channels built without an explicit easing.
pub const DEFAULT: ScalarFn = linear;
