//! Easing curves: pure functions reshaping linear progress t in [0,1].
//!
//! Stateless and allocation-free; the engine never calls these directly. They
//! are composed into shaped scalar lerps in `interp::functions`, which is what
//! channels actually carry.

use std::f32::consts::PI;

#[inline]
pub fn in_sine(t: f32) -> f32 {
    (1.5707963 * t).sin()
}

#[inline]
pub fn out_sine(t: f32) -> f32 {
    1.0 + (1.5707963 * (t - 1.0)).sin()
}

#[inline]
pub fn in_out_sine(t: f32) -> f32 {
    0.5 * (1.0 + (PI * (t - 0.5)).sin())
}

#[inline]
pub fn in_quad(t: f32) -> f32 {
    t * t
}

#[inline]
pub fn out_quad(t: f32) -> f32 {
    t * (2.0 - t)
}

#[inline]
pub fn in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        t * (4.0 - 2.0 * t) - 1.0
    }
}

#[inline]
pub fn in_cubic(t: f32) -> f32 {
    t * t * t
}

#[inline]
pub fn out_cubic(t: f32) -> f32 {
    let u = t - 1.0;
    1.0 + u * u * u
}

#[inline]
pub fn in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = t - 1.0;
        u * u * u * 4.0 + 1.0
    }
}

#[inline]
pub fn in_quart(t: f32) -> f32 {
    let t2 = t * t;
    t2 * t2
}

#[inline]
pub fn out_quart(t: f32) -> f32 {
    let u = t - 1.0;
    let t2 = u * u;
    1.0 - t2 * t2
}

#[inline]
pub fn in_out_quart(t: f32) -> f32 {
    if t < 0.5 {
        let t2 = t * t;
        8.0 * t2 * t2
    } else {
        let u = t - 1.0;
        let t2 = u * u;
        1.0 - 8.0 * t2 * t2
    }
}

#[inline]
pub fn in_quint(t: f32) -> f32 {
    let t2 = t * t;
    t * t2 * t2
}

#[inline]
pub fn out_quint(t: f32) -> f32 {
    let u = t - 1.0;
    let t2 = u * u;
    1.0 + u * t2 * t2
}

#[inline]
pub fn in_out_quint(t: f32) -> f32 {
    if t < 0.5 {
        let t2 = t * t;
        16.0 * t * t2 * t2
    } else {
        let u = t - 1.0;
        let t2 = u * u;
        1.0 + 16.0 * u * t2 * t2
    }
}

#[inline]
pub fn in_expo(t: f32) -> f32 {
    ((8.0 * t).exp2() - 1.0) / 255.0
}

#[inline]
pub fn out_expo(t: f32) -> f32 {
    1.0 - (-8.0 * t).exp2()
}

#[inline]
pub fn in_out_expo(t: f32) -> f32 {
    if t < 0.5 {
        ((16.0 * t).exp2() - 1.0) / 510.0
    } else {
        1.0 - 0.5 * (-16.0 * (t - 0.5)).exp2()
    }
}

#[inline]
pub fn in_circ(t: f32) -> f32 {
    1.0 - (1.0 - t).sqrt()
}

#[inline]
pub fn out_circ(t: f32) -> f32 {
    t.sqrt()
}

#[inline]
pub fn in_out_circ(t: f32) -> f32 {
    if t < 0.5 {
        (1.0 - (1.0 - 2.0 * t).sqrt()) * 0.5
    } else {
        (1.0 + (2.0 * t - 1.0).sqrt()) * 0.5
    }
}

#[inline]
pub fn in_back(t: f32) -> f32 {
    t * t * (2.70158 * t - 1.70158)
}

#[inline]
pub fn out_back(t: f32) -> f32 {
    let u = t - 1.0;
    1.0 + u * u * (2.70158 * u + 1.70158)
}

#[inline]
pub fn in_out_back(t: f32) -> f32 {
    if t < 0.5 {
        t * t * (7.0 * t - 2.5) * 2.0
    } else {
        let u = t - 1.0;
        1.0 + u * u * 2.0 * (7.0 * u + 2.5)
    }
}

#[inline]
pub fn in_elastic(t: f32) -> f32 {
    let t2 = t * t;
    t2 * t2 * (t * PI * 4.5).sin()
}

#[inline]
pub fn out_elastic(t: f32) -> f32 {
    let t2 = (t - 1.0) * (t - 1.0);
    1.0 - t2 * t2 * (t * PI * 4.5).cos()
}

#[inline]
pub fn in_out_elastic(t: f32) -> f32 {
    if t < 0.45 {
        let t2 = t * t;
        8.0 * t2 * t2 * (t * PI * 9.0).sin()
    } else if t < 0.55 {
        0.5 + 0.75 * (t * PI * 4.0).sin()
    } else {
        let t2 = (t - 1.0) * (t - 1.0);
        1.0 - 8.0 * t2 * t2 * (t * PI * 9.0).sin()
    }
}

#[inline]
pub fn in_bounce(t: f32) -> f32 {
    (6.0 * (t - 1.0)).exp2() * (t * PI * 3.5).sin().abs()
}

#[inline]
pub fn out_bounce(t: f32) -> f32 {
    1.0 - (-6.0 * t).exp2() * (t * PI * 3.5).cos().abs()
}

#[inline]
pub fn in_out_bounce(t: f32) -> f32 {
    if t < 0.5 {
        8.0 * (8.0 * (t - 1.0)).exp2() * (t * PI * 7.0).sin().abs()
    } else {
        1.0 - 8.0 * (-8.0 * t).exp2() * (t * PI * 7.0).sin().abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    #[test]
    fn smooth_curves_hit_endpoints() {
        // Curves with exact endpoints (elastic/bounce/expo families are
        // intentionally approximate near 0).
        let exact: [fn(f32) -> f32; 12] = [
            in_quad,
            out_quad,
            in_out_quad,
            in_cubic,
            out_cubic,
            in_out_cubic,
            in_quart,
            out_quart,
            in_quint,
            out_quint,
            in_circ,
            out_circ,
        ];
        for f in exact {
            approx(f(0.0), 0.0, 1e-6);
            approx(f(1.0), 1.0, 1e-6);
        }
    }

    #[test]
    fn in_out_curves_cross_midpoint() {
        approx(in_out_quad(0.5), 0.5, 1e-6);
        approx(in_out_cubic(0.5), 0.5, 1e-6);
        approx(in_out_sine(0.5), 0.5, 1e-6);
        approx(in_out_circ(0.5), 0.5, 1e-6);
    }

    #[test]
    fn back_overshoots_below_zero_early() {
        assert!(in_back(0.2) < 0.0);
        assert!(out_back(0.8) > 1.0);
    }
}
