//! RGB <-> HSL conversion.
//!
//! Hue is kept in whole degrees (`0..=360`), saturation and lightness as fractions. Channels are
//! rounded to the nearest integer on the way back to RGB; alpha is carried through untouched.

use crate::color::{Hsla, Rgba};
use crate::transform::unit;

pub fn rgb_to_hsl(color: Rgba) -> Hsla {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsla {
            h: 0,
            s: 0.0,
            l,
            a: color.a,
        };
    }

    let range = max - min;
    let s = if l <= 0.5 {
        range / (max + min)
    } else {
        range / (2.0 - max - min)
    };

    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;
    let sextant = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    let hue = (sextant / 6.0).rem_euclid(1.0) * 360.0;

    Hsla {
        h: hue.round().clamp(0.0, 360.0) as u16,
        s,
        l,
        a: color.a,
    }
}

pub fn hsl_to_rgb(color: Hsla) -> Rgba {
    let s = unit(color.s);
    let l = unit(color.l);

    if s == 0.0 {
        let v = to_channel(l);
        return Rgba::with_alpha(v, v, v, color.a);
    }

    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = color.h as f64 / 360.0;

    Rgba::with_alpha(
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
        color.a,
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * t * 6.0
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
