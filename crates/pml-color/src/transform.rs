//! DrawingML color transforms (`a:tint`, `a:lumMod`, ...).
//!
//! A color reference may carry any subset of the transforms below. They are always applied in
//! the order the fields of [`ColorTransforms`] are declared, regardless of the order the
//! elements appeared in the markup. Each step reads the output of the previous one.
//!
//! Percentages are fractions (`0.6` for `60000`/`60%`), angles are degrees.

use crate::color::{ColorValue, Hsla, Rgba};
use crate::convert::{hsl_to_rgb, rgb_to_hsl};

/// The optional transforms recorded on one color reference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorTransforms {
    pub tint: Option<f64>,
    pub shade: Option<f64>,
    pub comp: bool,
    pub inv: bool,
    pub gray: bool,
    pub alpha: Option<f64>,
    pub alpha_mod: Option<f64>,
    pub alpha_off: Option<f64>,
    pub red: Option<f64>,
    pub red_mod: Option<f64>,
    pub red_off: Option<f64>,
    pub green: Option<f64>,
    pub green_mod: Option<f64>,
    pub green_off: Option<f64>,
    pub blue: Option<f64>,
    pub blue_mod: Option<f64>,
    pub blue_off: Option<f64>,
    /// Degrees.
    pub hue: Option<f64>,
    pub hue_mod: Option<f64>,
    /// Degrees.
    pub hue_off: Option<f64>,
    pub sat: Option<f64>,
    pub sat_mod: Option<f64>,
    pub sat_off: Option<f64>,
    pub lum: Option<f64>,
    pub lum_mod: Option<f64>,
    pub lum_off: Option<f64>,
    pub gamma: bool,
    pub inv_gamma: bool,
}

impl ColorTransforms {
    pub fn is_empty(&self) -> bool {
        self == &ColorTransforms::default()
    }
}

#[derive(Clone, Copy)]
enum Working {
    Rgb(Rgba),
    Hsl(Hsla),
}

impl Working {
    fn rgb(self) -> Rgba {
        match self {
            Working::Rgb(rgb) => rgb,
            Working::Hsl(hsl) => hsl_to_rgb(hsl),
        }
    }

    fn hsl(self) -> Hsla {
        match self {
            Working::Rgb(rgb) => rgb_to_hsl(rgb),
            Working::Hsl(hsl) => hsl,
        }
    }
}

/// Run the transform pipeline over `color`.
///
/// A fallback value and a reference without transforms are returned unchanged. Otherwise the
/// result is RGBA: every step, including the HSL ones, hands back an RGB color.
pub fn apply_transforms(color: ColorValue, transforms: &ColorTransforms) -> ColorValue {
    if transforms.is_empty() {
        return color;
    }
    let mut cur = match color {
        ColorValue::Rgba(rgb) => Working::Rgb(rgb),
        ColorValue::Hsla(hsl) => Working::Hsl(hsl),
        fallback @ ColorValue::Fallback(_) => return fallback,
    };

    let t = transforms;
    let rgb_step = |cur: Working, step: &dyn Fn(Rgba) -> Rgba| Working::Rgb(step(cur.rgb()));
    let hsl_step =
        |cur: Working, step: &dyn Fn(Hsla) -> Hsla| Working::Rgb(hsl_to_rgb(step(cur.hsl())));

    if let Some(v) = t.tint {
        cur = rgb_step(cur, &|c| tint(c, v));
    }
    if let Some(v) = t.shade {
        cur = rgb_step(cur, &|c| shade(c, v));
    }
    if t.comp {
        cur = rgb_step(cur, &comp);
    }
    if t.inv {
        cur = rgb_step(cur, &inv);
    }
    if t.gray {
        cur = rgb_step(cur, &gray);
    }
    if let Some(v) = t.alpha {
        cur = rgb_step(cur, &|c| alpha(c, v));
    }
    if let Some(v) = t.alpha_mod {
        cur = rgb_step(cur, &|c| alpha_mod(c, v));
    }
    if let Some(v) = t.alpha_off {
        cur = rgb_step(cur, &|c| alpha_off(c, v));
    }
    if let Some(v) = t.red {
        cur = rgb_step(cur, &|c| Rgba { r: channel_set(v), ..c });
    }
    if let Some(v) = t.red_mod {
        cur = rgb_step(cur, &|c| Rgba { r: channel_mod(c.r, v), ..c });
    }
    if let Some(v) = t.red_off {
        cur = rgb_step(cur, &|c| Rgba { r: channel_off(c.r, v), ..c });
    }
    if let Some(v) = t.green {
        cur = rgb_step(cur, &|c| Rgba { g: channel_set(v), ..c });
    }
    if let Some(v) = t.green_mod {
        cur = rgb_step(cur, &|c| Rgba { g: channel_mod(c.g, v), ..c });
    }
    if let Some(v) = t.green_off {
        cur = rgb_step(cur, &|c| Rgba { g: channel_off(c.g, v), ..c });
    }
    if let Some(v) = t.blue {
        cur = rgb_step(cur, &|c| Rgba { b: channel_set(v), ..c });
    }
    if let Some(v) = t.blue_mod {
        cur = rgb_step(cur, &|c| Rgba { b: channel_mod(c.b, v), ..c });
    }
    if let Some(v) = t.blue_off {
        cur = rgb_step(cur, &|c| Rgba { b: channel_off(c.b, v), ..c });
    }
    if let Some(v) = t.hue {
        cur = hsl_step(cur, &|c| hue(c, v));
    }
    if let Some(v) = t.hue_mod {
        cur = hsl_step(cur, &|c| hue_mod(c, v));
    }
    if let Some(v) = t.hue_off {
        cur = hsl_step(cur, &|c| hue_off(c, v));
    }
    if let Some(v) = t.sat {
        cur = hsl_step(cur, &|c| Hsla { s: unit(v), ..c });
    }
    if let Some(v) = t.sat_mod {
        cur = hsl_step(cur, &|c| Hsla { s: unit(c.s * v), ..c });
    }
    if let Some(v) = t.sat_off {
        cur = hsl_step(cur, &|c| Hsla { s: unit(c.s + v), ..c });
    }
    if let Some(v) = t.lum {
        cur = hsl_step(cur, &|c| Hsla { l: unit(v), ..c });
    }
    if let Some(v) = t.lum_mod {
        cur = hsl_step(cur, &|c| lum_mod(c, v));
    }
    if let Some(v) = t.lum_off {
        cur = hsl_step(cur, &|c| Hsla { l: unit(c.l + v), ..c });
    }
    if t.gamma {
        cur = rgb_step(cur, &gamma);
    }
    if t.inv_gamma {
        cur = rgb_step(cur, &inv_gamma);
    }

    ColorValue::Rgba(cur.rgb())
}

/// Lighter version of the color: `c * val + 255 * (1 - val)`.
pub fn tint(color: Rgba, val: f64) -> Rgba {
    map_rgb(color, |c| c * val + 255.0 * (1.0 - val))
}

/// Darker version of the color: `c * val`.
pub fn shade(color: Rgba, val: f64) -> Rgba {
    map_rgb(color, |c| c * val)
}

/// Complement. The result is opaque.
pub fn comp(color: Rgba) -> Rgba {
    let (r, g, b) = (color.r as i32, color.g as i32, color.b as i32);
    Rgba::new(color.b, (r + b - g).clamp(0, 255) as u8, color.r)
}

/// Inverse. The result is opaque.
pub fn inv(color: Rgba) -> Rgba {
    let inverted = map_rgb(color, |c| 255.0 * (1.0 - c / 255.0).abs());
    Rgba { a: 1.0, ..inverted }
}

/// Gamma-weighted grayscale. The result is opaque.
pub fn gray(color: Rgba) -> Rgba {
    let luma = ((color.r as f64).powf(2.2) * 0.2126
        + (color.g as f64).powf(2.2) * 0.7152
        + (color.b as f64).powf(2.2) * 0.0722)
        .powf(1.0 / 2.2);
    let v = to_channel(luma);
    Rgba::new(v, v, v)
}

pub fn alpha(color: Rgba, val: f64) -> Rgba {
    Rgba { a: unit(val), ..color }
}

pub fn alpha_mod(color: Rgba, pct: f64) -> Rgba {
    Rgba {
        a: unit(color.a * pct),
        ..color
    }
}

pub fn alpha_off(color: Rgba, pct: f64) -> Rgba {
    Rgba {
        a: unit(color.a + pct),
        ..color
    }
}

pub fn hue(color: Hsla, deg: f64) -> Hsla {
    Hsla {
        h: to_degrees(deg),
        ..color
    }
}

pub fn hue_mod(color: Hsla, pct: f64) -> Hsla {
    Hsla {
        h: to_degrees(color.h as f64 * pct),
        ..color
    }
}

pub fn hue_off(color: Hsla, deg: f64) -> Hsla {
    Hsla {
        h: to_degrees(color.h as f64 + deg),
        ..color
    }
}

pub fn lum_mod(color: Hsla, pct: f64) -> Hsla {
    Hsla {
        l: unit(color.l * pct),
        ..color
    }
}

/// Gamma correction with exponent `1/2.2`.
///
/// Channels are normalised to `0..=1` but never scaled back, so every channel collapses to
/// `0`, or `1` for a full-intensity input. Output-compatible with existing renderings.
pub fn gamma(color: Rgba) -> Rgba {
    map_rgb_truncating(color, |c| (c / 255.0).powf(1.0 / 2.2))
}

/// Inverse gamma correction with exponent `2.2`. Same channel scaling as [`gamma`].
pub fn inv_gamma(color: Rgba) -> Rgba {
    map_rgb_truncating(color, |c| (c / 255.0).powf(2.2))
}

fn map_rgb(color: Rgba, f: impl Fn(f64) -> f64) -> Rgba {
    Rgba {
        r: to_channel(f(color.r as f64)),
        g: to_channel(f(color.g as f64)),
        b: to_channel(f(color.b as f64)),
        a: color.a,
    }
}

fn map_rgb_truncating(color: Rgba, f: impl Fn(f64) -> f64) -> Rgba {
    let trunc = |c: u8| f(c as f64).clamp(0.0, 255.0) as u8;
    Rgba {
        r: trunc(color.r),
        g: trunc(color.g),
        b: trunc(color.b),
        a: color.a,
    }
}

fn channel_set(pct: f64) -> u8 {
    to_channel(255.0 * pct)
}

fn channel_mod(c: u8, pct: f64) -> u8 {
    to_channel(c as f64 * pct)
}

fn channel_off(c: u8, pct: f64) -> u8 {
    let c = c as f64;
    to_channel(c + c * pct)
}

// NaN maps to the bottom of each range.

fn to_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

pub(crate) fn to_degrees(v: f64) -> u16 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 360.0) as u16
}

pub(crate) fn unit(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(color: Rgba, transforms: ColorTransforms) -> Rgba {
        match apply_transforms(ColorValue::Rgba(color), &transforms) {
            ColorValue::Rgba(rgba) => rgba,
            other => panic!("expected rgba, got {other:?}"),
        }
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let hsl = ColorValue::Hsla(Hsla::new(30, 0.5, 0.5));
        assert_eq!(apply_transforms(hsl.clone(), &ColorTransforms::default()), hsl);

        let fallback = ColorValue::Fallback("transparent".to_string());
        let transforms = ColorTransforms {
            shade: Some(0.5),
            ..Default::default()
        };
        assert_eq!(apply_transforms(fallback.clone(), &transforms), fallback);
    }

    #[test]
    fn tint_and_shade() {
        assert_eq!(tint(Rgba::new(0, 0, 255), 0.5), Rgba::new(128, 128, 255));
        assert_eq!(tint(Rgba::new(100, 100, 100), 1.0), Rgba::new(100, 100, 100));
        assert_eq!(tint(Rgba::new(100, 100, 100), 0.0), Rgba::WHITE);

        assert_eq!(shade(Rgba::new(200, 200, 200), 0.5), Rgba::new(100, 100, 100));
        assert_eq!(shade(Rgba::new(200, 200, 200), 0.0), Rgba::BLACK);
    }

    #[test]
    fn complement_and_inverse() {
        assert_eq!(comp(Rgba::new(255, 0, 0)), Rgba::new(0, 255, 255));
        assert_eq!(comp(Rgba::new(10, 200, 20)), Rgba::new(20, 0, 10));
        assert_eq!(comp(Rgba::with_alpha(1, 2, 3, 0.5)).a, 1.0);

        assert_eq!(inv(Rgba::new(255, 0, 100)), Rgba::new(0, 255, 155));
        assert_eq!(inv(Rgba::with_alpha(0, 0, 0, 0.5)), Rgba::WHITE);
    }

    #[test]
    fn gray_uses_gamma_weighted_luma() {
        assert_eq!(gray(Rgba::WHITE), Rgba::WHITE);
        assert_eq!(gray(Rgba::BLACK), Rgba::BLACK);
        assert_eq!(gray(Rgba::new(120, 120, 120)), Rgba::new(120, 120, 120));
        // Green dominates the weighting.
        assert!(gray(Rgba::new(0, 255, 0)).r > gray(Rgba::new(255, 0, 0)).r);
        assert!(gray(Rgba::new(255, 0, 0)).r > gray(Rgba::new(0, 0, 255)).r);
    }

    #[test]
    fn alpha_steps_clamp() {
        let c = Rgba::with_alpha(1, 2, 3, 0.5);
        assert_eq!(alpha(c, 0.25).a, 0.25);
        assert_eq!(alpha_mod(c, 3.0).a, 1.0);
        assert_eq!(alpha_mod(c, -1.0).a, 0.0);
        assert_eq!(alpha_off(c, 0.75).a, 1.0);
        assert_eq!(alpha_off(c, -0.75).a, 0.0);
        assert_eq!(alpha_off(c, 0.25).a, 0.75);
    }

    #[test]
    fn channel_steps() {
        let c = Rgba::new(100, 200, 50);
        let out = run(
            c,
            ColorTransforms {
                red: Some(0.2),
                green_mod: Some(2.0),
                blue_off: Some(0.5),
                ..Default::default()
            },
        );
        assert_eq!(out, Rgba::new(51, 255, 75));

        let out = run(
            c,
            ColorTransforms {
                red_off: Some(-2.0),
                blue_mod: Some(0.5),
                ..Default::default()
            },
        );
        assert_eq!(out, Rgba::new(0, 200, 25));
    }

    #[test]
    fn hue_steps_clamp_to_circle() {
        let c = Hsla::new(200, 0.5, 0.5);
        assert_eq!(hue(c, 90.0).h, 90);
        assert_eq!(hue_mod(c, 2.0).h, 360);
        assert_eq!(hue_mod(c, 0.5).h, 100);
        assert_eq!(hue_off(c, 300.0).h, 360);
        assert_eq!(hue_off(c, -300.0).h, 0);
        assert_eq!(hue_off(c, 20.0).h, 220);
    }

    #[test]
    fn hue_replacement_rotates_color() {
        let out = run(
            Rgba::new(255, 0, 0),
            ColorTransforms {
                hue: Some(120.0),
                ..Default::default()
            },
        );
        assert_eq!(out, Rgba::new(0, 255, 0));
    }

    #[test]
    fn lum_mod_on_scheme_accent() {
        // accent1 of the Office theme, darker 40% (lumMod 60000).
        let out = run(
            Rgba::new(0x44, 0x72, 0xC4),
            ColorTransforms {
                lum_mod: Some(0.6),
                ..Default::default()
            },
        );
        assert_eq!(out, Rgba::new(38, 68, 120));
    }

    #[test]
    fn lum_mod_then_lum_off_regardless_of_markup_order() {
        // "Lighter 40%": lumMod 60000 + lumOff 40000 on black gives 40% gray.
        let out = run(
            Rgba::BLACK,
            ColorTransforms {
                lum_off: Some(0.4),
                lum_mod: Some(0.6),
                ..Default::default()
            },
        );
        assert_eq!(out, Rgba::new(102, 102, 102));
    }

    #[test]
    fn hsl_base_stays_precise_through_first_hsl_step() {
        let out = apply_transforms(
            ColorValue::Hsla(Hsla::new(0, 1.0, 0.5)),
            &ColorTransforms {
                lum: Some(0.25),
                ..Default::default()
            },
        );
        assert_eq!(out, ColorValue::Rgba(Rgba::new(128, 0, 0)));
    }

    #[test]
    fn sat_steps_clamp() {
        let out = run(
            Rgba::new(255, 0, 0),
            ColorTransforms {
                sat_off: Some(-2.0),
                ..Default::default()
            },
        );
        assert_eq!(out, Rgba::new(128, 128, 128));

        let out = run(
            Rgba::new(191, 64, 64),
            ColorTransforms {
                sat_mod: Some(10.0),
                ..Default::default()
            },
        );
        assert_eq!(out, Rgba::new(255, 0, 0));
    }

    #[test]
    fn shade_is_applied_before_alpha() {
        let out = run(
            Rgba::new(200, 100, 0),
            ColorTransforms {
                alpha: Some(0.5),
                shade: Some(0.5),
                ..Default::default()
            },
        );
        assert_eq!(out, Rgba::with_alpha(100, 50, 0, 0.5));
    }

    #[test]
    fn nan_parameters_land_inside_the_ranges() {
        let out = run(
            Rgba::new(255, 0, 0),
            ColorTransforms {
                alpha_off: Some(f64::NAN),
                lum_mod: Some(f64::NAN),
                ..Default::default()
            },
        );
        assert_eq!(out, Rgba::with_alpha(0, 0, 0, 0.0));

        let red = Rgba::new(255, 0, 0);
        assert_eq!(alpha_mod(red, f64::NAN).a, 0.0);
        assert_eq!(alpha_mod(red, f64::INFINITY).a, 1.0);
        assert_eq!(alpha_off(red, f64::NEG_INFINITY).a, 0.0);

        let hsl = Hsla::new(200, 0.5, 0.5);
        assert_eq!(hue_mod(hsl, f64::NAN).h, 0);
        assert_eq!(hue_off(hsl, f64::INFINITY).h, 360);
        assert_eq!(lum_mod(hsl, f64::NAN).l, 0.0);
    }

    #[test]
    fn gamma_channels_are_not_rescaled() {
        // Pins the existing behaviour: channels collapse to 0 or 1 instead of 0..=255.
        assert_eq!(gamma(Rgba::new(255, 128, 0)), Rgba::new(1, 0, 0));
        assert_eq!(inv_gamma(Rgba::new(255, 254, 10)), Rgba::new(1, 0, 0));
        assert_eq!(gamma(Rgba::with_alpha(255, 255, 255, 0.5)).a, 0.5);
    }
}
