//! Output forms for resolved colors.

use crate::color::{ColorValue, Hsla, Rgba};
use crate::convert::hsl_to_rgb;

/// `RRGGBB` when opaque, `RRGGBBAA` otherwise. Uppercase, no leading `#`.
pub fn to_hex(color: Rgba) -> String {
    if color.is_opaque() {
        format!("{:02X}{:02X}{:02X}", color.r, color.g, color.b)
    } else {
        format!(
            "{:02X}{:02X}{:02X}{:02X}",
            color.r,
            color.g,
            color.b,
            alpha_byte(color.a)
        )
    }
}

/// `hsl(H S% L%)` when opaque, otherwise `hsla(H S% L% AA)` where `AA` is the alpha as a hex
/// byte.
///
/// The `hsla` form is not valid CSS; renderers consuming this output expect it as is.
pub fn to_css_hsl(color: Hsla) -> String {
    let s = color.s * 100.0;
    let l = color.l * 100.0;
    if color.is_opaque() {
        format!("hsl({} {s}% {l}%)", color.h)
    } else {
        format!("hsla({} {s}% {l}% {:02X})", color.h, alpha_byte(color.a))
    }
}

/// The RGBA channels of `color`; `None` for a fallback value.
pub fn to_svg_tuple(color: &ColorValue) -> Option<Rgba> {
    match color {
        ColorValue::Rgba(rgba) => Some(*rgba),
        ColorValue::Hsla(hsla) => Some(hsl_to_rgb(*hsla)),
        ColorValue::Fallback(_) => None,
    }
}

/// A color as an HTML/CSS attribute value: `#RRGGBB[AA]`, the CSS-HSL string, or the fallback
/// text.
pub fn to_html(color: &ColorValue) -> String {
    match color {
        ColorValue::Rgba(rgba) => format!("#{}", to_hex(*rgba)),
        ColorValue::Hsla(hsla) => to_css_hsl(*hsla),
        ColorValue::Fallback(text) => text.clone(),
    }
}

/// A color for SVG output, where only RGB channels are usable.
#[derive(Clone, Debug, PartialEq)]
pub enum SvgColor {
    Rgb(Rgba),
    Fallback(String),
}

pub fn to_svg(color: &ColorValue) -> SvgColor {
    match color {
        ColorValue::Rgba(rgba) => SvgColor::Rgb(*rgba),
        ColorValue::Hsla(hsla) => SvgColor::Rgb(hsl_to_rgb(*hsla)),
        ColorValue::Fallback(text) => SvgColor::Fallback(text.clone()),
    }
}

fn alpha_byte(alpha: f64) -> u8 {
    (alpha * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_output() {
        assert_eq!(to_hex(Rgba::new(255, 0, 0)), "FF0000");
        assert_eq!(to_hex(Rgba::new(0x3C, 0x2F, 0x80)), "3C2F80");
        assert_eq!(to_hex(Rgba::with_alpha(0x3C, 0x2F, 0x80, 0.5)), "3C2F807F");
        assert_eq!(to_hex(Rgba::with_alpha(0, 0, 0, 0.0)), "00000000");
        assert_eq!(Rgba::new(1, 2, 3).to_string(), "010203");
    }

    #[test]
    fn css_hsl_output() {
        assert_eq!(to_css_hsl(Hsla::new(120, 1.0, 0.25)), "hsl(120 100% 25%)");
        assert_eq!(
            to_css_hsl(Hsla {
                h: 0,
                s: 0.5,
                l: 0.5,
                a: 0.5
            }),
            "hsla(0 50% 50% 7F)"
        );
    }

    #[test]
    fn html_and_svg_forms() {
        let red = ColorValue::Rgba(Rgba::new(255, 0, 0));
        let green = ColorValue::Hsla(Hsla::new(120, 1.0, 0.5));
        let none = ColorValue::Fallback("transparent".to_string());

        assert_eq!(to_html(&red), "#FF0000");
        assert_eq!(to_html(&green), "hsl(120 100% 50%)");
        assert_eq!(to_html(&none), "transparent");

        assert_eq!(to_svg_tuple(&green), Some(Rgba::new(0, 255, 0)));
        assert_eq!(to_svg_tuple(&none), None);
        assert_eq!(to_svg(&red), SvgColor::Rgb(Rgba::new(255, 0, 0)));
        assert_eq!(to_svg(&none), SvgColor::Fallback("transparent".to_string()));
    }
}
