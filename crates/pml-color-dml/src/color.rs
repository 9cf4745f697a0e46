//! `EG_ColorChoice` elements and their transform children.

use roxmltree::Node;

use pml_color::{BaseColor, ColorKind, ColorReference, ColorTransforms, SchemeColorVal};

use crate::DmlError;

/// Parse a single color element (`a:srgbClr`, `a:schemeClr`, ...) with its transforms.
///
/// Elements that are not color choices come back as [`ColorKind::Unsupported`] so the caller
/// can still resolve them to a default.
pub fn parse_color(node: Node<'_, '_>) -> Result<ColorReference, DmlError> {
    let kind = match node.tag_name().name() {
        "srgbClr" => ColorKind::Base(BaseColor::Srgb(required(node, "val")?.to_string())),
        "scrgbClr" => ColorKind::Base(BaseColor::ScRgb {
            r: percentage_attr(node, "r")?,
            g: percentage_attr(node, "g")?,
            b: percentage_attr(node, "b")?,
        }),
        "hslClr" => ColorKind::Base(BaseColor::Hsl {
            hue: angle_attr(node, "hue")?,
            sat: percentage_attr(node, "sat")?,
            lum: percentage_attr(node, "lum")?,
        }),
        "prstClr" => ColorKind::Base(BaseColor::Preset(required(node, "val")?.to_string())),
        "sysClr" => ColorKind::Base(BaseColor::System {
            val: required(node, "val")?.to_string(),
            last_color: node.attribute("lastClr").map(str::to_string),
        }),
        "schemeClr" => ColorKind::Scheme(required(node, "val")?.parse::<SchemeColorVal>()?),
        other => ColorKind::Unsupported(other.to_string()),
    };

    Ok(ColorReference {
        kind,
        transforms: parse_transforms(node)?,
    })
}

/// Parse the color held by `parent` (e.g. `a:solidFill`, `a:accent1`, `a:fgClr`).
///
/// Returns `Ok(None)` when `parent` has no color child.
pub fn find_color(parent: Node<'_, '_>) -> Result<Option<ColorReference>, DmlError> {
    parent
        .children()
        .find(|n| n.is_element() && n.tag_name().name() != "extLst")
        .map(parse_color)
        .transpose()
}

/// Collect the transform children of a color element.
///
/// Only one value per kind is kept; when a kind repeats, the last occurrence wins.
pub fn parse_transforms(color: Node<'_, '_>) -> Result<ColorTransforms, DmlError> {
    let mut t = ColorTransforms::default();

    for child in color.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "tint" => t.tint = Some(percentage_attr(child, "val")?),
            "shade" => t.shade = Some(percentage_attr(child, "val")?),
            "comp" => t.comp = true,
            "inv" => t.inv = true,
            "gray" => t.gray = true,
            "alpha" => t.alpha = Some(percentage_attr(child, "val")?),
            "alphaMod" => t.alpha_mod = Some(percentage_attr(child, "val")?),
            "alphaOff" => t.alpha_off = Some(percentage_attr(child, "val")?),
            "red" => t.red = Some(percentage_attr(child, "val")?),
            "redMod" => t.red_mod = Some(percentage_attr(child, "val")?),
            "redOff" => t.red_off = Some(percentage_attr(child, "val")?),
            "green" => t.green = Some(percentage_attr(child, "val")?),
            "greenMod" => t.green_mod = Some(percentage_attr(child, "val")?),
            "greenOff" => t.green_off = Some(percentage_attr(child, "val")?),
            "blue" => t.blue = Some(percentage_attr(child, "val")?),
            "blueMod" => t.blue_mod = Some(percentage_attr(child, "val")?),
            "blueOff" => t.blue_off = Some(percentage_attr(child, "val")?),
            "hue" => t.hue = Some(angle_attr(child, "val")?),
            "hueMod" => t.hue_mod = Some(percentage_attr(child, "val")?),
            "hueOff" => t.hue_off = Some(angle_attr(child, "val")?),
            "sat" => t.sat = Some(percentage_attr(child, "val")?),
            "satMod" => t.sat_mod = Some(percentage_attr(child, "val")?),
            "satOff" => t.sat_off = Some(percentage_attr(child, "val")?),
            "lum" => t.lum = Some(percentage_attr(child, "val")?),
            "lumMod" => t.lum_mod = Some(percentage_attr(child, "val")?),
            "lumOff" => t.lum_off = Some(percentage_attr(child, "val")?),
            "gamma" => t.gamma = true,
            "invGamma" => t.inv_gamma = true,
            other => log::debug!("ignoring unknown color transform `{other}`"),
        }
    }

    Ok(t)
}

fn required<'a>(node: Node<'a, '_>, attr: &'static str) -> Result<&'a str, DmlError> {
    node.attribute(attr).ok_or(DmlError::MissingAttr(attr))
}

fn percentage_attr(node: Node<'_, '_>, attr: &'static str) -> Result<f64, DmlError> {
    let raw = required(node, attr)?;
    parse_percentage(raw).ok_or_else(|| DmlError::InvalidValue {
        attr,
        value: raw.to_string(),
    })
}

fn angle_attr(node: Node<'_, '_>, attr: &'static str) -> Result<f64, DmlError> {
    let raw = required(node, attr)?;
    parse_angle(raw).ok_or_else(|| DmlError::InvalidValue {
        attr,
        value: raw.to_string(),
    })
}

/// `ST_Percentage` as a fraction: thousandths of a percent (`"60000"`) or, as some producers
/// write it, a literal percentage (`"60%"`).
pub(crate) fn parse_percentage(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if let Some(pct) = raw.strip_suffix('%') {
        return pct
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v / 100.0);
    }
    raw.parse::<i64>().ok().map(|v| v as f64 / 100_000.0)
}

/// `ST_Angle` (60000ths of a degree) in degrees.
pub(crate) fn parse_angle(raw: &str) -> Option<f64> {
    raw.trim().parse::<i64>().ok().map(|v| v as f64 / 60_000.0)
}
