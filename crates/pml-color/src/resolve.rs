//! Turning a color reference into a concrete color.

use serde::{Deserialize, Serialize};

use crate::color::{parse_hex_rgb, ColorValue, Hsla, Rgba};
use crate::error::ColorError;
use crate::preset::preset_color;
use crate::scheme::{resolve_color, resolve_slot, SchemeColorVal};
use crate::theme::{active_color_map, active_color_scheme, PresentationContext};
use crate::transform::{apply_transforms, to_degrees, unit, ColorTransforms};

/// What an unresolvable-but-valid reference resolves to unless the caller says otherwise.
pub const DEFAULT_FALLBACK: &str = "transparent";

/// A color stated in place, without going through the theme.
///
/// Theme palettes are made of these, which is what keeps scheme resolution from recursing
/// more than one level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BaseColor {
    /// `a:srgbClr`: `RRGGBB` hex.
    Srgb(String),
    /// `a:scrgbClr`: channel intensities as fractions (`1.0` = 100%).
    ScRgb { r: f64, g: f64, b: f64 },
    /// `a:hslClr`: hue in degrees, saturation and luminance as fractions.
    Hsl { hue: f64, sat: f64, lum: f64 },
    /// `a:prstClr`.
    Preset(String),
    /// `a:sysClr`. `last_color` is the `RRGGBB` the authoring application last resolved it to.
    System {
        val: String,
        #[serde(default, rename = "lastColor", skip_serializing_if = "Option::is_none")]
        last_color: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ColorKind {
    Base(BaseColor),
    /// `a:schemeClr`.
    Scheme(SchemeColorVal),
    /// A color element the document layer did not recognise, by tag name.
    Unsupported(String),
}

/// A color reference as recorded on a fill, line, text run, ...
#[derive(Clone, Debug, PartialEq)]
pub struct ColorReference {
    pub kind: ColorKind,
    pub transforms: ColorTransforms,
}

impl ColorReference {
    pub fn new(kind: ColorKind) -> Self {
        Self {
            kind,
            transforms: ColorTransforms::default(),
        }
    }

    pub fn srgb(hex: impl Into<String>) -> Self {
        Self::new(ColorKind::Base(BaseColor::Srgb(hex.into())))
    }

    pub fn preset(name: impl Into<String>) -> Self {
        Self::new(ColorKind::Base(BaseColor::Preset(name.into())))
    }

    pub fn scheme(slot: SchemeColorVal) -> Self {
        Self::new(ColorKind::Scheme(slot))
    }

    pub fn with_transforms(mut self, transforms: ColorTransforms) -> Self {
        self.transforms = transforms;
        self
    }
}

impl From<BaseColor> for ColorReference {
    fn from(value: BaseColor) -> Self {
        ColorReference::new(ColorKind::Base(value))
    }
}

/// Caller-side inputs to a resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolveOptions {
    /// The color `phClr` stands for, supplied by the style the shape is drawn with.
    pub placeholder: Option<ColorValue>,
    /// Returned (as [`ColorValue::Fallback`]) when a reference has no concrete value.
    pub default: String,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            placeholder: None,
            default: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl ResolveOptions {
    pub fn with_placeholder(mut self, color: impl Into<ColorValue>) -> Self {
        self.placeholder = Some(color.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }
}

/// Resolve `reference` against `context` and apply its transforms.
pub fn resolve(
    reference: &ColorReference,
    context: &PresentationContext<'_>,
    options: &ResolveOptions,
) -> Result<ColorValue, ColorError> {
    let base = resolve_base(reference, context, options)?;
    Ok(apply_transforms(base, &reference.transforms))
}

/// Resolve `reference` to its base color, ignoring its transforms.
pub fn resolve_base(
    reference: &ColorReference,
    context: &PresentationContext<'_>,
    options: &ResolveOptions,
) -> Result<ColorValue, ColorError> {
    match &reference.kind {
        ColorKind::Base(base) => base_color_value(base, &options.default),
        ColorKind::Scheme(SchemeColorVal::PhClr) => options
            .placeholder
            .clone()
            .ok_or(ColorError::PlaceholderRequiresContext),
        ColorKind::Scheme(slot) => {
            let index = resolve_slot(active_color_map(context), *slot)?;
            let base = resolve_color(active_color_scheme(context), index);
            base_color_value(base, &options.default)
        }
        ColorKind::Unsupported(tag) => {
            log::warn!("unsupported color element `{tag}`; using `{}`", options.default);
            Ok(ColorValue::Fallback(options.default.clone()))
        }
    }
}

/// Resolve a `phClr` reference from a theme style against the color of the shape using it.
///
/// `style_color` is resolved without its own transforms and stands in for `phClr`;
/// `placeholder` then contributes its transforms on top.
pub fn resolve_placeholder(
    style_color: &ColorReference,
    placeholder: &ColorReference,
    context: &PresentationContext<'_>,
    options: &ResolveOptions,
) -> Result<ColorValue, ColorError> {
    let substituted = resolve_base(style_color, context, options)?;
    let options = ResolveOptions {
        placeholder: Some(substituted),
        default: options.default.clone(),
    };
    resolve(placeholder, context, &options)
}

fn base_color_value(base: &BaseColor, default: &str) -> Result<ColorValue, ColorError> {
    Ok(match base {
        BaseColor::Srgb(hex) => ColorValue::Rgba(parse_hex_rgb(hex)?),
        BaseColor::ScRgb { r, g, b } => ColorValue::Rgba(Rgba::new(
            percent_channel(*r),
            percent_channel(*g),
            percent_channel(*b),
        )),
        BaseColor::Hsl { hue, sat, lum } => {
            ColorValue::Hsla(Hsla::new(to_degrees(*hue), unit(*sat), unit(*lum)))
        }
        BaseColor::Preset(name) => ColorValue::Rgba(preset_color(name)?),
        BaseColor::System { val, last_color } => match last_color {
            Some(hex) => ColorValue::Rgba(parse_hex_rgb(hex)?),
            None => {
                log::debug!("system color `{val}` has no lastClr; using `{default}`");
                ColorValue::Fallback(default.to_string())
            }
        },
    })
}

fn percent_channel(fraction: f64) -> u8 {
    (unit(fraction) * 255.0).round() as u8
}
