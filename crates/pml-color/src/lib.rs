//! PresentationML color resolution.
//!
//! DrawingML never stores "the color of a shape" directly. A fill or line carries a color
//! *reference* (`a:srgbClr`, `a:prstClr`, `a:schemeClr`, ...) plus an optional list of color
//! transforms (`a:lumMod`, `a:tint`, ...). Scheme references are indirected twice: first through
//! the active color map (`p:clrMap` / `p:clrMapOvr`) and then through the active theme color
//! scheme (`a:clrScheme`, possibly replaced by a theme override on a slide or layout).
//!
//! This crate turns such a reference into a concrete [`ColorValue`]:
//! - [`convert`]: RGB <-> HSL conversion.
//! - [`transform`]: the fixed-order transform pipeline.
//! - [`scheme`]: color map / color scheme lookups.
//! - [`theme`]: slide -> layout -> master inheritance.
//! - [`resolve`]: dispatch over the reference kinds.
//! - [`format`]: hex / CSS-HSL / SVG output.
//!
//! Parsing markup is the job of the document layer (see the `pml-color-dml` crate); everything
//! here operates on already-structured values and never mutates them.

pub mod convert;
pub mod format;
pub mod preset;
pub mod resolve;
pub mod scheme;
pub mod theme;
pub mod transform;

mod color;
mod error;

pub use crate::color::{parse_hex_rgb, ColorValue, Hsla, Rgba};
pub use crate::convert::{hsl_to_rgb, rgb_to_hsl};
pub use crate::error::ColorError;
pub use crate::format::{to_css_hsl, to_hex, to_html, to_svg, to_svg_tuple, SvgColor};
pub use crate::preset::preset_color;
pub use crate::resolve::{
    resolve, resolve_base, resolve_placeholder, BaseColor, ColorKind, ColorReference,
    ResolveOptions, DEFAULT_FALLBACK,
};
pub use crate::scheme::{
    resolve_color, resolve_slot, ColorMap, ColorScheme, ColorSchemeIndex, SchemeColorVal,
};
pub use crate::theme::{
    active_color_map, active_color_scheme, MasterLevel, PresentationContext, SlideLevel,
    ThemeLevel,
};
pub use crate::transform::{apply_transforms, ColorTransforms};
