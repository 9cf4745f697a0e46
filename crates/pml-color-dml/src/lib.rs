//! Read DrawingML color markup into [`pml_color`] values.
//!
//! Covers the color-bearing pieces of PresentationML parts:
//! - color choices (`a:srgbClr`, `a:schemeClr`, ...) with their transform children,
//! - theme palettes (`a:clrScheme` in `theme1.xml` or a `a:themeOverride` part),
//! - color maps (`p:clrMap` on a master, `p:clrMapOvr` on layouts and slides).
//!
//! Opening the package and following relationships to find these parts is left to the caller.

mod clr_map;
mod color;
mod error;
mod parts;
mod theme;


pub use crate::clr_map::{parse_color_map, parse_color_map_override};
pub use crate::color::{find_color, parse_color, parse_transforms};
pub use crate::error::DmlError;
pub use crate::parts::{read_master, read_slide_level};
pub use crate::theme::{
    parse_color_scheme, parse_color_scheme_over, read_theme, read_theme_override,
};
