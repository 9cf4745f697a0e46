//! Whole-part readers producing the levels of a [`PresentationContext`].
//!
//! [`PresentationContext`]: pml_color::PresentationContext

use roxmltree::{Document, Node};

use pml_color::{MasterLevel, SlideLevel};

use crate::clr_map::{parse_color_map, parse_color_map_override};
use crate::theme::{read_theme, read_theme_override};
use crate::DmlError;

/// Read a slide master (`ppt/slideMasters/slideMasterN.xml`) with its related theme and, if
/// the master has one, its theme override part.
pub fn read_master(
    master_xml: &[u8],
    theme_xml: &[u8],
    theme_override_xml: Option<&[u8]>,
) -> Result<MasterLevel, DmlError> {
    let xml = std::str::from_utf8(master_xml)?;
    let doc = Document::parse(xml)?;

    let clr_map = child_element(doc.root_element(), "clrMap")
        .ok_or(DmlError::MissingElement("p:clrMap"))?;

    let theme = read_theme(theme_xml)?;
    let theme_override = match theme_override_xml {
        Some(xml) => read_theme_override(xml, &theme)?,
        None => None,
    };

    Ok(MasterLevel {
        color_map: parse_color_map(clr_map)?,
        theme,
        theme_override,
    })
}

/// Read a slide (`p:sld`) or slide layout (`p:sldLayout`) part.
///
/// A missing `p:clrMapOvr` is the same as `a:masterClrMapping`. A theme override is read on
/// top of the palette `master` would otherwise supply.
pub fn read_slide_level(
    slide_xml: &[u8],
    theme_override_xml: Option<&[u8]>,
    master: &MasterLevel,
) -> Result<SlideLevel, DmlError> {
    let xml = std::str::from_utf8(slide_xml)?;
    let doc = Document::parse(xml)?;

    let color_map = match child_element(doc.root_element(), "clrMapOvr") {
        Some(ovr) => parse_color_map_override(ovr)?,
        None => None,
    };

    let base = master.theme_override.as_ref().unwrap_or(&master.theme);
    let theme_override = match theme_override_xml {
        Some(xml) => read_theme_override(xml, base)?,
        None => None,
    };

    Ok(SlideLevel {
        color_map,
        theme_override,
    })
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}
