use roxmltree::{Document, Node};

use pml_color::{ColorKind, ColorScheme, ColorSchemeIndex};

use crate::color::find_color;
use crate::DmlError;

/// Parse an `a:clrScheme` element.
///
/// Entries missing from the scheme keep their Office default. Theme palettes can only hold
/// literal colors, so a `a:schemeClr` entry is rejected.
pub fn parse_color_scheme(clr_scheme: Node<'_, '_>) -> Result<ColorScheme, DmlError> {
    parse_color_scheme_over(clr_scheme, &ColorScheme::default())
}

/// Like [`parse_color_scheme`], but entries missing from the scheme keep the value they have
/// in `base`.
pub fn parse_color_scheme_over(
    clr_scheme: Node<'_, '_>,
    base: &ColorScheme,
) -> Result<ColorScheme, DmlError> {
    let mut scheme = ColorScheme {
        name: clr_scheme
            .attribute("name")
            .map(str::to_string)
            .or_else(|| base.name.clone()),
        ..base.clone()
    };

    for index in ColorSchemeIndex::ALL {
        let Some(entry) = clr_scheme
            .children()
            .find(|n| n.is_element() && n.tag_name().name() == index.as_str())
        else {
            log::debug!("color scheme has no `{index}` entry; keeping the inherited one");
            continue;
        };
        let Some(color) = find_color(entry)? else {
            continue;
        };
        if !color.transforms.is_empty() {
            log::debug!("ignoring transforms on color scheme entry `{index}`");
        }
        match color.kind {
            ColorKind::Base(base) => *scheme.get_mut(index) = base,
            ColorKind::Scheme(slot) => {
                return Err(DmlError::Invalid(format!(
                    "color scheme entry `{index}` refers to scheme color `{slot}`"
                )))
            }
            ColorKind::Unsupported(tag) => {
                return Err(DmlError::Invalid(format!(
                    "color scheme entry `{index}` uses unsupported element `{tag}`"
                )))
            }
        }
    }

    Ok(scheme)
}

/// Read the palette of a theme part (`ppt/theme/themeN.xml`).
///
/// A theme without a color scheme yields the Office default palette.
pub fn read_theme(theme_xml: &[u8]) -> Result<ColorScheme, DmlError> {
    let xml = std::str::from_utf8(theme_xml)?;
    let doc = Document::parse(xml)?;

    match find_clr_scheme(&doc) {
        Some(clr_scheme) => parse_color_scheme(clr_scheme),
        None => {
            log::warn!("theme has no a:clrScheme; using the default Office palette");
            Ok(ColorScheme::default())
        }
    }
}

/// Read the palette of a theme override part (`ppt/theme/themeOverrideN.xml`).
///
/// `base` is the palette being overridden; entries the override leaves out are taken from it.
/// Returns `Ok(None)` if the override does not touch the color scheme.
pub fn read_theme_override(
    override_xml: &[u8],
    base: &ColorScheme,
) -> Result<Option<ColorScheme>, DmlError> {
    let xml = std::str::from_utf8(override_xml)?;
    let doc = Document::parse(xml)?;

    find_clr_scheme(&doc)
        .map(|clr_scheme| parse_color_scheme_over(clr_scheme, base))
        .transpose()
}

fn find_clr_scheme<'a, 'input>(doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
    doc.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "clrScheme")
}
