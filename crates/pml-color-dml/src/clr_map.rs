use roxmltree::Node;

use pml_color::{ColorMap, ColorSchemeIndex};

use crate::DmlError;

/// Parse the attributes of a `p:clrMap` (or `a:overrideClrMapping`) element.
///
/// Slots without an attribute are left unmapped; resolving them later reports the slot.
pub fn parse_color_map(node: Node<'_, '_>) -> Result<ColorMap, DmlError> {
    let mut map = ColorMap::empty();
    for slot in ColorMap::SLOTS {
        let attr = slot.as_str();
        let Some(value) = node.attribute(attr) else {
            continue;
        };
        let index = value
            .parse::<ColorSchemeIndex>()
            .map_err(|_| DmlError::InvalidValue {
                attr,
                value: value.to_string(),
            })?;
        map.set(slot, index)?;
    }
    Ok(map)
}

/// Parse a `p:clrMapOvr` element: `None` for `a:masterClrMapping`, the map for
/// `a:overrideClrMapping`.
pub fn parse_color_map_override(clr_map_ovr: Node<'_, '_>) -> Result<Option<ColorMap>, DmlError> {
    let Some(choice) = clr_map_ovr.children().find(|n| n.is_element()) else {
        return Err(DmlError::MissingElement("a:masterClrMapping or a:overrideClrMapping"));
    };
    match choice.tag_name().name() {
        "masterClrMapping" => Ok(None),
        "overrideClrMapping" => parse_color_map(choice).map(Some),
        other => Err(DmlError::Invalid(format!(
            "unexpected `{other}` in p:clrMapOvr"
        ))),
    }
}
