//! Theme color tokens, color maps and color schemes.
//!
//! A `a:schemeClr` names a *logical* slot (`bg1`, `tx1`, `accent1`, ...). The active color map
//! (`p:clrMap`) sends it to one of the twelve *palette* slots of the active color scheme
//! (`a:clrScheme`), which finally holds a literal color.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::resolve::BaseColor;

/// `ST_SchemeColorVal`: the tokens a `a:schemeClr` may carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemeColorVal {
    Bg1,
    Tx1,
    Bg2,
    Tx2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hlink,
    FolHlink,
    /// `phClr`: the color supplied by the style the shape is drawn with.
    PhClr,
    Dk1,
    Lt1,
    Dk2,
    Lt2,
}

impl SchemeColorVal {
    pub const fn as_str(self) -> &'static str {
        match self {
            SchemeColorVal::Bg1 => "bg1",
            SchemeColorVal::Tx1 => "tx1",
            SchemeColorVal::Bg2 => "bg2",
            SchemeColorVal::Tx2 => "tx2",
            SchemeColorVal::Accent1 => "accent1",
            SchemeColorVal::Accent2 => "accent2",
            SchemeColorVal::Accent3 => "accent3",
            SchemeColorVal::Accent4 => "accent4",
            SchemeColorVal::Accent5 => "accent5",
            SchemeColorVal::Accent6 => "accent6",
            SchemeColorVal::Hlink => "hlink",
            SchemeColorVal::FolHlink => "folHlink",
            SchemeColorVal::PhClr => "phClr",
            SchemeColorVal::Dk1 => "dk1",
            SchemeColorVal::Lt1 => "lt1",
            SchemeColorVal::Dk2 => "dk2",
            SchemeColorVal::Lt2 => "lt2",
        }
    }

    /// The palette slot this token names without going through a color map.
    ///
    /// Only `dk1`, `lt1`, `dk2` and `lt2` address the palette directly.
    pub const fn direct_index(self) -> Option<ColorSchemeIndex> {
        match self {
            SchemeColorVal::Dk1 => Some(ColorSchemeIndex::Dk1),
            SchemeColorVal::Lt1 => Some(ColorSchemeIndex::Lt1),
            SchemeColorVal::Dk2 => Some(ColorSchemeIndex::Dk2),
            SchemeColorVal::Lt2 => Some(ColorSchemeIndex::Lt2),
            _ => None,
        }
    }
}

impl fmt::Display for SchemeColorVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeColorVal {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "bg1" => SchemeColorVal::Bg1,
            "tx1" => SchemeColorVal::Tx1,
            "bg2" => SchemeColorVal::Bg2,
            "tx2" => SchemeColorVal::Tx2,
            "accent1" => SchemeColorVal::Accent1,
            "accent2" => SchemeColorVal::Accent2,
            "accent3" => SchemeColorVal::Accent3,
            "accent4" => SchemeColorVal::Accent4,
            "accent5" => SchemeColorVal::Accent5,
            "accent6" => SchemeColorVal::Accent6,
            "hlink" => SchemeColorVal::Hlink,
            "folHlink" => SchemeColorVal::FolHlink,
            "phClr" => SchemeColorVal::PhClr,
            "dk1" => SchemeColorVal::Dk1,
            "lt1" => SchemeColorVal::Lt1,
            "dk2" => SchemeColorVal::Dk2,
            "lt2" => SchemeColorVal::Lt2,
            other => return Err(ColorError::UnknownSlot(other.to_string())),
        })
    }
}

/// `ST_ColorSchemeIndex`: the twelve palette slots of a color scheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorSchemeIndex {
    Dk1,
    Lt1,
    Dk2,
    Lt2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hlink,
    FolHlink,
}

impl ColorSchemeIndex {
    pub const ALL: [ColorSchemeIndex; 12] = [
        ColorSchemeIndex::Dk1,
        ColorSchemeIndex::Lt1,
        ColorSchemeIndex::Dk2,
        ColorSchemeIndex::Lt2,
        ColorSchemeIndex::Accent1,
        ColorSchemeIndex::Accent2,
        ColorSchemeIndex::Accent3,
        ColorSchemeIndex::Accent4,
        ColorSchemeIndex::Accent5,
        ColorSchemeIndex::Accent6,
        ColorSchemeIndex::Hlink,
        ColorSchemeIndex::FolHlink,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ColorSchemeIndex::Dk1 => "dk1",
            ColorSchemeIndex::Lt1 => "lt1",
            ColorSchemeIndex::Dk2 => "dk2",
            ColorSchemeIndex::Lt2 => "lt2",
            ColorSchemeIndex::Accent1 => "accent1",
            ColorSchemeIndex::Accent2 => "accent2",
            ColorSchemeIndex::Accent3 => "accent3",
            ColorSchemeIndex::Accent4 => "accent4",
            ColorSchemeIndex::Accent5 => "accent5",
            ColorSchemeIndex::Accent6 => "accent6",
            ColorSchemeIndex::Hlink => "hlink",
            ColorSchemeIndex::FolHlink => "folHlink",
        }
    }
}

impl fmt::Display for ColorSchemeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSchemeIndex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorSchemeIndex::ALL
            .into_iter()
            .find(|idx| idx.as_str() == s)
            .ok_or_else(|| ColorError::UnknownSlot(s.to_string()))
    }
}

/// `p:clrMap`: where each logical slot points in the palette.
///
/// An absent entry is not defaulted; resolving a color through it fails with
/// [`ColorError::UnknownSlot`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorMap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg1: Option<ColorSchemeIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx1: Option<ColorSchemeIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg2: Option<ColorSchemeIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx2: Option<ColorSchemeIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent1: Option<ColorSchemeIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent2: Option<ColorSchemeIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent3: Option<ColorSchemeIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent4: Option<ColorSchemeIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent5: Option<ColorSchemeIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent6: Option<ColorSchemeIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hlink: Option<ColorSchemeIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fol_hlink: Option<ColorSchemeIndex>,
}

impl Default for ColorMap {
    /// The mapping PowerPoint writes on a new slide master.
    fn default() -> Self {
        Self {
            bg1: Some(ColorSchemeIndex::Lt1),
            tx1: Some(ColorSchemeIndex::Dk1),
            bg2: Some(ColorSchemeIndex::Lt2),
            tx2: Some(ColorSchemeIndex::Dk2),
            accent1: Some(ColorSchemeIndex::Accent1),
            accent2: Some(ColorSchemeIndex::Accent2),
            accent3: Some(ColorSchemeIndex::Accent3),
            accent4: Some(ColorSchemeIndex::Accent4),
            accent5: Some(ColorSchemeIndex::Accent5),
            accent6: Some(ColorSchemeIndex::Accent6),
            hlink: Some(ColorSchemeIndex::Hlink),
            fol_hlink: Some(ColorSchemeIndex::FolHlink),
        }
    }
}

impl ColorMap {
    /// The logical slots a color map carries, in `p:clrMap` attribute order.
    pub const SLOTS: [SchemeColorVal; 12] = [
        SchemeColorVal::Bg1,
        SchemeColorVal::Tx1,
        SchemeColorVal::Bg2,
        SchemeColorVal::Tx2,
        SchemeColorVal::Accent1,
        SchemeColorVal::Accent2,
        SchemeColorVal::Accent3,
        SchemeColorVal::Accent4,
        SchemeColorVal::Accent5,
        SchemeColorVal::Accent6,
        SchemeColorVal::Hlink,
        SchemeColorVal::FolHlink,
    ];

    /// A map without any entries.
    pub const fn empty() -> Self {
        Self {
            bg1: None,
            tx1: None,
            bg2: None,
            tx2: None,
            accent1: None,
            accent2: None,
            accent3: None,
            accent4: None,
            accent5: None,
            accent6: None,
            hlink: None,
            fol_hlink: None,
        }
    }

    pub fn get(&self, slot: SchemeColorVal) -> Option<ColorSchemeIndex> {
        self.entry(slot).and_then(|entry| *entry)
    }

    /// Set the palette slot for `slot`. Fails for tokens a color map cannot carry
    /// (`dk1`/`lt1`/`dk2`/`lt2` and `phClr`).
    pub fn set(&mut self, slot: SchemeColorVal, index: ColorSchemeIndex) -> Result<(), ColorError> {
        match self.entry_mut(slot) {
            Some(entry) => {
                *entry = Some(index);
                Ok(())
            }
            None => Err(ColorError::UnknownSlot(slot.to_string())),
        }
    }

    fn entry(&self, slot: SchemeColorVal) -> Option<&Option<ColorSchemeIndex>> {
        Some(match slot {
            SchemeColorVal::Bg1 => &self.bg1,
            SchemeColorVal::Tx1 => &self.tx1,
            SchemeColorVal::Bg2 => &self.bg2,
            SchemeColorVal::Tx2 => &self.tx2,
            SchemeColorVal::Accent1 => &self.accent1,
            SchemeColorVal::Accent2 => &self.accent2,
            SchemeColorVal::Accent3 => &self.accent3,
            SchemeColorVal::Accent4 => &self.accent4,
            SchemeColorVal::Accent5 => &self.accent5,
            SchemeColorVal::Accent6 => &self.accent6,
            SchemeColorVal::Hlink => &self.hlink,
            SchemeColorVal::FolHlink => &self.fol_hlink,
            SchemeColorVal::PhClr
            | SchemeColorVal::Dk1
            | SchemeColorVal::Lt1
            | SchemeColorVal::Dk2
            | SchemeColorVal::Lt2 => return None,
        })
    }

    fn entry_mut(&mut self, slot: SchemeColorVal) -> Option<&mut Option<ColorSchemeIndex>> {
        Some(match slot {
            SchemeColorVal::Bg1 => &mut self.bg1,
            SchemeColorVal::Tx1 => &mut self.tx1,
            SchemeColorVal::Bg2 => &mut self.bg2,
            SchemeColorVal::Tx2 => &mut self.tx2,
            SchemeColorVal::Accent1 => &mut self.accent1,
            SchemeColorVal::Accent2 => &mut self.accent2,
            SchemeColorVal::Accent3 => &mut self.accent3,
            SchemeColorVal::Accent4 => &mut self.accent4,
            SchemeColorVal::Accent5 => &mut self.accent5,
            SchemeColorVal::Accent6 => &mut self.accent6,
            SchemeColorVal::Hlink => &mut self.hlink,
            SchemeColorVal::FolHlink => &mut self.fol_hlink,
            SchemeColorVal::PhClr
            | SchemeColorVal::Dk1
            | SchemeColorVal::Lt1
            | SchemeColorVal::Dk2
            | SchemeColorVal::Lt2 => return None,
        })
    }
}

/// `a:clrScheme`: the twelve colors of a theme palette.
///
/// Entries are [`BaseColor`]s, so a palette can never point back into itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub dk1: BaseColor,
    pub lt1: BaseColor,
    pub dk2: BaseColor,
    pub lt2: BaseColor,
    pub accent1: BaseColor,
    pub accent2: BaseColor,
    pub accent3: BaseColor,
    pub accent4: BaseColor,
    pub accent5: BaseColor,
    pub accent6: BaseColor,
    pub hlink: BaseColor,
    pub fol_hlink: BaseColor,
}

impl Default for ColorScheme {
    /// The "Office" palette shipped with Office 2013 and later.
    fn default() -> Self {
        let srgb = |hex: &str| BaseColor::Srgb(hex.to_string());
        Self {
            name: Some("Office".to_string()),
            dk1: BaseColor::System {
                val: "windowText".to_string(),
                last_color: Some("000000".to_string()),
            },
            lt1: BaseColor::System {
                val: "window".to_string(),
                last_color: Some("FFFFFF".to_string()),
            },
            dk2: srgb("44546A"),
            lt2: srgb("E7E6E6"),
            accent1: srgb("4472C4"),
            accent2: srgb("ED7D31"),
            accent3: srgb("A5A5A5"),
            accent4: srgb("FFC000"),
            accent5: srgb("5B9BD5"),
            accent6: srgb("70AD47"),
            hlink: srgb("0563C1"),
            fol_hlink: srgb("954F72"),
        }
    }
}

impl ColorScheme {
    pub fn get(&self, index: ColorSchemeIndex) -> &BaseColor {
        match index {
            ColorSchemeIndex::Dk1 => &self.dk1,
            ColorSchemeIndex::Lt1 => &self.lt1,
            ColorSchemeIndex::Dk2 => &self.dk2,
            ColorSchemeIndex::Lt2 => &self.lt2,
            ColorSchemeIndex::Accent1 => &self.accent1,
            ColorSchemeIndex::Accent2 => &self.accent2,
            ColorSchemeIndex::Accent3 => &self.accent3,
            ColorSchemeIndex::Accent4 => &self.accent4,
            ColorSchemeIndex::Accent5 => &self.accent5,
            ColorSchemeIndex::Accent6 => &self.accent6,
            ColorSchemeIndex::Hlink => &self.hlink,
            ColorSchemeIndex::FolHlink => &self.fol_hlink,
        }
    }

    pub fn get_mut(&mut self, index: ColorSchemeIndex) -> &mut BaseColor {
        match index {
            ColorSchemeIndex::Dk1 => &mut self.dk1,
            ColorSchemeIndex::Lt1 => &mut self.lt1,
            ColorSchemeIndex::Dk2 => &mut self.dk2,
            ColorSchemeIndex::Lt2 => &mut self.lt2,
            ColorSchemeIndex::Accent1 => &mut self.accent1,
            ColorSchemeIndex::Accent2 => &mut self.accent2,
            ColorSchemeIndex::Accent3 => &mut self.accent3,
            ColorSchemeIndex::Accent4 => &mut self.accent4,
            ColorSchemeIndex::Accent5 => &mut self.accent5,
            ColorSchemeIndex::Accent6 => &mut self.accent6,
            ColorSchemeIndex::Hlink => &mut self.hlink,
            ColorSchemeIndex::FolHlink => &mut self.fol_hlink,
        }
    }
}

/// Map a logical scheme token to a palette slot through `color_map`.
///
/// `dk1`/`lt1`/`dk2`/`lt2` map to themselves. `phClr` is never looked up here: placeholder
/// colors come from the surrounding style, not the palette.
pub fn resolve_slot(
    color_map: &ColorMap,
    slot: SchemeColorVal,
) -> Result<ColorSchemeIndex, ColorError> {
    if let Some(index) = slot.direct_index() {
        return Ok(index);
    }
    color_map
        .get(slot)
        .ok_or_else(|| ColorError::UnknownSlot(slot.to_string()))
}

/// The palette entry stored in `scheme` for `index`.
pub fn resolve_color(scheme: &ColorScheme, index: ColorSchemeIndex) -> &BaseColor {
    scheme.get(index)
}
