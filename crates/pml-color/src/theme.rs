//! Slide -> layout -> master inheritance of color maps and color schemes.
//!
//! The two are resolved independently: a slide may override the color map while the palette
//! still comes from the master's theme, or the other way around.

use crate::scheme::{ColorMap, ColorScheme};

/// Color information one level of the presentation hierarchy may contribute.
pub trait ThemeLevel {
    /// The level's own color map (`p:clrMapOvr/a:overrideClrMapping`), if it has one.
    fn color_map(&self) -> Option<&ColorMap>;

    /// The level's theme override palette, if it has one.
    fn theme_override(&self) -> Option<&ColorScheme>;
}

/// A slide or slide layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlideLevel {
    /// `None` means `a:masterClrMapping`: use the map inherited from above.
    pub color_map: Option<ColorMap>,
    pub theme_override: Option<ColorScheme>,
}

impl ThemeLevel for SlideLevel {
    fn color_map(&self) -> Option<&ColorMap> {
        self.color_map.as_ref()
    }

    fn theme_override(&self) -> Option<&ColorScheme> {
        self.theme_override.as_ref()
    }
}

/// A slide master: always has a color map and a theme.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MasterLevel {
    pub color_map: ColorMap,
    pub theme: ColorScheme,
    pub theme_override: Option<ColorScheme>,
}

impl ThemeLevel for MasterLevel {
    fn color_map(&self) -> Option<&ColorMap> {
        Some(&self.color_map)
    }

    fn theme_override(&self) -> Option<&ColorScheme> {
        self.theme_override.as_ref()
    }
}

/// The chain a color is resolved against. Borrowed for the duration of a resolution call.
#[derive(Clone, Copy)]
pub struct PresentationContext<'a> {
    slide: Option<&'a dyn ThemeLevel>,
    layout: &'a dyn ThemeLevel,
    master: &'a MasterLevel,
}

impl<'a> PresentationContext<'a> {
    pub fn new(
        slide: Option<&'a dyn ThemeLevel>,
        layout: &'a dyn ThemeLevel,
        master: &'a MasterLevel,
    ) -> Self {
        Self {
            slide,
            layout,
            master,
        }
    }

    pub fn for_slide(
        slide: &'a dyn ThemeLevel,
        layout: &'a dyn ThemeLevel,
        master: &'a MasterLevel,
    ) -> Self {
        Self::new(Some(slide), layout, master)
    }

    pub fn for_layout(layout: &'a dyn ThemeLevel, master: &'a MasterLevel) -> Self {
        Self::new(None, layout, master)
    }

    /// Slide (if any), layout, master: nearest first.
    fn levels(&self) -> impl Iterator<Item = &'a dyn ThemeLevel> {
        let master: &'a dyn ThemeLevel = self.master;
        self.slide.into_iter().chain([self.layout, master])
    }
}

impl core::fmt::Debug for PresentationContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PresentationContext")
            .field("has_slide", &self.slide.is_some())
            .field("master", &self.master)
            .finish_non_exhaustive()
    }
}

/// The nearest color map walking slide -> layout -> master.
pub fn active_color_map<'a>(context: &PresentationContext<'a>) -> &'a ColorMap {
    let master = context.master;
    context
        .levels()
        .find_map(|level| level.color_map())
        .unwrap_or(&master.color_map)
}

/// The nearest theme override walking slide -> layout -> master, else the master's theme.
pub fn active_color_scheme<'a>(context: &PresentationContext<'a>) -> &'a ColorScheme {
    let master = context.master;
    context
        .levels()
        .find_map(|level| level.theme_override())
        .unwrap_or(&master.theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::BaseColor;
    use crate::scheme::{ColorSchemeIndex, SchemeColorVal};

    fn scheme_named(name: &str) -> ColorScheme {
        ColorScheme {
            name: Some(name.to_string()),
            accent1: BaseColor::Srgb("010203".to_string()),
            ..ColorScheme::default()
        }
    }

    fn dark_map() -> ColorMap {
        let mut map = ColorMap::default();
        map.set(SchemeColorVal::Bg1, ColorSchemeIndex::Dk1).unwrap();
        map.set(SchemeColorVal::Tx1, ColorSchemeIndex::Lt1).unwrap();
        map
    }

    #[test]
    fn falls_back_to_master_for_both() {
        let master = MasterLevel::default();
        let layout = SlideLevel::default();
        let slide = SlideLevel::default();
        let ctx = PresentationContext::for_slide(&slide, &layout, &master);

        assert!(std::ptr::eq(active_color_map(&ctx), &master.color_map));
        assert!(std::ptr::eq(active_color_scheme(&ctx), &master.theme));
    }

    #[test]
    fn nearest_override_wins() {
        let master = MasterLevel {
            theme_override: Some(scheme_named("master override")),
            ..MasterLevel::default()
        };
        let layout = SlideLevel {
            color_map: Some(dark_map()),
            theme_override: Some(scheme_named("layout")),
        };
        let slide = SlideLevel {
            color_map: None,
            theme_override: Some(scheme_named("slide")),
        };

        let ctx = PresentationContext::for_slide(&slide, &layout, &master);
        assert_eq!(active_color_map(&ctx), &dark_map());
        assert_eq!(active_color_scheme(&ctx).name.as_deref(), Some("slide"));

        let ctx = PresentationContext::for_layout(&layout, &master);
        assert_eq!(active_color_scheme(&ctx).name.as_deref(), Some("layout"));

        let plain_layout = SlideLevel::default();
        let ctx = PresentationContext::for_layout(&plain_layout, &master);
        assert_eq!(
            active_color_scheme(&ctx).name.as_deref(),
            Some("master override")
        );
        assert_eq!(active_color_map(&ctx), &ColorMap::default());
    }

    #[test]
    fn map_and_scheme_come_from_different_levels() {
        let master = MasterLevel::default();
        let layout = SlideLevel {
            color_map: None,
            theme_override: Some(scheme_named("layout")),
        };
        let slide = SlideLevel {
            color_map: Some(dark_map()),
            theme_override: None,
        };

        let ctx = PresentationContext::for_slide(&slide, &layout, &master);
        assert_eq!(active_color_map(&ctx), &dark_map());
        assert_eq!(active_color_scheme(&ctx).name.as_deref(), Some("layout"));
    }
}
