use std::collections::BTreeMap;

use pretty_assertions::assert_eq;

use pml_color::{
    active_color_map, active_color_scheme, resolve, to_hex, to_html, to_svg_tuple, BaseColor,
    ColorError, ColorMap, ColorReference, ColorScheme, ColorSchemeIndex, ColorTransforms,
    ColorValue, MasterLevel, PresentationContext, ResolveOptions, Rgba, SchemeColorVal,
    SlideLevel,
};

fn scheme_with_accent1(hex: &str) -> ColorScheme {
    ColorScheme {
        accent1: BaseColor::Srgb(hex.to_string()),
        ..ColorScheme::default()
    }
}

#[test]
fn explicit_hex_without_transforms() {
    let master = MasterLevel::default();
    let layout = SlideLevel::default();
    let ctx = PresentationContext::for_layout(&layout, &master);

    let value = resolve(
        &ColorReference::srgb("FF0000"),
        &ctx,
        &ResolveOptions::default(),
    )
    .unwrap();
    assert_eq!(value, ColorValue::Rgba(Rgba::with_alpha(255, 0, 0, 1.0)));
    assert_eq!(to_hex(to_svg_tuple(&value).unwrap()), "FF0000");
}

#[test]
fn scheme_accent_with_lum_mod() {
    let master = MasterLevel {
        theme: scheme_with_accent1("4472C4"),
        ..MasterLevel::default()
    };
    let layout = SlideLevel::default();
    let slide = SlideLevel::default();
    let ctx = PresentationContext::for_slide(&slide, &layout, &master);
    assert_eq!(
        active_color_map(&ctx).get(SchemeColorVal::Accent1),
        Some(ColorSchemeIndex::Accent1)
    );

    let reference =
        ColorReference::scheme(SchemeColorVal::Accent1).with_transforms(ColorTransforms {
            lum_mod: Some(0.6),
            ..Default::default()
        });
    let value = resolve(&reference, &ctx, &ResolveOptions::default()).unwrap();

    let expected = {
        let mut hsl = pml_color::rgb_to_hsl(Rgba::new(0x44, 0x72, 0xC4));
        hsl.l *= 0.6;
        pml_color::hsl_to_rgb(hsl)
    };
    assert_eq!(value, ColorValue::Rgba(expected));
    assert_eq!(to_html(&value), "#264478");
}

#[test]
fn placeholder_substitution() {
    let master = MasterLevel::default();
    let layout = SlideLevel::default();
    let ctx = PresentationContext::for_layout(&layout, &master);
    let reference =
        ColorReference::scheme(SchemeColorVal::PhClr).with_transforms(ColorTransforms {
            shade: Some(0.5),
            ..Default::default()
        });

    assert_eq!(
        resolve(&reference, &ctx, &ResolveOptions::default()),
        Err(ColorError::PlaceholderRequiresContext)
    );

    let options =
        ResolveOptions::default().with_placeholder(Rgba::with_alpha(200, 200, 200, 1.0));
    assert_eq!(
        resolve(&reference, &ctx, &options),
        Ok(ColorValue::Rgba(Rgba::with_alpha(100, 100, 100, 1.0)))
    );
}

#[test]
fn preset_names() {
    let master = MasterLevel::default();
    let layout = SlideLevel::default();
    let ctx = PresentationContext::for_layout(&layout, &master);

    assert_eq!(
        resolve(
            &ColorReference::preset("black"),
            &ctx,
            &ResolveOptions::default()
        ),
        Ok(ColorValue::Rgba(Rgba::with_alpha(0, 0, 0, 1.0)))
    );
    assert_eq!(
        resolve(
            &ColorReference::preset("notacolor"),
            &ctx,
            &ResolveOptions::default()
        ),
        Err(ColorError::UnknownPreset("notacolor".to_string()))
    );
}

#[test]
fn master_supplies_map_and_scheme_when_nothing_overrides() {
    let mut master_map = ColorMap::default();
    master_map
        .set(SchemeColorVal::Bg1, ColorSchemeIndex::Dk2)
        .unwrap();
    let master = MasterLevel {
        color_map: master_map.clone(),
        theme: scheme_with_accent1("ABCDEF"),
        theme_override: None,
    };
    let layout = SlideLevel::default();
    let slide = SlideLevel::default();
    let ctx = PresentationContext::for_slide(&slide, &layout, &master);

    assert_eq!(active_color_map(&ctx), &master_map);
    assert_eq!(active_color_scheme(&ctx), &master.theme);

    let bg = resolve(
        &ColorReference::scheme(SchemeColorVal::Bg1),
        &ctx,
        &ResolveOptions::default(),
    )
    .unwrap();
    assert_eq!(to_html(&bg), "#44546A");
}

#[test]
fn slide_overrides_beat_layout_and_master() {
    let master = MasterLevel::default();
    let layout = SlideLevel {
        color_map: None,
        theme_override: Some(scheme_with_accent1("111111")),
    };
    let mut slide_map = ColorMap::default();
    slide_map
        .set(SchemeColorVal::Accent1, ColorSchemeIndex::Accent2)
        .unwrap();
    let slide = SlideLevel {
        color_map: Some(slide_map),
        theme_override: None,
    };

    // Map from the slide, palette from the layout's override.
    let ctx = PresentationContext::for_slide(&slide, &layout, &master);
    let accent = resolve(
        &ColorReference::scheme(SchemeColorVal::Accent1),
        &ctx,
        &ResolveOptions::default(),
    )
    .unwrap();
    assert_eq!(to_html(&accent), "#ED7D31");

    // Layout alone: its override palette, master's map.
    let ctx = PresentationContext::for_layout(&layout, &master);
    let accent = resolve(
        &ColorReference::scheme(SchemeColorVal::Accent1),
        &ctx,
        &ResolveOptions::default(),
    )
    .unwrap();
    assert_eq!(to_html(&accent), "#111111");
}

#[test]
fn unmapped_slot_is_an_error_not_a_default() {
    let master = MasterLevel {
        color_map: ColorMap::empty(),
        ..MasterLevel::default()
    };
    let layout = SlideLevel::default();
    let ctx = PresentationContext::for_layout(&layout, &master);

    assert_eq!(
        resolve(
            &ColorReference::scheme(SchemeColorVal::Tx1),
            &ctx,
            &ResolveOptions::default()
        ),
        Err(ColorError::UnknownSlot("tx1".to_string()))
    );
    // dk1 addresses the palette directly.
    assert_eq!(
        resolve(
            &ColorReference::scheme(SchemeColorVal::Dk1),
            &ctx,
            &ResolveOptions::default()
        ),
        Ok(ColorValue::Rgba(Rgba::BLACK))
    );
}

#[test]
fn malformed_palette_entry_surfaces_as_error() {
    let master = MasterLevel {
        theme: scheme_with_accent1("44-72C4"),
        ..MasterLevel::default()
    };
    let layout = SlideLevel::default();
    let ctx = PresentationContext::for_layout(&layout, &master);

    assert!(matches!(
        resolve(
            &ColorReference::scheme(SchemeColorVal::Accent1),
            &ctx,
            &ResolveOptions::default()
        ),
        Err(ColorError::MalformedReference(_))
    ));
}

#[test]
fn color_schemes_roundtrip_via_json_fixture() {
    let schemes: BTreeMap<String, ColorScheme> =
        serde_json::from_str(include_str!("fixtures/color_schemes.json")).unwrap();
    assert_eq!(schemes.len(), 3);
    assert_eq!(schemes["office"], ColorScheme::default());

    for (name, scheme) in schemes {
        let json = serde_json::to_string(&scheme).unwrap();
        let reparsed: ColorScheme = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, scheme, "scheme {name}");
    }
}

#[test]
fn every_slot_of_a_fixture_scheme_resolves() {
    let schemes: BTreeMap<String, ColorScheme> =
        serde_json::from_str(include_str!("fixtures/color_schemes.json")).unwrap();
    let master = MasterLevel {
        theme: schemes["mixed"].clone(),
        ..MasterLevel::default()
    };
    let layout = SlideLevel::default();
    let ctx = PresentationContext::for_layout(&layout, &master);

    let html: Vec<String> = ColorMap::SLOTS
        .into_iter()
        .map(|slot| {
            let value = resolve(
                &ColorReference::scheme(slot),
                &ctx,
                &ResolveOptions::default(),
            )
            .unwrap();
            to_html(&value)
        })
        .collect();

    assert_eq!(
        html,
        vec![
            // bg1 -> lt1: a system color without lastClr.
            "transparent",
            "#000000",
            "#E6E6D9",
            "hsl(210 50% 25%)",
            "#112233",
            "#445566",
            "#778899",
            "#AABBCC",
            "#DDEEFF",
            "#6495ED",
            "#0000EE",
            "#551A8B",
        ]
    );
}
