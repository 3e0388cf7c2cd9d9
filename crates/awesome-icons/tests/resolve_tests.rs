//! Integration tests for turning names and codepoints into icons.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use awesome_icons::{
    Color, Edition, IconMode, IconPainter, IconPalette, IconState, IconStyle, OptionSet,
    OptionValue, PaintContext, Painter, Rect, keys,
};
use common::{glyph, provider};

struct Outline {
    drops: Arc<AtomicUsize>,
}

impl IconPainter for Outline {
    fn paint(
        &self,
        _ctx: &mut PaintContext<'_>,
        painter: &mut dyn Painter,
        rect: Rect,
        _mode: IconMode,
        _state: IconState,
        options: &OptionSet,
    ) {
        let color = options.color(keys::COLOR).unwrap_or(Color::BLACK);
        painter.stroke_rect(rect, color, 1.0);
    }
}

impl Drop for Outline {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_beer_uses_defaults() {
    let (awesome, _, _dir) = provider(Edition::Free);
    let icon = awesome.icon("beer", &OptionSet::new());

    assert!(!icon.is_null());
    assert_eq!(icon.style(), Some(IconStyle::Solid));
    assert_eq!(icon.text(), Some("\u{f0fc}"));
    assert_eq!(
        icon.options().color(keys::COLOR),
        Some(IconPalette::light().color)
    );
    assert_eq!(
        icon.option(keys::SCALE_FACTOR).and_then(OptionValue::as_f32),
        Some(0.9)
    );
}

#[test]
fn test_composite_name_matches_lookup() {
    let (awesome, _, _dir) = provider(Edition::Free);

    for style in IconStyle::FREE {
        for (name, codepoint) in awesome.named_codepoints(style) {
            for query in [
                format!("{} {}", style.prefix(), name),
                format!("fa-{} fa-{}", style.prefix(), name),
                format!("{} {}", style.short_prefix(), name),
            ] {
                let icon = awesome.icon(&query, &OptionSet::new());
                assert_eq!(icon.text(), Some(glyph(codepoint).as_str()), "{query}");
                assert_eq!(icon.style(), Some(style), "{query}");
            }
        }
    }
}

#[test]
fn test_bare_and_unknown_prefix_fall_back_to_solid() {
    let (awesome, _, _dir) = provider(Edition::Free);

    for query in ["gear", "fa-gear", "heavy gear", "fa-heavy fa-gear"] {
        let icon = awesome.icon(query, &OptionSet::new());
        assert_eq!(icon.style(), Some(IconStyle::Solid), "{query}");
        assert_eq!(icon.text(), Some("\u{f013}"), "{query}");
    }
}

#[test]
fn test_aliases_share_codepoints() {
    let (awesome, _, _dir) = provider(Edition::Free);
    let pairs = [
        ("cog", "gear"),
        ("home", "house"),
        ("search", "magnifying-glass"),
        ("times", "xmark"),
        ("check-square", "square-check"),
    ];
    for (old, new) in pairs {
        assert_eq!(
            awesome.lookup(IconStyle::Solid, old),
            awesome.lookup(IconStyle::Solid, new)
        );
    }
}

#[test]
fn test_unknown_name_is_null() {
    let (awesome, _, _dir) = provider(Edition::Free);
    assert!(awesome.icon("not-a-real-icon", &OptionSet::new()).is_null());
    assert!(awesome.icon("fa-brands beer", &OptionSet::new()).is_null());
    assert!(awesome.icon("", &OptionSet::new()).is_null());
}

#[test]
fn test_names_are_case_sensitive() {
    let (awesome, _, _dir) = provider(Edition::Free);
    assert!(awesome.icon("Beer", &OptionSet::new()).is_null());
}

#[test]
fn test_overrides_win_over_defaults() {
    let (awesome, _, _dir) = provider(Edition::Free);
    let overrides = OptionSet::new()
        .with(keys::COLOR, Color::GREEN)
        .with(keys::SCALE_FACTOR, 0.5);
    let icon = awesome.icon("fa-regular star", &overrides);

    assert_eq!(icon.options().color(keys::COLOR), Some(Color::GREEN));
    assert_eq!(
        icon.option(keys::SCALE_FACTOR).and_then(OptionValue::as_f32),
        Some(0.5)
    );
    assert_eq!(
        icon.options().color(keys::COLOR_DISABLED),
        Some(IconPalette::light().disabled)
    );
}

#[test]
fn test_icon_for_codepoint() {
    let (awesome, _, _dir) = provider(Edition::Free);
    let icon = awesome.icon_for_codepoint(IconStyle::Brands, 0xe07a, &OptionSet::new());
    assert_eq!(icon.text(), Some("\u{e07a}"));
    assert_eq!(icon.style(), Some(IconStyle::Brands));

    // a text override is replaced by the codepoint
    let icon = awesome.icon_for_codepoint(
        IconStyle::Solid,
        0xf013,
        &OptionSet::new().with(keys::TEXT, "x"),
    );
    assert_eq!(icon.text(), Some("\u{f013}"));

    assert!(
        awesome
            .icon_for_codepoint(IconStyle::Solid, 0xd800, &OptionSet::new())
            .is_null()
    );
}

#[test]
fn test_pro_styles_share_solid_table() {
    let (awesome, _, _dir) = provider(Edition::Pro);
    let catalog = awesome.catalog();

    for style in [IconStyle::Light, IconStyle::Thin, IconStyle::Duotone, IconStyle::SharpSolid] {
        assert!(catalog.shares_table(style, IconStyle::Solid));
        for (name, codepoint) in catalog.entries(IconStyle::Solid) {
            assert_eq!(catalog.lookup(style, name), Some(codepoint));
        }
    }
    assert!(!catalog.shares_table(IconStyle::Brands, IconStyle::Solid));
    assert_eq!(awesome.lookup(IconStyle::Light, "abacus"), Some(0xf640));
}

#[test]
fn test_free_edition_has_no_pro_glyphs() {
    let (awesome, _, _dir) = provider(Edition::Free);
    assert!(awesome.icon("abacus", &OptionSet::new()).is_null());
    assert!(awesome.list_names(IconStyle::Light).is_empty());
}

#[test]
fn test_free_edition_pro_prefix_falls_back_to_solid() {
    let (awesome, _, _dir) = provider(Edition::Free);
    for query in ["fa-light gear", "fat gear", "fa-duotone fa-gear", "sharp-solid gear"] {
        let icon = awesome.icon(query, &OptionSet::new());
        assert!(!icon.is_null(), "{query}");
        assert_eq!(icon.style(), Some(IconStyle::Solid), "{query}");
        assert_eq!(icon.text(), Some("\u{f013}"), "{query}");
    }
}

#[test]
fn test_pro_edition_keeps_pro_prefix() {
    let (awesome, _, _dir) = provider(Edition::Pro);
    let icon = awesome.icon("fa-light gear", &OptionSet::new());
    assert_eq!(icon.style(), Some(IconStyle::Light));
    assert_eq!(icon.text(), Some("\u{f013}"));
}

#[test]
fn test_add_named_codepoint() {
    let (mut awesome, _, _dir) = provider(Edition::Free);
    awesome.add_named_codepoint(IconStyle::Solid, "pint", 0xf0fc);
    let icon = awesome.icon("solid pint", &OptionSet::new());
    assert_eq!(icon.text(), Some("\u{f0fc}"));
    assert!(
        awesome
            .list_names(IconStyle::Solid)
            .contains(&("pint".to_string(), 0xf0fc))
    );
}

#[test]
fn test_list_names_sorted() {
    let (awesome, _, _dir) = provider(Edition::Free);
    let entries = awesome.list_names(IconStyle::Brands);
    let mut sorted = entries.clone();
    sorted.sort();
    assert_eq!(entries, sorted);
    assert!(entries.iter().any(|(name, _)| name == "rust"));
    for (name, codepoint) in &entries {
        assert_eq!(awesome.lookup(IconStyle::Brands, name), Some(*codepoint));
    }
}

#[test]
fn test_give_registers_custom_painter() {
    let (mut awesome, _, _dir) = provider(Edition::Free);
    let drops = Arc::new(AtomicUsize::new(0));
    awesome.give("frame", Outline { drops: drops.clone() });

    let icon = awesome.icon("frame", &OptionSet::new().with(keys::COLOR, Color::BLUE));
    assert!(!icon.is_null());
    assert_eq!(icon.style(), Some(IconStyle::Solid));
    assert_eq!(icon.options().color(keys::COLOR), Some(Color::BLUE));
    assert!(icon.text().is_none());

    let surface = awesome.pixmap(
        &icon,
        awesome_icons::Size::new(10.0, 10.0),
        IconMode::Normal,
        IconState::On,
    );
    assert_eq!(surface.commands().len(), 1);
}

#[test]
fn test_give_replaces_and_drops_previous() {
    let (mut awesome, _, _dir) = provider(Edition::Free);
    let drops = Arc::new(AtomicUsize::new(0));

    awesome.give("fa-brands frame", Outline { drops: drops.clone() });
    assert_eq!(drops.load(Ordering::SeqCst), 0);

    awesome.give("fa-brands frame", Outline { drops: drops.clone() });
    assert_eq!(drops.load(Ordering::SeqCst), 1);

    // the painter is found under the full original name
    let icon = awesome.icon("fa-brands frame", &OptionSet::new());
    assert_eq!(icon.style(), Some(IconStyle::Brands));
    assert!(awesome.icon("frame", &OptionSet::new()).is_null());
}

#[test]
fn test_catalog_wins_over_painter() {
    let (mut awesome, _, _dir) = provider(Edition::Free);
    let drops = Arc::new(AtomicUsize::new(0));
    awesome.give("beer", Outline { drops });
    assert_eq!(
        awesome.icon("beer", &OptionSet::new()).text(),
        Some("\u{f0fc}")
    );
}

#[test]
fn test_icon_with_painter_keeps_options() {
    let (awesome, _, _dir) = provider(Edition::Free);
    let drops = Arc::new(AtomicUsize::new(0));
    let painter: Arc<dyn IconPainter> = Arc::new(Outline {
        drops: drops.clone(),
    });
    let options = OptionSet::new().with("thickness", 2.0);

    let icon = awesome.icon_with_painter(painter.clone(), &options);
    assert_eq!(icon.options(), &options);
    assert!(icon.options().get(keys::COLOR).is_none());

    drop(icon);
    drop(painter);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}
