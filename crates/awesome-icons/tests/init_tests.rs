//! Integration tests for font loading.

mod common;

use awesome_icons::render::text::FontWeight;
use awesome_icons::{
    Awesome, AwesomeConfig, Edition, FontError, FontSpec, IconMode, IconState, IconStyle,
    OptionSet, Size,
};
use common::{FakeFonts, FontDir, family_for, provider};

fn unloaded(config: AwesomeConfig) -> (Awesome, FakeFonts, FontDir) {
    let fonts = FakeFonts::new();
    let font_dir = FontDir::for_edition(config.edition);
    let awesome = Awesome::with_config(config, fonts.clone());
    font_dir.attach(&awesome);
    (awesome, fonts, font_dir)
}

#[test]
fn test_initialize_loads_every_free_style() {
    let (awesome, state, _dir) = provider(Edition::Free);
    for style in IconStyle::FREE {
        assert!(awesome.registry().is_usable(style), "{style}");
        assert!(awesome.registry().font_handle_valid(style), "{style}");
        assert_eq!(awesome.font_family(style), family_for(style, Edition::Free));
    }
    assert_eq!(state.lock().registrations, IconStyle::FREE.len());
    assert!(
        awesome
            .list_names(IconStyle::Solid)
            .contains(&("beer".to_string(), 0xf0fc))
    );
}

#[test]
fn test_initialize_loads_every_pro_style() {
    let (awesome, state, _dir) = provider(Edition::Pro);
    for style in IconStyle::ALL {
        assert!(awesome.registry().is_usable(style), "{style}");
    }
    assert_eq!(state.lock().registrations, IconStyle::ALL.len());
    assert_eq!(
        awesome.registry().record(IconStyle::Thin).unwrap().weight(),
        FontWeight::THIN
    );
}

#[test]
fn test_second_initialize_is_a_no_op() {
    let (mut awesome, state, _dir) = provider(Edition::Free);
    let names = awesome.list_names(IconStyle::Solid).len();

    assert!(awesome.initialize());
    assert_eq!(state.lock().registrations, IconStyle::FREE.len());
    assert_eq!(awesome.list_names(IconStyle::Solid).len(), names);
}

#[test]
fn test_missing_font_fails_only_its_style() {
    let (mut awesome, fonts, font_dir) = unloaded(AwesomeConfig::new());
    let brands = IconStyle::Brands.font_file(Edition::Free);
    font_dir.remove(brands);

    let err = awesome.try_initialize().unwrap_err();
    assert_eq!(err.failed_styles(), vec![IconStyle::Brands]);
    assert!(matches!(err.failures[0], FontError::Resource { .. }));
    assert!(!awesome.registry().is_usable(IconStyle::Brands));
    assert!(awesome.registry().is_usable(IconStyle::Solid));
    assert!(awesome.registry().is_usable(IconStyle::Regular));

    // names are available even though a font is missing
    let rust = awesome.icon("fa-brands rust", &OptionSet::new());
    assert!(!rust.is_null());
    let surface = awesome.pixmap(&rust, Size::new(16.0, 16.0), IconMode::Normal, IconState::On);
    assert!(surface.is_empty());

    // a retry only loads what failed
    font_dir.write(brands, family_for(IconStyle::Brands, Edition::Free));
    assert!(awesome.initialize());
    assert!(awesome.registry().is_usable(IconStyle::Brands));
    assert_eq!(fonts.state.lock().registrations, IconStyle::FREE.len());
}

#[test]
fn test_missing_resource_root() {
    let mut awesome = Awesome::new(FakeFonts::new());
    let err = awesome.try_initialize().unwrap_err();
    assert_eq!(err.failures.len(), IconStyle::FREE.len());
    assert!(!awesome.initialize());
    assert!(err.to_string().starts_with("3 icon font(s) failed to load"));
}

#[test]
fn test_font_without_families_is_unregistered() {
    let (mut awesome, fonts, font_dir) = unloaded(AwesomeConfig::new());
    font_dir.write(IconStyle::Regular.font_file(Edition::Free), "");

    let err = awesome.try_initialize().unwrap_err();
    assert!(matches!(
        err.failures.as_slice(),
        [FontError::NoFamilies {
            style: IconStyle::Regular
        }]
    ));
    assert!(!awesome.registry().font_handle_valid(IconStyle::Regular));
    assert_eq!(awesome.font_family(IconStyle::Regular), "");

    let state = fonts.state.lock();
    assert_eq!(state.registrations, IconStyle::FREE.len());
    assert_eq!(state.unregistrations, 1);
    assert_eq!(state.fonts.len(), IconStyle::FREE.len() - 1);
}

#[test]
fn test_font_overrides_from_toml() {
    let config = AwesomeConfig::from_toml_str(
        r#"
        font-prefix = "icons:/"

        [fonts.brands]
        file = "logos.otf"
        weight = 500
        "#,
    )
    .unwrap();
    assert_eq!(
        config.fonts.get(&IconStyle::Brands),
        Some(&FontSpec::file("logos.otf").with_weight(500))
    );

    let fonts = FakeFonts::new();
    let font_dir = FontDir::empty();
    std::fs::create_dir_all(font_dir.dir.path().join("icons")).unwrap();
    for style in IconStyle::FREE {
        let file = config.font_file(style);
        std::fs::write(font_dir.dir.path().join("icons").join(&file), style.prefix()).unwrap();
    }

    let mut awesome = Awesome::with_config(config, fonts);
    awesome
        .resources()
        .register_filesystem_root("icons", font_dir.dir.path().join("icons"));
    assert!(awesome.initialize());

    let record = awesome.registry().record(IconStyle::Brands).unwrap();
    assert_eq!(record.path(), "icons:/logos.otf");
    assert_eq!(record.weight(), FontWeight::new(500));
    assert_eq!(record.family(), "brands");
}

#[test]
fn test_use_font_family() {
    let (mut awesome, state, _dir) = provider(Edition::Free);
    let solid_handle = awesome.registry().record(IconStyle::Solid).unwrap().handle();
    assert!(solid_handle.is_some());

    // the brands family is loaded, so it can back another style
    awesome
        .use_font_family(
            IconStyle::Solid,
            "Font Awesome 6 Brands",
            Some(FontWeight::NORMAL),
        )
        .unwrap();

    assert_eq!(awesome.font_family(IconStyle::Solid), "Font Awesome 6 Brands");
    assert!(awesome.registry().is_usable(IconStyle::Solid));
    assert!(!awesome.registry().font_handle_valid(IconStyle::Solid));
    assert_eq!(state.lock().unregistrations, 1);

    let font = awesome.font(IconStyle::Solid, 12.0).unwrap();
    assert_eq!(font.weight(), FontWeight::NORMAL);
    // the name table is untouched
    assert_eq!(awesome.lookup(IconStyle::Solid, "beer"), Some(0xf0fc));
}

#[test]
fn test_use_unknown_font_family() {
    let (mut awesome, _, _dir) = provider(Edition::Free);
    let err = awesome
        .use_font_family(IconStyle::Solid, "Comic Sans", None)
        .unwrap_err();
    assert!(matches!(err, FontError::UnknownFamily { .. }));
    assert_eq!(err.style(), IconStyle::Solid);
    assert_eq!(awesome.font_family(IconStyle::Solid), "Font Awesome 6 Free");
}

#[test]
fn test_init_logs_with_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("awesome_icons=trace"))
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let (mut awesome, _, _dir) = provider(Edition::Pro);
        let icon = awesome.icon("fa-duotone gear", &OptionSet::new());
        let surface = awesome.pixmap(&icon, Size::new(16.0, 16.0), IconMode::Normal, IconState::On);
        assert_eq!(surface.texts().count(), 2);
    });
}
