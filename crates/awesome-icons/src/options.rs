//! Icon options: typed values, option sets and state-aware lookup.
//!
//! Options are string-keyed so that painters can read keys the provider
//! knows nothing about. The keys understood by the built-in glyph painter
//! are listed in [`keys`].
//!
//! Mode and state variants of an option are expressed through key
//! suffixes: `color-disabled`, `text-off`, `color-active-off`. Lookup
//! through [`resolve_for_state`] picks the most specific variant that is
//! set:
//!
//! ```
//! use awesome_icons::options::{keys, resolve_for_state, IconMode, IconState, OptionSet};
//! use awesome_icons::Color;
//!
//! let options = OptionSet::new()
//!     .with(keys::COLOR, Color::BLACK)
//!     .with(keys::COLOR_DISABLED, Color::RED);
//!
//! let color = resolve_for_state(keys::COLOR, IconMode::Disabled, IconState::Off, &options)
//!     .and_then(|value| value.as_color());
//! assert_eq!(color, Some(Color::RED));
//! ```

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::sync::Arc;

use awesome_icons_render::Color;

use crate::animation::SpinAnimation;
use crate::style::IconStyle;

/// Well-known option keys.
pub mod keys {
    pub const COLOR: &str = "color";
    pub const COLOR_DISABLED: &str = "color-disabled";
    pub const COLOR_ACTIVE: &str = "color-active";
    pub const COLOR_SELECTED: &str = "color-selected";

    pub const TEXT: &str = "text";
    pub const TEXT_DISABLED: &str = "text-disabled";
    pub const TEXT_ACTIVE: &str = "text-active";
    pub const TEXT_SELECTED: &str = "text-selected";

    /// Color of the secondary duotone layer.
    pub const DUOTONE_COLOR: &str = "duotone-color";
    pub const DUOTONE_COLOR_DISABLED: &str = "duotone-color-disabled";
    pub const DUOTONE_COLOR_ACTIVE: &str = "duotone-color-active";
    pub const DUOTONE_COLOR_SELECTED: &str = "duotone-color-selected";

    /// Glyph size relative to the target rect height.
    pub const SCALE_FACTOR: &str = "scale-factor";
    /// Style of the glyph; injected by the resolver.
    pub const STYLE: &str = "style";
    /// A shared [`SpinAnimation`](crate::SpinAnimation).
    pub const ANIM: &str = "anim";
}

/// A single option value.
#[derive(Debug, Clone, Default)]
pub enum OptionValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Color(Color),
    Style(IconStyle),
    Animation(Arc<SpinAnimation>),
}

impl OptionValue {
    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }

    /// The value as a color. Text values are parsed as `#rrggbb[aa]`.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            OptionValue::Color(color) => Some(*color),
            OptionValue::Text(text) => Color::from_hex(text),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The value as a number. Text values are parsed.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            OptionValue::Number(n) => Some(*n as f32),
            OptionValue::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_style(&self) -> Option<IconStyle> {
        match self {
            OptionValue::Style(style) => Some(*style),
            OptionValue::Text(text) => IconStyle::from_prefix(text),
            _ => None,
        }
    }

    pub fn as_animation(&self) -> Option<&Arc<SpinAnimation>> {
        match self {
            OptionValue::Animation(anim) => Some(anim),
            _ => None,
        }
    }

    /// The string form used to decide whether a variant is set.
    ///
    /// Null and animation values stringify to the empty string.
    pub fn to_display_string(&self) -> String {
        match self {
            OptionValue::Null | OptionValue::Animation(_) => String::new(),
            OptionValue::Bool(b) => b.to_string(),
            OptionValue::Number(n) => n.to_string(),
            OptionValue::Text(text) => text.clone(),
            OptionValue::Color(color) => color.to_hex(),
            OptionValue::Style(style) => style.prefix().to_string(),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            OptionValue::Null | OptionValue::Animation(_) => true,
            OptionValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }
}

impl PartialEq for OptionValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (OptionValue::Null, OptionValue::Null) => true,
            (OptionValue::Bool(a), OptionValue::Bool(b)) => a == b,
            (OptionValue::Number(a), OptionValue::Number(b)) => a == b,
            (OptionValue::Text(a), OptionValue::Text(b)) => a == b,
            (OptionValue::Color(a), OptionValue::Color(b)) => a == b,
            (OptionValue::Style(a), OptionValue::Style(b)) => a == b,
            (OptionValue::Animation(a), OptionValue::Animation(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl From<Color> for OptionValue {
    fn from(color: Color) -> Self {
        OptionValue::Color(color)
    }
}

impl From<&str> for OptionValue {
    fn from(text: &str) -> Self {
        OptionValue::Text(text.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(text: String) -> Self {
        OptionValue::Text(text)
    }
}

impl From<char> for OptionValue {
    fn from(ch: char) -> Self {
        OptionValue::Text(ch.to_string())
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<f64> for OptionValue {
    fn from(n: f64) -> Self {
        OptionValue::Number(n)
    }
}

impl From<f32> for OptionValue {
    fn from(n: f32) -> Self {
        OptionValue::Number(n as f64)
    }
}

impl From<IconStyle> for OptionValue {
    fn from(style: IconStyle) -> Self {
        OptionValue::Style(style)
    }
}

impl From<Arc<SpinAnimation>> for OptionValue {
    fn from(anim: Arc<SpinAnimation>) -> Self {
        OptionValue::Animation(anim)
    }
}

/// A string-keyed bag of option values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSet {
    values: HashMap<String, OptionValue>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, OptionValue> {
        self.values.iter()
    }

    /// Shortcut for `get(key).and_then(OptionValue::as_color)`.
    pub fn color(&self, key: &str) -> Option<Color> {
        self.get(key).and_then(OptionValue::as_color)
    }

    /// A copy of `self` with every entry of `overrides` applied on top.
    pub fn merged(&self, overrides: &OptionSet) -> OptionSet {
        merge(self, overrides)
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for OptionSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut set = OptionSet::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

impl<K: Into<String>, V: Into<OptionValue>> Extend<(K, V)> for OptionSet {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = (&'a String, &'a OptionValue);
    type IntoIter = hash_map::Iter<'a, String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Shallow merge: every key of `overrides` replaces the same key of
/// `defaults`.
pub fn merge(defaults: &OptionSet, overrides: &OptionSet) -> OptionSet {
    let mut result = defaults.clone();
    for (key, value) in overrides {
        result.values.insert(key.clone(), value.clone());
    }
    result
}

/// The interaction mode an icon is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconMode {
    #[default]
    Normal,
    Disabled,
    Active,
    Selected,
}

impl IconMode {
    /// Key suffix for this mode; `None` for normal.
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            IconMode::Normal => None,
            IconMode::Disabled => Some("disabled"),
            IconMode::Active => Some("active"),
            IconMode::Selected => Some("selected"),
        }
    }
}

/// The checked state an icon is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconState {
    #[default]
    On,
    Off,
}

impl IconState {
    /// Key suffix for this state; `None` for on.
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            IconState::On => None,
            IconState::Off => Some("off"),
        }
    }
}

/// Candidate keys for `base` in precedence order.
pub fn candidate_keys(base: &str, mode: IconMode, state: IconState) -> Vec<String> {
    let mut keys = Vec::with_capacity(3);
    match (mode.suffix(), state.suffix()) {
        (Some(m), Some(s)) => {
            keys.push(format!("{base}-{m}-{s}"));
            keys.push(format!("{base}-{m}"));
            keys.push(format!("{base}-{s}"));
        }
        (Some(m), None) => keys.push(format!("{base}-{m}")),
        (None, Some(s)) => keys.push(format!("{base}-{s}")),
        (None, None) => {}
    }
    keys
}

/// Looks up `base` for a mode and state.
///
/// Tries `base-mode-state`, `base-mode` and `base-state` in that order and
/// returns the first one that is set to a non-empty value; otherwise falls
/// back to `options[base]`.
pub fn resolve_for_state<'a>(
    base: &str,
    mode: IconMode,
    state: IconState,
    options: &'a OptionSet,
) -> Option<&'a OptionValue> {
    candidate_keys(base, mode, state)
        .iter()
        .filter_map(|key| options.get(key))
        .find(|value| !value.is_blank())
        .or_else(|| options.get(base))
}
