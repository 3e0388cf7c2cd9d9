//! Per-style name -> codepoint tables.

use std::collections::HashMap;

use crate::style::IconStyle;

/// Named-codepoint tables for every style.
///
/// Tables live in an arena; each style refers to one by index. Several
/// styles may point at the same table, in which case writes through any of
/// them are visible through all.
///
/// ```
/// use awesome_icons::{Catalog, IconStyle};
///
/// let mut catalog = Catalog::new();
/// catalog.populate(IconStyle::Solid, [("gear", 0xf013)]);
/// catalog.alias_style(IconStyle::Light, IconStyle::Solid);
/// assert_eq!(catalog.lookup(IconStyle::Light, "gear"), Some(0xf013));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: Vec<HashMap<String, u32>>,
    index: HashMap<IconStyle, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts every `(name, codepoint)` pair into the style's table,
    /// creating the table on first use. Existing names are overwritten.
    pub fn populate<I, N>(&mut self, style: IconStyle, entries: I)
    where
        I: IntoIterator<Item = (N, u32)>,
        N: Into<String>,
    {
        let table = self.table_mut(style);
        for (name, codepoint) in entries {
            table.insert(name.into(), codepoint);
        }
    }

    /// Inserts a single entry.
    pub fn insert(&mut self, style: IconStyle, name: impl Into<String>, codepoint: u32) {
        self.table_mut(style).insert(name.into(), codepoint);
    }

    /// Looks up a name. Names are case-sensitive.
    pub fn lookup(&self, style: IconStyle, name: &str) -> Option<u32> {
        self.table(style)?.get(name).copied()
    }

    /// Makes `target` share `source`'s table.
    ///
    /// A table `target` owned before is dropped once no style refers to it.
    /// Returns `false` and leaves `target` untouched if `source` has no
    /// table yet.
    pub fn alias_style(&mut self, target: IconStyle, source: IconStyle) -> bool {
        let Some(slot) = self.index.get(&source).copied() else {
            return false;
        };
        if let Some(previous) = self.index.insert(target, slot) {
            self.drop_orphaned(previous);
        }
        true
    }

    fn drop_orphaned(&mut self, slot: usize) {
        if self.index.values().any(|s| *s == slot) {
            return;
        }
        self.tables.remove(slot);
        for s in self.index.values_mut() {
            if *s > slot {
                *s -= 1;
            }
        }
    }

    /// Whether the style has a table.
    pub fn has_style(&self, style: IconStyle) -> bool {
        self.index.contains_key(&style)
    }

    /// Whether two styles resolve through the same table.
    pub fn shares_table(&self, a: IconStyle, b: IconStyle) -> bool {
        match (self.index.get(&a), self.index.get(&b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Every `(name, codepoint)` of the style's table.
    ///
    /// The order is unspecified but stable until the table is modified.
    pub fn entries(&self, style: IconStyle) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.table(style)
            .into_iter()
            .flat_map(|table| table.iter().map(|(name, cp)| (name.as_str(), *cp)))
    }

    /// The style's `(name, codepoint)` pairs sorted by name.
    pub fn sorted_entries(&self, style: IconStyle) -> Vec<(String, u32)> {
        let mut entries: Vec<(String, u32)> = self
            .entries(style)
            .map(|(name, cp)| (name.to_string(), cp))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Number of entries in the style's table.
    pub fn len(&self, style: IconStyle) -> usize {
        self.table(style).map_or(0, HashMap::len)
    }

    /// Number of distinct tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    fn table(&self, style: IconStyle) -> Option<&HashMap<String, u32>> {
        self.index.get(&style).map(|slot| &self.tables[*slot])
    }

    fn table_mut(&mut self, style: IconStyle) -> &mut HashMap<String, u32> {
        let slot = match self.index.get(&style) {
            Some(slot) => *slot,
            None => {
                self.tables.push(HashMap::new());
                let slot = self.tables.len() - 1;
                self.index.insert(style, slot);
                slot
            }
        };
        &mut self.tables[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populate_and_lookup() {
        let mut catalog = Catalog::new();
        catalog.populate(IconStyle::Solid, [("beer", 0xf0fc), ("gear", 0xf013)]);
        assert_eq!(catalog.lookup(IconStyle::Solid, "beer"), Some(0xf0fc));
        assert_eq!(catalog.lookup(IconStyle::Solid, "Beer"), None);
        assert_eq!(catalog.lookup(IconStyle::Regular, "beer"), None);
        assert_eq!(catalog.len(IconStyle::Solid), 2);
        assert_eq!(catalog.table_count(), 1);
    }

    #[test]
    fn test_alias_shares_writes() {
        let mut catalog = Catalog::new();
        catalog.populate(IconStyle::Solid, [("gear", 0xf013)]);
        assert!(catalog.alias_style(IconStyle::Thin, IconStyle::Solid));
        catalog.insert(IconStyle::Thin, "abacus", 0xf640);

        assert_eq!(catalog.lookup(IconStyle::Solid, "abacus"), Some(0xf640));
        assert!(catalog.shares_table(IconStyle::Thin, IconStyle::Solid));
        assert_eq!(catalog.table_count(), 1);
    }

    #[test]
    fn test_alias_missing_source() {
        let mut catalog = Catalog::new();
        assert!(!catalog.alias_style(IconStyle::Light, IconStyle::Solid));
        assert!(!catalog.has_style(IconStyle::Light));
        assert!(!catalog.shares_table(IconStyle::Light, IconStyle::Solid));
    }

    #[test]
    fn test_entries_restartable() {
        let mut catalog = Catalog::new();
        catalog.populate(IconStyle::Brands, [("rust", 0xe07a), ("github", 0xf09b)]);
        let first: Vec<_> = catalog.entries(IconStyle::Brands).collect();
        let second: Vec<_> = catalog.entries(IconStyle::Brands).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(
            catalog.sorted_entries(IconStyle::Brands),
            vec![("github".to_string(), 0xf09b), ("rust".to_string(), 0xe07a)]
        );
        assert_eq!(catalog.entries(IconStyle::Duotone).count(), 0);
    }

    #[test]
    fn test_realias_drops_orphaned_table() {
        let mut catalog = Catalog::new();
        catalog.populate(IconStyle::Solid, [("gear", 0xf013)]);
        catalog.populate(IconStyle::Light, [("abacus", 0xf640)]);
        catalog.populate(IconStyle::Brands, [("rust", 0xe07a)]);
        assert_eq!(catalog.table_count(), 3);

        assert!(catalog.alias_style(IconStyle::Light, IconStyle::Solid));
        assert_eq!(catalog.table_count(), 2);
        assert_eq!(catalog.lookup(IconStyle::Light, "gear"), Some(0xf013));
        assert_eq!(catalog.lookup(IconStyle::Light, "abacus"), None);
        assert_eq!(catalog.lookup(IconStyle::Brands, "rust"), Some(0xe07a));
    }

    #[test]
    fn test_realias_keeps_shared_table() {
        let mut catalog = Catalog::new();
        catalog.populate(IconStyle::Solid, [("gear", 0xf013)]);
        catalog.populate(IconStyle::Brands, [("rust", 0xe07a)]);
        assert!(catalog.alias_style(IconStyle::Thin, IconStyle::Solid));
        assert!(catalog.alias_style(IconStyle::Thin, IconStyle::Brands));

        assert_eq!(catalog.table_count(), 2);
        assert_eq!(catalog.lookup(IconStyle::Solid, "gear"), Some(0xf013));
        assert_eq!(catalog.lookup(IconStyle::Thin, "rust"), Some(0xe07a));
        assert!(catalog.alias_style(IconStyle::Solid, IconStyle::Solid));
        assert_eq!(catalog.table_count(), 2);
    }
}
