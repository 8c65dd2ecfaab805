//! Localized subtitle generation for tree nodes.
//!
//! The translation function is an injected dependency: callers hand in
//! anything implementing [`Translate`], typically the hosting application's
//! localization subsystem or a [`Translations`] map loaded from disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{StateError, StateResult};
use crate::grouping::ModsByCategory;
use crate::model::CategoryId;

/// Template key used for the per-category mod count caption.
pub const MOD_COUNT_KEY: &str = "{{count}} mods";

/// Maps a translation key to a localized string.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Key-to-string translation table, loadable from a JSON locale file.
///
/// Unknown keys fall back to the key itself, so an empty table yields the
/// untranslated (English) captions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations(pub BTreeMap<String, String>);

impl Translations {
    pub fn load(path: &Path) -> StateResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| StateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StateError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Translate for Translations {
    fn translate(&self, key: &str) -> String {
        self.0.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

/// Render the display subtitle for one category: the localized
/// "N mods" caption derived from its bucket in the grouping map.
pub fn generate_subtitle(
    t: &dyn Translate,
    category_id: &CategoryId,
    mods: &ModsByCategory,
) -> String {
    let count = mods.get(category_id).map_or(0, Vec::len);
    t.translate(MOD_COUNT_KEY)
        .replace("{{count}}", &count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtitle_substitutes_count() {
        let mut mods = ModsByCategory::new();
        mods.insert("weapons".to_string(), vec!["a".into(), "b".into()]);

        let subtitle = generate_subtitle(&Translations::default(), &"weapons".to_string(), &mods);

        assert_eq!(subtitle, "2 mods");
    }

    #[test]
    fn test_subtitle_for_unreferenced_category_is_zero() {
        let subtitle = generate_subtitle(
            &Translations::default(),
            &"ghost".to_string(),
            &ModsByCategory::new(),
        );

        assert_eq!(subtitle, "0 mods");
    }

    #[test]
    fn test_translated_template_is_used() {
        let mut table = BTreeMap::new();
        table.insert(MOD_COUNT_KEY.to_string(), "{{count}} Mods installiert".to_string());
        let translations = Translations(table);
        let mut mods = ModsByCategory::new();
        mods.insert("weapons".to_string(), vec!["a".into()]);

        let subtitle = generate_subtitle(&translations, &"weapons".to_string(), &mods);

        assert_eq!(subtitle, "1 Mods installiert");
    }

    #[test]
    fn test_closures_act_as_translators() {
        let t = |key: &str| key.to_uppercase();
        assert_eq!(t.translate("{{count}} mods"), "{{COUNT}} MODS");
    }
}
