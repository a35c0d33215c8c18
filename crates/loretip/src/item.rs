//! Item input normalization.
//!
//! Pasted items come in two JSON shapes:
//!
//! ```json
//! { "name": "§6Hyperion", "Lore": ["§7Damage: §c+260"] }
//! { "tag": { "display": { "Name": "§6Hyperion", "Lore": ["§7Damage: §c+260"] } } }
//! ```
//!
//! Both are resolved once, here, into an [`ItemLore`].

use serde::{Deserialize, Serialize};

/// Canonical title and lore lines of an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLore {
    /// Title markup.
    pub title: String,
    /// Lore markup, one entry per line.
    pub lore: Vec<String>,
}

impl ItemLore {
    #[must_use]
    pub fn new(title: impl Into<String>, lore: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lore,
        }
    }

    /// Decode either accepted shape.
    ///
    /// A non-empty flat `name` wins over `tag.display.Name`; a flat `Lore`
    /// (or `lore`) array wins over `tag.display.Lore` even when empty.
    /// Missing fields are empty. Wrongly typed fields are an error.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let raw: RawItem = serde_json::from_str(json)?;
        Ok(raw.into())
    }

    /// Whether there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.lore.is_empty()
    }
}

#[derive(Deserialize)]
struct RawItem {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "Lore", alias = "lore")]
    lore: Option<Vec<String>>,
    #[serde(default)]
    tag: Option<RawTag>,
}

#[derive(Deserialize)]
struct RawTag {
    #[serde(default)]
    display: Option<RawDisplay>,
}

#[derive(Deserialize)]
struct RawDisplay {
    #[serde(default, rename = "Name")]
    name: Option<String>,
    #[serde(default, rename = "Lore")]
    lore: Option<Vec<String>>,
}

impl From<RawItem> for ItemLore {
    fn from(raw: RawItem) -> Self {
        let display = raw.tag.and_then(|tag| tag.display);
        let (nested_name, nested_lore) = match display {
            Some(display) => (display.name, display.lore),
            None => (None, None),
        };

        let title = raw
            .name
            .filter(|name| !name.is_empty())
            .or(nested_name)
            .unwrap_or_default();
        let lore = raw.lore.or(nested_lore).unwrap_or_default();

        Self { title, lore }
    }
}
