use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::OnceLock;

pub const WISHLIST: &str = "wishlist";
pub const DEFAULT_DIAMETER_FEET: f64 = 10.0;
pub const DEFAULT_EMOJI: &str = "🌱";

// category -> (diameter in feet, emoji)
const CATEGORY_DEFAULTS: &[(&str, f64, &str)] = &[
    ("bananas", 8.0, "🍌"),
    ("citrus", 15.0, "🍊"),
    ("theobroma", 20.0, "🍫"),
    ("fruit", 12.0, "🍎"),
    ("herbs", 3.0, "🌿"),
    ("carnivorous", 1.0, "🪲"),
    ("ornamental", 6.0, "🌺"),
];

/// A size value from the catalog, either a bare number or free text like `"12-15 ft"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
}

impl Measure {
    /// Leading numeric value, read the way a browser's `parseFloat` would.
    /// Zero and unparsable values are treated as missing.
    pub fn feet(&self) -> Option<f64> {
        let value = match self {
            Measure::Number(n) => *n,
            Measure::Text(text) => leading_number(text)?,
        };
        (value.is_finite() && value > 0.0).then_some(value)
    }
}

fn leading_number(text: &str) -> Option<f64> {
    static LEADING: OnceLock<Regex> = OnceLock::new();
    let re = LEADING.get_or_init(|| {
        Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("valid regex")
    });
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub botanical: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mature_diameter: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<String>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            botanical: String::new(),
            category: category.into(),
            diameter: None,
            size: None,
            mature_diameter: None,
            width: None,
            height: None,
            emoji: None,
            base_color: None,
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.category
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.categories().any(|c| c == category)
    }

    pub fn is_wishlist(&self) -> bool {
        self.in_category(WISHLIST)
    }

    /// Plants tagged only `wishlist` are not owned yet and cannot be placed.
    pub fn is_placeable(&self) -> bool {
        self.category.trim() != WISHLIST
    }

    pub fn height_feet(&self) -> Option<f64> {
        self.height.as_ref().and_then(Measure::feet)
    }

    fn category_defaults(&self) -> Option<(f64, &'static str)> {
        self.categories().find_map(|c| {
            CATEGORY_DEFAULTS
                .iter()
                .find(|(name, _, _)| *name == c)
                .map(|&(_, diameter, emoji)| (diameter, emoji))
        })
    }
}

/// Mature canopy diameter in feet, falling back to the category table.
pub fn diameter_feet(entry: &CatalogEntry) -> f64 {
    [
        &entry.diameter,
        &entry.size,
        &entry.mature_diameter,
        &entry.width,
    ]
    .into_iter()
    .find_map(|m| m.as_ref().and_then(Measure::feet))
    .or_else(|| entry.category_defaults().map(|(d, _)| d))
    .unwrap_or(DEFAULT_DIAMETER_FEET)
}

pub fn emoji_for(entry: &CatalogEntry) -> String {
    entry
        .emoji
        .as_deref()
        .filter(|e| !e.is_empty())
        .or_else(|| entry.category_defaults().map(|(_, e)| e))
        .unwrap_or(DEFAULT_EMOJI)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Category(c) => c,
        }
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => entry.in_category(c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub owned: usize,
    pub wishlist: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let file = File::open(path)
            .map_err(|e| AppError::Catalog(format!("{}: {}", path.display(), e)))?;
        let entries: Vec<CatalogEntry> = serde_json::from_reader(BufReader::new(file))?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Placeable entries matching the category filter and search term, sorted by name.
    pub fn filtered(&self, filter: &CategoryFilter, search: &str) -> Vec<&CatalogEntry> {
        let needle = search.trim().to_lowercase();
        let mut result: Vec<&CatalogEntry> = self
            .entries
            .iter()
            .filter(|e| e.is_placeable() && filter.matches(e))
            .filter(|e| {
                needle.is_empty()
                    || e.name.to_lowercase().contains(&needle)
                    || e.botanical.to_lowercase().contains(&needle)
            })
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        result
    }

    /// Distinct categories a plant can be placed from (wishlist excluded).
    pub fn categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .entries
            .iter()
            .flat_map(|e| e.categories())
            .filter(|c| *c != WISHLIST)
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let wishlist = self.entries.iter().filter(|e| e.is_wishlist()).count();
        CatalogStats {
            owned: self.entries.len() - wishlist,
            wishlist,
        }
    }
}
