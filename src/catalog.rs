// src/catalog.rs
//
// Product descriptors and the built-in catalog.
//
// The catalog is fixed for the lifetime of the process: it is read once at
// startup (built-in list, or a CSV via store::load_catalog) and never grows
// or shrinks afterwards. Matching reads plain data only; nothing here knows
// about the GUI.

use strum::IntoEnumIterator;

/// One listed item. `categories` holds lowercase tags; `search_text` is an
/// opaque blob matched by search in addition to the title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub title: String,
    pub price: String,
    pub categories: Vec<String>,
    pub search_text: String,
}

impl Product {
    pub fn new(title: &str, price: &str, categories: &[&str], search_text: &str) -> Self {
        Self {
            title: s!(title),
            price: s!(price),
            categories: categories.iter().map(|c| s!(*c)).collect(),
            search_text: s!(search_text),
        }
    }

    /// Exact tag membership. The wildcard lives in the filter, not here.
    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c == tag)
    }
}

/// The closed set of tags behind the filter buttons. `set_category` still
/// accepts arbitrary strings; this enum only drives the GUI/CLI surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIter, strum::Display)]
pub enum Category {
    Robux,
    Gamepass,
    Giftcard,
    Premium,
}

impl Category {
    pub fn tag(self) -> &'static str {
        match self {
            Category::Robux    => "robux",
            Category::Gamepass => "gamepass",
            Category::Giftcard => "giftcard",
            Category::Premium  => "premium",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Category::iter().find(|c| c.tag() == tag)
    }
}

/// Preset search terms offered in the suggestions dropdown.
pub const SUGGESTIONS: &[&str] = &["robux", "gamepass", "gift card", "premium", "800"];

/// The compiled-in product list — the storefront's standing stock.
pub fn builtin() -> Vec<Product> {
    vec![
        Product::new("400 Robux",          "$4.99",  &["robux"],               "robux 400 starter small"),
        Product::new("800 Robux",          "$9.99",  &["robux"],               "robux 800 popular"),
        Product::new("1700 Robux",         "$19.99", &["robux"],               "robux 1700"),
        Product::new("4500 Robux",         "$49.99", &["robux"],               "robux 4500 bundle"),
        Product::new("10000 Robux",        "$99.99", &["robux"],               "robux 10000 mega"),
        Product::new("$10 Gift Card",      "$10.00", &["giftcard"],            "gift card 10 code digital"),
        Product::new("$25 Gift Card",      "$25.00", &["giftcard"],            "gift card 25 code digital"),
        Product::new("$50 Gift Card",      "$50.00", &["giftcard"],            "gift card 50 code digital"),
        Product::new("Adventure Gamepass", "$7.99",  &["gamepass"],            "gamepass adventure quest unlock"),
        Product::new("Battle Pass Bundle", "$14.99", &["gamepass", "premium"], "gamepass battle season bundle"),
        Product::new("Premium 450",        "$4.99",  &["premium", "robux"],    "premium subscription 450 monthly"),
        Product::new("Premium 2200",       "$19.99", &["premium", "robux"],    "premium subscription 2200 monthly"),
    ]
}
