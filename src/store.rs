// src/store.rs
//
// Optional CSV catalog: title,price,categories,search_text with categories
// ";"-separated. Read once at startup; nothing is ever written back.

use std::{error::Error, fs, path::Path};

use crate::catalog::{self, Product};
use crate::config::consts::STORE_SEP;
use crate::csv::{detect_headers, parse_rows};

/// Parse catalog CSV text. Ragged rows are skipped, never fatal: the worst
/// a bad line can do is not be listed.
pub fn parse_catalog(text: &str) -> Vec<Product> {
    let (_headers, rows) = detect_headers(parse_rows(text, STORE_SEP));

    let mut products = Vec::with_capacity(rows.len());
    for (ix, row) in rows.iter().enumerate() {
        let (Some(title), Some(price), Some(cats)) = (row.first(), row.get(1), row.get(2)) else {
            loge!("Catalog: Skipping ragged row {} ({} field(s))", ix + 1, row.len());
            continue;
        };
        if title.trim().is_empty() {
            loge!("Catalog: Skipping row {} (empty title)", ix + 1);
            continue;
        }

        let categories: Vec<String> = cats
            .split(';')
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        let search_text = row.get(3).cloned().unwrap_or_default();

        products.push(Product {
            title: title.trim().to_string(),
            price: price.trim().to_string(),
            categories,
            search_text,
        });
    }
    products
}

/// Load a catalog file. Errors on unreadable files; an empty catalog is a
/// valid zero-result page, not an error.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let products = parse_catalog(&text);
    logf!("Catalog: Loaded {} product(s) from {}", products.len(), path.display());
    Ok(products)
}

/// Load `path` if it exists and parses to something non-empty; otherwise
/// fall back to the built-in catalog.
pub fn load_or_builtin(path: &Path) -> Vec<Product> {
    if path.exists() {
        match load_catalog(path) {
            Ok(products) if !products.is_empty() => return products,
            Ok(_) => logd!("Catalog: {} is empty, using builtin", path.display()),
            Err(e) => loge!("Catalog: {} unreadable ({}), using builtin", path.display(), e),
        }
    }
    catalog::builtin()
}
