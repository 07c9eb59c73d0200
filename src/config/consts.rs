// src/config/consts.rs

use std::time::Duration;

// App
pub const APP_NAME: &str = "Shopfront";

// Local catalog (optional; builtin list is the fallback)
pub const DEFAULT_CATALOG_FILE: &str = "catalog.csv";
pub const STORE_SEP: char = ',';

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_STEM: &str = "products";

// Presentation timing
pub const HIDE_DELAY: Duration = Duration::from_millis(300);  // fade-out before a card leaves layout
pub const BLUR_DELAY: Duration = Duration::from_millis(200);  // suggestion click beats dropdown close
pub const PULSE_DELAY: Duration = Duration::from_millis(200); // counter emphasis after a change
pub const FADE_SECS: f32 = 0.3;

// Layout
pub const CARD_W: f32 = 180.0;
pub const CARD_H: f32 = 96.0;
