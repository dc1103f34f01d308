//! Application-level configuration constants.

// UI behavior
pub const TOAST_MS: u32 = 1500;

// Min/Max limits for the interval input fields (seconds)
pub const MIN_INTERVAL_SECS: f64 = 0.1;
pub const MAX_INTERVAL_SECS: f64 = 60.0;

// Toast accent colours
pub const TOAST_INFO: &str = "#3498db";
pub const TOAST_SUCCESS: &str = "#2ecc71";
pub const TOAST_WARN: &str = "#e67e22";
pub const TOAST_ERROR: &str = "#e74c3c";
pub const TOAST_EXPORT: &str = "#f39c12";

// Neutral backgrounds for tiles and the idle flash screen
pub const NEUTRAL_TILE: &str = "#555";
pub const NEUTRAL_SCREEN: &str = "#444";
