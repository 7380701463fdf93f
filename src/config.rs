// ── Hosting configuration ─────────────────────────────────────────────────────
//
// Small JSON document, read once at startup.  Every field has a default so a
// partial document, or an empty object, yields a working configuration.
// No `unsafe`; pure safe Rust + serde_json.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tunables for holder and park windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Nominal size of a freshly created holder, in device pixels.  The first
    /// `show_in_bounds` replaces it.
    pub holder_size: (i32, i32),
    /// Create holders as layered windows (fully opaque), for top-levels that
    /// use per-pixel transparency.
    pub layered_holders: bool,
    /// Prefix of each holder's generated window-class name.
    pub class_prefix: String,
    /// Prefix of the offscreen park's window-class name.
    pub park_class_prefix: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            holder_size: (640, 480),
            layered_holders: false,
            class_prefix: "RivetHostHolder".to_owned(),
            park_class_prefix: "RivetHostPark".to_owned(),
        }
    }
}

impl HostConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
