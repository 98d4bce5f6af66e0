//! Persisted configuration (§6), following kakei's `confy`-backed
//! load-with-default-on-missing-or-invalid idiom.

use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "axlang";

/// Overridable settings that outlive a single invocation. Everything
/// here has a sane default so a missing or corrupt config file never
/// blocks startup — `confy::load` falls back to `Default` on parse
/// failure the same way kakei's `Configuration` did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxLangConfig {
    /// Directory containing `modules/` and `grammar/`, searched by
    /// `import` and the parser client. `None` means "next to the
    /// running binary" (§4.5, §4.6, §6).
    pub modules_dir: Option<String>,
}

impl Default for AxLangConfig {
    fn default() -> Self {
        Self { modules_dir: None }
    }
}

/// Loads `AxLangConfig` from the platform config directory, falling
/// back to defaults on a missing or unparsable file.
pub fn load() -> AxLangConfig {
    confy::load(APP_NAME, None).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load config, using defaults");
        AxLangConfig::default()
    })
}
