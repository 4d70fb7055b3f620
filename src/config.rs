use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub rules: RulesConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_decisions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_decisions: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".into()
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct RulesConfig {
    /// Rule names in evaluation order.
    #[serde(default)]
    pub enabled: Vec<String>,
    #[serde(default)]
    pub min_age: i64,
    #[serde(default)]
    pub restricted_regions: Vec<String>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    rules: RulesOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    log_level: Option<String>,
    log_decisions: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct RulesOverlay {
    #[serde(default)]
    replace: bool,
    /// Order matters, so this replaces rather than merges.
    enabled: Option<Vec<String>>,
    min_age: Option<i64>,
    #[serde(default)]
    restricted_regions: Vec<String>,
    #[serde(default)]
    remove_restricted_regions: Vec<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration: embedded defaults, then the user overlay from
    /// ~/.config/recordgate/config.toml if it exists.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/recordgate/config.toml");
        let content = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                // The logger is not installed yet at load time.
                eprintln!("recordgate: config parse error in {}: {e}", path.display());
                None
            }
        }
    }

    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let s = overlay.settings;
        if let Some(v) = s.log_level {
            self.settings.log_level = v;
        }
        if let Some(v) = s.log_decisions {
            self.settings.log_decisions = v;
        }

        let r = overlay.rules;
        if let Some(v) = r.enabled {
            self.rules.enabled = v;
        }
        if let Some(v) = r.min_age {
            self.rules.min_age = v;
        }
        merge_list(
            &mut self.rules.restricted_regions,
            r.restricted_regions,
            &r.remove_restricted_regions,
            r.replace,
        );
    }

    /// Apply an overlay from a TOML string.
    pub fn apply_overlay_str(&mut self, toml_str: &str) -> Result<(), toml::de::Error> {
        let overlay: ConfigOverlay = toml::from_str(toml_str)?;
        self.apply_overlay(overlay);
        Ok(())
    }
}
