//! Configuration management
//!
//! Loads and saves the TOML config file, and migrates older files by
//! filling in fields added since they were written. Migration only ever
//! adds missing keys; user values and comments are preserved.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;

use crate::player::Backend;
use crate::transcript::Columns;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub transcript: TranscriptConfig,
    pub player: PlayerConfig,
    pub ui: UiConfig,
}

/// How transcript files are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Column holding the row start timestamp
    pub start_time_column: String,
    /// Column holding the row text
    pub text_column: String,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            start_time_column: "Start Time".to_string(),
            text_column: "Text".to_string(),
        }
    }
}

/// How videos are played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Playback backend selection
    pub backend: Backend,
    /// Command template for the custom backend ({video} and {start} expand)
    pub custom_command: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Auto,
            custom_command: String::new(),
        }
    }
}

/// Interface settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme name: "default", "classic", or "ocean"
    pub theme: String,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            tick_rate_ms: 250,
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Write the config file, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }

    /// Path of the config file under the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine the config directory")?;
        Ok(base.join("cuejump").join("config.toml"))
    }

    /// The transcript column names as the loader wants them.
    pub fn columns(&self) -> Columns {
        Columns {
            start_time: self.transcript.start_time_column.clone(),
            text: self.transcript.text_column.clone(),
        }
    }

    /// The custom player command, if one is configured.
    pub fn custom_command(&self) -> Option<&str> {
        let template = self.player.custom_command.trim();
        if template.is_empty() {
            None
        } else {
            Some(template)
        }
    }
}

/// Outcome of a config migration run.
#[derive(Debug, Clone)]
pub struct MigrationResult {
    /// The migrated file content
    pub content: String,
    /// Added keys as "section.key"
    pub added_fields: Vec<String>,
    /// Sections that did not exist before
    pub sections_added: Vec<String>,
}

impl MigrationResult {
    /// Whether the migration changed anything.
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add any missing fields from the default config to `content`.
///
/// Existing values and comments are left untouched. Pass an empty string
/// for a file that does not exist yet; the result is then the full default
/// config.
pub fn migrate_config(content: &str) -> Result<MigrationResult> {
    let mut doc: DocumentMut = content
        .parse()
        .context("Failed to parse existing config file")?;

    let defaults_text =
        toml::to_string_pretty(&Config::default()).context("Failed to serialize default config")?;
    let defaults: DocumentMut = defaults_text
        .parse()
        .context("Failed to parse default config")?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, item) in defaults.iter() {
        let Some(default_table) = item.as_table() else {
            continue;
        };

        // A section that is missing, or present but not a table, is
        // recreated empty and then filled below.
        if doc.get(section).and_then(|i| i.as_table()).is_none() {
            doc[section] = toml_edit::table();
            sections_added.push(section.to_string());
        }

        for (key, value) in default_table.iter() {
            let target = doc[section]
                .as_table_mut()
                .with_context(|| format!("Config section {:?} is not a table", section))?;
            if !target.contains_key(key) {
                target.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrationResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.transcript.start_time_column, "Start Time");
        assert_eq!(config.transcript.text_column, "Text");
        assert_eq!(config.player.backend, Backend::Auto);
        assert_eq!(config.player.custom_command, "");
        assert_eq!(config.ui.theme, "default");
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let reparsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [transcript]
            start_time_column = "ts"
            "#,
        )
        .unwrap();

        assert_eq!(config.transcript.start_time_column, "ts");
        assert_eq!(config.transcript.text_column, "Text");
        assert_eq!(config.player.backend, Backend::Auto);
    }

    #[test]
    fn backend_parses_from_lowercase_names() {
        let config: Config = toml::from_str("[player]\nbackend = \"ffplay\"\n").unwrap();
        assert_eq!(config.player.backend, Backend::Ffplay);
    }

    #[test]
    fn columns_reflect_configured_names() {
        let mut config = Config::default();
        config.transcript.start_time_column = "ts".to_string();
        config.transcript.text_column = "line".to_string();

        let columns = config.columns();
        assert_eq!(columns.start_time, "ts");
        assert_eq!(columns.text, "line");
    }

    #[test]
    fn blank_custom_command_is_none() {
        let mut config = Config::default();
        assert_eq!(config.custom_command(), None);

        config.player.custom_command = "   ".to_string();
        assert_eq!(config.custom_command(), None);

        config.player.custom_command = "vlc {video}".to_string();
        assert_eq!(config.custom_command(), Some("vlc {video}"));
    }

    #[test]
    fn config_path_is_under_app_directory() {
        let path = Config::config_path().unwrap();
        assert!(path.ends_with("cuejump/config.toml"));
    }

    #[test]
    fn migrate_empty_content_produces_full_defaults() {
        let result = migrate_config("").unwrap();

        assert!(result.has_changes());
        assert_eq!(result.sections_added.len(), 3);
        assert!(result
            .added_fields
            .contains(&"transcript.start_time_column".to_string()));

        let config: Config = toml::from_str(&result.content).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn migrate_adds_missing_key_to_existing_section() {
        let content = "[transcript]\nstart_time_column = \"ts\"\n";
        let result = migrate_config(content).unwrap();

        assert!(result.has_changes());
        assert!(result
            .added_fields
            .contains(&"transcript.text_column".to_string()));
        assert!(!result
            .added_fields
            .contains(&"transcript.start_time_column".to_string()));
        assert!(!result.sections_added.contains(&"transcript".to_string()));

        // The user's value survives
        let config: Config = toml::from_str(&result.content).unwrap();
        assert_eq!(config.transcript.start_time_column, "ts");
        assert_eq!(config.transcript.text_column, "Text");
    }

    #[test]
    fn migrate_adds_missing_sections() {
        let content = "[transcript]\nstart_time_column = \"Start Time\"\ntext_column = \"Text\"\n";
        let result = migrate_config(content).unwrap();

        assert!(result.sections_added.contains(&"player".to_string()));
        assert!(result.sections_added.contains(&"ui".to_string()));
        assert!(result.added_fields.contains(&"ui.theme".to_string()));
    }

    #[test]
    fn migrate_preserves_comments() {
        let content = "# my settings\n[ui]\n# keep it snappy\ntick_rate_ms = 100\ntheme = \"ocean\"\n";
        let result = migrate_config(content).unwrap();

        assert!(result.content.contains("# my settings"));
        assert!(result.content.contains("# keep it snappy"));
        assert!(result.content.contains("tick_rate_ms = 100"));
    }

    #[test]
    fn migrate_complete_config_reports_no_changes() {
        let content = toml::to_string_pretty(&Config::default()).unwrap();
        let result = migrate_config(&content).unwrap();

        assert!(!result.has_changes());
        assert!(result.added_fields.is_empty());
        assert!(result.sections_added.is_empty());
    }

    #[test]
    fn migrate_rejects_invalid_toml() {
        assert!(migrate_config("not [valid toml").is_err());
    }
}
