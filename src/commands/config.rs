//! Config subcommands handler

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use toml_edit::DocumentMut;

use cuejump::config::{migrate_config, MigrationResult};
use cuejump::tui::current_theme;
use cuejump::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Open the config file in the default editor.
///
/// Uses $EDITOR, falling back to 'vi'. The file is created with defaults
/// first when it does not exist yet.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let theme = current_theme();
    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor {:?}", editor))?;
    Ok(())
}

/// Add missing fields to the config file.
///
/// Previews what a migration would add and asks before writing, unless
/// `--yes` was passed. A file that does not exist yet is created with the
/// full defaults.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;

    let existing = match fs::read_to_string(&config_path) {
        Ok(content) => Some(content),
        Err(error) if error.kind() == io::ErrorKind::NotFound => None,
        Err(error) => {
            return Err(error)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))
        }
    };

    let result = migrate_config(existing.as_deref().unwrap_or(""))?;
    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    let creating = existing.is_none();
    if creating {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create with default settings.")
        );
    } else {
        println!(
            "{}",
            theme.primary_text(&format!(
                "Found {} missing field(s):",
                result.added_fields.len()
            ))
        );
    }
    println!();
    print_additions(&result);
    println!();

    let question = if creating {
        format!("Create {}?", config_path.display())
    } else {
        format!("Apply these changes to {}?", config_path.display())
    };
    if !yes && !confirm(&question)? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }
    fs::write(&config_path, &result.content)
        .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

    let done = if creating {
        "Config file created successfully."
    } else {
        "Config updated successfully."
    };
    println!("{}", theme.success_text(done));
    Ok(())
}

/// Preview the keys a migration would add, grouped by section.
///
/// New sections and keys get a green `+` prefix; an existing section that
/// gains keys shows its header as plain context.
fn print_additions(result: &MigrationResult) {
    let theme = current_theme();
    let Ok(doc) = result.content.parse::<DocumentMut>() else {
        return;
    };

    let mut by_section: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for field in &result.added_fields {
        if let Some((section, key)) = field.split_once('.') {
            by_section.entry(section).or_default().push(key);
        }
    }

    for (section, keys) in by_section {
        let header = format!("[{}]", section);
        if result.sections_added.iter().any(|s| s == section) {
            println!("{}", theme.success_text(&format!("+ {}", header)));
        } else {
            println!("  {}", header);
        }

        for key in keys {
            let value = doc
                .get(section)
                .and_then(|item| item.as_table())
                .and_then(|table| table.get(key))
                .and_then(|item| item.as_value())
                .map(|value| value.to_string())
                .unwrap_or_default();
            println!(
                "{}",
                theme.success_text(&format!("+ {} = {}", key, value.trim()))
            );
        }
    }
}

/// Ask a yes/no question on the terminal.
///
/// A non-TTY stdin declines without prompting, so scripts have to pass
/// `--yes` explicitly.
fn confirm(question: &str) -> Result<bool> {
    let theme = current_theme();

    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(question));
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
