//! External video player tools.

mod custom;
mod ffplay;
mod mpv;

pub use custom::CustomCommand;
pub use ffplay::Ffplay;
pub use mpv::Mpv;

use super::tool::PlayerTool;

/// Get the tools to try in priority order.
///
/// A configured custom command goes first, then mpv, then ffplay.
pub fn default_tools(custom_command: Option<&str>) -> Vec<Box<dyn PlayerTool>> {
    let mut tools: Vec<Box<dyn PlayerTool>> = Vec::with_capacity(3);
    if let Some(template) = custom_command {
        if !template.trim().is_empty() {
            tools.push(Box::new(CustomCommand::new(template)));
        }
    }
    tools.push(Box::new(Mpv::new()));
    tools.push(Box::new(Ffplay::new()));
    tools
}

/// Format a seconds offset as a player CLI argument.
///
/// Whole values print without a fraction (`"5"`), fractional values keep
/// it (`"5.5"`).
pub(crate) fn format_start_arg(start_seconds: f64) -> String {
    if start_seconds.fract() == 0.0 {
        format!("{}", start_seconds as u64)
    } else {
        format!("{}", start_seconds)
    }
}

/// Check whether a binary is on the PATH.
pub(crate) fn binary_exists(binary: &str) -> bool {
    std::process::Command::new("which")
        .arg(binary)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_start_arg_drops_whole_fractions() {
        assert_eq!(format_start_arg(0.0), "0");
        assert_eq!(format_start_arg(123.0), "123");
    }

    #[test]
    fn format_start_arg_keeps_real_fractions() {
        assert_eq!(format_start_arg(5.5), "5.5");
        assert_eq!(format_start_arg(0.25), "0.25");
    }

    #[test]
    fn default_tools_without_custom_has_two_entries() {
        let tools = default_tools(None);
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name(), "mpv");
        assert_eq!(tools[1].name(), "ffplay");
    }

    #[test]
    fn default_tools_puts_custom_first() {
        let tools = default_tools(Some("vlc {video}"));
        assert_eq!(tools.len(), 3);
        assert_eq!(tools[0].name(), "custom command");
    }

    #[test]
    fn blank_custom_command_is_skipped() {
        let tools = default_tools(Some("   "));
        assert_eq!(tools.len(), 2);
    }
}
