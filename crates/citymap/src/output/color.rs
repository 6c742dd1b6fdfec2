//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success/Found:  green  (found routes, completed actions)
//!   - Warning:        yellow (skipped snapshot entries)
//!   - Error/Missing:  red    (unreachable destinations)
//!   - Info/Reference: cyan   (city ids)
//!   - Accent:         magenta (distances)
//!   - Muted:          dimmed (field labels, arrows)
//!   - Emphasis:       bold   (section headers, city names)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Colorize a city id (cyan).
pub(crate) fn colorize_id(id: impl std::fmt::Display, config: &OutputConfig) -> String {
    info(&id.to_string(), config)
}

/// Colorize a distance (magenta).
pub(crate) fn colorize_distance(distance: impl std::fmt::Display, config: &OutputConfig) -> String {
    let text = distance.to_string();
    if !config.use_colors {
        return text;
    }
    text.magenta().to_string()
}

pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}
