/// Subsystem tags attached to every log line
use colored::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Webserver,
    Api,
    Pools,
    Rewards,
    Predictor,
    Other(String),
}

impl LogTag {
    /// Short upper-case label printed in the tag column
    pub fn label(&self) -> String {
        match self {
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Config => "CONFIG".to_string(),
            LogTag::Webserver => "WEBSERVER".to_string(),
            LogTag::Api => "API".to_string(),
            LogTag::Pools => "POOLS".to_string(),
            LogTag::Rewards => "REWARDS".to_string(),
            LogTag::Predictor => "PREDICT".to_string(),
            LogTag::Other(name) => name.to_uppercase(),
        }
    }

    /// Key used by `--debug-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::Other(name) => name.to_lowercase(),
            other => other.label().to_lowercase(),
        }
    }

    pub fn colorize(&self, text: String) -> ColoredString {
        match self {
            LogTag::System => text.bright_yellow().bold(),
            LogTag::Config => text.bright_white().bold(),
            LogTag::Webserver => text.bright_green().bold(),
            LogTag::Api => text.bright_purple().bold(),
            LogTag::Pools => text.bright_blue().bold(),
            LogTag::Rewards => text.bright_magenta().bold(),
            LogTag::Predictor => text.bright_cyan().bold(),
            LogTag::Other(_) => text.white().bold(),
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
