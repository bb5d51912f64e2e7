/// Level and tag filtering in front of the formatter
use super::config::{get_logger_config, is_debug_enabled_for_tag, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Filtering rules:
/// 1. Errors are always shown
/// 2. Anything above the configured threshold is dropped
/// 3. Debug requires the tag's --debug-<tag> flag (or --debug-all)
/// 4. Verbose requires --verbose
pub fn should_log(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    if level > config.min_level {
        return false;
    }

    match level {
        LogLevel::Debug => {
            config.min_level == LogLevel::Verbose || is_debug_enabled_for_tag(config, tag)
        }
        LogLevel::Verbose => config.min_level == LogLevel::Verbose,
        _ => true,
    }
}

pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&get_logger_config(), &tag, level) {
        return;
    }

    super::format::format_and_log(&tag, level, message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_errors_always_pass() {
        let cfg = LoggerConfig {
            min_level: LogLevel::Warning,
            ..Default::default()
        };
        assert!(should_log(&cfg, &LogTag::Pools, LogLevel::Error));
        assert!(!should_log(&cfg, &LogTag::Pools, LogLevel::Info));
    }

    #[test]
    fn test_debug_gated_per_tag() {
        let mut debug_tags = HashSet::new();
        debug_tags.insert("rewards".to_string());
        let cfg = LoggerConfig {
            min_level: LogLevel::Debug,
            debug_tags,
            debug_all: false,
        };

        assert!(should_log(&cfg, &LogTag::Rewards, LogLevel::Debug));
        assert!(!should_log(&cfg, &LogTag::Pools, LogLevel::Debug));
        assert!(!should_log(&cfg, &LogTag::Rewards, LogLevel::Verbose));
    }
}
