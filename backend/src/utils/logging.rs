use crate::utils::{config_file_content, open_file};
use env_logger::{Builder, Target};
use log::{error, info, LevelFilter};
use shared::model::LogLevelConfigDto;
use shared::utils::ENV_LOG_LEVEL;
use std::path::Path;

fn get_log_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        // "info" => LevelFilter::Info,
        _ => LevelFilter::Info,
    }
}

fn read_config_log_level(config_file: &str) -> Option<String> {
    open_file(Path::new(config_file)).ok()
        .and_then(|file| config_file_content(file, true).ok())
        .and_then(|content| serde_yaml::from_str::<LogLevelConfigDto>(&content)
            .map_err(|e| error!("Failed to parse log config file: {e}"))
            .ok())
        .and_then(|cfg| cfg.log.and_then(|l| l.log_level))
}

/// Returns `(default level, per module levels)` for a level string like `info,cleartitle::library=debug`.
fn parse_log_levels(log_level: &str) -> (Option<LevelFilter>, Vec<(String, LevelFilter)>) {
    if !log_level.contains('=') {
        return (Some(get_log_level(log_level)), vec![]);
    }
    let mut default_level = None;
    let mut module_levels = vec![];
    for pair in log_level.split(',') {
        if pair.contains('=') {
            let mut kv_iter = pair.split('=').map(str::trim);
            if let (Some(module), Some(level)) = (kv_iter.next(), kv_iter.next()) {
                module_levels.push((module.to_string(), get_log_level(level)));
            }
        } else {
            default_level = Some(get_log_level(pair));
        }
    }
    (default_level, module_levels)
}

pub fn init_logger(user_log_level: Option<&String>, config_file: &str) {
    let env_log_level = std::env::var(ENV_LOG_LEVEL).ok();

    let mut log_builder = Builder::from_default_env();
    // stdout is reserved for the results
    log_builder.target(Target::Stderr);

    // priority  CLI-Argument, Env-Var, Config, Default
    let log_level = user_log_level
        .map(std::string::ToString::to_string) // cli-argument
        .or(env_log_level) // env
        .or_else(|| read_config_log_level(config_file)) // config
        .unwrap_or_else(|| "info".to_string()); // Default

    let (default_level, module_levels) = parse_log_levels(&log_level);
    let mut log_levels = vec![];
    if let Some(level) = default_level {
        log_builder.filter_level(level);
        log_levels.push(level.to_string());
    }
    for (module, level) in module_levels {
        log_levels.push(format!("{module}={level}"));
        log_builder.filter_module(&module, level);
    }
    log_builder.init();
    info!("Log Level {}", &log_levels.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_levels() {
        assert_eq!(parse_log_levels("debug"), (Some(LevelFilter::Debug), vec![]));
        assert_eq!(parse_log_levels("bogus"), (Some(LevelFilter::Info), vec![]));
        assert_eq!(
            parse_log_levels("warn, cleartitle::library = trace"),
            (Some(LevelFilter::Warn), vec![("cleartitle::library".to_string(), LevelFilter::Trace)])
        );
    }

    #[test]
    fn test_read_config_log_level() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.yml");
        std::fs::write(&config_file, "log:\n  log_level: debug\ntitle_cleaner:\n  remove_year: false\n").unwrap();
        assert_eq!(read_config_log_level(config_file.to_str().unwrap()), Some("debug".to_string()));
        assert_eq!(read_config_log_level(dir.path().join("missing.yml").to_str().unwrap()), None);
    }
}
