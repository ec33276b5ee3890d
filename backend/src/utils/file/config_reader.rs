use crate::model::Config;
use crate::utils::{file_reader, open_file};
use log::{error, info};
use shared::error::{config_err, CleartitleError};
use shared::model::ConfigDto;
use shared::utils::CONSTANTS;
use std::env;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Reads the whole config file, `${env:VAR}` references are substituted when `resolve_env` is set.
pub fn config_file_content(file: File, resolve_env: bool) -> io::Result<String> {
    let mut content = String::new();
    file_reader(file).read_to_string(&mut content)?;
    Ok(if resolve_env { resolve_env_var(&content) } else { content })
}

pub fn read_config_dto(config_file: &str, resolve_env: bool) -> Result<ConfigDto, CleartitleError> {
    let path = PathBuf::from(config_file);
    if !path.exists() {
        info!("Config file {config_file} not found, using defaults");
        return Ok(ConfigDto::default());
    }

    let content = open_file(&path)
        .and_then(|file| config_file_content(file, resolve_env))
        .map_err(|err| config_err!("Can't read the config file: {config_file}: {err}"))?;

    let mut config: ConfigDto = serde_yaml::from_str(&content)
        .map_err(|err| config_err!("Can't read the config file: {config_file}: {err}"))?;
    config.prepare()
        .map_err(|err| config_err!("Invalid config file: {config_file}: {}", err.message))?;
    Ok(config)
}

pub fn read_config(config_file: &str) -> Result<Config, CleartitleError> {
    let dto = read_config_dto(config_file, true)?;
    Ok(Config::from(dto))
}

pub fn resolve_env_var(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    CONSTANTS.re_env_var.replace_all(value, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|e| {
            error!("Could not resolve env var '{var_name}': {e}");
            format!("${{env:{var_name}}}")
        })
    }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolve() {
        let resolved = resolve_env_var("${env:HOME}");
        assert_eq!(resolved, std::env::var("HOME").unwrap());
    }

    #[test]
    fn test_unresolved_var_is_kept() {
        let value = "${env:CLEARTITLE_SURELY_UNSET_VARIABLE}";
        assert_eq!(resolve_env_var(value), value);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.yml");
        let config = read_config(config_file.to_str().unwrap()).unwrap();
        assert!(config.title_cleaner.remove_year);
        assert!(!config.title_cleaner.patterns.is_empty());
        assert!(config.library.scan_directories.is_empty());
    }

    #[test]
    fn test_read_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.yml");
        let mut file = File::create(&config_file).unwrap();
        writeln!(file, "title_cleaner:\n  remove_year: false\n  patterns:\n    - '\\bHDR\\b'\n    - '(broken'\nlibrary:\n  scan_directories:\n    - path: ${{env:HOME}}/movies").unwrap();

        let config = read_config(config_file.to_str().unwrap()).unwrap();
        assert!(!config.title_cleaner.remove_year);
        assert_eq!(config.title_cleaner.patterns.len(), 1);
        let home = std::env::var("HOME").unwrap();
        assert_eq!(config.library.scan_directories[0].path, format!("{home}/movies"));
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.yml");
        std::fs::write(&config_file, "title_cleaner:\n  unknown: 1\n").unwrap();
        let err = read_config(config_file.to_str().unwrap()).unwrap_err();
        assert_eq!(err.kind, shared::error::CleartitleErrorKind::Config);
    }
}
