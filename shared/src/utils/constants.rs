use regex::Regex;
use std::sync::LazyLock;

pub const CONFIG_PATH: &str = "config";
pub const CONFIG_FILE: &str = "config.yml";
pub const ENV_LOG_LEVEL: &str = "CLEARTITLE_LOG";

/// Removal patterns shipped with the default configuration, applied in this order.
pub const DEFAULT_REMOVAL_PATTERNS: &[&str] = &[
    r"\bwww\.[^\s]+\b\s*-\s*",
    r"\b\d{4}\s*\d{3,4}p\b",
    r"\b\d{3,4}p\b",
    r"\b(AMZN|WEB-DL|WEB|BluRay|BRRip|HDRip|BDRip|DVDRip|x264|x265|h264|h265|HEVC|10bit|HDR|YIFY|YTS|RARBG|GPRS|FGT)\b",
    r"\bDTS(?:-HD)?\s+MA\b",
    r"\bDTS(?:-HD)?\b",
    r"\bAAC\b",
    r"\bDD\d\b",
    r"\b\d\.\d\b",
    r"\[.*?\]",
    r"\(.*?\)",
];

pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "ts", "m4v", "webm"];

pub struct Constants {
    pub re_env_var: Regex,
    pub re_whitespace: Regex,
    pub re_filename_separators: Regex,
    pub re_release_year: Regex,
    pub re_release_group_suffix: Regex,
    // A title is only cleaned when at least one of these matches.
    // Fixed on purpose, independent of the configured removal patterns.
    pub re_messy_title_detectors: Vec<Regex>,
}

pub static CONSTANTS: LazyLock<Constants> = LazyLock::new(||
    Constants {
        re_env_var: Regex::new(r"\$\{env:(?P<var>[a-zA-Z_][a-zA-Z0-9_]*)}").unwrap(),
        re_whitespace: Regex::new(r"\s+").unwrap(),
        re_filename_separators: Regex::new(r"[._-]+").unwrap(),
        re_release_year: Regex::new(r"\b(19\d\d|20\d\d)\b").unwrap(),
        re_release_group_suffix: Regex::new(r"-[\p{Alphabetic}\p{Nd}]+$").unwrap(),
        re_messy_title_detectors: vec![
            Regex::new(r"(?i)\bwww\.[^\s]+").unwrap(),
            Regex::new(r"(?i)\b\d{3,4}p\b").unwrap(),
            Regex::new(r"\[.*?\]").unwrap(),
            Regex::new(r"(?i)\b(BluRay|WEB-DL|WEB|BRRip|HDRip|BDRip|DVDRip|x264|x265|h264|h265|HEVC|YIFY|YTS|RARBG)\b").unwrap(),
        ],
    }
);
