use crate::utils::{DEFAULT_REMOVAL_PATTERNS, DEFAULT_VIDEO_EXTENSIONS};

pub const fn default_as_true() -> bool { true }

pub fn default_removal_patterns() -> Vec<String> {
    DEFAULT_REMOVAL_PATTERNS.iter().map(ToString::to_string).collect()
}

pub fn default_supported_extensions() -> Vec<String> {
    DEFAULT_VIDEO_EXTENSIONS.iter().map(ToString::to_string).collect()
}
