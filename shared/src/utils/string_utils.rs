pub fn is_blank_optional_string(s: Option<&String>) -> bool {
    s.is_none_or(|s| s.chars().all(char::is_whitespace))
}
