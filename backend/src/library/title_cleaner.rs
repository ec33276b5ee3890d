use log::warn;
use shared::utils::CONSTANTS;
use crate::model::TitleCleanerConfig;

fn is_messy_title(title: &str) -> bool {
    CONSTANTS.re_messy_title_detectors.iter().any(|re| re.is_match(title))
}

// Must run on the untouched title, removal patterns can destroy the word boundaries around the year.
fn extract_release_year(title: &str) -> Option<&str> {
    CONSTANTS.re_release_year
        .captures(title)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

fn apply_removal_patterns(title: &str, config: &TitleCleanerConfig) -> String {
    let mut cleaned = title.to_string();
    for removal in &config.patterns {
        let replaced = match removal.re.try_replacen(&cleaned, 0, "") {
            Ok(replaced) => replaced.into_owned(),
            Err(err) => {
                warn!("Skipping removal pattern {} for '{title}': {err}", removal.pattern);
                continue;
            }
        };
        cleaned = replaced;
    }
    cleaned
}

fn normalize_separators(title: &str) -> String {
    let spaced = CONSTANTS.re_filename_separators.replace_all(title, " ");
    CONSTANTS.re_whitespace.replace_all(&spaced, " ").trim().to_string()
}

/// Turns a release style name like `The.Matrix.1999.1080p.BluRay.x264-GRP` into `The Matrix`.
///
/// Titles without any release noise are returned unchanged. With `remove_year` disabled the
/// release year is appended as ` (YYYY)`. If nothing is left after cleaning the trimmed input
/// is returned, so a non-blank title never becomes blank.
pub fn clean_title(title: &str, config: &TitleCleanerConfig) -> String {
    if !is_messy_title(title) {
        return title.to_string();
    }

    let year = extract_release_year(title);

    let mut cleaned = apply_removal_patterns(title, config);
    cleaned = CONSTANTS.re_release_group_suffix.replace(&cleaned, "").into_owned();

    if config.remove_year {
        if let Some(year) = year {
            cleaned = cleaned.replacen(year, "", 1);
        }
    }

    cleaned = normalize_separators(&cleaned);

    if !config.remove_year {
        if let Some(year) = year {
            if !cleaned.contains(year) {
                cleaned = format!("{cleaned} ({year})").trim().to_string();
            }
        }
    }

    if cleaned.trim().is_empty() {
        title.trim().to_string()
    } else {
        cleaned
    }
}
