use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitleChange {
    pub before: String,
    pub after: String,
}

/// Outcome of a batch run over a catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CleanReport {
    pub processed: usize,
    pub changed: usize,
    pub failed: usize,
    pub cancelled: bool,
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<TitleChange>,
}

impl CleanReport {
    pub fn add_change(&mut self, before: &str, after: &str) {
        self.changed += 1;
        self.changes.push(TitleChange {
            before: before.to_string(),
            after: after.to_string(),
        });
    }

    /// Sets `success` and the human-readable `message` from the counters.
    pub fn finish(&mut self, total: usize, dry_run: bool) {
        self.success = !self.cancelled && self.failed == 0;
        let action = if dry_run { "would be renamed" } else { "renamed" };
        let mut message = format!("Processed {} of {total} items, {} {action}", self.processed, self.changed);
        if self.failed > 0 {
            message.push_str(&format!(", {} failed", self.failed));
        }
        if self.cancelled {
            message.push_str(", cancelled");
        }
        self.message = message;
    }
}
