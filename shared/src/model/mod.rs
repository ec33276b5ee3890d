mod config;
mod clean_report;

pub use self::config::*;
pub use self::clean_report::*;
