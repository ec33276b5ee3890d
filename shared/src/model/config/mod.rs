mod base;
mod library;
mod log;
mod title_cleaner;

pub use self::base::*;
pub use self::library::*;
pub use self::log::*;
pub use self::title_cleaner::*;
