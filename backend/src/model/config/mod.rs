pub mod macros;
mod base;
mod library;
mod title_cleaner;

pub use self::base::*;
pub use self::library::*;
pub use self::title_cleaner::*;
