mod catalog;
mod scanner;
mod title_cleaner;

pub use self::catalog::*;
pub use self::scanner::*;
pub use self::title_cleaner::*;
