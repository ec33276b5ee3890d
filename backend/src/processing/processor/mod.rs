mod title;

pub use self::title::*;
