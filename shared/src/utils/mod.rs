mod default_utils;
mod string_utils;
mod constants;

pub use self::default_utils::*;
pub use self::string_utils::*;
pub use self::constants::*;
