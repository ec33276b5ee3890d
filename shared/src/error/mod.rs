mod cleartitle_error;

pub use self::cleartitle_error::*;
