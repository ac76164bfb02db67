mod config;
mod element;
mod field;
mod grok;
mod replace;

pub use self::config::*;
pub use self::element::*;
pub use self::field::*;
pub use self::grok::*;
pub use self::replace::ReplaceRules;
