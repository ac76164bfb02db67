mod fallback;
mod parser;
mod types;

#[cfg(test)]
mod tests;

pub use fallback::GrokMatcher;
pub use parser::RecordParser;
pub use types::{Record, RecordKind};
