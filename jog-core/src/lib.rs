pub mod cli;
pub mod conf;
pub mod error;
pub mod field;
pub mod filter;
pub mod logging;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod tail;

pub use error::JogError;
