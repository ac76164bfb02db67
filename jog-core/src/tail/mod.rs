//! Line sources: static files, followed files and streams.
//!
//! Lines always reach the [`LineHandler`] in source order. When a tail count
//! is configured, the initial backlog is collected into a [`SlidingWindow`]
//! with bounded-wait reads and delivered before any live line.

mod bounded;
mod controller;
mod cursor;
mod line;
mod window;

#[cfg(test)]
mod tests;

pub use bounded::{BoundedLineReader, BoundedRead};
pub use controller::{
    DEFAULT_BACKLOG_TIMEOUT, DEFAULT_POLL_INTERVAL, Follower, LineHandler, Source, TailOptions,
    run, run_stream,
};
pub use cursor::ReadCursor;
pub use line::{BufLineSource, Line, LineSource, read_line};
pub use window::SlidingWindow;
