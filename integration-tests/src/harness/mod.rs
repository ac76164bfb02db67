pub mod log_file;
pub mod stream;
pub mod tracing;
pub mod viewer;

pub use log_file::LogFile;
pub use stream::{ChannelReader, channel_reader};
pub use tracing::{CapturedEvent, EventLog, captured_events, init_test_tracing};
pub use viewer::TestViewer;
