use crate::error::JogError;
use crate::tail::bounded::{BoundedLineReader, BoundedRead};
use crate::tail::cursor::ReadCursor;
use crate::tail::line::{BufLineSource, Line, LineSource};
use crate::tail::window::SlidingWindow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const DEFAULT_BACKLOG_TIMEOUT: Duration = Duration::from_millis(200);

/// Receives raw lines in source order.
pub trait LineHandler {
    fn handle(&mut self, line_no: usize, raw: &str) -> Result<(), JogError>;
}

impl<F> LineHandler for F
where
    F: FnMut(usize, &str) -> Result<(), JogError>,
{
    fn handle(&mut self, line_no: usize, raw: &str) -> Result<(), JogError> {
        self(line_no, raw)
    }
}

#[derive(Debug, Clone)]
pub struct TailOptions {
    pub follow: bool,
    /// Only the last N lines of the initial backlog are delivered.
    pub lines: Option<usize>,
    pub poll_interval: Duration,
    pub backlog_timeout: Duration,
}

impl Default for TailOptions {
    fn default() -> Self {
        Self {
            follow: false,
            lines: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            backlog_timeout: DEFAULT_BACKLOG_TIMEOUT,
        }
    }
}

impl TailOptions {
    /// The backlog window size, when one applies.
    pub fn tail_lines(&self) -> Option<usize> {
        self.lines.filter(|&n| n > 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
}

impl Source {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Source::File(path),
            None => Source::Stdin,
        }
    }
}

/// Reads `source` to the end (or forever, when following a file), handing
/// every line to `handler`.
pub fn run<H>(source: &Source, options: &TailOptions, handler: &mut H) -> Result<(), JogError>
where
    H: LineHandler + ?Sized,
{
    match source {
        Source::File(path) if options.follow => Follower::new(path, options.clone()).run(handler),
        Source::File(path) => {
            // Pipes and procfs files report size 0, so read to EOF instead of
            // trusting the size.
            let file = File::open(path).map_err(|source| JogError::Open {
                path: path.clone(),
                source,
            })?;
            run_stream(BufReader::new(file), options, handler)
        }
        Source::Stdin => {
            if options.follow {
                debug!("follow has no effect on stdin; reading until end of stream");
            }
            run_stream(BufReader::new(io::stdin()), options, handler)
        }
    }
}

/// Reads a stream to its end, applying the backlog window first when one is
/// configured.
pub fn run_stream<R, H>(reader: R, options: &TailOptions, handler: &mut H) -> Result<(), JogError>
where
    R: BufRead + Send + 'static,
    H: LineHandler + ?Sized,
{
    let mut cursor = ReadCursor::default();

    match options.tail_lines() {
        Some(capacity) => {
            let mut reader =
                BoundedLineReader::spawn(reader).map_err(|source| JogError::Read { source })?;
            read_backlog(&mut reader, capacity, options.backlog_timeout, &mut cursor, handler)?;
            pump(&mut reader, &mut cursor, handler)
        }
        None => pump(&mut BufLineSource::new(reader), &mut cursor, handler),
    }
}

/// Fills a window with bounded-wait reads, then delivers what it kept.
///
/// The phase ends at end of stream, or as soon as one read does not complete
/// within `timeout`.
fn read_backlog<H>(
    reader: &mut BoundedLineReader,
    capacity: usize,
    timeout: Duration,
    cursor: &mut ReadCursor,
    handler: &mut H,
) -> Result<(), JogError>
where
    H: LineHandler + ?Sized,
{
    let mut window: SlidingWindow<Line> = SlidingWindow::new(capacity);

    loop {
        match reader.read_within(timeout).map_err(|source| JogError::Read { source })? {
            BoundedRead::Line(line) => {
                cursor.advance(line.bytes);
                window.add(line);
            }
            BoundedRead::TimedOut => {
                debug!(lines = cursor.line_no, "backlog read timed out, switching to live reads");
                break;
            }
            BoundedRead::Eof => break,
        }
    }

    let first = cursor.line_no + 1 - window.count();
    for (i, line) in window.drain().into_iter().enumerate() {
        handler.handle(first + i, &line.text)?;
    }

    Ok(())
}

/// Delivers every remaining line of `source`.
fn pump<S, H>(source: &mut S, cursor: &mut ReadCursor, handler: &mut H) -> Result<(), JogError>
where
    S: LineSource + ?Sized,
    H: LineHandler + ?Sized,
{
    while let Some(line) = source.next_line().map_err(|source| JogError::Read { source })? {
        let line_no = cursor.advance(line.bytes);
        handler.handle(line_no, &line.text)?;
    }
    Ok(())
}

/// Polls a growing file for appended lines.
///
/// Each poll reopens the file, so a file replaced or truncated between polls
/// is picked up from its start.
#[derive(Debug)]
pub struct Follower {
    path: PathBuf,
    options: TailOptions,
    cursor: ReadCursor,
    backlog_done: bool,
}

impl Follower {
    pub fn new(path: impl AsRef<Path>, options: TailOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
            cursor: ReadCursor::default(),
            backlog_done: false,
        }
    }

    pub fn cursor(&self) -> ReadCursor {
        self.cursor
    }

    /// Polls until an error occurs.
    pub fn run<H>(mut self, handler: &mut H) -> Result<(), JogError>
    where
        H: LineHandler + ?Sized,
    {
        loop {
            self.poll(handler)?;
            thread::sleep(self.options.poll_interval);
        }
    }

    /// Delivers the lines appended since the previous poll and returns how
    /// many were read.
    pub fn poll<H>(&mut self, handler: &mut H) -> Result<usize, JogError>
    where
        H: LineHandler + ?Sized,
    {
        let mut file = File::open(&self.path).map_err(|source| JogError::Open {
            path: self.path.clone(),
            source,
        })?;
        let size = file
            .metadata()
            .map_err(|source| JogError::Stat {
                path: self.path.clone(),
                source,
            })?
            .len();

        if size < self.cursor.offset {
            debug!(
                path = %self.path.display(),
                size,
                offset = self.cursor.offset,
                "file shrank, reading from the start"
            );
            self.cursor.reset();
        }
        if size == self.cursor.offset {
            return Ok(0);
        }

        self.seek_to_cursor(&mut file).map_err(|source| JogError::Seek {
            path: self.path.clone(),
            source,
        })?;

        let before = self.cursor.line_no;
        let reader = BufReader::new(file);

        match self.options.tail_lines() {
            Some(capacity) if !self.backlog_done && self.cursor.line_no == 0 => {
                self.backlog_done = true;
                let mut reader =
                    BoundedLineReader::spawn(reader).map_err(|source| JogError::Read { source })?;
                read_backlog(
                    &mut reader,
                    capacity,
                    self.options.backlog_timeout,
                    &mut self.cursor,
                    handler,
                )?;
                pump(&mut reader, &mut self.cursor, handler)?;
            }
            _ => pump(&mut BufLineSource::new(reader), &mut self.cursor, handler)?,
        }

        Ok(self.cursor.line_no - before)
    }

    /// Positions `file` at the cursor. When the previous poll ended on a line
    /// without its terminator and that terminator has since been written, it
    /// is skipped so the tail of the line is not delivered a second time.
    fn seek_to_cursor(&mut self, file: &mut File) -> io::Result<()> {
        let offset = self.cursor.offset;
        if offset == 0 {
            file.seek(SeekFrom::Start(0))?;
            return Ok(());
        }

        file.seek(SeekFrom::Start(offset - 1))?;
        let mut pair = [0u8; 2];
        file.read_exact(&mut pair)?;

        if pair[0] != b'\n' && pair[1] == b'\n' {
            self.cursor.offset += 1;
        }
        file.seek(SeekFrom::Start(self.cursor.offset))?;
        Ok(())
    }
}
