use crate::tail::line::{Line, LineSource, read_line};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundedRead {
    Line(Line),
    Eof,
    /// No line arrived in time. The read stays outstanding.
    TimedOut,
}

/// Line reader whose reads can be bounded by a timeout.
///
/// A worker thread owns the underlying reader and performs one read per
/// request. At most one request is in flight: after a timeout the pending
/// read is not cancelled, and the next call collects its result before a new
/// read is issued, so a line that arrives late is delivered, not lost.
pub struct BoundedLineReader {
    requests: SyncSender<()>,
    responses: Receiver<io::Result<Option<Line>>>,
    in_flight: bool,
    finished: bool,
}

impl BoundedLineReader {
    pub fn spawn<R>(reader: R) -> io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (requests, request_rx) = mpsc::sync_channel::<()>(1);
        let (response_tx, responses) = mpsc::sync_channel(1);

        thread::Builder::new()
            .name("jog-reader".to_string())
            .spawn(move || {
                let mut reader = reader;
                let mut buf = Vec::new();

                while request_rx.recv().is_ok() {
                    let result = read_line(&mut reader, &mut buf);
                    let more = matches!(result, Ok(Some(_)));
                    if response_tx.send(result).is_err() || !more {
                        break;
                    }
                }
            })?;

        Ok(Self {
            requests,
            responses,
            in_flight: false,
            finished: false,
        })
    }

    /// Waits at most `timeout` for the next line.
    pub fn read_within(&mut self, timeout: Duration) -> io::Result<BoundedRead> {
        if !self.issue() {
            return Ok(BoundedRead::Eof);
        }

        match self.responses.recv_timeout(timeout) {
            Ok(result) => self.complete(result).map(|line| match line {
                Some(line) => BoundedRead::Line(line),
                None => BoundedRead::Eof,
            }),
            Err(RecvTimeoutError::Timeout) => Ok(BoundedRead::TimedOut),
            Err(RecvTimeoutError::Disconnected) => {
                self.finish();
                Ok(BoundedRead::Eof)
            }
        }
    }

    /// Whether a timed-out read is still pending.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Issues a read unless one is already pending. Returns false once the
    /// worker has stopped.
    fn issue(&mut self) -> bool {
        if self.finished {
            return false;
        }
        if !self.in_flight {
            if self.requests.send(()).is_err() {
                self.finish();
                return false;
            }
            self.in_flight = true;
        }
        true
    }

    fn complete(&mut self, result: io::Result<Option<Line>>) -> io::Result<Option<Line>> {
        self.in_flight = false;
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    fn finish(&mut self) {
        self.in_flight = false;
        self.finished = true;
    }
}

impl LineSource for BoundedLineReader {
    fn next_line(&mut self) -> io::Result<Option<Line>> {
        if !self.issue() {
            return Ok(None);
        }

        match self.responses.recv() {
            Ok(result) => self.complete(result),
            Err(_) => {
                self.finish();
                Ok(None)
            }
        }
    }
}
