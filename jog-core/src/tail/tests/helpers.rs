use crate::error::JogError;
use std::io::{self, BufReader, Read};
use std::sync::mpsc::{self, Receiver, Sender};

/// A reader fed through a channel. Reads block until data arrives and hit
/// end of stream only once every sender is dropped.
///
/// The integration-tests harness carries a copy under the same name.
pub struct ChannelReader {
    chunks: Receiver<Vec<u8>>,
    pending: Vec<u8>,
}

impl Read for ChannelReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pending.is_empty() {
            match self.chunks.recv() {
                Ok(chunk) => self.pending = chunk,
                Err(_) => return Ok(0),
            }
        }

        let n = buf.len().min(self.pending.len());
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending.drain(..n);
        Ok(n)
    }
}

pub fn channel_reader() -> (Sender<Vec<u8>>, BufReader<ChannelReader>) {
    let (tx, rx) = mpsc::channel();
    let reader = ChannelReader {
        chunks: rx,
        pending: Vec::new(),
    };
    (tx, BufReader::new(reader))
}

/// Collects every delivered line.
#[derive(Debug, Default)]
pub struct Collected {
    pub lines: Vec<(usize, String)>,
}

impl Collected {
    pub fn push(&mut self, line_no: usize, raw: &str) -> Result<(), JogError> {
        self.lines.push((line_no, raw.to_string()));
        Ok(())
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|(_, text)| text.as_str()).collect()
    }

    pub fn numbers(&self) -> Vec<usize> {
        self.lines.iter().map(|(n, _)| *n).collect()
    }
}

impl crate::tail::LineHandler for Collected {
    fn handle(&mut self, line_no: usize, raw: &str) -> Result<(), JogError> {
        self.push(line_no, raw)
    }
}
