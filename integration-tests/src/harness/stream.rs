use std::io::{self, BufReader, Read};
use std::sync::mpsc::{self, Receiver, Sender};

/// A reader fed through a channel. Reads block until data arrives and hit
/// end of stream only once every sender is dropped.
///
/// Same type as the `jog-core` tail test helper; test-only code is not
/// shared across crates, so it is repeated here.
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
