use std::io::{self, BufRead};

/// One line read from a source, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    /// Bytes consumed from the source, terminator included.
    pub bytes: usize,
}

/// A sequential producer of lines. `Ok(None)` is a clean end of stream.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<Line>>;
}

/// Reads one `\n`-terminated line; a dangling final line is returned as is.
pub fn read_line<R: BufRead + ?Sized>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<Line>> {
    buf.clear();
    let bytes = reader.read_until(b'\n', buf)?;
    if bytes == 0 {
        return Ok(None);
    }

    let mut end = buf.len();
    if buf[..end].ends_with(b"\n") {
        end -= 1;
        if buf[..end].ends_with(b"\r") {
            end -= 1;
        }
    }

    Ok(Some(Line {
        text: String::from_utf8_lossy(&buf[..end]).into_owned(),
        bytes,
    }))
}

/// Plain blocking source over any [`BufRead`].
pub struct BufLineSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> BufLineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for BufLineSource<R> {
    fn next_line(&mut self) -> io::Result<Option<Line>> {
        read_line(&mut self.reader, &mut self.buf)
    }
}
