use crate::{default_read_to_end, Read, ReadOutcome};
#[cfg(unix)]
use std::os::unix::io::AsRawFd;
#[cfg(windows)]
use std::os::windows::io::AsRawHandle;
use std::io;
#[cfg(not(windows))]
use std::mem::MaybeUninit;

/// Adapts an `io::Read` to implement `Read`.
///
/// A read of zero bytes from the inner stream is reported as `Status::End`
/// rather than left for the caller to interpret, and once the end has been
/// observed, subsequent reads keep reporting it.
pub struct StdReader<Inner: io::Read> {
    inner: Inner,
    line_by_line: bool,
    ended: bool,
}

#[cfg(not(windows))]
impl<Inner: io::Read + AsRawFd> StdReader<Inner> {
    /// Construct a new `StdReader` which wraps `inner`, which implements
    /// `AsRawFd`, and automatically sets the `line_by_line` setting if
    /// appropriate.
    pub fn new(inner: Inner) -> Self {
        let line_by_line = unsafe {
            let mut termios = MaybeUninit::<libc::termios>::uninit();
            if libc::tcgetattr(inner.as_raw_fd(), termios.as_mut_ptr()) == 0 {
                (termios.assume_init().c_lflag & libc::ICANON) == libc::ICANON
            } else {
                // `tcgetattr` fails when it's not reading from a terminal.
                false
            }
        };

        if line_by_line {
            StdReader::line_by_line(inner)
        } else {
            StdReader::generic(inner)
        }
    }
}

#[cfg(windows)]
impl<Inner: io::Read + AsRawHandle> StdReader<Inner> {
    /// Construct a new `StdReader` which wraps `inner`, which implements
    /// `AsRawHandle`.
    ///
    /// TODO: Does Windows have a concept of line-by-line console input?
    pub fn new(inner: Inner) -> Self {
        StdReader::generic(inner)
    }
}

impl<Inner: io::Read> StdReader<Inner> {
    /// Construct a new `StdReader` which wraps `inner` with generic settings.
    pub fn generic(inner: Inner) -> Self {
        Self {
            inner,
            line_by_line: false,
            ended: false,
        }
    }

    /// Construct a new `StdReader` which wraps an `inner` which reads its
    /// input line-by-line, such as stdin on a terminal. Each completed line
    /// is reported as a lull so that downstream writers flush it promptly.
    pub fn line_by_line(inner: Inner) -> Self {
        Self {
            inner,
            line_by_line: true,
            ended: false,
        }
    }
}

impl<Inner: io::Read> Read for StdReader<Inner> {
    #[inline]
    fn read_outcome(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
        if self.ended {
            return Ok(ReadOutcome::end(0));
        }
        match self.inner.read(buf) {
            Ok(0) if !buf.is_empty() => {
                self.ended = true;
                Ok(ReadOutcome::end(0))
            }
            Ok(size) => {
                if self.line_by_line && size > 0 && buf[size - 1] == b'\n' {
                    Ok(ReadOutcome::lull(size))
                } else {
                    Ok(ReadOutcome::ready(size))
                }
            }
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => Ok(ReadOutcome::ready(0)),
            Err(e) => Err(e),
        }
    }

    #[inline]
    fn read_to_end(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        if self.ended {
            return Ok(0);
        }

        default_read_to_end(self, buf)
    }
}

#[test]
fn test_std_reader() {
    let mut input = io::Cursor::new(b"hello world");
    let mut reader = StdReader::generic(&mut input);
    let mut v = Vec::new();
    reader.read_to_end(&mut v).unwrap();
    assert_eq!(v, b"hello world");
}

#[test]
fn test_std_reader_sticky_end() {
    let mut input = io::Cursor::new(b"x");
    let mut reader = StdReader::generic(&mut input);
    let mut buf = [0; 4];
    let outcome = reader.read_outcome(&mut buf).unwrap();
    assert_eq!(outcome.size, 1);
    assert!(reader.read_outcome(&mut buf).unwrap().status.is_end());
    assert!(reader.read_outcome(&mut buf).unwrap().status.is_end());
}
