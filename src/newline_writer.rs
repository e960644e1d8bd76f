use crate::{Status, Write};
use std::io;

/// A `Write` implementation which passes every byte through to an inner
/// `Write` unchanged and guarantees that a non-empty output stream ends
/// with exactly one line-terminator byte.
///
/// The writer records the last byte passed through. When the stream is
/// declared ended, with `flush(Status::End)` or `close_into_inner`, a
/// single `'\n'` is appended if at least one byte was written and the most
/// recent byte was not already `'\n'`. An empty stream stays empty.
pub struct NewlineWriter<Inner: Write> {
    /// The wrapped byte stream.
    inner: Inner,

    /// The last byte written, or `None` if no bytes have been written yet.
    /// `None` is distinct from `Some(0)`, so a stream consisting of NUL
    /// bytes is still terminated.
    last: Option<u8>,
}

impl<Inner: Write> NewlineWriter<Inner> {
    /// Construct a new instance of `NewlineWriter` wrapping `inner`.
    #[inline]
    pub fn new(inner: Inner) -> Self {
        Self { inner, last: None }
    }

    /// Gets a reference to the underlying writer.
    pub fn get_ref(&self) -> &Inner {
        &self.inner
    }

    /// Flush and close the underlying stream, appending the trailing
    /// terminator if one is due, and return the underlying stream object.
    pub fn close_into_inner(mut self) -> io::Result<Inner> {
        self.flush(Status::End)?;
        Ok(self.inner)
    }

    fn terminate(&mut self) -> io::Result<()> {
        if let Some(last) = self.last {
            if last != b'\n' {
                match self.inner.write_all(b"\n") {
                    Ok(()) => self.last = Some(b'\n'),
                    Err(e) => {
                        self.inner.abandon();
                        return Err(e);
                    }
                }
            }
        }
        Ok(())
    }
}

impl<Inner: Write> Write for NewlineWriter<Inner> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let size = self.inner.write(buf)?;
        if size > 0 {
            self.last = Some(buf[size - 1]);
        }
        Ok(size)
    }

    #[inline]
    fn flush(&mut self, status: Status) -> io::Result<()> {
        if status.is_end() {
            self.terminate()?;
        }
        self.inner.flush(status)
    }

    #[inline]
    fn abandon(&mut self) {
        self.inner.abandon();
    }
}

#[cfg(test)]
fn relay_via_std_writer(bytes: &[u8]) -> io::Result<Vec<u8>> {
    let mut writer = NewlineWriter::new(crate::StdWriter::new(Vec::<u8>::new()));
    writer.write_all(bytes)?;
    let inner = writer.close_into_inner()?;
    Ok(inner.get_ref().to_vec())
}

#[cfg(test)]
fn test(bytes: &[u8], expected: &[u8]) {
    assert_eq!(relay_via_std_writer(bytes).unwrap(), expected);
}

#[test]
fn test_empty() {
    test(b"", b"");
}

#[test]
fn test_unterminated() {
    test(b"abc", b"abc\n");
    test(b"abc\ndef", b"abc\ndef\n");
}

#[test]
fn test_already_terminated() {
    test(b"abc\n", b"abc\n");
    test(b"\n", b"\n");
}

#[test]
fn test_multiple_trailing_newlines() {
    test(b"abc\n\n", b"abc\n\n");
    test(b"\n\n\n", b"\n\n\n");
}

#[test]
fn test_nul_bytes() {
    test(b"a\0b", b"a\0b\n");
    test(b"\0", b"\0\n");
}

#[test]
fn test_byte_transparency() {
    let mut bytes = Vec::new();
    for b in 0..=0xff_u8 {
        bytes.push(b);
    }
    let mut expected = bytes.clone();
    expected.push(b'\n');
    test(&bytes, &expected);
}

#[test]
fn test_idempotence() {
    for input in [&b""[..], b"abc", b"abc\n", b"abc\n\n", b"a\0b"] {
        let once = relay_via_std_writer(input).unwrap();
        let twice = relay_via_std_writer(&once).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_split_writes() {
    let mut writer = NewlineWriter::new(crate::StdWriter::new(Vec::<u8>::new()));
    writer.write_all(b"hello ").unwrap();
    writer.write_all(b"world").unwrap();
    let inner = writer.close_into_inner().unwrap();
    assert_eq!(inner.get_ref(), b"hello world\n");
}
