use crate::{Status, Write};
use std::io::{self, IoSlice};

/// Adapts a [`std::io::Write`] to implement [`Write`].
pub struct StdWriter<Inner: io::Write> {
    inner: Inner,
    ended: bool,
}

impl<Inner: io::Write> StdWriter<Inner> {
    /// Construct a new instance of `StdWriter` wrapping `inner`.
    pub fn new(inner: Inner) -> Self {
        Self {
            inner,
            ended: false,
        }
    }

    /// Gets a reference to the underlying writer.
    pub fn get_ref(&self) -> &Inner {
        &self.inner
    }

    /// Gets a mutable reference to the underlying writer.
    ///
    /// It is inadvisable to directly write to the underlying writer.
    pub fn get_mut(&mut self) -> &mut Inner {
        &mut self.inner
    }
}

impl<Inner: io::Write> Write for StdWriter<Inner> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.ended {
            return Err(stream_already_ended());
        }
        self.inner.write(buf)
    }

    #[inline]
    fn flush(&mut self, status: Status) -> io::Result<()> {
        if self.ended {
            return Err(stream_already_ended());
        }
        match status {
            Status::Ready => Ok(()),
            Status::Lull => self.inner.flush(),
            Status::End => {
                self.ended = true;
                self.inner.flush()
            }
        }
    }

    #[inline]
    fn abandon(&mut self) {
        self.ended = true;
    }

    #[inline]
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
        if self.ended {
            return Err(stream_already_ended());
        }
        self.inner.write_vectored(bufs)
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.ended {
            return Err(stream_already_ended());
        }
        self.inner.write_all(buf)
    }
}

fn stream_already_ended() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "stream has already ended")
}
