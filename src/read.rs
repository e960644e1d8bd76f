use crate::Status;
use std::io::{self, IoSliceMut};

/// A superset of [`std::io::Read`], with `read_outcome` and
/// `read_vectored_outcome` which report the status of the stream explicitly
/// rather than special-casing reads of zero bytes.
pub trait Read {
    /// Like [`std::io::Read::read`], but returns a `ReadOutcome`.
    fn read_outcome(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome>;

    /// Like [`std::io::Read::read_vectored`], but returns a `ReadOutcome`.
    fn read_vectored_outcome(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<ReadOutcome> {
        default_read_vectored_outcome(self, bufs)
    }

    /// Like [`std::io::Read::read`].
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        default_read(self, buf)
    }

    /// Like [`std::io::Read::read_vectored`].
    fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
        default_read_vectored(self, bufs)
    }

    /// Like [`std::io::Read::read_to_end`].
    fn read_to_end(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        default_read_to_end(self, buf)
    }
}

/// Information returned after a successful read.
#[derive(Clone, Debug)]
pub struct ReadOutcome {
    /// The number of bytes read.
    pub size: usize,

    /// What to expect from future reads from the stream.
    pub status: Status,
}

impl ReadOutcome {
    /// Data was read on a stream which remains open.
    #[inline]
    pub fn ready(size: usize) -> Self {
        Self {
            size,
            status: Status::Ready,
        }
    }

    /// Data was read on a stream which either remains open or is now closed.
    #[inline]
    pub fn ready_or_end(size: usize, ready: bool) -> Self {
        Self {
            size,
            status: Status::ready_or_end(ready),
        }
    }

    /// Data was read on a stream which is now closed.
    #[inline]
    pub fn end(size: usize) -> Self {
        Self {
            size,
            status: Status::End,
        }
    }

    /// Data was read on a stream which is now at a lull.
    #[inline]
    pub fn lull(size: usize) -> Self {
        Self {
            size,
            status: Status::Lull,
        }
    }
}

/// Default implementation of `Read::read`.
pub fn default_read<Inner: Read + ?Sized>(inner: &mut Inner, buf: &mut [u8]) -> io::Result<usize> {
    inner.read_outcome(buf).and_then(outcome_to_usize)
}

/// Default implementation of `Read::read_vectored`.
pub fn default_read_vectored<Inner: Read + ?Sized>(
    inner: &mut Inner,
    bufs: &mut [IoSliceMut<'_>],
) -> io::Result<usize> {
    inner.read_vectored_outcome(bufs).and_then(outcome_to_usize)
}

/// Default implementation of `Read::read_vectored_outcome`.
pub fn default_read_vectored_outcome<Inner: Read + ?Sized>(
    inner: &mut Inner,
    bufs: &mut [IoSliceMut<'_>],
) -> io::Result<ReadOutcome> {
    let buf = bufs
        .iter_mut()
        .find(|b| !b.is_empty())
        .map_or(&mut [][..], |b| &mut **b);
    inner.read_outcome(buf)
}

/// Default implementation of `Read::read_to_end`.
pub fn default_read_to_end<Inner: Read + ?Sized>(
    inner: &mut Inner,
    buf: &mut Vec<u8>,
) -> io::Result<usize> {
    let start_len = buf.len();
    let chunk_size = 1024;
    loop {
        let read_pos = buf.len();

        // Allocate space in the buffer. This needlessly zeros out the
        // memory, however avoiding that requires assumptions only the
        // standard library is allowed to make about the compiler.
        // https://github.com/rust-lang/rust/issues/42788 for details.
        buf.resize(read_pos + chunk_size, 0);

        match inner.read_outcome(&mut buf[read_pos..]) {
            Ok(ReadOutcome { size, status }) => {
                buf.truncate(read_pos + size);
                if status.is_end() {
                    return Ok(buf.len() - start_len);
                }
            }
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {
                buf.truncate(read_pos);
            }
            Err(e) => {
                buf.truncate(start_len);
                return Err(e);
            }
        }
    }
}

fn outcome_to_usize(outcome: ReadOutcome) -> io::Result<usize> {
    match outcome {
        ReadOutcome {
            size: 0,
            status: Status::Ready,
        }
        | ReadOutcome {
            size: 0,
            status: Status::Lull,
        } => Err(io::Error::new(
            io::ErrorKind::Interrupted,
            "read zero bytes from stream",
        )),
        ReadOutcome { size, status: _ } => Ok(size),
    }
}
