use crate::{Read, ReadOutcome};
use std::io::{self, IoSliceMut};

/// Adapts an `&[u8]` to implement `Read`.
pub struct SliceReader<'slice> {
    slice: &'slice [u8],
    ended: bool,
}

impl<'slice> SliceReader<'slice> {
    /// Construct a new `SliceReader` which wraps `slice`.
    pub fn new(slice: &'slice [u8]) -> Self {
        Self {
            slice,
            ended: false,
        }
    }
}

impl<'slice> Read for SliceReader<'slice> {
    #[inline]
    fn read_outcome(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
        if self.ended {
            return Ok(ReadOutcome::end(0));
        }

        let size = io::Read::read(&mut self.slice, buf)?;
        Ok(ReadOutcome::ready_or_end(
            size,
            buf.is_empty() || !self.slice.is_empty(),
        ))
    }

    #[inline]
    fn read_vectored_outcome(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<ReadOutcome> {
        if self.ended {
            return Ok(ReadOutcome::end(0));
        }

        let size = io::Read::read_vectored(&mut self.slice, bufs)?;
        Ok(ReadOutcome::ready_or_end(
            size,
            bufs.iter().all(|b| b.is_empty()) || !self.slice.is_empty(),
        ))
    }

    #[inline]
    fn read_to_end(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        if self.ended {
            return Ok(0);
        }

        io::Read::read_to_end(&mut self.slice, buf)
    }
}

#[test]
fn test_slice_reader() {
    let mut reader = SliceReader::new(b"ab");
    let mut buf = [0; 4];
    let outcome = reader.read_outcome(&mut buf).unwrap();
    assert_eq!(outcome.size, 2);
    assert!(outcome.status.is_end());
    assert_eq!(&buf[..2], b"ab");
}
