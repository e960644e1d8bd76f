use crate::{Read, Write};
use std::io;

/// Copy `reader` to `writer` until end-of-stream, returning the number of
/// bytes relayed.
///
/// Every byte read is written in order. Each read's status is forwarded to
/// `writer.flush`, so lulls flush promptly and a terminator-normalizing
/// writer such as [`NewlineWriter`] can finish the stream when the end is
/// reached. An I/O error on either side aborts the relay immediately.
///
/// [`NewlineWriter`]: crate::NewlineWriter
pub fn relay<Source: Read + ?Sized, Sink: Write + ?Sized>(
    reader: &mut Source,
    writer: &mut Sink,
) -> io::Result<u64> {
    let mut buf = [0; 1024];
    let mut total = 0_u64;
    loop {
        let outcome = reader.read_outcome(&mut buf)?;
        writer.write_all(&buf[..outcome.size])?;
        total += outcome.size as u64;
        writer.flush(outcome.status)?;
        if outcome.status.is_end() {
            return Ok(total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::relay;
    use crate::{NewlineWriter, SliceReader, Status, StdWriter, Write};
    use std::io;

    fn relay_bytes(input: &[u8]) -> io::Result<Vec<u8>> {
        let mut reader = SliceReader::new(input);
        let mut writer = NewlineWriter::new(StdWriter::new(Vec::<u8>::new()));
        // `relay` flushes `Status::End` itself, so the stream is already
        // closed; read the output out through the references.
        relay(&mut reader, &mut writer)?;
        Ok(writer.get_ref().get_ref().to_vec())
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(relay_bytes(b"").unwrap(), b"");
    }

    #[test]
    fn unterminated_input_gains_newline() {
        assert_eq!(relay_bytes(b"abc").unwrap(), b"abc\n");
    }

    #[test]
    fn terminated_input_unchanged() {
        assert_eq!(relay_bytes(b"abc\n").unwrap(), b"abc\n");
        assert_eq!(relay_bytes(b"abc\n\n").unwrap(), b"abc\n\n");
    }

    #[test]
    fn binary_input_passes_through() {
        assert_eq!(relay_bytes(b"a\0b").unwrap(), b"a\0b\n");
    }

    #[test]
    fn input_larger_than_relay_buffer() {
        let input = vec![b'x'; 10_000];
        let mut expected = input.clone();
        expected.push(b'\n');
        assert_eq!(relay_bytes(&input).unwrap(), expected);
    }

    #[test]
    fn returns_bytes_relayed() {
        let mut reader = SliceReader::new(b"abcde");
        let mut writer = StdWriter::new(Vec::<u8>::new());
        assert_eq!(relay(&mut reader, &mut writer).unwrap(), 5);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }

        fn flush(&mut self, _status: Status) -> io::Result<()> {
            Ok(())
        }

        fn abandon(&mut self) {}
    }

    #[test]
    fn write_error_aborts_relay() {
        let mut reader = SliceReader::new(b"abc");
        let mut writer = NewlineWriter::new(FailingWriter);
        let err = relay(&mut reader, &mut writer).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
