#![no_main]
use eofnl::{NewlineWriter, StdWriter, Write};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|bytes: &[u8]| {
    let mut writer = NewlineWriter::new(StdWriter::new(Vec::<u8>::new()));
    writer.write_all(bytes).unwrap();
    let inner = writer.close_into_inner().unwrap();
    let out = inner.get_ref();

    if bytes.is_empty() {
        assert!(out.is_empty());
    } else {
        assert_eq!(out.last(), Some(&b'\n'));
        if bytes.ends_with(b"\n") {
            assert_eq!(&out[..], bytes);
        } else {
            assert_eq!(&out[..out.len() - 1], bytes);
        }
    }
});
