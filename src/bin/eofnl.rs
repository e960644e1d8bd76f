//! Copy standard input to standard output, appending a final newline if the
//! input was non-empty and didn't already end with one.

use eofnl::{relay, NewlineWriter, StdReader, StdWriter};

fn main() -> anyhow::Result<()> {
    let mut reader = StdReader::new(std::io::stdin());
    let mut writer = NewlineWriter::new(StdWriter::new(std::io::stdout()));
    relay(&mut reader, &mut writer)?;
    Ok(())
}
