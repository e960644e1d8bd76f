//! Streams of bytes with normalized trailing line termination.
//!
//! The [`relay`] function copies a [`Read`] to a [`Write`] until
//! end-of-stream, and [`NewlineWriter`] ensures the bytes written to it end
//! with exactly one `'\n'`, appending one only when the stream is non-empty
//! and unterminated.

#![deny(missing_docs)]

mod newline_writer;
mod read;
mod relay;
mod slice_reader;
mod status;
mod std_reader;
mod std_writer;
mod write;

pub use newline_writer::NewlineWriter;
pub use read::{
    default_read, default_read_to_end, default_read_vectored, default_read_vectored_outcome, Read,
    ReadOutcome,
};
pub use relay::relay;
pub use slice_reader::SliceReader;
pub use status::Status;
pub use std_reader::StdReader;
pub use std_writer::StdWriter;
pub use write::{default_write_all, default_write_vectored, Write};
