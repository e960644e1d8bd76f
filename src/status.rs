/// What is known about the rest of a stream.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Status {
    /// There may be more bytes waiting to be read.
    Ready,

    /// The source has indicated that there are no more bytes waiting to be
    /// read at this time, but the stream remains open and more bytes may
    /// become available in the future.
    ///
    /// This is not to be confused with data which is waiting to be read but
    /// which will take time to be delivered.
    Lull,

    /// The stream has ended. No more bytes will be transmitted.
    End,
}

impl Status {
    /// Return either `Status::Ready` or `Status::End`.
    #[inline]
    pub fn ready_or_end(ready: bool) -> Self {
        if ready {
            Self::Ready
        } else {
            Self::End
        }
    }

    /// Shorthand for testing equality with `Status::End`.
    #[inline]
    pub fn is_end(&self) -> bool {
        *self == Self::End
    }
}
