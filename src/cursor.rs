//! Bounds-checked reads over a borrowed byte buffer.

use byteorder::{ByteOrder, NetworkEndian};

/// A read past the end of the buffer was requested. Each parsing stage
/// maps it to its own `Incomplete*` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OutOfBounds;

pub(crate) type Result<T> = std::result::Result<T, OutOfBounds>;

/// A view into a caller-owned buffer.
///
/// Every read checks that the requested bytes exist before touching them,
/// and a failed read leaves the cursor where it was.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Looks at the next byte without consuming it.
    pub(crate) fn peek_u8(&self) -> Result<u8> {
        self.buf.get(self.pos).copied().ok_or(OutOfBounds)
    }

    fn bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(OutOfBounds);
        }
        let out = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8> {
        let b = self.peek_u8()?;
        self.pos += 1;
        Ok(b)
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16> {
        self.bytes(2).map(NetworkEndian::read_u16)
    }

    pub(crate) fn read_u24(&mut self) -> Result<u32> {
        self.bytes(3).map(NetworkEndian::read_u24)
    }

    pub(crate) fn skip(&mut self, len: usize) -> Result<()> {
        self.bytes(len).map(|_| ())
    }

    /// Splits off the next `len` bytes as their own cursor.
    pub(crate) fn take(&mut self, len: usize) -> Result<Cursor<'a>> {
        self.bytes(len).map(Cursor::new)
    }

    /// Copies the next `len` bytes into the start of `out`.
    pub(crate) fn copy_to(&mut self, len: usize, out: &mut [u8]) -> Result<()> {
        if len > out.len() {
            return Err(OutOfBounds);
        }
        let src = self.bytes(len)?;
        out[..len].copy_from_slice(src);
        Ok(())
    }

    /// Skips a field prefixed by a big-endian length of `width` bytes (1 or 2).
    ///
    /// The prefix and the body are both checked before the cursor moves.
    pub(crate) fn skip_prefixed(&mut self, width: PrefixWidth) -> Result<usize> {
        let mut probe = *self;
        let len = match width {
            PrefixWidth::U8 => usize::from(probe.read_u8()?),
            PrefixWidth::U16 => usize::from(probe.read_u16()?),
        };
        probe.skip(len)?;
        *self = probe;
        Ok(len)
    }

    pub(crate) fn skip_vec_u8(&mut self) -> Result<usize> {
        self.skip_prefixed(PrefixWidth::U8)
    }

    pub(crate) fn skip_vec_u16(&mut self) -> Result<usize> {
        self.skip_prefixed(PrefixWidth::U16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrefixWidth {
    U8,
    U16,
}
