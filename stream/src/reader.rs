//! Byte-level reader with bounded operations.

use crate::error::{StreamError, StreamResult};

/// A big-endian reader over a byte slice.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug)]
pub struct DataReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> DataReader<'a> {
    /// Creates a new `DataReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a `u8`.
    pub fn read_u8(&mut self) -> StreamResult<u8> {
        let bytes = self.read_array::<1>()?;
        Ok(bytes[0])
    }

    /// Reads a big-endian `u16`.
    pub fn read_u16(&mut self) -> StreamResult<u16> {
        Ok(u16::from_be_bytes(self.read_array::<2>()?))
    }

    /// Reads a big-endian `u32`.
    pub fn read_u32(&mut self) -> StreamResult<u32> {
        Ok(u32::from_be_bytes(self.read_array::<4>()?))
    }

    /// Reads a big-endian `u64`.
    pub fn read_u64(&mut self) -> StreamResult<u64> {
        Ok(u64::from_be_bytes(self.read_array::<8>()?))
    }

    /// Reads an `i8`.
    pub fn read_i8(&mut self) -> StreamResult<i8> {
        let bytes = self.read_array::<1>()?;
        Ok(bytes[0] as i8)
    }

    /// Reads a big-endian `i16`.
    pub fn read_i16(&mut self) -> StreamResult<i16> {
        Ok(i16::from_be_bytes(self.read_array::<2>()?))
    }

    /// Reads a big-endian `i32`.
    pub fn read_i32(&mut self) -> StreamResult<i32> {
        Ok(i32::from_be_bytes(self.read_array::<4>()?))
    }

    /// Reads a big-endian IEEE-754 `f32`.
    pub fn read_f32(&mut self) -> StreamResult<f32> {
        Ok(f32::from_be_bytes(self.read_array::<4>()?))
    }

    /// Reads a big-endian IEEE-754 `f64`.
    pub fn read_f64(&mut self) -> StreamResult<f64> {
        Ok(f64::from_be_bytes(self.read_array::<8>()?))
    }

    /// Reads a fixed-size byte array.
    pub fn read_array<const N: usize>(&mut self) -> StreamResult<[u8; N]> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }

    /// Reads `len` bytes as a slice borrowed from the underlying buffer.
    pub fn read_bytes(&mut self, len: usize) -> StreamResult<&'a [u8]> {
        self.ensure(len)?;
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn ensure(&self, bytes: usize) -> StreamResult<()> {
        let available = self.remaining();
        if bytes > available {
            return Err(StreamError::UnexpectedEof {
                requested: bytes,
                available,
            });
        }
        Ok(())
    }
}
