//! The record marshalling contract.

use std::hash::Hasher;

use stream::{DataReader, DataWriter};

use crate::error::{DecodeError, DecodeResult};
use crate::limits::DecodeLimits;

/// The contract every DIS record implements.
///
/// A record is an ordered sequence of fields: fixed-width primitives, nested
/// records, or counted lists of nested records. Marshalling writes the fields
/// in declaration order as big-endian bytes; unmarshalling reads the same
/// sequence back. Field order is part of the wire contract and must never be
/// reordered.
///
/// Records with list fields do not store their counts: the count written to
/// the wire is always the list's length, exposed through a `number_of_*()`
/// accessor. A stale stored count is unrepresentable.
pub trait Record: Sized {
    /// Returns the marshalled size of this record in bytes.
    ///
    /// For nested records the size recurses; for lists it is the sum of the
    /// element sizes (the count is a separate preceding field and is counted
    /// where it is declared).
    fn marshalled_size(&self) -> usize;

    /// Writes this record's fields, in declaration order, to `out`.
    ///
    /// Marshalling is infallible: no value-range validation is performed and
    /// the writer grows as needed.
    fn marshal(&self, out: &mut DataWriter);

    /// Reads a record from `input`, consuming exactly
    /// [`marshalled_size`](Self::marshalled_size) bytes on success.
    ///
    /// Fails with [`DecodeError::Stream`] on truncated input and
    /// [`DecodeError::CountExceedsLimit`] when a wire-provided list count
    /// exceeds `limits`. On failure the reader is left mid-record; callers
    /// that need to resync must do so from the enclosing frame.
    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self>;

    /// Marshals this record into a fresh byte buffer.
    #[must_use]
    fn to_bytes(&self) -> Vec<u8> {
        let mut writer = DataWriter::with_capacity(self.marshalled_size());
        self.marshal(&mut writer);
        writer.finish()
    }

    /// Unmarshals a record from a byte slice.
    fn from_bytes(bytes: &[u8], limits: &DecodeLimits) -> DecodeResult<Self> {
        let mut reader = DataReader::new(bytes);
        Self::unmarshal(&mut reader, limits)
    }
}

/// Returns the summed marshalled size of a list body.
pub(crate) fn list_size<T: Record>(items: &[T]) -> usize {
    items.iter().map(Record::marshalled_size).sum()
}

/// Decodes `count` list elements after validating the count against `limits`.
pub(crate) fn read_list<T: Record>(
    count: usize,
    field: &'static str,
    input: &mut DataReader<'_>,
    limits: &DecodeLimits,
) -> DecodeResult<Vec<T>> {
    if count > limits.max_list_elements {
        return Err(DecodeError::CountExceedsLimit {
            field,
            count,
            limit: limits.max_list_elements,
        });
    }
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(T::unmarshal(input, limits)?);
    }
    Ok(items)
}

/// Hashes an `f32` field consistently with `PartialEq`.
///
/// `0.0` and `-0.0` compare equal, so both hash as the positive-zero bit
/// pattern. `NaN` never compares equal to anything and needs no special case.
pub(crate) fn hash_f32<H: Hasher>(value: f32, state: &mut H) {
    let bits = if value == 0.0 { 0 } else { value.to_bits() };
    state.write_u32(bits);
}

/// Hashes an `f64` field consistently with `PartialEq`.
pub(crate) fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    let bits = if value == 0.0 { 0 } else { value.to_bits() };
    state.write_u64(bits);
}
