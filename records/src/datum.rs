//! Fixed and variable datum records and the datum specification that
//! carries lists of both.

use stream::{DataReader, DataWriter};

use crate::error::{DecodeError, DecodeResult};
use crate::limits::DecodeLimits;
use crate::record::{list_size, read_list, Record};

/// A 32-bit datum identifier paired with a 32-bit value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FixedDatum {
    pub datum_id: u32,
    pub datum_value: u32,
}

impl FixedDatum {
    #[must_use]
    pub const fn new(datum_id: u32, datum_value: u32) -> Self {
        Self {
            datum_id,
            datum_value,
        }
    }
}

impl Record for FixedDatum {
    fn marshalled_size(&self) -> usize {
        8
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u32(self.datum_id);
        out.write_u32(self.datum_value);
    }

    fn unmarshal(input: &mut DataReader<'_>, _limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            datum_id: input.read_u32()?,
            datum_value: input.read_u32()?,
        })
    }
}

/// A variable-length datum: an identifier, a payload length in **bits**,
/// and the payload itself, padded to a 64-bit boundary on the wire.
///
/// `datum_length` is a payload bit count, not a list count, and the padding
/// makes it non-derivable from `value.len()`; the constructor keeps the two
/// consistent and decode validates the implied byte count against
/// [`DecodeLimits::max_datum_bytes`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VariableDatum {
    pub datum_id: u32,
    /// Payload length in bits, excluding padding.
    pub datum_length: u32,
    /// Payload bytes including zero padding to an 8-byte multiple.
    pub value: Vec<u8>,
}

impl VariableDatum {
    /// Creates a datum whose bit length and padded payload are derived from
    /// `payload`.
    #[must_use]
    pub fn new(datum_id: u32, payload: &[u8]) -> Self {
        let datum_length = (payload.len() * 8) as u32;
        let mut value = payload.to_vec();
        value.resize(padded_len(payload.len()), 0);
        Self {
            datum_id,
            datum_length,
            value,
        }
    }
}

/// Rounds a byte count up to the next 8-byte multiple.
const fn padded_len(bytes: usize) -> usize {
    bytes.div_ceil(8) * 8
}

/// Padded payload byte count implied by a wire bit length.
const fn padded_len_from_bits(bits: u32) -> usize {
    padded_len((bits as usize).div_ceil(8))
}

impl Record for VariableDatum {
    fn marshalled_size(&self) -> usize {
        8 + self.value.len()
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u32(self.datum_id);
        out.write_u32(self.datum_length);
        out.write_bytes(&self.value);
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        let datum_id = input.read_u32()?;
        let datum_length = input.read_u32()?;
        let datum_bytes = padded_len_from_bits(datum_length);
        if datum_bytes > limits.max_datum_bytes {
            return Err(DecodeError::DatumTooLarge {
                datum_bytes,
                limit: limits.max_datum_bytes,
            });
        }
        let value = input.read_bytes(datum_bytes)?.to_vec();
        Ok(Self {
            datum_id,
            datum_length,
            value,
        })
    }
}

/// The datum specification carried by simulation management PDUs: a list of
/// fixed datums and a list of variable datums.
///
/// Both counts are written first in declaration order, then both list
/// bodies in the same order. The counts are derived from the lists; there
/// is no stored count to go stale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DatumSpecification {
    pub fixed_datums: Vec<FixedDatum>,
    pub variable_datums: Vec<VariableDatum>,
}

impl DatumSpecification {
    /// The fixed datum count written to the wire.
    #[must_use]
    pub fn number_of_fixed_datums(&self) -> u32 {
        self.fixed_datums.len() as u32
    }

    /// The variable datum count written to the wire.
    #[must_use]
    pub fn number_of_variable_datums(&self) -> u32 {
        self.variable_datums.len() as u32
    }
}

impl Record for DatumSpecification {
    fn marshalled_size(&self) -> usize {
        4 + 4 + list_size(&self.fixed_datums) + list_size(&self.variable_datums)
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u32(self.number_of_fixed_datums());
        out.write_u32(self.number_of_variable_datums());
        for datum in &self.fixed_datums {
            datum.marshal(out);
        }
        for datum in &self.variable_datums {
            datum.marshal(out);
        }
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        let number_of_fixed_datums = input.read_u32()? as usize;
        let number_of_variable_datums = input.read_u32()? as usize;
        let fixed_datums = read_list(number_of_fixed_datums, "fixed_datums", input, limits)?;
        let variable_datums = read_list(
            number_of_variable_datums,
            "variable_datums",
            input,
            limits,
        )?;
        Ok(Self {
            fixed_datums,
            variable_datums,
        })
    }
}
