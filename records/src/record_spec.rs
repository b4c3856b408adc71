//! Record specification: the record-set list carried by record-oriented
//! management PDUs.

use stream::{DataReader, DataWriter};

use crate::error::DecodeResult;
use crate::limits::DecodeLimits;
use crate::record::{list_size, read_list, Record};

/// One record set within a record specification.
///
/// `record_length` is a bit count and the standard describes the record
/// values as a variable-size blob of `record_length * record_count` bits
/// followed by 0-31 bits of alignment padding. Deployed OpenDIS-generated
/// bindings instead marshal the values as a fixed u16 and the padding as a
/// fixed u8; this record keeps that fixed-width layout for wire parity with
/// those peers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RecordSpecificationElement {
    pub record_id: u32,
    pub record_set_serial_number: u32,
    /// Length of each record, in bits.
    pub record_length: u16,
    pub record_count: u16,
    pub record_values: u16,
    pub padding: u8,
}

impl Record for RecordSpecificationElement {
    fn marshalled_size(&self) -> usize {
        4 + 4 + 2 + 2 + 2 + 1
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u32(self.record_id);
        out.write_u32(self.record_set_serial_number);
        out.write_u16(self.record_length);
        out.write_u16(self.record_count);
        out.write_u16(self.record_values);
        out.write_u8(self.padding);
    }

    fn unmarshal(input: &mut DataReader<'_>, _limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            record_id: input.read_u32()?,
            record_set_serial_number: input.read_u32()?,
            record_length: input.read_u16()?,
            record_count: input.read_u16()?,
            record_values: input.read_u16()?,
            padding: input.read_u8()?,
        })
    }
}

/// A list of record sets preceded by its derived u32 count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RecordSpecification {
    pub record_sets: Vec<RecordSpecificationElement>,
}

impl RecordSpecification {
    /// The record set count written to the wire.
    #[must_use]
    pub fn number_of_record_sets(&self) -> u32 {
        self.record_sets.len() as u32
    }
}

impl Record for RecordSpecification {
    fn marshalled_size(&self) -> usize {
        4 + list_size(&self.record_sets)
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u32(self.number_of_record_sets());
        for record_set in &self.record_sets {
            record_set.marshal(out);
        }
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        let number_of_record_sets = input.read_u32()? as usize;
        let record_sets = read_list(number_of_record_sets, "record_sets", input, limits)?;
        Ok(Self { record_sets })
    }
}
