//! The attribute PDU.

use stream::{DataReader, DataWriter};

use crate::error::DecodeResult;
use crate::header::{pdu_type, protocol_family, PduHeader};
use crate::ids::SimulationAddress;
use crate::limits::DecodeLimits;
use crate::record::Record;

/// Conveys information about attribute records attached to other PDUs.
///
/// `number_attribute_record_set` is a stored scalar with no list body behind
/// it. Deployed OpenDIS-generated bindings never emit the attribute record
/// sets themselves, so this record keeps the bare count for wire parity with
/// those peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributePdu {
    pub header: PduHeader,
    pub originating_simulation_address: SimulationAddress,
    pub padding1: i32,
    pub padding2: i16,
    pub attribute_record_pdu_type: u8,
    pub attribute_record_protocol_version: u8,
    pub master_attribute_record_type: u32,
    pub action_code: u8,
    pub padding3: u8,
    pub number_attribute_record_set: u16,
}

impl AttributePdu {
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: PduHeader::new(pdu_type::ATTRIBUTE, protocol_family::ENTITY_INFORMATION),
            originating_simulation_address: SimulationAddress::default(),
            padding1: 0,
            padding2: 0,
            attribute_record_pdu_type: 0,
            attribute_record_protocol_version: 0,
            master_attribute_record_type: 0,
            action_code: 0,
            padding3: 0,
            number_attribute_record_set: 0,
        }
    }

    /// Stamps the header length with the marshalled size, then marshals.
    pub fn marshal_with_length(&mut self, out: &mut DataWriter) {
        self.header.length = u16::try_from(self.marshalled_size()).unwrap_or(u16::MAX);
        self.marshal(out);
    }
}

impl Default for AttributePdu {
    fn default() -> Self {
        Self::new()
    }
}

impl Record for AttributePdu {
    fn marshalled_size(&self) -> usize {
        self.header.marshalled_size()
            + self.originating_simulation_address.marshalled_size()
            + 4
            + 2
            + 1
            + 1
            + 4
            + 1
            + 1
            + 2
    }

    fn marshal(&self, out: &mut DataWriter) {
        self.header.marshal(out);
        self.originating_simulation_address.marshal(out);
        out.write_i32(self.padding1);
        out.write_i16(self.padding2);
        out.write_u8(self.attribute_record_pdu_type);
        out.write_u8(self.attribute_record_protocol_version);
        out.write_u32(self.master_attribute_record_type);
        out.write_u8(self.action_code);
        out.write_u8(self.padding3);
        out.write_u16(self.number_attribute_record_set);
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            header: PduHeader::unmarshal(input, limits)?,
            originating_simulation_address: SimulationAddress::unmarshal(input, limits)?,
            padding1: input.read_i32()?,
            padding2: input.read_i16()?,
            attribute_record_pdu_type: input.read_u8()?,
            attribute_record_protocol_version: input.read_u8()?,
            master_attribute_record_type: input.read_u32()?,
            action_code: input.read_u8()?,
            padding3: input.read_u8()?,
            number_attribute_record_set: input.read_u16()?,
        })
    }
}
