//! The PDU header shared by every top-level PDU.

use stream::{DataReader, DataWriter};

use crate::error::DecodeResult;
use crate::limits::DecodeLimits;
use crate::record::Record;

/// Protocol version for IEEE 1278.1-2012 (DIS 7).
pub const PROTOCOL_VERSION: u8 = 7;

/// Header size in bytes (12 total).
pub const PDU_HEADER_SIZE: usize = 1 + 1 + 1 + 1 + 4 + 2 + 2;

/// PDU type discriminants carried in [`PduHeader::pdu_type`].
pub mod pdu_type {
    pub const ENTITY_STATE: u8 = 1;
    pub const FIRE: u8 = 2;
    pub const DETONATION: u8 = 3;
    pub const COMMENT: u8 = 22;
    pub const ELECTRONIC_EMISSIONS: u8 = 23;
    pub const ATTRIBUTE: u8 = 72;
}

/// Protocol family discriminants carried in [`PduHeader::protocol_family`].
pub mod protocol_family {
    pub const ENTITY_INFORMATION: u8 = 1;
    pub const WARFARE: u8 = 2;
    pub const SIMULATION_MANAGEMENT: u8 = 5;
    pub const DISTRIBUTED_EMISSION_REGENERATION: u8 = 6;
}

/// The header preceding every PDU's own fields.
///
/// Each PDU embeds this record by value as its first field. The `length`
/// field carries the total PDU size in bytes and is stamped by the PDU's
/// `marshal_with_length`; decode stores whatever the wire provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PduHeader {
    pub protocol_version: u8,
    pub exercise_id: u8,
    pub pdu_type: u8,
    pub protocol_family: u8,
    pub timestamp: u32,
    pub length: u16,
    pub padding: i16,
}

impl PduHeader {
    /// Creates a header for the given PDU type and family.
    #[must_use]
    pub const fn new(pdu_type: u8, protocol_family: u8) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            exercise_id: 0,
            pdu_type,
            protocol_family,
            timestamp: 0,
            length: 0,
            padding: 0,
        }
    }
}

impl Record for PduHeader {
    fn marshalled_size(&self) -> usize {
        PDU_HEADER_SIZE
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u8(self.protocol_version);
        out.write_u8(self.exercise_id);
        out.write_u8(self.pdu_type);
        out.write_u8(self.protocol_family);
        out.write_u32(self.timestamp);
        out.write_u16(self.length);
        out.write_i16(self.padding);
    }

    fn unmarshal(input: &mut DataReader<'_>, _limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            protocol_version: input.read_u8()?,
            exercise_id: input.read_u8()?,
            pdu_type: input.read_u8()?,
            protocol_family: input.read_u8()?,
            timestamp: input.read_u32()?,
            length: input.read_u16()?,
            padding: input.read_i16()?,
        })
    }
}
