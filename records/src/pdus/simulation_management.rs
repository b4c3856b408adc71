//! Simulation management PDUs.

use stream::{DataReader, DataWriter};

use crate::datum::{FixedDatum, VariableDatum};
use crate::error::DecodeResult;
use crate::header::{pdu_type, protocol_family, PduHeader};
use crate::ids::EntityId;
use crate::limits::DecodeLimits;
use crate::record::{list_size, read_list, Record};

/// Carries arbitrary free-text messages as fixed and variable datums.
///
/// Both datum counts are written before either list body, so the two lists
/// are grouped counts-then-bodies on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentPdu {
    pub header: PduHeader,
    pub originating_entity_id: EntityId,
    pub receiving_entity_id: EntityId,
    pub fixed_datums: Vec<FixedDatum>,
    pub variable_datums: Vec<VariableDatum>,
}

impl CommentPdu {
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: PduHeader::new(pdu_type::COMMENT, protocol_family::SIMULATION_MANAGEMENT),
            originating_entity_id: EntityId::default(),
            receiving_entity_id: EntityId::default(),
            fixed_datums: Vec::new(),
            variable_datums: Vec::new(),
        }
    }

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

    /// Stamps the header length with the marshalled size, then marshals.
    pub fn marshal_with_length(&mut self, out: &mut DataWriter) {
        self.header.length = u16::try_from(self.marshalled_size()).unwrap_or(u16::MAX);
        self.marshal(out);
    }
}

impl Default for CommentPdu {
    fn default() -> Self {
        Self::new()
    }
}

impl Record for CommentPdu {
    fn marshalled_size(&self) -> usize {
        self.header.marshalled_size()
            + self.originating_entity_id.marshalled_size()
            + self.receiving_entity_id.marshalled_size()
            + 4
            + 4
            + list_size(&self.fixed_datums)
            + list_size(&self.variable_datums)
    }

    fn marshal(&self, out: &mut DataWriter) {
        self.header.marshal(out);
        self.originating_entity_id.marshal(out);
        self.receiving_entity_id.marshal(out);
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
        let header = PduHeader::unmarshal(input, limits)?;
        let originating_entity_id = EntityId::unmarshal(input, limits)?;
        let receiving_entity_id = EntityId::unmarshal(input, limits)?;
        let number_of_fixed_datums = input.read_u32()? as usize;
        let number_of_variable_datums = input.read_u32()? as usize;
        let fixed_datums = read_list(number_of_fixed_datums, "fixed_datums", input, limits)?;
        let variable_datums =
            read_list(number_of_variable_datums, "variable_datums", input, limits)?;
        Ok(Self {
            header,
            originating_entity_id,
            receiving_entity_id,
            fixed_datums,
            variable_datums,
        })
    }
}
