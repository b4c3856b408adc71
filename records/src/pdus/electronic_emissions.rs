//! The electronic emissions PDU.

use std::hash::{Hash, Hasher};

use stream::{DataReader, DataWriter};

use crate::emissions::EmitterSystem;
use crate::error::DecodeResult;
use crate::geometry::Vector3Float;
use crate::header::{pdu_type, protocol_family, PduHeader};
use crate::ids::{EntityId, EventId};
use crate::limits::DecodeLimits;
use crate::record::{list_size, read_list, Record};

/// Reports active electromagnetic emissions.
///
/// The systems list carries plain vectors rather than full emission-system
/// records. Deployed OpenDIS-generated bindings marshal the list with that
/// element type, so this record keeps the same shape for wire parity with
/// those peers.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectronicEmissionsPdu {
    pub header: PduHeader,
    pub emitting_entity_id: EntityId,
    pub event_id: EventId,
    pub state_update_indicator: u8,
    pub padding_for_emissions_pdu: u16,
    pub system_data_length: u8,
    pub number_of_beams: u8,
    pub emitter_system: EmitterSystem,
    pub location: Vector3Float,
    pub systems: Vec<Vector3Float>,
}

impl ElectronicEmissionsPdu {
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: PduHeader::new(
                pdu_type::ELECTRONIC_EMISSIONS,
                protocol_family::DISTRIBUTED_EMISSION_REGENERATION,
            ),
            emitting_entity_id: EntityId::default(),
            event_id: EventId::default(),
            state_update_indicator: 0,
            padding_for_emissions_pdu: 0,
            system_data_length: 0,
            number_of_beams: 0,
            emitter_system: EmitterSystem::default(),
            location: Vector3Float::default(),
            systems: Vec::new(),
        }
    }

    /// The systems count written to the wire.
    #[must_use]
    pub fn number_of_systems(&self) -> u8 {
        self.systems.len() as u8
    }

    /// Stamps the header length with the marshalled size, then marshals.
    pub fn marshal_with_length(&mut self, out: &mut DataWriter) {
        self.header.length = u16::try_from(self.marshalled_size()).unwrap_or(u16::MAX);
        self.marshal(out);
    }
}

impl Default for ElectronicEmissionsPdu {
    fn default() -> Self {
        Self::new()
    }
}

impl Record for ElectronicEmissionsPdu {
    fn marshalled_size(&self) -> usize {
        self.header.marshalled_size()
            + self.emitting_entity_id.marshalled_size()
            + self.event_id.marshalled_size()
            + 1
            + 1
            + 2
            + 1
            + 1
            + self.emitter_system.marshalled_size()
            + self.location.marshalled_size()
            + list_size(&self.systems)
    }

    fn marshal(&self, out: &mut DataWriter) {
        self.header.marshal(out);
        self.emitting_entity_id.marshal(out);
        self.event_id.marshal(out);
        out.write_u8(self.state_update_indicator);
        out.write_u8(self.number_of_systems());
        out.write_u16(self.padding_for_emissions_pdu);
        out.write_u8(self.system_data_length);
        out.write_u8(self.number_of_beams);
        self.emitter_system.marshal(out);
        self.location.marshal(out);
        for system in &self.systems {
            system.marshal(out);
        }
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        let header = PduHeader::unmarshal(input, limits)?;
        let emitting_entity_id = EntityId::unmarshal(input, limits)?;
        let event_id = EventId::unmarshal(input, limits)?;
        let state_update_indicator = input.read_u8()?;
        let number_of_systems = input.read_u8()? as usize;
        let padding_for_emissions_pdu = input.read_u16()?;
        let system_data_length = input.read_u8()?;
        let number_of_beams = input.read_u8()?;
        let emitter_system = EmitterSystem::unmarshal(input, limits)?;
        let location = Vector3Float::unmarshal(input, limits)?;
        let systems = read_list(number_of_systems, "systems", input, limits)?;
        Ok(Self {
            header,
            emitting_entity_id,
            event_id,
            state_update_indicator,
            padding_for_emissions_pdu,
            system_data_length,
            number_of_beams,
            emitter_system,
            location,
            systems,
        })
    }
}

impl Hash for ElectronicEmissionsPdu {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.header.hash(state);
        self.emitting_entity_id.hash(state);
        self.event_id.hash(state);
        state.write_u8(self.state_update_indicator);
        state.write_u16(self.padding_for_emissions_pdu);
        state.write_u8(self.system_data_length);
        state.write_u8(self.number_of_beams);
        self.emitter_system.hash(state);
        self.location.hash(state);
        self.systems.hash(state);
    }
}
