//! Warfare PDUs: fire and detonation.

use std::hash::{Hash, Hasher};

use stream::{DataReader, DataWriter};

use crate::entity_info::VariableParameter;
use crate::error::DecodeResult;
use crate::geometry::{Vector3Double, Vector3Float};
use crate::header::{pdu_type, protocol_family, PduHeader};
use crate::ids::{EntityId, EventId};
use crate::limits::DecodeLimits;
use crate::logistics::MunitionDescriptor;
use crate::record::{hash_f32, list_size, read_list, Record};

/// Reports the firing of a weapon or expendable.
#[derive(Debug, Clone, PartialEq)]
pub struct FirePdu {
    pub header: PduHeader,
    pub firing_entity_id: EntityId,
    pub target_entity_id: EntityId,
    pub munition_expendible_id: EntityId,
    pub event_id: EventId,
    pub fire_mission_index: u32,
    pub location_in_world_coordinates: Vector3Double,
    pub descriptor: MunitionDescriptor,
    pub velocity: Vector3Float,
    pub range: f32,
}

impl FirePdu {
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: PduHeader::new(pdu_type::FIRE, protocol_family::WARFARE),
            firing_entity_id: EntityId::default(),
            target_entity_id: EntityId::default(),
            munition_expendible_id: EntityId::default(),
            event_id: EventId::default(),
            fire_mission_index: 0,
            location_in_world_coordinates: Vector3Double::default(),
            descriptor: MunitionDescriptor::default(),
            velocity: Vector3Float::default(),
            range: 0.0,
        }
    }

    /// Stamps the header length with the marshalled size, then marshals.
    pub fn marshal_with_length(&mut self, out: &mut DataWriter) {
        self.header.length = u16::try_from(self.marshalled_size()).unwrap_or(u16::MAX);
        self.marshal(out);
    }
}

impl Default for FirePdu {
    fn default() -> Self {
        Self::new()
    }
}

impl Record for FirePdu {
    fn marshalled_size(&self) -> usize {
        self.header.marshalled_size()
            + self.firing_entity_id.marshalled_size()
            + self.target_entity_id.marshalled_size()
            + self.munition_expendible_id.marshalled_size()
            + self.event_id.marshalled_size()
            + 4
            + self.location_in_world_coordinates.marshalled_size()
            + self.descriptor.marshalled_size()
            + self.velocity.marshalled_size()
            + 4
    }

    fn marshal(&self, out: &mut DataWriter) {
        self.header.marshal(out);
        self.firing_entity_id.marshal(out);
        self.target_entity_id.marshal(out);
        self.munition_expendible_id.marshal(out);
        self.event_id.marshal(out);
        out.write_u32(self.fire_mission_index);
        self.location_in_world_coordinates.marshal(out);
        self.descriptor.marshal(out);
        self.velocity.marshal(out);
        out.write_f32(self.range);
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            header: PduHeader::unmarshal(input, limits)?,
            firing_entity_id: EntityId::unmarshal(input, limits)?,
            target_entity_id: EntityId::unmarshal(input, limits)?,
            munition_expendible_id: EntityId::unmarshal(input, limits)?,
            event_id: EventId::unmarshal(input, limits)?,
            fire_mission_index: input.read_u32()?,
            location_in_world_coordinates: Vector3Double::unmarshal(input, limits)?,
            descriptor: MunitionDescriptor::unmarshal(input, limits)?,
            velocity: Vector3Float::unmarshal(input, limits)?,
            range: input.read_f32()?,
        })
    }
}

impl Hash for FirePdu {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.header.hash(state);
        self.firing_entity_id.hash(state);
        self.target_entity_id.hash(state);
        self.munition_expendible_id.hash(state);
        self.event_id.hash(state);
        state.write_u32(self.fire_mission_index);
        self.location_in_world_coordinates.hash(state);
        self.descriptor.hash(state);
        self.velocity.hash(state);
        hash_f32(self.range, state);
    }
}

/// Reports the detonation of a munition or expendable.
#[derive(Debug, Clone, PartialEq)]
pub struct DetonationPdu {
    pub header: PduHeader,
    pub firing_entity_id: EntityId,
    pub target_entity_id: EntityId,
    pub exploding_entity_id: EntityId,
    pub event_id: EventId,
    pub velocity: Vector3Float,
    pub location_in_world_coordinates: Vector3Double,
    pub descriptor: MunitionDescriptor,
    pub location_of_entity_coordinates: Vector3Float,
    pub detonation_result: u8,
    pub pad: u16,
    pub variable_parameters: Vec<VariableParameter>,
}

impl DetonationPdu {
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: PduHeader::new(pdu_type::DETONATION, protocol_family::WARFARE),
            firing_entity_id: EntityId::default(),
            target_entity_id: EntityId::default(),
            exploding_entity_id: EntityId::default(),
            event_id: EventId::default(),
            velocity: Vector3Float::default(),
            location_in_world_coordinates: Vector3Double::default(),
            descriptor: MunitionDescriptor::default(),
            location_of_entity_coordinates: Vector3Float::default(),
            detonation_result: 0,
            pad: 0,
            variable_parameters: Vec::new(),
        }
    }

    /// The variable parameter count written to the wire.
    #[must_use]
    pub fn number_of_variable_parameters(&self) -> u8 {
        self.variable_parameters.len() as u8
    }

    /// Stamps the header length with the marshalled size, then marshals.
    pub fn marshal_with_length(&mut self, out: &mut DataWriter) {
        self.header.length = u16::try_from(self.marshalled_size()).unwrap_or(u16::MAX);
        self.marshal(out);
    }
}

impl Default for DetonationPdu {
    fn default() -> Self {
        Self::new()
    }
}

impl Record for DetonationPdu {
    fn marshalled_size(&self) -> usize {
        self.header.marshalled_size()
            + self.firing_entity_id.marshalled_size()
            + self.target_entity_id.marshalled_size()
            + self.exploding_entity_id.marshalled_size()
            + self.event_id.marshalled_size()
            + self.velocity.marshalled_size()
            + self.location_in_world_coordinates.marshalled_size()
            + self.descriptor.marshalled_size()
            + self.location_of_entity_coordinates.marshalled_size()
            + 1
            + 1
            + 2
            + list_size(&self.variable_parameters)
    }

    fn marshal(&self, out: &mut DataWriter) {
        self.header.marshal(out);
        self.firing_entity_id.marshal(out);
        self.target_entity_id.marshal(out);
        self.exploding_entity_id.marshal(out);
        self.event_id.marshal(out);
        self.velocity.marshal(out);
        self.location_in_world_coordinates.marshal(out);
        self.descriptor.marshal(out);
        self.location_of_entity_coordinates.marshal(out);
        out.write_u8(self.detonation_result);
        out.write_u8(self.number_of_variable_parameters());
        out.write_u16(self.pad);
        for parameter in &self.variable_parameters {
            parameter.marshal(out);
        }
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        let header = PduHeader::unmarshal(input, limits)?;
        let firing_entity_id = EntityId::unmarshal(input, limits)?;
        let target_entity_id = EntityId::unmarshal(input, limits)?;
        let exploding_entity_id = EntityId::unmarshal(input, limits)?;
        let event_id = EventId::unmarshal(input, limits)?;
        let velocity = Vector3Float::unmarshal(input, limits)?;
        let location_in_world_coordinates = Vector3Double::unmarshal(input, limits)?;
        let descriptor = MunitionDescriptor::unmarshal(input, limits)?;
        let location_of_entity_coordinates = Vector3Float::unmarshal(input, limits)?;
        let detonation_result = input.read_u8()?;
        let number_of_variable_parameters = input.read_u8()? as usize;
        let pad = input.read_u16()?;
        let variable_parameters = read_list(
            number_of_variable_parameters,
            "variable_parameters",
            input,
            limits,
        )?;
        Ok(Self {
            header,
            firing_entity_id,
            target_entity_id,
            exploding_entity_id,
            event_id,
            velocity,
            location_in_world_coordinates,
            descriptor,
            location_of_entity_coordinates,
            detonation_result,
            pad,
            variable_parameters,
        })
    }
}

impl Hash for DetonationPdu {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.header.hash(state);
        self.firing_entity_id.hash(state);
        self.target_entity_id.hash(state);
        self.exploding_entity_id.hash(state);
        self.event_id.hash(state);
        self.velocity.hash(state);
        self.location_in_world_coordinates.hash(state);
        self.descriptor.hash(state);
        self.location_of_entity_coordinates.hash(state);
        state.write_u8(self.detonation_result);
        state.write_u16(self.pad);
        self.variable_parameters.hash(state);
    }
}
