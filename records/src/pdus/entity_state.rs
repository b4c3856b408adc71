//! The entity state PDU.

use std::hash::{Hash, Hasher};

use stream::{DataReader, DataWriter};

use crate::entity_info::{DeadReckoningParameters, EntityMarking, EntityType, VariableParameter};
use crate::error::DecodeResult;
use crate::geometry::{EulerAngles, Vector3Double, Vector3Float};
use crate::header::{pdu_type, protocol_family, PduHeader};
use crate::ids::EntityId;
use crate::limits::DecodeLimits;
use crate::record::{list_size, read_list, Record};

/// Communicates an entity's state: identity, type, kinematics, appearance,
/// dead reckoning, marking, and attached variable parameters.
///
/// The variable parameter count is derived from the list; the u8 count on
/// the wire always equals `variable_parameters.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityStatePdu {
    pub header: PduHeader,
    pub entity_id: EntityId,
    pub force_id: u8,
    pub entity_type: EntityType,
    pub alternative_entity_type: EntityType,
    pub entity_linear_velocity: Vector3Float,
    pub entity_location: Vector3Double,
    pub entity_orientation: EulerAngles,
    pub entity_appearance: u32,
    pub dead_reckoning_parameters: DeadReckoningParameters,
    pub marking: EntityMarking,
    pub capabilities: u32,
    pub variable_parameters: Vec<VariableParameter>,
}

impl EntityStatePdu {
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: PduHeader::new(pdu_type::ENTITY_STATE, protocol_family::ENTITY_INFORMATION),
            entity_id: EntityId::default(),
            force_id: 0,
            entity_type: EntityType::default(),
            alternative_entity_type: EntityType::default(),
            entity_linear_velocity: Vector3Float::default(),
            entity_location: Vector3Double::default(),
            entity_orientation: EulerAngles::default(),
            entity_appearance: 0,
            dead_reckoning_parameters: DeadReckoningParameters::default(),
            marking: EntityMarking::default(),
            capabilities: 0,
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

impl Default for EntityStatePdu {
    fn default() -> Self {
        Self::new()
    }
}

impl Record for EntityStatePdu {
    fn marshalled_size(&self) -> usize {
        self.header.marshalled_size()
            + self.entity_id.marshalled_size()
            + 1
            + 1
            + self.entity_type.marshalled_size()
            + self.alternative_entity_type.marshalled_size()
            + self.entity_linear_velocity.marshalled_size()
            + self.entity_location.marshalled_size()
            + self.entity_orientation.marshalled_size()
            + 4
            + self.dead_reckoning_parameters.marshalled_size()
            + self.marking.marshalled_size()
            + 4
            + list_size(&self.variable_parameters)
    }

    fn marshal(&self, out: &mut DataWriter) {
        self.header.marshal(out);
        self.entity_id.marshal(out);
        out.write_u8(self.force_id);
        out.write_u8(self.number_of_variable_parameters());
        self.entity_type.marshal(out);
        self.alternative_entity_type.marshal(out);
        self.entity_linear_velocity.marshal(out);
        self.entity_location.marshal(out);
        self.entity_orientation.marshal(out);
        out.write_u32(self.entity_appearance);
        self.dead_reckoning_parameters.marshal(out);
        self.marking.marshal(out);
        out.write_u32(self.capabilities);
        for parameter in &self.variable_parameters {
            parameter.marshal(out);
        }
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        let header = PduHeader::unmarshal(input, limits)?;
        let entity_id = EntityId::unmarshal(input, limits)?;
        let force_id = input.read_u8()?;
        let number_of_variable_parameters = input.read_u8()? as usize;
        let entity_type = EntityType::unmarshal(input, limits)?;
        let alternative_entity_type = EntityType::unmarshal(input, limits)?;
        let entity_linear_velocity = Vector3Float::unmarshal(input, limits)?;
        let entity_location = Vector3Double::unmarshal(input, limits)?;
        let entity_orientation = EulerAngles::unmarshal(input, limits)?;
        let entity_appearance = input.read_u32()?;
        let dead_reckoning_parameters = DeadReckoningParameters::unmarshal(input, limits)?;
        let marking = EntityMarking::unmarshal(input, limits)?;
        let capabilities = input.read_u32()?;
        let variable_parameters = read_list(
            number_of_variable_parameters,
            "variable_parameters",
            input,
            limits,
        )?;
        Ok(Self {
            header,
            entity_id,
            force_id,
            entity_type,
            alternative_entity_type,
            entity_linear_velocity,
            entity_location,
            entity_orientation,
            entity_appearance,
            dead_reckoning_parameters,
            marking,
            capabilities,
            variable_parameters,
        })
    }
}

impl Hash for EntityStatePdu {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.header.hash(state);
        self.entity_id.hash(state);
        state.write_u8(self.force_id);
        self.entity_type.hash(state);
        self.alternative_entity_type.hash(state);
        self.entity_linear_velocity.hash(state);
        self.entity_location.hash(state);
        self.entity_orientation.hash(state);
        state.write_u32(self.entity_appearance);
        self.dead_reckoning_parameters.hash(state);
        self.marking.hash(state);
        state.write_u32(self.capabilities);
        self.variable_parameters.hash(state);
    }
}
