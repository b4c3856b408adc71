//! Entity description records: type, marking, dead reckoning, and the
//! variable parameter record attached to entity state and detonation PDUs.

use std::hash::{Hash, Hasher};

use stream::{DataReader, DataWriter};

use crate::error::DecodeResult;
use crate::geometry::Vector3Float;
use crate::limits::DecodeLimits;
use crate::record::{hash_f64, Record};

/// The seven-field entity type taxonomy (kind, domain, country, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EntityType {
    pub entity_kind: u8,
    pub domain: u8,
    pub country: u16,
    pub category: u8,
    pub subcategory: u8,
    pub specific: u8,
    pub extra: u8,
}

impl Record for EntityType {
    fn marshalled_size(&self) -> usize {
        8
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u8(self.entity_kind);
        out.write_u8(self.domain);
        out.write_u16(self.country);
        out.write_u8(self.category);
        out.write_u8(self.subcategory);
        out.write_u8(self.specific);
        out.write_u8(self.extra);
    }

    fn unmarshal(input: &mut DataReader<'_>, _limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            entity_kind: input.read_u8()?,
            domain: input.read_u8()?,
            country: input.read_u16()?,
            category: input.read_u8()?,
            subcategory: input.read_u8()?,
            specific: input.read_u8()?,
            extra: input.read_u8()?,
        })
    }
}

/// Number of character bytes in an entity marking.
pub const MARKING_LENGTH: usize = 11;

/// The 11-character entity marking with its character-set discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityMarking {
    pub character_set: u8,
    pub characters: [u8; MARKING_LENGTH],
}

impl EntityMarking {
    /// Character set value for ASCII markings.
    pub const ASCII: u8 = 1;

    /// Creates an ASCII marking from `text`, truncated or zero-padded to
    /// eleven bytes.
    #[must_use]
    pub fn ascii(text: &str) -> Self {
        let mut characters = [0u8; MARKING_LENGTH];
        for (dst, src) in characters.iter_mut().zip(text.bytes()) {
            *dst = src;
        }
        Self {
            character_set: Self::ASCII,
            characters,
        }
    }
}

impl Default for EntityMarking {
    fn default() -> Self {
        Self {
            character_set: Self::ASCII,
            characters: [0; MARKING_LENGTH],
        }
    }
}

impl Record for EntityMarking {
    fn marshalled_size(&self) -> usize {
        1 + MARKING_LENGTH
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u8(self.character_set);
        out.write_bytes(&self.characters);
    }

    fn unmarshal(input: &mut DataReader<'_>, _limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            character_set: input.read_u8()?,
            characters: input.read_array::<MARKING_LENGTH>()?,
        })
    }
}

/// Dead reckoning algorithm selector plus the motion extrapolation inputs.
///
/// The fifteen "other parameters" bytes are an opaque blob whose
/// interpretation depends on the algorithm; they are carried verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Hash)]
pub struct DeadReckoningParameters {
    pub dead_reckoning_algorithm: u8,
    pub other_parameters: [u8; 15],
    pub entity_linear_acceleration: Vector3Float,
    pub entity_angular_velocity: Vector3Float,
}

impl Record for DeadReckoningParameters {
    fn marshalled_size(&self) -> usize {
        1 + 15
            + self.entity_linear_acceleration.marshalled_size()
            + self.entity_angular_velocity.marshalled_size()
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u8(self.dead_reckoning_algorithm);
        out.write_bytes(&self.other_parameters);
        self.entity_linear_acceleration.marshal(out);
        self.entity_angular_velocity.marshal(out);
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            dead_reckoning_algorithm: input.read_u8()?,
            other_parameters: input.read_array::<15>()?,
            entity_linear_acceleration: Vector3Float::unmarshal(input, limits)?,
            entity_angular_velocity: Vector3Float::unmarshal(input, limits)?,
        })
    }
}

/// The 16-byte variable parameter record.
///
/// Payload fields are opaque at this layer; their split into 8/4/2/1-byte
/// pieces mirrors the generated wire layout, with the record type selecting
/// the interpretation (articulated part, attached part, association, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VariableParameter {
    pub record_type: u8,
    pub variable_parameter_fields1: f64,
    pub variable_parameter_fields2: u32,
    pub variable_parameter_fields3: u16,
    pub variable_parameter_fields4: u8,
}

impl Record for VariableParameter {
    fn marshalled_size(&self) -> usize {
        16
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u8(self.record_type);
        out.write_f64(self.variable_parameter_fields1);
        out.write_u32(self.variable_parameter_fields2);
        out.write_u16(self.variable_parameter_fields3);
        out.write_u8(self.variable_parameter_fields4);
    }

    fn unmarshal(input: &mut DataReader<'_>, _limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            record_type: input.read_u8()?,
            variable_parameter_fields1: input.read_f64()?,
            variable_parameter_fields2: input.read_u32()?,
            variable_parameter_fields3: input.read_u16()?,
            variable_parameter_fields4: input.read_u8()?,
        })
    }
}

impl Hash for VariableParameter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.record_type);
        hash_f64(self.variable_parameter_fields1, state);
        state.write_u32(self.variable_parameter_fields2);
        state.write_u16(self.variable_parameter_fields3);
        state.write_u8(self.variable_parameter_fields4);
    }
}
