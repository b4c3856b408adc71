//! Directed energy damage and aimpoint records.

use std::hash::{Hash, Hasher};

use stream::{DataReader, DataWriter};

use crate::error::DecodeResult;
use crate::geometry::{EulerAngles, Vector3Float};
use crate::ids::{EntityId, EventId};
use crate::limits::DecodeLimits;
use crate::record::{hash_f32, list_size, read_list, Record};

/// Beam antenna pattern for a directed energy aimpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BeamAntennaPattern {
    pub beam_direction: EulerAngles,
    pub azimuth_beamwidth: f32,
    pub reference_system: f32,
    pub padding1: i16,
    pub padding2: u8,
    /// Magnitude of the z-component of the electrical field vector.
    pub ez: f32,
    /// Magnitude of the x-component of the electrical field vector.
    pub ex: f32,
    pub phase: f32,
}

impl Record for BeamAntennaPattern {
    fn marshalled_size(&self) -> usize {
        self.beam_direction.marshalled_size() + 4 + 4 + 2 + 1 + 4 + 4 + 4
    }

    fn marshal(&self, out: &mut DataWriter) {
        self.beam_direction.marshal(out);
        out.write_f32(self.azimuth_beamwidth);
        out.write_f32(self.reference_system);
        out.write_i16(self.padding1);
        out.write_u8(self.padding2);
        out.write_f32(self.ez);
        out.write_f32(self.ex);
        out.write_f32(self.phase);
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            beam_direction: EulerAngles::unmarshal(input, limits)?,
            azimuth_beamwidth: input.read_f32()?,
            reference_system: input.read_f32()?,
            padding1: input.read_i16()?,
            padding2: input.read_u8()?,
            ez: input.read_f32()?,
            ex: input.read_f32()?,
            phase: input.read_f32()?,
        })
    }
}

impl Hash for BeamAntennaPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.beam_direction.hash(state);
        hash_f32(self.azimuth_beamwidth, state);
        hash_f32(self.reference_system, state);
        state.write_i16(self.padding1);
        state.write_u8(self.padding2);
        hash_f32(self.ez, state);
        hash_f32(self.ex, state);
        hash_f32(self.phase, state);
    }
}

/// Energy deposited on a target entity by a directed energy weapon.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectedEnergyTargetEnergyDeposition {
    pub target_entity_id: EntityId,
    pub padding: u16,
    pub peak_irradiance: f32,
}

impl Record for DirectedEnergyTargetEnergyDeposition {
    fn marshalled_size(&self) -> usize {
        self.target_entity_id.marshalled_size() + 2 + 4
    }

    fn marshal(&self, out: &mut DataWriter) {
        self.target_entity_id.marshal(out);
        out.write_u16(self.padding);
        out.write_f32(self.peak_irradiance);
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            target_entity_id: EntityId::unmarshal(input, limits)?,
            padding: input.read_u16()?,
            peak_irradiance: input.read_f32()?,
        })
    }
}

impl Hash for DirectedEnergyTargetEnergyDeposition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target_entity_id.hash(state);
        state.write_u16(self.padding);
        hash_f32(self.peak_irradiance, state);
    }
}

/// Standard variable record type for directed energy damage descriptions.
pub const DE_DAMAGE_RECORD_TYPE: u32 = 4500;

/// Damage to one component of an entity from a directed energy engagement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEnergyDamage {
    pub record_type: u32,
    pub record_length: u16,
    pub padding: u16,
    pub damage_location: Vector3Float,
    pub damage_diameter: f32,
    pub temperature: f32,
    pub component_identification: u8,
    pub component_damage_status: u8,
    pub component_visual_damage_status: u8,
    pub component_visual_smoke_color: u8,
    pub fire_event_id: EventId,
    pub padding2: u16,
}

impl Default for DirectedEnergyDamage {
    fn default() -> Self {
        Self {
            record_type: DE_DAMAGE_RECORD_TYPE,
            record_length: 0,
            padding: 0,
            damage_location: Vector3Float::default(),
            damage_diameter: 0.0,
            temperature: 0.0,
            component_identification: 0,
            component_damage_status: 0,
            component_visual_damage_status: 0,
            component_visual_smoke_color: 0,
            fire_event_id: EventId::default(),
            padding2: 0,
        }
    }
}

impl Record for DirectedEnergyDamage {
    fn marshalled_size(&self) -> usize {
        4 + 2
            + 2
            + self.damage_location.marshalled_size()
            + 4
            + 4
            + 4
            + self.fire_event_id.marshalled_size()
            + 2
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u32(self.record_type);
        out.write_u16(self.record_length);
        out.write_u16(self.padding);
        self.damage_location.marshal(out);
        out.write_f32(self.damage_diameter);
        out.write_f32(self.temperature);
        out.write_u8(self.component_identification);
        out.write_u8(self.component_damage_status);
        out.write_u8(self.component_visual_damage_status);
        out.write_u8(self.component_visual_smoke_color);
        self.fire_event_id.marshal(out);
        out.write_u16(self.padding2);
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            record_type: input.read_u32()?,
            record_length: input.read_u16()?,
            padding: input.read_u16()?,
            damage_location: Vector3Float::unmarshal(input, limits)?,
            damage_diameter: input.read_f32()?,
            temperature: input.read_f32()?,
            component_identification: input.read_u8()?,
            component_damage_status: input.read_u8()?,
            component_visual_damage_status: input.read_u8()?,
            component_visual_smoke_color: input.read_u8()?,
            fire_event_id: EventId::unmarshal(input, limits)?,
            padding2: input.read_u16()?,
        })
    }
}

impl Hash for DirectedEnergyDamage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.record_type);
        state.write_u16(self.record_length);
        state.write_u16(self.padding);
        self.damage_location.hash(state);
        hash_f32(self.damage_diameter, state);
        hash_f32(self.temperature, state);
        state.write_u8(self.component_identification);
        state.write_u8(self.component_damage_status);
        state.write_u8(self.component_visual_damage_status);
        state.write_u8(self.component_visual_smoke_color);
        self.fire_event_id.hash(state);
        state.write_u16(self.padding2);
    }
}

/// Record type for directed energy area aimpoints.
pub const DE_AREA_AIMPOINT_RECORD_TYPE: u32 = 4001;

/// A directed energy area aimpoint: beam antenna patterns and per-target
/// energy depositions.
///
/// Both u16 counts are written first in declaration order, then both list
/// bodies in the same order. The counts are derived from the lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectedEnergyAreaAimpoint {
    pub record_type: u32,
    pub record_length: u16,
    pub padding: u16,
    pub beam_antenna_patterns: Vec<BeamAntennaPattern>,
    pub target_energy_depositions: Vec<DirectedEnergyTargetEnergyDeposition>,
}

impl DirectedEnergyAreaAimpoint {
    #[must_use]
    pub fn new() -> Self {
        Self {
            record_type: DE_AREA_AIMPOINT_RECORD_TYPE,
            ..Self::default()
        }
    }

    /// The beam antenna pattern count written to the wire.
    #[must_use]
    pub fn number_of_beam_antenna_patterns(&self) -> u16 {
        self.beam_antenna_patterns.len() as u16
    }

    /// The target energy deposition count written to the wire.
    #[must_use]
    pub fn number_of_target_energy_depositions(&self) -> u16 {
        self.target_energy_depositions.len() as u16
    }
}

impl Record for DirectedEnergyAreaAimpoint {
    fn marshalled_size(&self) -> usize {
        4 + 2
            + 2
            + 2
            + 2
            + list_size(&self.beam_antenna_patterns)
            + list_size(&self.target_energy_depositions)
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u32(self.record_type);
        out.write_u16(self.record_length);
        out.write_u16(self.padding);
        out.write_u16(self.number_of_beam_antenna_patterns());
        out.write_u16(self.number_of_target_energy_depositions());
        for pattern in &self.beam_antenna_patterns {
            pattern.marshal(out);
        }
        for deposition in &self.target_energy_depositions {
            deposition.marshal(out);
        }
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        let record_type = input.read_u32()?;
        let record_length = input.read_u16()?;
        let padding = input.read_u16()?;
        let number_of_patterns = input.read_u16()? as usize;
        let number_of_depositions = input.read_u16()? as usize;
        let beam_antenna_patterns = read_list(
            number_of_patterns,
            "beam_antenna_patterns",
            input,
            limits,
        )?;
        let target_energy_depositions = read_list(
            number_of_depositions,
            "target_energy_depositions",
            input,
            limits,
        )?;
        Ok(Self {
            record_type,
            record_length,
            padding,
            beam_antenna_patterns,
            target_energy_depositions,
        })
    }
}

impl Hash for DirectedEnergyAreaAimpoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.record_type);
        state.write_u16(self.record_length);
        state.write_u16(self.padding);
        self.beam_antenna_patterns.hash(state);
        self.target_energy_depositions.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::ids::SimulationAddress;

    #[test]
    fn beam_antenna_pattern_size() {
        let pattern = BeamAntennaPattern::default();
        assert_eq!(pattern.marshalled_size(), 35);
        assert_eq!(pattern.to_bytes().len(), 35);
    }

    #[test]
    fn target_energy_deposition_roundtrip() {
        let deposition = DirectedEnergyTargetEnergyDeposition {
            target_entity_id: EntityId::new(1, 2, 3),
            padding: 0,
            peak_irradiance: 1500.0,
        };
        assert_eq!(deposition.marshalled_size(), 12);
        let decoded = DirectedEnergyTargetEnergyDeposition::from_bytes(
            &deposition.to_bytes(),
            &DecodeLimits::default(),
        )
        .unwrap();
        assert_eq!(decoded, deposition);
    }

    #[test]
    fn damage_record_default_discriminant_and_size() {
        let damage = DirectedEnergyDamage::default();
        assert_eq!(damage.record_type, 4500);
        assert_eq!(damage.marshalled_size(), 40);
    }

    #[test]
    fn damage_record_roundtrip() {
        let damage = DirectedEnergyDamage {
            record_length: 40,
            damage_location: Vector3Float::new(1.0, 2.0, 3.0),
            damage_diameter: 0.3,
            temperature: 450.0,
            component_identification: 1,
            component_damage_status: 2,
            fire_event_id: EventId::new(SimulationAddress::new(5, 6), 7),
            ..DirectedEnergyDamage::default()
        };
        let bytes = damage.to_bytes();
        assert_eq!(bytes.len(), 40);
        let decoded =
            DirectedEnergyDamage::from_bytes(&bytes, &DecodeLimits::default()).unwrap();
        assert_eq!(decoded, damage);
    }

    #[test]
    fn area_aimpoint_counts_then_bodies() {
        let mut aimpoint = DirectedEnergyAreaAimpoint::new();
        aimpoint.beam_antenna_patterns.push(BeamAntennaPattern::default());
        aimpoint
            .target_energy_depositions
            .push(DirectedEnergyTargetEnergyDeposition::default());
        aimpoint
            .target_energy_depositions
            .push(DirectedEnergyTargetEnergyDeposition::default());

        let bytes = aimpoint.to_bytes();
        // record_type(4) + record_length(2) + padding(2), then the two counts.
        assert_eq!(&bytes[8..10], &[0, 1]);
        assert_eq!(&bytes[10..12], &[0, 2]);
        // Bodies follow: one 35-byte pattern, then two 12-byte depositions.
        assert_eq!(bytes.len(), 12 + 35 + 24);
        assert_eq!(bytes.len(), aimpoint.marshalled_size());
    }

    #[test]
    fn area_aimpoint_roundtrip() {
        let mut aimpoint = DirectedEnergyAreaAimpoint::new();
        aimpoint.beam_antenna_patterns.push(BeamAntennaPattern {
            azimuth_beamwidth: 0.25,
            ez: 1.0,
            ..BeamAntennaPattern::default()
        });
        aimpoint
            .target_energy_depositions
            .push(DirectedEnergyTargetEnergyDeposition {
                target_entity_id: EntityId::new(9, 9, 9),
                padding: 0,
                peak_irradiance: 3.5,
            });
        let decoded = DirectedEnergyAreaAimpoint::from_bytes(
            &aimpoint.to_bytes(),
            &DecodeLimits::default(),
        )
        .unwrap();
        assert_eq!(decoded, aimpoint);
    }

    #[test]
    fn area_aimpoint_count_limit_enforced() {
        let mut writer = stream::DataWriter::new();
        writer.write_u32(DE_AREA_AIMPOINT_RECORD_TYPE);
        writer.write_u16(0);
        writer.write_u16(0);
        writer.write_u16(u16::MAX);
        writer.write_u16(0);
        let bytes = writer.finish();
        let err = DirectedEnergyAreaAimpoint::from_bytes(&bytes, &DecodeLimits::for_testing())
            .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::CountExceedsLimit {
                field: "beam_antenna_patterns",
                ..
            }
        ));
    }
}
