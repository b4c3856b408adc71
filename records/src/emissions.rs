//! Emitter and emissions-related sub-records.

use std::hash::{Hash, Hasher};

use stream::{DataReader, DataWriter};

use crate::error::DecodeResult;
use crate::limits::DecodeLimits;
use crate::record::{hash_f32, Record};

/// Identifies an emitter system: name (enumerated), function, and number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmitterSystem {
    pub emitter_name: u16,
    pub function: u8,
    pub emitter_id_number: u8,
}

impl Record for EmitterSystem {
    fn marshalled_size(&self) -> usize {
        4
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u16(self.emitter_name);
        out.write_u8(self.function);
        out.write_u8(self.emitter_id_number);
    }

    fn unmarshal(input: &mut DataReader<'_>, _limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            emitter_name: input.read_u16()?,
            function: input.read_u8()?,
            emitter_id_number: input.read_u8()?,
        })
    }
}

/// Attribute record type for blanking sectors.
pub const BLANKING_SECTOR_RECORD_TYPE: u32 = 3500;

/// A persistent area within a scan volume where emitter power for a beam is
/// reduced to an insignificant value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlankingSector {
    pub record_type: u32,
    pub record_length: u16,
    pub emitter_number: u8,
    pub beam_number: u8,
    pub state_indicator: u8,
    pub left_azimuth: f32,
    pub right_azimuth: f32,
    pub lower_elevation: f32,
    pub upper_elevation: f32,
    pub residual_power: f32,
}

impl Default for BlankingSector {
    fn default() -> Self {
        Self {
            record_type: BLANKING_SECTOR_RECORD_TYPE,
            record_length: 0,
            emitter_number: 0,
            beam_number: 0,
            state_indicator: 0,
            left_azimuth: 0.0,
            right_azimuth: 0.0,
            lower_elevation: 0.0,
            upper_elevation: 0.0,
            residual_power: 0.0,
        }
    }
}

impl Record for BlankingSector {
    fn marshalled_size(&self) -> usize {
        4 + 2 + 1 + 1 + 1 + 4 + 4 + 4 + 4 + 4
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u32(self.record_type);
        out.write_u16(self.record_length);
        out.write_u8(self.emitter_number);
        out.write_u8(self.beam_number);
        out.write_u8(self.state_indicator);
        out.write_f32(self.left_azimuth);
        out.write_f32(self.right_azimuth);
        out.write_f32(self.lower_elevation);
        out.write_f32(self.upper_elevation);
        out.write_f32(self.residual_power);
    }

    fn unmarshal(input: &mut DataReader<'_>, _limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            record_type: input.read_u32()?,
            record_length: input.read_u16()?,
            emitter_number: input.read_u8()?,
            beam_number: input.read_u8()?,
            state_indicator: input.read_u8()?,
            left_azimuth: input.read_f32()?,
            right_azimuth: input.read_f32()?,
            lower_elevation: input.read_f32()?,
            upper_elevation: input.read_f32()?,
            residual_power: input.read_f32()?,
        })
    }
}

impl Hash for BlankingSector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.record_type);
        state.write_u16(self.record_length);
        state.write_u8(self.emitter_number);
        state.write_u8(self.beam_number);
        state.write_u8(self.state_indicator);
        hash_f32(self.left_azimuth, state);
        hash_f32(self.right_azimuth, state);
        hash_f32(self.lower_elevation, state);
        hash_f32(self.upper_elevation, state);
        hash_f32(self.residual_power, state);
    }
}
