//! Munition, reload, and entity association records.

use stream::{DataReader, DataWriter};

use crate::entity_info::EntityType;
use crate::error::DecodeResult;
use crate::ids::EntityId;
use crate::limits::DecodeLimits;
use crate::record::Record;

/// Describes the munition of a fire or detonation: type, warhead, fuse,
/// quantity, and rate of fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MunitionDescriptor {
    pub munition_type: EntityType,
    pub warhead: u16,
    pub fuse: u16,
    pub quantity: u16,
    pub rate: u16,
}

impl Record for MunitionDescriptor {
    fn marshalled_size(&self) -> usize {
        self.munition_type.marshalled_size() + 8
    }

    fn marshal(&self, out: &mut DataWriter) {
        self.munition_type.marshal(out);
        out.write_u16(self.warhead);
        out.write_u16(self.fuse);
        out.write_u16(self.quantity);
        out.write_u16(self.rate);
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            munition_type: EntityType::unmarshal(input, limits)?,
            warhead: input.read_u16()?,
            fuse: input.read_u16()?,
            quantity: input.read_u16()?,
            rate: input.read_u16()?,
        })
    }
}

/// Quantities of a munition type available for reload from a station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MunitionReload {
    pub munition_type: EntityType,
    pub station: u32,
    pub standard_quantity: u16,
    pub maximum_quantity: u16,
    pub station_name: u16,
    pub station_number: u16,
}

impl Record for MunitionReload {
    fn marshalled_size(&self) -> usize {
        self.munition_type.marshalled_size() + 4 + 2 + 2 + 2 + 2
    }

    fn marshal(&self, out: &mut DataWriter) {
        self.munition_type.marshal(out);
        out.write_u32(self.station);
        out.write_u16(self.standard_quantity);
        out.write_u16(self.maximum_quantity);
        out.write_u16(self.station_name);
        out.write_u16(self.station_number);
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            munition_type: EntityType::unmarshal(input, limits)?,
            station: input.read_u32()?,
            standard_quantity: input.read_u16()?,
            maximum_quantity: input.read_u16()?,
            station_name: input.read_u16()?,
            station_number: input.read_u16()?,
        })
    }
}

/// Fuel quantities and reload times for an engine fuel system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EngineFuelReload {
    pub standard_quantity: u32,
    pub maximum_quantity: u32,
    pub standard_quantity_reload_time: u32,
    pub maximum_quantity_reload_time: u32,
    pub fuel_measurement_units: u8,
    pub fuel_location: u8,
    pub padding: u8,
}

impl Record for EngineFuelReload {
    fn marshalled_size(&self) -> usize {
        19
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u32(self.standard_quantity);
        out.write_u32(self.maximum_quantity);
        out.write_u32(self.standard_quantity_reload_time);
        out.write_u32(self.maximum_quantity_reload_time);
        out.write_u8(self.fuel_measurement_units);
        out.write_u8(self.fuel_location);
        out.write_u8(self.padding);
    }

    fn unmarshal(input: &mut DataReader<'_>, _limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            standard_quantity: input.read_u32()?,
            maximum_quantity: input.read_u32()?,
            standard_quantity_reload_time: input.read_u32()?,
            maximum_quantity_reload_time: input.read_u32()?,
            fuel_measurement_units: input.read_u8()?,
            fuel_location: input.read_u8()?,
            padding: input.read_u8()?,
        })
    }
}

/// Variable parameter record type for entity associations.
pub const ENTITY_ASSOCIATION_RECORD_TYPE: u8 = 4;

/// Association between two entities (towing, refueling, docked, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityAssociation {
    pub record_type: u8,
    pub change_indicator: u8,
    pub association_status: u8,
    pub association_type: u8,
    pub entity_id: EntityId,
    pub own_station_location: u16,
    pub physical_connection_type: u16,
    pub group_member_type: u8,
    pub group_number: u16,
}

impl Default for EntityAssociation {
    fn default() -> Self {
        Self {
            record_type: ENTITY_ASSOCIATION_RECORD_TYPE,
            change_indicator: 0,
            association_status: 0,
            association_type: 0,
            entity_id: EntityId::default(),
            own_station_location: 0,
            physical_connection_type: 0,
            group_member_type: 0,
            group_number: 0,
        }
    }
}

impl Record for EntityAssociation {
    fn marshalled_size(&self) -> usize {
        4 + self.entity_id.marshalled_size() + 2 + 2 + 1 + 2
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u8(self.record_type);
        out.write_u8(self.change_indicator);
        out.write_u8(self.association_status);
        out.write_u8(self.association_type);
        self.entity_id.marshal(out);
        out.write_u16(self.own_station_location);
        out.write_u16(self.physical_connection_type);
        out.write_u8(self.group_member_type);
        out.write_u16(self.group_number);
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            record_type: input.read_u8()?,
            change_indicator: input.read_u8()?,
            association_status: input.read_u8()?,
            association_type: input.read_u8()?,
            entity_id: EntityId::unmarshal(input, limits)?,
            own_station_location: input.read_u16()?,
            physical_connection_type: input.read_u16()?,
            group_member_type: input.read_u8()?,
            group_number: input.read_u16()?,
        })
    }
}
