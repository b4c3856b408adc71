//! Simulation, entity, and event identifier records.

use stream::{DataReader, DataWriter};

use crate::error::DecodeResult;
use crate::limits::DecodeLimits;
use crate::record::Record;

/// A simulation address: the site and application numbers that scope every
/// entity and event identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SimulationAddress {
    pub site: u16,
    pub application: u16,
}

impl SimulationAddress {
    #[must_use]
    pub const fn new(site: u16, application: u16) -> Self {
        Self { site, application }
    }
}

impl Record for SimulationAddress {
    fn marshalled_size(&self) -> usize {
        4
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u16(self.site);
        out.write_u16(self.application);
    }

    fn unmarshal(input: &mut DataReader<'_>, _limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            site: input.read_u16()?,
            application: input.read_u16()?,
        })
    }
}

/// The triplet that uniquely identifies an entity within an exercise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EntityId {
    pub site: u16,
    pub application: u16,
    pub entity: u16,
}

impl EntityId {
    #[must_use]
    pub const fn new(site: u16, application: u16, entity: u16) -> Self {
        Self {
            site,
            application,
            entity,
        }
    }
}

impl Record for EntityId {
    fn marshalled_size(&self) -> usize {
        6
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_u16(self.site);
        out.write_u16(self.application);
        out.write_u16(self.entity);
    }

    fn unmarshal(input: &mut DataReader<'_>, _limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            site: input.read_u16()?,
            application: input.read_u16()?,
            entity: input.read_u16()?,
        })
    }
}

/// Identifies an event originated by a simulation application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EventId {
    pub simulation_address: SimulationAddress,
    pub event_number: u16,
}

impl EventId {
    #[must_use]
    pub const fn new(simulation_address: SimulationAddress, event_number: u16) -> Self {
        Self {
            simulation_address,
            event_number,
        }
    }
}

impl Record for EventId {
    fn marshalled_size(&self) -> usize {
        self.simulation_address.marshalled_size() + 2
    }

    fn marshal(&self, out: &mut DataWriter) {
        self.simulation_address.marshal(out);
        out.write_u16(self.event_number);
    }

    fn unmarshal(input: &mut DataReader<'_>, limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            simulation_address: SimulationAddress::unmarshal(input, limits)?,
            event_number: input.read_u16()?,
        })
    }
}
