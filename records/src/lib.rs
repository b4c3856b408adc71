//! Wire-format records for IEEE 1278.1 distributed interactive simulation.
//!
//! Every type in this crate is a record: a struct whose fields marshal to
//! big-endian bytes in declaration order, with no alignment or compression.
//! Records nest by value, PDUs embed their header first, and list-carrying
//! records write derived counts ahead of the list bodies.
//!
//! # Design Principles
//!
//! - **Field order is the format** - A record's wire layout is exactly its
//!   field declarations, top to bottom.
//! - **Counts are derived** - List counts on the wire always equal the list
//!   length; there is no stored count to drift out of sync.
//! - **Bounded decoding** - Wire-supplied counts and lengths are validated
//!   against [`DecodeLimits`] before any allocation.
//!
//! ```
//! use records::{DecodeLimits, EntityId, EntityStatePdu, Record};
//!
//! let mut pdu = EntityStatePdu::new();
//! pdu.entity_id = EntityId::new(1, 2, 3);
//! let bytes = pdu.to_bytes();
//! let decoded = EntityStatePdu::from_bytes(&bytes, &DecodeLimits::default()).unwrap();
//! assert_eq!(decoded, pdu);
//! ```

mod datum;
mod directed_energy;
mod emissions;
mod entity_info;
mod error;
mod geometry;
mod header;
mod ids;
mod limits;
mod logistics;
mod pdus;
mod record;
mod record_spec;

pub use datum::{DatumSpecification, FixedDatum, VariableDatum};
pub use directed_energy::{
    BeamAntennaPattern, DirectedEnergyAreaAimpoint, DirectedEnergyDamage,
    DirectedEnergyTargetEnergyDeposition, DE_AREA_AIMPOINT_RECORD_TYPE, DE_DAMAGE_RECORD_TYPE,
};
pub use emissions::{BlankingSector, EmitterSystem, BLANKING_SECTOR_RECORD_TYPE};
pub use entity_info::{
    DeadReckoningParameters, EntityMarking, EntityType, VariableParameter, MARKING_LENGTH,
};
pub use error::{DecodeError, DecodeResult};
pub use geometry::{EulerAngles, Vector3Double, Vector3Float};
pub use header::{pdu_type, protocol_family, PduHeader, PDU_HEADER_SIZE, PROTOCOL_VERSION};
pub use ids::{EntityId, EventId, SimulationAddress};
pub use limits::DecodeLimits;
pub use logistics::{
    EngineFuelReload, EntityAssociation, MunitionDescriptor, MunitionReload,
    ENTITY_ASSOCIATION_RECORD_TYPE,
};
pub use pdus::{
    AttributePdu, CommentPdu, DetonationPdu, ElectronicEmissionsPdu, EntityStatePdu, FirePdu,
};
pub use record::Record;
pub use record_spec::{RecordSpecification, RecordSpecificationElement};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = DecodeLimits::default();
        let _ = PduHeader::new(pdu_type::ENTITY_STATE, protocol_family::ENTITY_INFORMATION);
        let _ = EntityId::new(0, 0, 0);
        let _ = EventId::default();
        let _ = SimulationAddress::new(0, 0);
        let _ = Vector3Float::default();
        let _ = Vector3Double::default();
        let _ = EulerAngles::default();
        let _ = EntityType::default();
        let _ = EntityMarking::ascii("TEST");
        let _ = DeadReckoningParameters::default();
        let _ = VariableParameter::default();
        let _ = FixedDatum::new(0, 0);
        let _ = VariableDatum::new(0, &[]);
        let _ = DatumSpecification::default();
        let _ = MunitionDescriptor::default();
        let _ = MunitionReload::default();
        let _ = EngineFuelReload::default();
        let _ = EntityAssociation::default();
        let _ = EmitterSystem::default();
        let _ = BlankingSector::default();
        let _ = BeamAntennaPattern::default();
        let _ = DirectedEnergyTargetEnergyDeposition::default();
        let _ = DirectedEnergyDamage::default();
        let _ = DirectedEnergyAreaAimpoint::new();
        let _ = RecordSpecification::default();
        let _ = RecordSpecificationElement::default();
        let _ = EntityStatePdu::new();
        let _ = FirePdu::new();
        let _ = DetonationPdu::new();
        let _ = CommentPdu::new();
        let _ = AttributePdu::new();
        let _ = ElectronicEmissionsPdu::new();
        assert_eq!(PDU_HEADER_SIZE, 12);
        assert_eq!(PROTOCOL_VERSION, 7);
        assert_eq!(BLANKING_SECTOR_RECORD_TYPE, 3500);
        assert_eq!(DE_DAMAGE_RECORD_TYPE, 4500);
        assert_eq!(DE_AREA_AIMPOINT_RECORD_TYPE, 4001);
        assert_eq!(ENTITY_ASSOCIATION_RECORD_TYPE, 4);
        assert_eq!(MARKING_LENGTH, 11);
    }

    #[test]
    fn every_pdu_decodes_its_own_default_bytes() {
        let limits = DecodeLimits::default();
        assert!(EntityStatePdu::from_bytes(&EntityStatePdu::new().to_bytes(), &limits).is_ok());
        assert!(FirePdu::from_bytes(&FirePdu::new().to_bytes(), &limits).is_ok());
        assert!(DetonationPdu::from_bytes(&DetonationPdu::new().to_bytes(), &limits).is_ok());
        assert!(CommentPdu::from_bytes(&CommentPdu::new().to_bytes(), &limits).is_ok());
        assert!(AttributePdu::from_bytes(&AttributePdu::new().to_bytes(), &limits).is_ok());
        assert!(
            ElectronicEmissionsPdu::from_bytes(&ElectronicEmissionsPdu::new().to_bytes(), &limits)
                .is_ok()
        );
    }
}
