use proptest::collection::vec;
use proptest::prelude::*;
use records::{
    CommentPdu, DecodeLimits, EntityId, EntityMarking, EntityStatePdu, EulerAngles, FixedDatum,
    Record, RecordSpecification, RecordSpecificationElement, VariableDatum, VariableParameter,
    Vector3Double, Vector3Float,
};

fn entity_id_strategy() -> impl Strategy<Value = EntityId> {
    (any::<u16>(), any::<u16>(), any::<u16>())
        .prop_map(|(site, application, entity)| EntityId::new(site, application, entity))
}

fn vector3_float_strategy() -> impl Strategy<Value = Vector3Float> {
    (-1.0e6f32..1.0e6, -1.0e6f32..1.0e6, -1.0e6f32..1.0e6)
        .prop_map(|(x, y, z)| Vector3Float::new(x, y, z))
}

fn variable_parameter_strategy() -> impl Strategy<Value = VariableParameter> {
    (
        any::<u8>(),
        -1.0e9f64..1.0e9,
        any::<u32>(),
        any::<u16>(),
        any::<u8>(),
    )
        .prop_map(|(record_type, f1, f2, f3, f4)| VariableParameter {
            record_type,
            variable_parameter_fields1: f1,
            variable_parameter_fields2: f2,
            variable_parameter_fields3: f3,
            variable_parameter_fields4: f4,
        })
}

fn entity_state_strategy() -> impl Strategy<Value = EntityStatePdu> {
    (
        entity_id_strategy(),
        any::<u8>(),
        vector3_float_strategy(),
        (-1.0e7f64..1.0e7, -1.0e7f64..1.0e7, -1.0e7f64..1.0e7),
        any::<u32>(),
        "[A-Z0-9 -]{0,11}",
        vec(variable_parameter_strategy(), 0..4),
    )
        .prop_map(
            |(entity_id, force_id, velocity, (x, y, z), appearance, marking, parameters)| {
                let mut pdu = EntityStatePdu::new();
                pdu.entity_id = entity_id;
                pdu.force_id = force_id;
                pdu.entity_linear_velocity = velocity;
                pdu.entity_location = Vector3Double::new(x, y, z);
                pdu.entity_orientation = EulerAngles::new(0.0, 0.0, 0.0);
                pdu.entity_appearance = appearance;
                pdu.marking = EntityMarking::ascii(&marking);
                pdu.variable_parameters = parameters;
                pdu
            },
        )
}

fn comment_strategy() -> impl Strategy<Value = CommentPdu> {
    (
        entity_id_strategy(),
        entity_id_strategy(),
        vec((any::<u32>(), any::<u32>()), 0..6),
        vec((any::<u32>(), vec(any::<u8>(), 0..40)), 0..4),
    )
        .prop_map(|(originating, receiving, fixed, variable)| {
            let mut pdu = CommentPdu::new();
            pdu.originating_entity_id = originating;
            pdu.receiving_entity_id = receiving;
            pdu.fixed_datums = fixed
                .into_iter()
                .map(|(id, value)| FixedDatum::new(id, value))
                .collect();
            pdu.variable_datums = variable
                .into_iter()
                .map(|(id, payload)| VariableDatum::new(id, &payload))
                .collect();
            pdu
        })
}

proptest! {
    #[test]
    fn prop_entity_state_roundtrip(pdu in entity_state_strategy()) {
        let bytes = pdu.to_bytes();
        prop_assert_eq!(bytes.len(), pdu.marshalled_size());
        let decoded = EntityStatePdu::from_bytes(&bytes, &DecodeLimits::default()).unwrap();
        prop_assert_eq!(&decoded, &pdu);
        prop_assert_eq!(
            decoded.number_of_variable_parameters() as usize,
            pdu.variable_parameters.len()
        );
    }

    #[test]
    fn prop_comment_roundtrip(pdu in comment_strategy()) {
        let bytes = pdu.to_bytes();
        prop_assert_eq!(bytes.len(), pdu.marshalled_size());
        let decoded = CommentPdu::from_bytes(&bytes, &DecodeLimits::default()).unwrap();
        prop_assert_eq!(&decoded, &pdu);
        prop_assert_eq!(decoded.number_of_fixed_datums() as usize, pdu.fixed_datums.len());
        prop_assert_eq!(
            decoded.number_of_variable_datums() as usize,
            pdu.variable_datums.len()
        );
    }

    #[test]
    fn prop_variable_datum_payload_padded_to_eight(payload in vec(any::<u8>(), 0..64)) {
        let datum = VariableDatum::new(1, &payload);
        let bytes = datum.to_bytes();
        prop_assert_eq!(bytes.len() % 8, 0);
        prop_assert_eq!(bytes.len(), datum.marshalled_size());
        let decoded = VariableDatum::from_bytes(&bytes, &DecodeLimits::default()).unwrap();
        prop_assert_eq!(decoded, datum);
    }

    #[test]
    fn prop_record_specification_roundtrip(
        elements in vec(
            (any::<u32>(), any::<u32>(), any::<u16>(), any::<u16>(), any::<u16>()),
            0..8,
        )
    ) {
        let spec = RecordSpecification {
            record_sets: elements
                .into_iter()
                .map(|(id, serial, length, count, values)| RecordSpecificationElement {
                    record_id: id,
                    record_set_serial_number: serial,
                    record_length: length,
                    record_count: count,
                    record_values: values,
                    padding: 0,
                })
                .collect(),
        };
        let bytes = spec.to_bytes();
        prop_assert_eq!(bytes.len(), spec.marshalled_size());
        let decoded = RecordSpecification::from_bytes(&bytes, &DecodeLimits::default()).unwrap();
        prop_assert_eq!(decoded, spec);
    }

    #[test]
    fn prop_equal_pdus_hash_equal(pdu in entity_state_strategy()) {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let copy = pdu.clone();
        prop_assert_eq!(&copy, &pdu);

        let mut a = DefaultHasher::new();
        let mut b = DefaultHasher::new();
        pdu.hash(&mut a);
        copy.hash(&mut b);
        prop_assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn prop_reencoding_a_decode_is_identity(pdu in comment_strategy()) {
        let bytes = pdu.to_bytes();
        let decoded = CommentPdu::from_bytes(&bytes, &DecodeLimits::default()).unwrap();
        prop_assert_eq!(decoded.to_bytes(), bytes);
    }
}
