use proptest::prelude::*;
use stream::{DataReader, DataWriter};

#[derive(Clone, Debug)]
enum Op {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    F32(f32),
    F64(f64),
    Bytes(Vec<u8>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::U8),
        any::<u16>().prop_map(Op::U16),
        any::<u32>().prop_map(Op::U32),
        any::<u64>().prop_map(Op::U64),
        any::<i8>().prop_map(Op::I8),
        any::<i16>().prop_map(Op::I16),
        any::<i32>().prop_map(Op::I32),
        any::<f32>().prop_map(Op::F32),
        any::<f64>().prop_map(Op::F64),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(Op::Bytes),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let mut writer = DataWriter::new();

        for op in &ops {
            match op {
                Op::U8(v) => writer.write_u8(*v),
                Op::U16(v) => writer.write_u16(*v),
                Op::U32(v) => writer.write_u32(*v),
                Op::U64(v) => writer.write_u64(*v),
                Op::I8(v) => writer.write_i8(*v),
                Op::I16(v) => writer.write_i16(*v),
                Op::I32(v) => writer.write_i32(*v),
                Op::F32(v) => writer.write_f32(*v),
                Op::F64(v) => writer.write_f64(*v),
                Op::Bytes(v) => writer.write_bytes(v),
            }
        }

        let bytes = writer.finish();
        let mut reader = DataReader::new(&bytes);

        for op in &ops {
            match op {
                Op::U8(v) => prop_assert_eq!(reader.read_u8().unwrap(), *v),
                Op::U16(v) => prop_assert_eq!(reader.read_u16().unwrap(), *v),
                Op::U32(v) => prop_assert_eq!(reader.read_u32().unwrap(), *v),
                Op::U64(v) => prop_assert_eq!(reader.read_u64().unwrap(), *v),
                Op::I8(v) => prop_assert_eq!(reader.read_i8().unwrap(), *v),
                Op::I16(v) => prop_assert_eq!(reader.read_i16().unwrap(), *v),
                Op::I32(v) => {
                    prop_assert_eq!(reader.read_i32().unwrap(), *v);
                }
                // Compare bit patterns so NaN payloads round-trip too.
                Op::F32(v) => {
                    prop_assert_eq!(reader.read_f32().unwrap().to_bits(), v.to_bits());
                }
                Op::F64(v) => {
                    prop_assert_eq!(reader.read_f64().unwrap().to_bits(), v.to_bits());
                }
                Op::Bytes(v) => prop_assert_eq!(reader.read_bytes(v.len()).unwrap(), &v[..]),
            }
        }

        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_truncated_read_fails(data in prop::collection::vec(any::<u8>(), 0..7)) {
        let mut reader = DataReader::new(&data);
        prop_assert!(reader.read_u64().is_err());
        // A failed read leaves the cursor untouched.
        prop_assert_eq!(reader.position(), 0);
    }
}
