#![no_main]

use libfuzzer_sys::fuzz_target;
use records::{
    AttributePdu, CommentPdu, DecodeLimits, DetonationPdu, DirectedEnergyAreaAimpoint,
    ElectronicEmissionsPdu, EntityStatePdu, FirePdu, Record, RecordSpecification, VariableDatum,
};

fuzz_target!(|data: &[u8]| {
    let limits = DecodeLimits::for_testing();

    // Every decoder must reject or accept arbitrary bytes without panicking,
    // and anything accepted must re-encode to the bytes it consumed.
    macro_rules! check {
        ($ty:ty) => {
            if let Ok(decoded) = <$ty>::from_bytes(data, &limits) {
                let bytes = decoded.to_bytes();
                assert_eq!(bytes.len(), decoded.marshalled_size());
                assert_eq!(&data[..bytes.len()], &bytes[..]);
            }
        };
    }

    check!(EntityStatePdu);
    check!(FirePdu);
    check!(DetonationPdu);
    check!(CommentPdu);
    check!(AttributePdu);
    check!(ElectronicEmissionsPdu);
    check!(RecordSpecification);
    check!(DirectedEnergyAreaAimpoint);
    check!(VariableDatum);
});
