#![no_main]

use libfuzzer_sys::fuzz_target;
use stream::DataReader;

fuzz_target!(|data: &[u8]| {
    let mut reader = DataReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of reads.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 10;
        idx += 1;

        match op {
            0 => {
                let _ = reader.read_u8();
            }
            1 => {
                let _ = reader.read_u16();
            }
            2 => {
                let _ = reader.read_u32();
            }
            3 => {
                let _ = reader.read_u64();
            }
            4 => {
                let _ = reader.read_i8();
            }
            5 => {
                let _ = reader.read_i16();
            }
            6 => {
                let _ = reader.read_i32();
            }
            7 => {
                let _ = reader.read_f32();
            }
            8 => {
                let _ = reader.read_f64();
            }
            _ => {
                let len = data[idx.saturating_sub(1)] as usize;
                let _ = reader.read_bytes(len);
            }
        }
    }
});
