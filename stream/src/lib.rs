//! Big-endian byte stream primitives for the diswire codec.
//!
//! This crate provides [`DataWriter`] and [`DataReader`] for the fixed-width,
//! network-byte-order read/write operations the DIS wire format is built on.
//! It is designed for bounded, panic-free operation with explicit error handling.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded reads** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about PDUs or records.
//! - **Explicit errors** - All read failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use stream::{DataWriter, DataReader};
//!
//! let mut writer = DataWriter::new();
//! writer.write_u16(0x1234);
//! writer.write_f32(1.5);
//!
//! let bytes = writer.finish();
//!
//! let mut reader = DataReader::new(&bytes);
//! assert_eq!(reader.read_u16().unwrap(), 0x1234);
//! assert_eq!(reader.read_f32().unwrap(), 1.5);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{StreamError, StreamResult};
pub use reader::DataReader;
pub use writer::DataWriter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = DataWriter::new();
        let _ = DataReader::new(&[]);
        let _: StreamResult<()> = Ok(());
    }

    #[test]
    fn writer_reader_roundtrip() {
        let mut writer = DataWriter::new();
        writer.write_u8(7);
        writer.write_u64(u64::MAX);
        writer.write_i16(-300);
        let bytes = writer.finish();

        let mut reader = DataReader::new(&bytes);
        assert_eq!(reader.read_u8().unwrap(), 7);
        assert_eq!(reader.read_u64().unwrap(), u64::MAX);
        assert_eq!(reader.read_i16().unwrap(), -300);
        assert!(reader.is_empty());
    }
}
