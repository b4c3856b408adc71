//! Byte-level writer for encoding big-endian data.

/// A big-endian writer over a growable byte buffer.
///
/// Writes are accumulated in an internal buffer and cannot fail. Call
/// [`finish`](Self::finish) to get the final byte buffer.
#[derive(Debug, Default)]
pub struct DataWriter {
    bytes: Vec<u8>,
}

impl DataWriter {
    /// Creates a new empty `DataWriter`.
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Creates a new `DataWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn bytes_written(&self) -> usize {
        self.bytes.len()
    }

    /// Writes a `u8`.
    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    /// Writes a big-endian `u16`.
    pub fn write_u16(&mut self, value: u16) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian `u32`.
    pub fn write_u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian `u64`.
    pub fn write_u64(&mut self, value: u64) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes an `i8`.
    pub fn write_i8(&mut self, value: i8) {
        self.bytes.push(value as u8);
    }

    /// Writes a big-endian `i16`.
    pub fn write_i16(&mut self, value: i16) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian `i32`.
    pub fn write_i32(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian IEEE-754 `f32`.
    pub fn write_f32(&mut self, value: f32) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian IEEE-754 `f64`.
    pub fn write_f64(&mut self, value: f64) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a raw byte slice.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        let writer = DataWriter::new();
        assert_eq!(writer.bytes_written(), 0);
        let bytes = writer.finish();
        assert!(bytes.is_empty());
    }

    #[test]
    fn write_u8() {
        let mut writer = DataWriter::new();
        writer.write_u8(0xAB);
        assert_eq!(writer.finish(), vec![0xAB]);
    }

    #[test]
    fn write_u16_big_endian() {
        let mut writer = DataWriter::new();
        writer.write_u16(0x1234);
        assert_eq!(writer.finish(), vec![0x12, 0x34]);
    }

    #[test]
    fn write_u32_big_endian() {
        let mut writer = DataWriter::new();
        writer.write_u32(0x1234_5678);
        assert_eq!(writer.finish(), vec![0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn write_u64_big_endian() {
        let mut writer = DataWriter::new();
        writer.write_u64(0x0102_0304_0506_0708);
        assert_eq!(
            writer.finish(),
            vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
        );
    }

    #[test]
    fn write_signed() {
        let mut writer = DataWriter::new();
        writer.write_i8(-1);
        writer.write_i16(-2);
        writer.write_i32(-3);
        assert_eq!(
            writer.finish(),
            vec![0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFD]
        );
    }

    #[test]
    fn write_f32_big_endian() {
        let mut writer = DataWriter::new();
        writer.write_f32(1.5);
        assert_eq!(writer.finish(), vec![0x3F, 0xC0, 0x00, 0x00]);
    }

    #[test]
    fn write_f64_big_endian() {
        let mut writer = DataWriter::new();
        writer.write_f64(1.5);
        assert_eq!(
            writer.finish(),
            vec![0x3F, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn write_bytes_appends() {
        let mut writer = DataWriter::new();
        writer.write_bytes(&[1, 2]);
        writer.write_bytes(&[3]);
        assert_eq!(writer.bytes_written(), 3);
        assert_eq!(writer.finish(), vec![1, 2, 3]);
    }

    #[test]
    fn with_capacity() {
        let writer = DataWriter::with_capacity(100);
        assert_eq!(writer.bytes_written(), 0);
        // Just verify it doesn't panic
    }

    #[test]
    fn finish_into() {
        let mut writer = DataWriter::new();
        writer.write_u8(0xAB);

        let mut buf = vec![0x00, 0x11];
        writer.finish_into(&mut buf);
        assert_eq!(buf, vec![0x00, 0x11, 0xAB]);
    }
}
