//! Coordinate and orientation records.

use std::hash::{Hash, Hasher};

use stream::{DataReader, DataWriter};

use crate::error::DecodeResult;
use crate::limits::DecodeLimits;
use crate::record::{hash_f32, hash_f64, Record};

/// A three-component single-precision vector (velocities, relative
/// locations, accelerations).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3Float {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3Float {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Record for Vector3Float {
    fn marshalled_size(&self) -> usize {
        12
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_f32(self.x);
        out.write_f32(self.y);
        out.write_f32(self.z);
    }

    fn unmarshal(input: &mut DataReader<'_>, _limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            x: input.read_f32()?,
            y: input.read_f32()?,
            z: input.read_f32()?,
        })
    }
}

impl Hash for Vector3Float {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.x, state);
        hash_f32(self.y, state);
        hash_f32(self.z, state);
    }
}

/// A three-component double-precision vector (world coordinates).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3Double {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3Double {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Record for Vector3Double {
    fn marshalled_size(&self) -> usize {
        24
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_f64(self.x);
        out.write_f64(self.y);
        out.write_f64(self.z);
    }

    fn unmarshal(input: &mut DataReader<'_>, _limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            x: input.read_f64()?,
            y: input.read_f64()?,
            z: input.read_f64()?,
        })
    }
}

impl Hash for Vector3Double {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.x, state);
        hash_f64(self.y, state);
        hash_f64(self.z, state);
    }
}

/// Orientation as Euler angles in radians, applied psi, theta, phi.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EulerAngles {
    pub psi: f32,
    pub theta: f32,
    pub phi: f32,
}

impl EulerAngles {
    #[must_use]
    pub const fn new(psi: f32, theta: f32, phi: f32) -> Self {
        Self { psi, theta, phi }
    }
}

impl Record for EulerAngles {
    fn marshalled_size(&self) -> usize {
        12
    }

    fn marshal(&self, out: &mut DataWriter) {
        out.write_f32(self.psi);
        out.write_f32(self.theta);
        out.write_f32(self.phi);
    }

    fn unmarshal(input: &mut DataReader<'_>, _limits: &DecodeLimits) -> DecodeResult<Self> {
        Ok(Self {
            psi: input.read_f32()?,
            theta: input.read_f32()?,
            phi: input.read_f32()?,
        })
    }
}

impl Hash for EulerAngles {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.psi, state);
        hash_f32(self.theta, state);
        hash_f32(self.phi, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn vector3_float_layout() {
        let v = Vector3Float::new(1.5, 0.0, -2.0);
        assert_eq!(v.marshalled_size(), 12);
        assert_eq!(
            v.to_bytes(),
            vec![0x3F, 0xC0, 0, 0, 0, 0, 0, 0, 0xC0, 0, 0, 0]
        );
    }

    #[test]
    fn vector3_double_roundtrip() {
        let v = Vector3Double::new(1.25e6, -3.5, 0.001);
        let decoded = Vector3Double::from_bytes(&v.to_bytes(), &DecodeLimits::default()).unwrap();
        assert_eq!(decoded, v);
        assert_eq!(decoded.marshalled_size(), 24);
    }

    #[test]
    fn euler_angles_roundtrip() {
        let angles = EulerAngles::new(0.1, -0.2, 3.14);
        let decoded = EulerAngles::from_bytes(&angles.to_bytes(), &DecodeLimits::default()).unwrap();
        assert_eq!(decoded, angles);
    }

    #[test]
    fn equal_vectors_hash_equal() {
        let a = Vector3Float::new(1.0, 2.0, 3.0);
        let b = Vector3Float::new(1.0, 2.0, 3.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn signed_zero_vectors_hash_equal() {
        let a = Vector3Double::new(0.0, 0.0, 0.0);
        let b = Vector3Double::new(-0.0, 0.0, -0.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn differing_component_changes_equality() {
        let a = EulerAngles::new(0.1, 0.2, 0.3);
        let b = EulerAngles::new(0.1, 0.2, 0.4);
        assert_ne!(a, b);
        assert_ne!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn truncated_vector_fails() {
        let bytes = [0u8; 11];
        assert!(Vector3Float::from_bytes(&bytes, &DecodeLimits::default()).is_err());
    }
}
