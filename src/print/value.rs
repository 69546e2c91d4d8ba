//! Print Arguments
//!
//! Typed scalar values, printf arguments, and the issuing thread's identity.

use super::types::PrintType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed scalar carried as raw bits
///
/// Signed values are sign-extended into `bits`; floats hold their IEEE encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scalar {
    ty: PrintType,
    bits: u64,
}

impl Scalar {
    /// Create a scalar from a type and its raw bit pattern
    #[must_use]
    pub const fn from_bits(ty: PrintType, bits: u64) -> Self {
        Self { ty, bits }
    }

    /// Unsigned 8-bit value
    #[must_use]
    pub const fn u8(v: u8) -> Self {
        Self::from_bits(PrintType::U8, v as u64)
    }

    /// Unsigned 16-bit value
    #[must_use]
    pub const fn u16(v: u16) -> Self {
        Self::from_bits(PrintType::U16, v as u64)
    }

    /// Unsigned 32-bit value
    #[must_use]
    pub const fn u32(v: u32) -> Self {
        Self::from_bits(PrintType::U32, v as u64)
    }

    /// Unsigned 64-bit value
    #[must_use]
    pub const fn u64(v: u64) -> Self {
        Self::from_bits(PrintType::U64, v)
    }

    /// Signed 8-bit value
    #[must_use]
    pub const fn i8(v: i8) -> Self {
        Self::from_bits(PrintType::S8, v as i64 as u64)
    }

    /// Signed 16-bit value
    #[must_use]
    pub const fn i16(v: i16) -> Self {
        Self::from_bits(PrintType::S16, v as i64 as u64)
    }

    /// Signed 32-bit value
    #[must_use]
    pub const fn i32(v: i32) -> Self {
        Self::from_bits(PrintType::S32, v as i64 as u64)
    }

    /// Signed 64-bit value
    #[must_use]
    pub const fn i64(v: i64) -> Self {
        Self::from_bits(PrintType::S64, v as u64)
    }

    /// Single precision float
    #[must_use]
    pub fn f32(v: f32) -> Self {
        Self::from_bits(PrintType::F32, u64::from(v.to_bits()))
    }

    /// Double precision float
    #[must_use]
    pub fn f64(v: f64) -> Self {
        Self::from_bits(PrintType::F64, v.to_bits())
    }

    /// Device pointer
    #[must_use]
    pub const fn ptr(addr: u64) -> Self {
        Self::from_bits(PrintType::Ptr, addr)
    }

    /// Value type
    #[must_use]
    pub const fn ty(self) -> PrintType {
        self.ty
    }

    /// Raw bit pattern
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.bits
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            PrintType::F32 => write!(f, "{}", f32::from_bits(self.bits as u32)),
            PrintType::F64 => write!(f, "{}", f64::from_bits(self.bits)),
            PrintType::F16 | PrintType::BF16 => write!(f, "0x{:04x}", self.bits as u16),
            PrintType::Ptr => write!(f, "0x{:x}", self.bits),
            _ if self.ty.is_signed() => write!(f, "{}", self.bits as i64),
            _ => write!(f, "{}", self.bits),
        }
    }
}

/// One variadic printf argument
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrintArg {
    /// A typed scalar (thread id, coordinate component, element value)
    Scalar(Scalar),
    /// The interned prefix string, bound to `%s`
    Prefix(String),
}

impl PrintArg {
    /// Scalar payload, if any
    #[must_use]
    pub const fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Self::Scalar(s) => Some(*s),
            Self::Prefix(_) => None,
        }
    }
}

impl From<Scalar> for PrintArg {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl fmt::Display for PrintArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{}", s),
            Self::Prefix(p) => write!(f, "{:?}", p),
        }
    }
}

/// 3-D identity of the issuing thread (program id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ThreadIdentity {
    /// X axis
    pub x: u32,
    /// Y axis
    pub y: u32,
    /// Z axis
    pub z: u32,
}

impl ThreadIdentity {
    /// Create a thread identity
    #[must_use]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Special registers that supply each axis on the device
    #[must_use]
    pub const fn registers() -> [&'static str; 3] {
        ["%ctaid.x", "%ctaid.y", "%ctaid.z"]
    }

    /// Identity as scalars in x, y, z order
    #[must_use]
    pub const fn scalars(self) -> [Scalar; 3] {
        [Scalar::u32(self.x), Scalar::u32(self.y), Scalar::u32(self.z)]
    }
}
