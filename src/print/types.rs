//! Printable Type System
//!
//! The closed set of scalar types a device print can carry, and the display mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Printable value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrintType {
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
    /// 8-bit signed integer
    S8,
    /// 16-bit signed integer
    S16,
    /// 32-bit signed integer
    S32,
    /// 64-bit signed integer
    S64,
    /// 8-bit sign-agnostic integer
    B8,
    /// 16-bit sign-agnostic integer
    B16,
    /// 32-bit sign-agnostic integer
    B32,
    /// 64-bit sign-agnostic integer
    B64,
    /// 16-bit floating point (half precision)
    F16,
    /// 16-bit brain floating point
    BF16,
    /// 32-bit floating point (single precision)
    F32,
    /// 64-bit floating point (double precision)
    F64,
    /// Generic pointer (64-bit address)
    Ptr,
}

impl PrintType {
    /// Get size in bytes
    #[must_use]
    pub const fn size_bytes(self) -> usize {
        match self {
            Self::U8 | Self::S8 | Self::B8 => 1,
            Self::U16 | Self::S16 | Self::B16 | Self::F16 | Self::BF16 => 2,
            Self::U32 | Self::S32 | Self::B32 | Self::F32 => 4,
            Self::U64 | Self::S64 | Self::B64 | Self::F64 | Self::Ptr => 8,
        }
    }

    /// Get size in bits
    #[must_use]
    pub const fn size_bits(self) -> usize {
        self.size_bytes() * 8
    }

    /// Check if this is a floating point type
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F16 | Self::BF16 | Self::F32 | Self::F64)
    }

    /// Check if this is a signed integer type
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::S8 | Self::S16 | Self::S32 | Self::S64)
    }

    /// Check if this is an unsigned or sign-agnostic integer type
    #[must_use]
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::B8 | Self::B16 | Self::B32 | Self::B64
        )
    }

    /// Check if this is a pointer
    #[must_use]
    pub const fn is_pointer(self) -> bool {
        matches!(self, Self::Ptr)
    }

    /// Short type name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::S8 => "s8",
            Self::S16 => "s16",
            Self::S32 => "s32",
            Self::S64 => "s64",
            Self::B8 => "b8",
            Self::B16 => "b16",
            Self::B32 => "b32",
            Self::B64 => "b64",
            Self::F16 => "f16",
            Self::BF16 => "bf16",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Ptr => "ptr",
        }
    }

    /// Every printable type, in declaration order
    pub const ALL: [Self; 17] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::S8,
        Self::S16,
        Self::S32,
        Self::S64,
        Self::B8,
        Self::B16,
        Self::B32,
        Self::B64,
        Self::F16,
        Self::BF16,
        Self::F32,
        Self::F64,
        Self::Ptr,
    ];
}

impl fmt::Display for PrintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How element values are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Natural decimal rendering
    #[default]
    Decimal,
    /// Zero-padded hexadecimal of the full bit width
    Hex,
}

impl DisplayMode {
    /// Whether values print as hex
    #[must_use]
    pub const fn is_hex(self) -> bool {
        matches!(self, Self::Hex)
    }
}
