//! Conversion Specifier Resolution
//!
//! Maps a value type to the printf conversion text used to render it.

use super::types::PrintType;

/// Resolve the printf conversion specifier for a value of type `ty`.
///
/// - Pointers always render as `%p`.
/// - Hex renders as `0x%0<n>x` (or `0x%0<n>llx` above 32 bits), padded to the
///   type's natural digit count. `width` is ignored.
/// - Decimal renders as `%<width>` followed by `f`, `i`/`lli` or `u`/`llu`.
///
/// # Example
///
/// ```rust
/// use trueno_printf::print::{resolve, PrintType};
///
/// assert_eq!(resolve(PrintType::S64, false, None), "%lli");
/// assert_eq!(resolve(PrintType::U32, false, Some(2)), "%2u");
/// assert_eq!(resolve(PrintType::F32, true, None), "0x%08x");
/// ```
#[must_use]
pub fn resolve(ty: PrintType, hex: bool, width: Option<usize>) -> String {
    if ty.is_pointer() {
        return "%p".to_string();
    }

    let bits = ty.size_bits();
    if hex {
        let long = if bits > 32 { "ll" } else { "" };
        return format!("0x%0{}{}x", bits / 4, long);
    }

    let mut spec = String::from("%");
    if let Some(width) = width {
        spec.push_str(&width.to_string());
    }
    spec.push_str(conversion(ty));
    spec
}

fn conversion(ty: PrintType) -> &'static str {
    match ty {
        PrintType::F16 | PrintType::BF16 | PrintType::F32 | PrintType::F64 => "f",
        PrintType::S64 => "lli",
        PrintType::S8 | PrintType::S16 | PrintType::S32 => "i",
        PrintType::U64 | PrintType::B64 => "llu",
        PrintType::U8
        | PrintType::U16
        | PrintType::U32
        | PrintType::B8
        | PrintType::B16
        | PrintType::B32 => "u",
        PrintType::Ptr => "p",
    }
}
