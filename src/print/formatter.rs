//! Print Request Formatting
//!
//! Builds one printf line per owned element:
//!
//! ```text
//! pid (<x>, <y>, <z>) idx (<i1>, <i2>, ...)<prefix>(operand <n>) <elem>
//! ```
//!
//! The `(operand <n>) ` tag is left off when the request has a single operand.
//! Indices past the argument ceiling are replaced by `... (truncated)`.

use std::collections::HashMap;

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::config::PrintConfig;
use super::plan::{FormatId, PrintPlan};
use super::request::{Operand, PrintRequest};
use super::specifier::resolve;
use super::types::{DisplayMode, PrintType};
use super::value::{PrintArg, Scalar, ThreadIdentity};

/// Text substituted for index components beyond the argument ceiling
pub const TRUNCATION_MARKER: &str = "... (truncated)";

/// Coordinate components are printed as unsigned 32-bit values
const INDEX_TYPE: PrintType = PrintType::U32;

/// Everything that decides the text of an element's format string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatKey {
    /// Operand index (appears in the operand tag)
    pub operand: usize,
    /// Operand rank
    pub rank: usize,
    /// Number of index components printed
    pub cutoff: usize,
    /// Field width per dimension
    pub dim_widths: Vec<usize>,
    /// Element value type
    pub value_ty: PrintType,
    /// Element display mode
    pub display: DisplayMode,
}

impl FormatKey {
    /// Whether the index section ends in the truncation marker
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.rank > self.cutoff
    }
}

/// Per-request format string cache
#[derive(Debug, Default)]
pub struct FormatCache {
    entries: HashMap<FormatKey, FormatId>,
}

impl FormatCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `key`, registering the text from `build` in `plan` on first use
    pub fn intern(
        &mut self,
        key: FormatKey,
        plan: &mut PrintPlan,
        build: impl FnOnce(&FormatKey) -> String,
    ) -> FormatId {
        if let Some(&id) = self.entries.get(&key) {
            return id;
        }
        let text = build(&key);
        #[cfg(feature = "tracing")]
        tracing::trace!(operand = key.operand, format = %text, "interned print format");
        let id = plan.push_format(text);
        self.entries.insert(key, id);
        id
    }
}

/// Turns print requests into printf emission plans
///
/// Formatting is a pure function of the request, the thread identity and the
/// configuration, so one formatter can be shared by any number of threads.
///
/// # Example
///
/// ```rust
/// use trueno_printf::print::{PrintFormatter, PrintRequest, ThreadIdentity};
///
/// let plan = PrintFormatter::default().format(&PrintRequest::new(" hello"), ThreadIdentity::new(1, 2, 3));
/// assert_eq!(plan.formats()[0], "pid (%u, %u, %u) %s");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintFormatter {
    config: PrintConfig,
}

impl PrintFormatter {
    /// Create a formatter with the given configuration
    #[must_use]
    pub const fn new(config: PrintConfig) -> Self {
        Self { config }
    }

    /// Formatter configuration
    #[must_use]
    pub const fn config(&self) -> PrintConfig {
        self.config
    }

    /// Format a request for the thread `pid`.
    ///
    /// # Panics
    ///
    /// Panics if an element's coordinate length differs from its operand's rank,
    /// or if a scalar operand owns more than one element. Both indicate a broken
    /// ownership supplier; use [`PrintRequest::validate`] to check ahead of time.
    #[cfg_attr(feature = "tracing", instrument(skip(self, request), fields(operands = request.operands.len())))]
    #[must_use]
    pub fn format(&self, request: &PrintRequest, pid: ThreadIdentity) -> PrintPlan {
        let mut plan = PrintPlan::new();
        let prefix = PrintArg::Prefix(request.prefix.clone());

        if request.operands.is_empty() {
            let format = plan.push_format(format!("{} %s", pid_section(pid)));
            let mut args = pid_args(pid);
            args.push(prefix);
            plan.push_emission(format, args);
            return plan;
        }

        let mut cache = FormatCache::new();
        for operand in &request.operands {
            self.format_operand(request, operand, pid, &prefix, &mut cache, &mut plan);
        }
        plan
    }

    fn format_operand(
        &self,
        request: &PrintRequest,
        operand: &Operand,
        pid: ThreadIdentity,
        prefix: &PrintArg,
        cache: &mut FormatCache,
        plan: &mut PrintPlan,
    ) {
        if operand.elements.is_empty() {
            return;
        }
        assert!(
            !operand.is_scalar() || operand.elements.len() == 1,
            "scalar operand {} owns {} elements",
            operand.index,
            operand.elements.len()
        );

        let rank = operand.rank();
        let cutoff = rank.min(self.config.max_allowed_rank());
        let dim_widths = operand.dim_widths();
        let multi_operand = request.is_multi_operand();

        for elem in &operand.elements {
            assert_eq!(
                elem.coordinate.len(),
                rank,
                "operand {} coordinate does not match shape {:?}",
                operand.index,
                operand.shape
            );

            let key = FormatKey {
                operand: operand.index,
                rank,
                cutoff,
                dim_widths: dim_widths.clone(),
                value_ty: elem.value.ty(),
                display: request.display,
            };
            let format = cache.intern(key, plan, |key| element_format(key, pid, multi_operand));

            let mut args = pid_args(pid);
            args.extend(
                elem.coordinate[..cutoff]
                    .iter()
                    .map(|&i| PrintArg::Scalar(Scalar::u32(i))),
            );
            args.push(prefix.clone());
            args.push(PrintArg::Scalar(elem.value));
            debug_assert!(args.len() <= self.config.max_args());

            plan.push_emission(format, args);
        }
    }
}

fn pid_args(pid: ThreadIdentity) -> Vec<PrintArg> {
    pid.scalars().into_iter().map(PrintArg::Scalar).collect()
}

// The max pid is unknown at format time, so pid fields are not padded.
fn pid_section(pid: ThreadIdentity) -> String {
    let specs: Vec<String> = pid
        .scalars()
        .iter()
        .map(|s| resolve(s.ty(), false, None))
        .collect();
    format!("pid ({})", specs.join(", "))
}

fn element_format(key: &FormatKey, pid: ThreadIdentity, multi_operand: bool) -> String {
    let mut out = pid_section(pid);

    let mut index: Vec<String> = key.dim_widths[..key.cutoff]
        .iter()
        .map(|&width| resolve(INDEX_TYPE, false, Some(width)))
        .collect();
    if key.is_truncated() {
        index.push(TRUNCATION_MARKER.to_string());
    }
    out.push_str(&format!(" idx ({})", index.join(", ")));

    out.push_str("%s");

    if multi_operand {
        out.push_str(&format!("(operand {}) ", key.operand));
    }

    out.push_str(&resolve(key.value_ty, key.display.is_hex(), None));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::print::request::Element;

    fn pid() -> ThreadIdentity {
        ThreadIdentity::new(1, 2, 3)
    }

    fn matrix(index: usize, coords: &[[u32; 2]]) -> Operand {
        let elements = coords
            .iter()
            .enumerate()
            .map(|(i, c)| Element::new(Scalar::f32(i as f32), c.to_vec()))
            .collect();
        Operand::new(index, vec![4, 4], elements)
    }

    fn deep(rank: usize) -> Operand {
        let coord: Vec<u32> = (0..rank as u32).collect();
        Operand::new(0, vec![2; rank], vec![Element::new(Scalar::i32(-7), coord)])
    }

    #[test]
    fn test_no_operands() {
        let plan = PrintFormatter::default().format(&PrintRequest::new("hello"), pid());

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.formats(), ["pid (%u, %u, %u) %s"]);
        assert_eq!(
            plan.emissions()[0].args,
            vec![
                PrintArg::Scalar(Scalar::u32(1)),
                PrintArg::Scalar(Scalar::u32(2)),
                PrintArg::Scalar(Scalar::u32(3)),
                PrintArg::Prefix("hello".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_operand_line() {
        let req = PrintRequest::new(" x: ").operand(matrix(0, &[[1, 2]]));
        let plan = PrintFormatter::default().format(&req, pid());

        assert_eq!(plan.formats(), ["pid (%u, %u, %u) idx (%1u, %1u)%s%f"]);
        assert_eq!(
            plan.emissions()[0].args,
            vec![
                PrintArg::Scalar(Scalar::u32(1)),
                PrintArg::Scalar(Scalar::u32(2)),
                PrintArg::Scalar(Scalar::u32(3)),
                PrintArg::Scalar(Scalar::u32(1)),
                PrintArg::Scalar(Scalar::u32(2)),
                PrintArg::Prefix(" x: ".to_string()),
                PrintArg::Scalar(Scalar::f32(0.0)),
            ]
        );
    }

    #[test]
    fn test_elements_share_cached_format() {
        let req = PrintRequest::new(" x: ").operand(matrix(0, &[[0, 0], [1, 2]]));
        let plan = PrintFormatter::default().format(&req, pid());

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.distinct_formats(), 1);
        let [a, b] = plan.emissions() else {
            panic!("expected two emissions");
        };
        assert_eq!(a.format, b.format);
        assert_ne!(a.args, b.args);
        assert_eq!(a.args[3], PrintArg::Scalar(Scalar::u32(0)));
        assert_eq!(b.args[4], PrintArg::Scalar(Scalar::u32(2)));
    }

    #[test]
    fn test_scalar_operand() {
        let req = PrintRequest::new(" s: ").operand(Operand::scalar(0, Scalar::i64(-5)));
        let plan = PrintFormatter::default().format(&req, pid());

        assert_eq!(plan.formats(), ["pid (%u, %u, %u) idx ()%s%lli"]);
        assert_eq!(plan.emissions()[0].args.len(), 5);
    }

    #[test]
    fn test_hex_display() {
        let req = PrintRequest::new(" h: ")
            .operand(Operand::scalar(0, Scalar::u64(0xdead)))
            .hex();
        let plan = PrintFormatter::default().format(&req, pid());
        assert!(plan.formats()[0].ends_with("%s0x%016llx"));
    }

    #[test]
    fn test_multi_operand_tags() {
        let req = PrintRequest::new(" t: ")
            .operand(matrix(0, &[[0, 1]]))
            .operand(matrix(1, &[[2, 3], [3, 3]]));
        let plan = PrintFormatter::default().format(&req, pid());

        assert_eq!(plan.len(), 3);
        assert_eq!(plan.distinct_formats(), 2);
        assert!(plan.formats()[0].contains("%s(operand 0) %f"));
        assert!(plan.formats()[1].contains("%s(operand 1) %f"));
    }

    #[test]
    fn test_single_operand_has_no_tag() {
        let req = PrintRequest::new(" t: ").operand(matrix(0, &[[0, 1]]));
        let plan = PrintFormatter::default().format(&req, pid());
        assert!(!plan.formats()[0].contains("(operand"));
    }

    #[test]
    fn test_empty_operand_is_skipped() {
        let req = PrintRequest::new(" t: ")
            .operand(Operand::new(0, vec![8], Vec::new()))
            .operand(matrix(1, &[[0, 0]]));
        let plan = PrintFormatter::default().format(&req, pid());

        assert_eq!(plan.len(), 1);
        assert!(plan.formats()[0].contains("(operand 1)"));
    }

    #[test]
    fn test_truncates_at_ceiling() {
        let req = PrintRequest::new(" d: ").operand(deep(30));
        let plan = PrintFormatter::default().format(&req, pid());
        let format = &plan.formats()[0];

        let idx = format.split(" idx (").nth(1).unwrap();
        assert_eq!(idx.matches("%1u").count(), 27);
        assert!(idx.contains(", ... (truncated))%s"));

        let args = &plan.emissions()[0].args;
        assert_eq!(args.len(), 32);
        assert_eq!(args[3 + 26], PrintArg::Scalar(Scalar::u32(26)));
        assert_eq!(args[30], PrintArg::Prefix(" d: ".to_string()));
    }

    #[test]
    fn test_rank_at_ceiling_is_not_truncated() {
        let req = PrintRequest::new(" d: ").operand(deep(27));
        let plan = PrintFormatter::default().format(&req, pid());

        assert!(!plan.formats()[0].contains(TRUNCATION_MARKER));
        assert_eq!(plan.emissions()[0].args.len(), 32);
    }

    #[test]
    fn test_custom_ceiling() {
        let formatter = PrintFormatter::new(PrintConfig::new(8).unwrap());
        let req = PrintRequest::new(" d: ").operand(deep(5));
        let plan = formatter.format(&req, pid());

        assert_eq!(
            plan.formats()[0],
            "pid (%u, %u, %u) idx (%1u, %1u, %1u, ... (truncated))%s%i"
        );
        assert_eq!(plan.emissions()[0].args.len(), 8);
    }

    #[test]
    fn test_zero_rank_budget() {
        let formatter = PrintFormatter::new(PrintConfig::new(5).unwrap());
        let req = PrintRequest::new(" d: ").operand(deep(2));
        let plan = formatter.format(&req, pid());

        assert!(plan.formats()[0].contains("idx (... (truncated))"));
        assert_eq!(plan.emissions()[0].args.len(), 5);
    }

    #[test]
    fn test_unit_dimension_width() {
        let op = Operand::new(
            0,
            vec![1, 16],
            vec![Element::new(Scalar::u8(9), vec![0, 15])],
        );
        let plan = PrintFormatter::default().format(&PrintRequest::new("").operand(op), pid());
        assert!(plan.formats()[0].contains("idx (%0u, %2u)"));
    }

    #[test]
    fn test_format_key_truncation() {
        let key = FormatKey {
            operand: 0,
            rank: 30,
            cutoff: 27,
            dim_widths: vec![1; 30],
            value_ty: PrintType::F32,
            display: DisplayMode::Decimal,
        };
        assert!(key.is_truncated());
        assert!(element_format(&key, pid(), false).contains("%1u, ... (truncated))%s%f"));

        let whole = FormatKey { cutoff: 30, ..key };
        assert!(!whole.is_truncated());
        assert!(!element_format(&whole, pid(), false).contains(TRUNCATION_MARKER));
    }

    #[test]
    fn test_cache_reuses_id() {
        let mut cache = FormatCache::new();
        let mut plan = PrintPlan::new();
        let key = FormatKey {
            operand: 0,
            rank: 1,
            cutoff: 1,
            dim_widths: vec![1],
            value_ty: PrintType::U32,
            display: DisplayMode::Decimal,
        };

        let a = cache.intern(key.clone(), &mut plan, |_| "a".to_string());
        let b = cache.intern(key, &mut plan, |_| unreachable!("cached"));
        assert_eq!(a, b);
        assert_eq!(plan.distinct_formats(), 1);
    }

    #[test]
    #[should_panic(expected = "coordinate does not match shape")]
    fn test_coordinate_mismatch_panics() {
        let op = Operand::new(0, vec![4, 4], vec![Element::new(Scalar::u32(0), vec![1])]);
        let _ = PrintFormatter::default().format(&PrintRequest::new("").operand(op), pid());
    }

    #[test]
    #[should_panic(expected = "scalar operand 0 owns 2 elements")]
    fn test_multi_element_scalar_panics() {
        let op = Operand::new(
            0,
            Vec::new(),
            vec![
                Element::new(Scalar::u32(0), Vec::new()),
                Element::new(Scalar::u32(1), Vec::new()),
            ],
        );
        let _ = PrintFormatter::default().format(&PrintRequest::new("").operand(op), pid());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// No printf call ever exceeds the argument ceiling
            #[test]
            fn args_respect_ceiling(rank in 0usize..64, ceiling in 5usize..40) {
                let formatter = PrintFormatter::new(PrintConfig::new(ceiling).unwrap());
                let op = if rank == 0 { Operand::scalar(0, Scalar::u32(1)) } else { deep(rank) };
                let plan = formatter.format(&PrintRequest::new("p").operand(op), pid());

                let args = &plan.emissions()[0].args;
                prop_assert!(args.len() <= ceiling);
                prop_assert_eq!(args.len(), 5 + rank.min(ceiling - 5));

                let format = &plan.formats()[0];
                prop_assert_eq!(format.contains(TRUNCATION_MARKER), rank > ceiling - 5);
                // one specifier per argument
                prop_assert_eq!(format.matches('%').count(), args.len());
            }

            /// Formatting is deterministic
            #[test]
            fn format_is_idempotent(n in 1usize..16, x in 0u32..1024) {
                let coords: Vec<[u32; 2]> = (0..n as u32).map(|i| [i % 4, i / 4]).collect();
                let req = PrintRequest::new(" v: ").operand(matrix(0, &coords));
                let formatter = PrintFormatter::default();
                let pid = ThreadIdentity::new(x, 0, 0);
                prop_assert_eq!(formatter.format(&req, pid), formatter.format(&req, pid));
            }
        }
    }
}
