//! CLI utilities

pub mod state;

use teambook_core::Index;

/// Convert a clap-validated 1-based index argument.
///
/// Callers must declare the argument with a `range(1..)` value parser,
/// which makes zero unrepresentable here.
pub fn index_from_arg(value: u64) -> Index {
    Index::from_one_based(value as usize).unwrap_or_else(|| unreachable!("clap enforces >= 1"))
}
