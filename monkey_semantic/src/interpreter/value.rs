//! Contains the definition of [`Value`]

use derive_more::Display;
use enum_as_inner::EnumAsInner;

/// Represents a value produced by evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumAsInner)]
#[allow(missing_docs)]
pub enum Value {
    #[display(fmt = "{}", _0)]
    Integer(i64),
}
