/// Value kinds.
///
/// Defines `ValueKind`, the tag naming one of the three variants of
/// `Value`. Declared types (`int`, `bool`, `string`) are kinds, and every
/// kind has a zero value used for declarations without an initializer.
pub mod kind;

pub mod core;
