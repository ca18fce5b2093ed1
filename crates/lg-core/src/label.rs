use core::fmt;
use core::hash::Hash;

/// Bound satisfied by any string-like vertex identifier.
///
/// - `Clone + Eq + Hash` so labels can key maps and sets
/// - `Ord` so diagnostic output can be rendered deterministically
/// - `Debug + Display` so labels can appear in error messages
///
/// Blanket-implemented, so `String`, `&'static str`, and similar types
/// qualify without opting in.
pub trait Label: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> Label for T where T: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// Weight of a directed edge.
///
/// A stored weight is always strictly positive; zero is the "no edge /
/// delete this edge" signal and is never stored. Unsigned on purpose:
/// negative weights are unrepresentable in the library, so outer surfaces
/// that accept signed integers must validate before calling in.
pub type Weight = u32;
