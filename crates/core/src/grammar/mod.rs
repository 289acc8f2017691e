/// Character classes of the postcode grammar.
pub(crate) mod classes;
/// Postcode matchers — whole-string grammar matching with backtracking.
pub mod matcher;
