/// The executor contract and argument handling shared by all functions.
pub mod core;
/// `map(sequence, i -> expr)`.
pub mod map;
/// `reduce(sequence, seed, a b -> expr)`.
pub mod reduce;
