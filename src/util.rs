/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss. Range literals use
/// them to turn evaluated bounds into integers and back.
pub mod num;
/// Text rendering of numbers and sequences.
///
/// Every value the interpreter prints goes through these helpers, so scalars
/// and sequence elements are always formatted the same way.
pub mod display;
