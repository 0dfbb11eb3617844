//! Normalizes Redcode load files so that the output of different assemblers
//! (pMARS, or our own dumps) can be compared line for line in tests.
//!
//! Normalization re-indents every instruction into fixed-width columns,
//! reduces operands modulo the core size, and gathers the entry point into a
//! single `ORG` line placed just above the first instruction.

pub mod error;
pub mod files;
pub mod lexer;
pub mod line;
pub mod normalize;
pub mod operand;
pub mod options;
pub mod org;

pub use error::Error;
pub use normalize::normalize;
pub use operand::normalize_operand;
pub use options::Options;
