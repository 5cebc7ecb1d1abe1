mod level;
mod outcome;
mod paired;
mod registry;
mod single;

pub use level::{LevelInput, ValidationLevel};
pub use outcome::{Outcome, ReportEntry, ValidationReport};
pub use paired::PairedReadnameValidator;
pub use registry::ValidatorSet;
pub use single::{
    AlphabetValidator, CompleteReadValidator, PluslineValidator, ReadnameValidator,
};

use crate::record::FastqRead;

/// A rule applied to one read in isolation.
///
/// Implementations are pure: no I/O, no mutation, no state beyond
/// configuration fixed at construction. The code is a stable identifier
/// that downstream tooling keys off; codes are never reused or
/// renumbered, even if a validator is retired.
pub trait SingleReadValidator: Send + Sync {
    /// Stable identifier, e.g. `"S001"`.
    fn code(&self) -> &'static str;

    /// Level at which this rule becomes active.
    fn level(&self) -> ValidationLevel;

    /// One-line summary for roster output.
    fn description(&self) -> &'static str;

    fn validate(&self, read: &FastqRead) -> Outcome;
}

/// A rule applied to two reads asserted to be mates.
///
/// Kept distinct from [`SingleReadValidator`] so arity is enforced by
/// the type system: a paired rule can never be handed a lone read.
/// Codes follow the same stability contract.
pub trait PairedReadValidator: Send + Sync {
    /// Stable identifier, e.g. `"P001"`.
    fn code(&self) -> &'static str;

    /// Level at which this rule becomes active.
    fn level(&self) -> ValidationLevel;

    /// One-line summary for roster output.
    fn description(&self) -> &'static str;

    fn validate(&self, read_one: &FastqRead, read_two: &FastqRead) -> Outcome;
}
