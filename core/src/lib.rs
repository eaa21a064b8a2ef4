//! Deterministic Q40.24 fixed-point arithmetic.
//!
//! `Fix64` stores a single `i64` and produces bit-identical results on every
//! platform. Operators wrap like native integers; `saturating_*`, `checked_*`
//! and `try_div` spell out the other overflow policies at the call site.

pub mod fix64;
pub mod signals;

mod arith;
mod convert;
mod determinism;
mod format;
mod ordering;
mod sign;
mod traits;

pub use fix64::Fix64;
pub use format::ParseFix64Error;
pub use signals::{
    ArithmeticFaultKind, FaultContext, Signal, SignalSink, TickId, TracingSignalSink,
    VecSignalSink,
};

#[cfg(test)]
mod tests;
