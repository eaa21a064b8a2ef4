use std::fmt;

/// Simulation step at which a fault happened.
pub type TickId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaultContext {
    pub tick_id: TickId,
    /// Call site label, e.g. `"physics:drag"`.
    pub location: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticFaultKind {
    DivByZero,
    /// Result does not fit the raw range.
    Overflow,
}

impl fmt::Display for ArithmeticFaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticFaultKind::DivByZero => write!(f, "division by zero"),
            ArithmeticFaultKind::Overflow => write!(f, "result out of range"),
        }
    }
}

impl std::error::Error for ArithmeticFaultKind {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    ArithmeticFault { ctx: FaultContext, kind: ArithmeticFaultKind },
}

impl Signal {
    pub fn name(&self) -> &'static str {
        match self {
            Signal::ArithmeticFault {
                kind: ArithmeticFaultKind::DivByZero,
                ..
            } => "arithmetic.div_by_zero",
            Signal::ArithmeticFault {
                kind: ArithmeticFaultKind::Overflow,
                ..
            } => "arithmetic.overflow",
        }
    }
}

pub trait SignalSink {
    fn emit(&mut self, signal: Signal);
}

#[derive(Default, Debug)]
pub struct VecSignalSink {
    pub signals: Vec<Signal>,
}

impl SignalSink for VecSignalSink {
    fn emit(&mut self, signal: Signal) {
        self.signals.push(signal);
    }
}

/// Logs each signal at warn level and keeps a count.
#[derive(Default, Debug)]
pub struct TracingSignalSink {
    emitted: u64,
}

impl TracingSignalSink {
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl SignalSink for TracingSignalSink {
    fn emit(&mut self, signal: Signal) {
        self.emitted += 1;
        match &signal {
            Signal::ArithmeticFault { ctx, kind } => {
                tracing::warn!(
                    signal = signal.name(),
                    tick_id = ctx.tick_id,
                    location = ctx.location,
                    %kind,
                    "arithmetic fault"
                );
            }
        }
    }
}
