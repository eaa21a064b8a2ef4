use clap::ValueEnum;
use fix64_core::{ArithmeticFaultKind, Fix64};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OpArg {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Two's-complement wraparound, like the operators.
    Wrap,
    /// Clamp to the representable range.
    Saturate,
}

pub struct EvalArgs {
    pub lhs: String,
    pub op: OpArg,
    pub rhs: String,
    pub policy: PolicyArg,
    pub raw: bool,
}

pub fn parse_operand(text: &str, raw: bool) -> Result<Fix64, String> {
    if raw {
        return text
            .trim()
            .parse::<i64>()
            .map(Fix64::from_raw)
            .map_err(|e| format!("E_FIX64_OPERAND '{}': {}", text, e));
    }
    text.parse::<Fix64>()
        .map_err(|e| format!("E_FIX64_OPERAND '{}': {}", text, e))
}

pub fn evaluate(lhs: Fix64, op: OpArg, rhs: Fix64, policy: PolicyArg) -> Result<Fix64, String> {
    let value = match (op, policy) {
        (OpArg::Add, PolicyArg::Wrap) => lhs + rhs,
        (OpArg::Add, PolicyArg::Saturate) => lhs.saturating_add(rhs),
        (OpArg::Sub, PolicyArg::Wrap) => lhs - rhs,
        (OpArg::Sub, PolicyArg::Saturate) => lhs.saturating_sub(rhs),
        (OpArg::Mul, PolicyArg::Wrap) => lhs * rhs,
        (OpArg::Mul, PolicyArg::Saturate) => lhs.saturating_mul(rhs),
        (OpArg::Div, PolicyArg::Wrap) => {
            if rhs.is_zero() {
                return Err(div_error(ArithmeticFaultKind::DivByZero));
            }
            lhs / rhs
        }
        (OpArg::Div, PolicyArg::Saturate) => lhs.saturating_div(rhs).map_err(div_error)?,
    };
    Ok(value)
}

fn div_error(kind: ArithmeticFaultKind) -> String {
    format!("E_FIX64_DIV {}", kind)
}

pub fn run(args: &EvalArgs) -> Result<i32, String> {
    let lhs = parse_operand(&args.lhs, args.raw)?;
    let rhs = parse_operand(&args.rhs, args.raw)?;
    tracing::debug!(lhs = lhs.raw(), rhs = rhs.raw(), op = ?args.op, policy = ?args.policy, "eval");

    let value = evaluate(lhs, args.op, rhs, args.policy)?;
    println!("raw={}", value.raw());
    println!("value={}", value);
    println!("desc={}", value.describe());
    Ok(0)
}
