use crate::calc::model::{CalcOutcome, Calculation, Operation, OverflowPolicy};
use crate::utils::error::{CalcError, Result};

/// Evaluates operations on `i64` operands under an [`OverflowPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    policy: OverflowPolicy,
}

impl Calculator {
    pub fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn apply(&self, op: Operation, a: i64, b: i64) -> Result<i64> {
        let result = match (self.policy, op) {
            (OverflowPolicy::Checked, Operation::Add) => a.checked_add(b),
            (OverflowPolicy::Checked, Operation::Subtract) => a.checked_sub(b),
            (OverflowPolicy::Wrapping, Operation::Add) => Some(a.wrapping_add(b)),
            (OverflowPolicy::Wrapping, Operation::Subtract) => Some(a.wrapping_sub(b)),
            (OverflowPolicy::Saturating, Operation::Add) => Some(a.saturating_add(b)),
            (OverflowPolicy::Saturating, Operation::Subtract) => Some(a.saturating_sub(b)),
        };

        match result {
            Some(value) => {
                tracing::debug!("{} {} {} = {} ({:?})", a, op.symbol(), b, value, self.policy);
                Ok(value)
            }
            None => {
                tracing::warn!("⚠️ Overflow evaluating {} {} {}", a, op.symbol(), b);
                Err(CalcError::Overflow { op, a, b })
            }
        }
    }

    pub fn evaluate(&self, calc: &Calculation) -> Result<CalcOutcome> {
        let result = self.apply(calc.op, calc.a, calc.b)?;
        Ok(CalcOutcome {
            op: calc.op,
            a: calc.a,
            b: calc.b,
            result,
        })
    }

    /// Evaluates in order and stops at the first failure.
    pub fn evaluate_all(&self, calcs: &[Calculation]) -> Result<Vec<CalcOutcome>> {
        let outcomes = calcs
            .iter()
            .map(|calc| self.evaluate(calc))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Evaluated {} calculations", outcomes.len());
        Ok(outcomes)
    }
}
