// Arithmetic helpers and the checked evaluation layer built on them.

pub mod calculator;
pub mod model;

pub use calculator::Calculator;
pub use model::{CalcOutcome, Calculation, Operation, OverflowPolicy};

use std::ops::{Add, Sub};

/// Returns `a + b` with the numeric semantics of `T`.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Returns `a - b` with the numeric semantics of `T`.
pub fn subtract<T: Sub<Output = T>>(a: T, b: T) -> T {
    a - b
}
