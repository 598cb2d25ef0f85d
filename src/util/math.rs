//! Numeric helpers
//!
//! Aggregates work on `f64` slices and degrade gracefully on empty input:
//! [`sum`] and [`average`] return 0, [`max`] and [`min`] return `None`.
//! [`factorial`] is the one helper that reports an error.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MathError {
    #[error("Factorial is not defined for negative numbers (got {0})")]
    NegativeFactorial(i64),

    #[error("Factorial of {0} does not fit in 128 bits")]
    FactorialOverflow(i64),
}

/// Sum of all numbers, 0 for an empty slice
pub fn sum(numbers: &[f64]) -> f64 {
    numbers.iter().sum()
}

/// Arithmetic mean, 0 for an empty slice
pub fn average(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    sum(numbers) / numbers.len() as f64
}

/// Largest number, `None` for an empty slice
pub fn max(numbers: &[f64]) -> Option<f64> {
    numbers.iter().copied().reduce(f64::max)
}

/// Smallest number, `None` for an empty slice
pub fn min(numbers: &[f64]) -> Option<f64> {
    numbers.iter().copied().reduce(f64::min)
}

pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

pub fn is_odd(n: i64) -> bool {
    n % 2 != 0
}

/// Even numbers, in their original order
pub fn filter_even(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|&n| is_even(n)).collect()
}

/// Odd numbers, in their original order
pub fn filter_odd(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|&n| is_odd(n)).collect()
}

/// Largest `n` whose factorial fits in a `u128`
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// `n!`, with `0! == 1! == 1`
///
/// # Errors
/// - [`MathError::NegativeFactorial`] when `n < 0`
/// - [`MathError::FactorialOverflow`] when the result exceeds `u128` (n > 34)
pub fn factorial(n: i64) -> Result<u128, MathError> {
    if n < 0 {
        return Err(MathError::NegativeFactorial(n));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(MathError::FactorialOverflow(n));
    }

    (2..=n as u128)
        .try_fold(1u128, |acc, k| acc.checked_mul(k))
        .ok_or(MathError::FactorialOverflow(n))
}

/// Primality by trial division over `6k ± 1` candidates
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i: i64 = 5;
    while i.checked_mul(i).is_some_and(|sq| sq <= n) {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
