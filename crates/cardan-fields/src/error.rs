//! The arithmetic error taxonomy.

use thiserror::Error;

/// Errors signalled by the checked variants of fraction and complex
/// operations.
///
/// The panicking primary API raises the same conditions eagerly at the
/// offending call; nothing is retried, suppressed, or logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A fraction was constructed with a zero denominator.
    #[error("denominator must not be zero")]
    ZeroDenominator,

    /// The argument of a division is not invertible.
    #[error("divisor is not invertible")]
    NonInvertibleDivisor,

    /// The receiver of an inversion, argument, or polar conversion is
    /// not invertible.
    #[error("operand is not invertible")]
    NonInvertibleOperand,
}
