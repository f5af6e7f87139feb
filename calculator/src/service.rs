//! The calculator service: a fixed set of pure numeric operations
//!
//! Every operation is a stateless delegation to a standard math primitive.
//! The only side effect is one observability record per invocation, emitted
//! before the result is computed, so failing invocations are recorded with
//! the same intent as successful ones.

use crate::error::CalcError;
use crate::observer::{InvocationObserver, TracingObserver};
use serde_json::json;
use std::sync::Arc;

/// Calculator service exposing elementary arithmetic and math functions
///
/// Operations are independent and share no mutable state; a `Calculator`
/// is cheap to clone and any invocation may run on any task concurrently
/// with any other. Operations that can fail return a tagged
/// `Result<f64, CalcError>` rather than encoding the failure in the
/// numeric slot.
#[derive(Clone)]
pub struct Calculator {
    observer: Arc<dyn InvocationObserver>,
}

impl Calculator {
    /// Create a calculator reporting invocations to `observer`
    #[must_use]
    pub fn new(observer: Arc<dyn InvocationObserver>) -> Self {
        Self { observer }
    }

    /// Add two numbers
    #[must_use]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        self.observer.record("add", &json!({ "a": a, "b": b }));
        a + b
    }

    /// Subtract `b` from `a`
    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        self.observer.record("subtract", &json!({ "a": a, "b": b }));
        a - b
    }

    /// Multiply two numbers
    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        self.observer.record("multiply", &json!({ "a": a, "b": b }));
        a * b
    }

    /// Divide `a` by `b`
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] when `b` is zero.
    #[allow(clippy::float_cmp)] // the zero divisor check is exact by contract
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.observer.record("divide", &json!({ "a": a, "b": b }));
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Square of a number
    #[must_use]
    pub fn square(&self, a: f64) -> f64 {
        self.observer.record("square", &json!({ "a": a }));
        a * a
    }

    /// Square root of a number
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidDomain`] when `a` is negative.
    pub fn square_root(&self, a: f64) -> Result<f64, CalcError> {
        self.observer.record("square_root", &json!({ "a": a }));
        if a < 0.0 {
            return Err(CalcError::InvalidDomain(
                "square root of a negative number",
            ));
        }
        Ok(a.sqrt())
    }

    /// Cube of a number
    #[must_use]
    pub fn cube(&self, a: f64) -> f64 {
        self.observer.record("cube", &json!({ "a": a }));
        a * a * a
    }

    /// Raise `base` to `exponent`
    ///
    /// The exponent may be fractional or negative, with standard real-power
    /// semantics.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidDomain`] for a negative base with a
    /// fractional exponent, where no real result exists.
    #[allow(clippy::float_cmp)] // integral-exponent check is exact
    pub fn power(&self, base: f64, exponent: f64) -> Result<f64, CalcError> {
        self.observer
            .record("power", &json!({ "base": base, "exponent": exponent }));
        if base < 0.0 && exponent.fract() != 0.0 {
            return Err(CalcError::InvalidDomain(
                "negative base with a fractional exponent",
            ));
        }
        Ok(base.powf(exponent))
    }

    /// Logarithm of `a`, natural when `base` is omitted
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidDomain`] when `a` is not positive, or
    /// when an explicit base is not positive or equals 1.
    #[allow(clippy::float_cmp)] // base-of-one check is exact
    pub fn log(&self, a: f64, base: Option<f64>) -> Result<f64, CalcError> {
        self.observer.record("log", &json!({ "a": a, "base": base }));
        if a <= 0.0 {
            return Err(CalcError::InvalidDomain(
                "logarithm of a non-positive number",
            ));
        }
        match base {
            None => Ok(a.ln()),
            Some(b) if b <= 0.0 || b == 1.0 => Err(CalcError::InvalidDomain(
                "logarithm base must be positive and not 1",
            )),
            Some(b) => Ok(a.log(b)),
        }
    }

    /// Sine of `a` (radians)
    #[must_use]
    pub fn sin(&self, a: f64) -> f64 {
        self.observer.record("sin", &json!({ "a": a }));
        a.sin()
    }

    /// Cosine of `a` (radians)
    #[must_use]
    pub fn cos(&self, a: f64) -> f64 {
        self.observer.record("cos", &json!({ "a": a }));
        a.cos()
    }

    /// Tangent of `a` (radians)
    ///
    /// Near odd multiples of π/2 the result is a very large finite value,
    /// not an error: the primitive's behavior is passed through unchanged.
    #[must_use]
    pub fn tan(&self, a: f64) -> f64 {
        self.observer.record("tan", &json!({ "a": a }));
        a.tan()
    }

    /// Factorial of a non-negative integer
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidDomain`] when `a` is negative or not
    /// integral.
    #[allow(clippy::float_cmp)] // integrality check is exact
    pub fn factorial(&self, a: f64) -> Result<f64, CalcError> {
        self.observer.record("factorial", &json!({ "a": a }));
        if a < 0.0 {
            return Err(CalcError::InvalidDomain("factorial of a negative number"));
        }
        if a.fract() != 0.0 {
            return Err(CalcError::InvalidDomain("factorial of a non-integer"));
        }
        let mut result = 1.0_f64;
        let mut factor = 2.0_f64;
        while factor <= a {
            result *= factor;
            // Saturated; further factors cannot change the outcome.
            if result.is_infinite() {
                break;
            }
            factor += 1.0;
        }
        Ok(result)
    }

    /// Absolute value of a number
    #[must_use]
    pub fn absolute_value(&self, a: f64) -> f64 {
        self.observer.record("absolute_value", &json!({ "a": a }));
        a.abs()
    }
}

impl Default for Calculator {
    /// Calculator reporting invocations through `tracing`
    fn default() -> Self {
        Self::new(Arc::new(TracingObserver))
    }
}
