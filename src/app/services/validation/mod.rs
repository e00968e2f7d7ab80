//! Composable validation rules
//!
//! A [`Validation`] pairs a predicate with the failure reason it reports.
//! Rules compose with short-circuiting [`Validation::and`] and
//! [`Validation::or`], so a composed rule never surfaces more than one
//! reason per check.
//!
//! ## Usage
//!
//! ```rust
//! use simple_nem12::app::services::validation::Validation;
//!
//! let positive = Validation::<i64>::from_predicate(|v| *v > 0, "must be positive");
//! let even = Validation::<i64>::from_predicate(|v| v % 2 == 0, "must be even");
//! let rule = positive.and(even);
//!
//! assert!(rule.test(&4).is_valid());
//! assert_eq!(rule.test(&-3).reason(), Some("must be positive"));
//! ```

pub mod validators;


use crate::{Error, Result};
use std::fmt;

/// Outcome of evaluating a single rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { reason: String },
}

impl ValidationResult {
    pub fn ok() -> Self {
        ValidationResult::Valid
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        ValidationResult::Invalid {
            reason: reason.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Failure reason, `None` when valid
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { reason } => Some(reason),
        }
    }

    /// Convert into a crate result, raising the reason as a validation error
    pub fn into_result(self) -> Result<()> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid { reason } => Err(Error::validation(reason)),
        }
    }
}

/// A reusable rule over values of type `T`
pub struct Validation<T: ?Sized> {
    check: Box<dyn Fn(&T) -> ValidationResult>,
}

impl<T: ?Sized + 'static> Validation<T> {
    /// Build a rule that fails with `message` whenever `predicate` is false
    pub fn from_predicate<P>(predicate: P, message: impl Into<String>) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let message = message.into();
        Self {
            check: Box::new(move |value: &T| {
                if predicate(value) {
                    ValidationResult::ok()
                } else {
                    ValidationResult::fail(message.clone())
                }
            }),
        }
    }

    /// Evaluate the rule against a value
    pub fn test(&self, value: &T) -> ValidationResult {
        (self.check)(value)
    }

    /// Evaluate the rule and raise its reason as an error on failure
    pub fn check(&self, value: &T) -> Result<()> {
        self.test(value).into_result()
    }

    /// Both rules must pass. Evaluates `self` first; its failure is returned
    /// without evaluating `other`.
    pub fn and(self, other: Validation<T>) -> Self {
        Self {
            check: Box::new(move |value: &T| {
                let result = (self.check)(value);
                if result.is_valid() {
                    (other.check)(value)
                } else {
                    result
                }
            }),
        }
    }

    /// Either rule may pass. Evaluates `self` first; on failure the result of
    /// `other` is returned verbatim.
    pub fn or(self, other: Validation<T>) -> Self {
        Self {
            check: Box::new(move |value: &T| {
                let result = (self.check)(value);
                if result.is_valid() {
                    result
                } else {
                    (other.check)(value)
                }
            }),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Validation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validation").finish_non_exhaustive()
    }
}
