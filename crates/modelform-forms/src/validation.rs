//! Form field validators.
//!
//! Validators run over the raw submitted string for a field. A missing
//! field validates as the empty string.

use regex::Regex;

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a raw value, returning an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;
}

/// Requires a non-empty, non-whitespace value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new validator with the default message.
    pub fn new() -> Self {
        Self {
            message: "This field is required.".to_string(),
        }
    }

    /// Creates a new validator with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }
}

/// Enforces a maximum character length.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    max: usize,
    message: String,
}

impl MaxLengthValidator {
    /// Creates a new validator for the given maximum.
    pub fn new(max: usize) -> Self {
        Self {
            max,
            message: format!("Field cannot be longer than {max} characters."),
        }
    }

    /// Returns the maximum length this validator enforces.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.chars().count() > self.max {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }
}

/// Enforces a minimum character length on non-empty values.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new validator for the given minimum.
    pub fn new(min: usize) -> Self {
        Self {
            min,
            message: format!("Field must be at least {min} characters long."),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if !value.is_empty() && value.chars().count() < self.min {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }
}

/// Enforces a numeric range on values that parse as numbers.
///
/// Values that do not parse are left for the field's own coercion check to
/// report.
#[derive(Debug, Clone)]
pub struct RangeValidator {
    min: Option<f64>,
    max: Option<f64>,
    message: String,
}

impl RangeValidator {
    /// Creates a new validator with optional bounds.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        let message = match (min, max) {
            (Some(min), Some(max)) => format!("Number must be between {min} and {max}."),
            (Some(min), None) => format!("Number must be at least {min}."),
            (None, Some(max)) => format!("Number must be at most {max}."),
            (None, None) => "Invalid number.".to_string(),
        };
        Self { min, max, message }
    }
}

impl Validator for RangeValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let Ok(num) = value.trim().parse::<f64>() else {
            return Ok(());
        };

        if self.min.is_some_and(|min| num < min) || self.max.is_some_and(|max| num > max) {
            return Err(self.message.clone());
        }

        Ok(())
    }
}

/// Validates email addresses.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new validator with the default message.
    pub fn new() -> Self {
        Self {
            message: "Invalid email address.".to_string(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let mut parts = value.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(self.message.clone());
        };

        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(self.message.clone());
        }

        Ok(())
    }
}

/// Validates values against a regex pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new validator from a pattern and message.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when the pattern does not compile.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}
