use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::KitError;

/// Checks a raw value, returning the message to show when it is invalid.
pub type Validator = Rc<dyn Fn(&str) -> Option<String>>;

/// One named control registered with a [`FormState`].
#[derive(Clone)]
pub struct FieldState {
    name: String,
    value: String,
    error: Option<String>,
    validator: Option<Validator>,
}

impl FieldState {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    fn validate(&mut self) -> bool {
        self.error = self.validator.as_ref().and_then(|v| v(&self.value));
        self.error.is_none()
    }
}

impl fmt::Debug for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldState")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("error", &self.error)
            .field("validated", &self.validator.is_some())
            .finish()
    }
}

/// What happened when a form was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field validated and the callback ran.
    Submitted,
    /// Submission was blocked; lists the names of invalid fields in order.
    Invalid(Vec<String>),
}

/// Form model: ordered fields, each with an optional validator.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: Vec<FieldState>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FormState::try_field`]. A duplicate name is logged
    /// and the later declaration ignored.
    pub fn field(mut self, name: impl Into<String>, validator: Option<Validator>) -> Self {
        if let Err(err) = self.try_field(name, validator) {
            tracing::warn!(%err, "ignoring field");
        }
        self
    }

    pub fn try_field(
        &mut self,
        name: impl Into<String>,
        validator: Option<Validator>,
    ) -> Result<(), KitError> {
        let name = name.into();
        if self.fields.iter().any(|f| f.name == name) {
            return Err(KitError::duplicate_field(&name));
        }
        self.fields.push(FieldState {
            name,
            value: String::new(),
            error: None,
            validator,
        });
        Ok(())
    }

    pub fn field_state(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), KitError> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| KitError::unknown_field(name))?;
        field.value = value.into();
        Ok(())
    }

    /// Re-run one field's validator, e.g. on blur.
    pub fn validate_field(&mut self, name: &str) -> Result<bool, KitError> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| KitError::unknown_field(name))?;
        Ok(field.validate())
    }

    /// Validate every field. Returns `true` when any field has an error.
    pub fn validate(&mut self) -> bool {
        let mut has_errors = false;
        for field in &mut self.fields {
            if !field.validate() {
                has_errors = true;
            }
        }
        has_errors
    }

    pub fn values(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    /// Validate, then hand the collected values to `on_submit` if nothing
    /// failed. The callback runs at most once per call.
    pub fn submit(&mut self, on_submit: impl FnOnce(BTreeMap<String, String>)) -> SubmitOutcome {
        if self.validate() {
            let invalid: Vec<String> = self
                .fields
                .iter()
                .filter(|f| f.is_invalid())
                .map(|f| f.name.clone())
                .collect();
            tracing::debug!(?invalid, "form submission blocked");
            return SubmitOutcome::Invalid(invalid);
        }
        on_submit(self.values());
        SubmitOutcome::Submitted
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
    }
}

/// Stock validators. Each returns a [`Validator`] producing the given message.
pub mod validators {
    use std::rc::Rc;

    use validator::{ValidateEmail, ValidateLength};

    use super::Validator;

    /// Value must contain something other than whitespace.
    pub fn required(message: impl Into<String>) -> Validator {
        let message = message.into();
        Rc::new(move |value: &str| value.trim().is_empty().then(|| message.clone()))
    }

    /// At least `min` characters.
    pub fn min_length(min: usize, message: impl Into<String>) -> Validator {
        let message = message.into();
        let min = min as u64;
        Rc::new(move |value: &str| {
            (!value.validate_length(Some(min), None, None)).then(|| message.clone())
        })
    }

    /// RFC 5322 address whose domain has at least one dot.
    pub fn email(message: impl Into<String>) -> Validator {
        let message = message.into();
        Rc::new(move |value: &str| (!is_email(value)).then(|| message.clone()))
    }

    /// Parses as a number. Empty values pass; pair with [`required`].
    pub fn number(message: impl Into<String>) -> Validator {
        let message = message.into();
        Rc::new(move |value: &str| {
            let value = value.trim();
            (!value.is_empty() && value.parse::<f64>().is_err()).then(|| message.clone())
        })
    }

    /// Eight or more characters including an uppercase letter and a digit.
    pub fn password_strength(message: impl Into<String>) -> Validator {
        let message = message.into();
        Rc::new(move |value: &str| {
            let strong = value.chars().count() >= 8
                && value.chars().any(|c| c.is_ascii_uppercase())
                && value.chars().any(|c| c.is_ascii_digit());
            (!strong).then(|| message.clone())
        })
    }

    /// Run `validators` in order and report the first failure.
    pub fn all(validators: Vec<Validator>) -> Validator {
        Rc::new(move |value: &str| validators.iter().find_map(|v| v(value)))
    }

    fn is_email(value: &str) -> bool {
        if !value.validate_email() {
            return false;
        }
        // Stricter than the RFC grammar: no dotted local-part edges and no
        // single-label domains.
        let Some((local, domain)) = value.rsplit_once('@') else {
            return false;
        };
        let dotted_local = local.starts_with('.') || local.ends_with('.') || local.contains("..");
        !dotted_local && domain.contains('.')
    }
}
