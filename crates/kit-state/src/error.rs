use std::fmt;

/// Categorization of kit errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KitErrorKind {
    /// A config file could not be read or parsed.
    Config,
    /// A form operation named a field the form does not declare.
    UnknownField,
    /// A form declared the same field name twice.
    DuplicateField,
    /// A select was asked to choose a value it does not offer.
    UnknownOption,
}

impl fmt::Display for KitErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KitErrorKind::Config => write!(f, "Config"),
            KitErrorKind::UnknownField => write!(f, "UnknownField"),
            KitErrorKind::DuplicateField => write!(f, "DuplicateField"),
            KitErrorKind::UnknownOption => write!(f, "UnknownOption"),
        }
    }
}

/// Structured error returned by fallible kit operations.
///
/// Rendering code never surfaces these to the user; components log them and
/// degrade to rendering nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct KitError {
    pub kind: KitErrorKind,
    pub message: String,
}

impl KitError {
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: KitErrorKind::Config,
            message: message.into(),
        }
    }

    pub fn unknown_field(name: &str) -> Self {
        Self {
            kind: KitErrorKind::UnknownField,
            message: format!("form has no field named `{name}`"),
        }
    }

    pub fn duplicate_field(name: &str) -> Self {
        Self {
            kind: KitErrorKind::DuplicateField,
            message: format!("field `{name}` is declared more than once"),
        }
    }

    pub fn unknown_option(value: &str) -> Self {
        Self {
            kind: KitErrorKind::UnknownOption,
            message: format!("select has no option with value `{value}`"),
        }
    }
}

impl fmt::Display for KitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for KitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = KitError::unknown_field("email");
        assert_eq!(err.to_string(), "UnknownField: form has no field named `email`");
    }

    #[test]
    fn constructors_set_kind() {
        assert_eq!(KitError::config("x").kind, KitErrorKind::Config);
        assert_eq!(KitError::duplicate_field("a").kind, KitErrorKind::DuplicateField);
        assert_eq!(KitError::unknown_option("b").kind, KitErrorKind::UnknownOption);
    }
}
