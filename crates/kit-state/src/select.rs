use crate::KitError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Result of [`SelectState::choose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectChange {
    /// The value changed; carries the new value.
    Changed(String),
    /// The option was already selected. The list still closes.
    Unchanged,
}

/// Single-choice listbox state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectState {
    options: Vec<SelectOption>,
    selected: Option<String>,
    expanded: bool,
    error: Option<String>,
}

impl SelectState {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Value for `aria-expanded` and the content's `data-state`.
    pub fn data_state(&self) -> &'static str {
        if self.expanded {
            "open"
        } else {
            "closed"
        }
    }

    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.expanded, true)
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.expanded, false)
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Select `value` and close the list.
    pub fn choose(&mut self, value: &str) -> Result<SelectChange, KitError> {
        if !self.options.iter().any(|o| o.value == value) {
            return Err(KitError::unknown_option(value));
        }
        self.expanded = false;
        if self.selected.as_deref() == Some(value) {
            return Ok(SelectChange::Unchanged);
        }
        self.selected = Some(value.to_string());
        self.error = None;
        tracing::debug!(value, "select value changed");
        Ok(SelectChange::Changed(value.to_string()))
    }

    pub fn value(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.as_deref() == Some(value)
    }

    /// Label of the selected option, if any.
    pub fn selected_label(&self) -> Option<&str> {
        let value = self.selected.as_deref()?;
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }
}
