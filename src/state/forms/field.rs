//! Form field value objects

/// Represents a single text field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub is_multiline: bool,
    pub is_required: bool,
}

impl FormField {
    /// Create a new required text field
    pub fn required(name: &str, label: &str, placeholder: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            is_multiline,
            is_required: true,
        }
    }

    /// Create a new optional text field
    pub fn optional(name: &str, label: &str, placeholder: &str, is_multiline: bool) -> Self {
        Self {
            is_required: false,
            ..Self::required(name, label, placeholder, is_multiline)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Insert a line break; single-line fields ignore it
    pub fn push_newline(&mut self) {
        if self.is_multiline {
            self.value.push('\n');
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Whether the value counts as filled in (non-blank)
    pub fn is_filled(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Required but left blank
    pub fn is_missing(&self) -> bool {
        self.is_required && !self.is_filled()
    }

    /// Title shown on the field border
    pub fn title(&self) -> String {
        if self.is_required {
            self.label.clone()
        } else {
            format!("{} (Optional)", self.label)
        }
    }
}
