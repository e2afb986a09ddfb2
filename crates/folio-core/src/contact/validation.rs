use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ContactConfig;
use crate::{Error, Result};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Message typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
        }
    }

    /// Next field in tab order, wrapping
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    TooShort { min: usize },
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.field.label();
        match self.kind {
            FieldErrorKind::Required => write!(f, "{} is required", label),
            FieldErrorKind::TooShort { min } => {
                write!(f, "{} must be at least {} characters", label, min)
            }
            FieldErrorKind::InvalidEmail => write!(f, "Invalid email address"),
        }
    }
}

/// Every problem found in a form, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    pub fn for_field(&self, field: ContactField) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Field rules applied before anything is sent
#[derive(Debug, Clone)]
pub struct ContactRules {
    pub min_name_len: usize,
    pub min_message_len: usize,
    email: Regex,
}

impl ContactRules {
    pub fn new(min_name_len: usize, min_message_len: usize) -> Result<Self> {
        let email = Regex::new(EMAIL_PATTERN)
            .map_err(|e| Error::Config(format!("Invalid email pattern: {}", e)))?;
        Ok(Self {
            min_name_len,
            min_message_len,
            email,
        })
    }

    pub fn from_config(config: &ContactConfig) -> Result<Self> {
        Self::new(config.min_name_len, config.min_message_len)
    }

    pub fn is_valid_email(&self, email: &str) -> bool {
        self.email.is_match(email.trim())
    }

    /// Check all fields, collecting one error per failing field
    pub fn validate(&self, form: &ContactForm) -> std::result::Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        let name = form.name.trim();
        if name.is_empty() {
            errors.push(FieldError {
                field: ContactField::Name,
                kind: FieldErrorKind::Required,
            });
        } else if name.chars().count() < self.min_name_len {
            errors.push(FieldError {
                field: ContactField::Name,
                kind: FieldErrorKind::TooShort {
                    min: self.min_name_len,
                },
            });
        }

        let email = form.email.trim();
        if email.is_empty() {
            errors.push(FieldError {
                field: ContactField::Email,
                kind: FieldErrorKind::Required,
            });
        } else if !self.is_valid_email(email) {
            errors.push(FieldError {
                field: ContactField::Email,
                kind: FieldErrorKind::InvalidEmail,
            });
        }

        let message = form.message.trim();
        if message.is_empty() {
            errors.push(FieldError {
                field: ContactField::Message,
                kind: FieldErrorKind::Required,
            });
        } else if message.chars().count() < self.min_message_len {
            errors.push(FieldError {
                field: ContactField::Message,
                kind: FieldErrorKind::TooShort {
                    min: self.min_message_len,
                },
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}
