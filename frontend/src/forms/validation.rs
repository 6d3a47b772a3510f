use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
});

const MAX_SANITIZED_LEN: usize = 1000;

/// A selectable option of an enumerated field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    MaxLength(usize, &'static str),
    Email(&'static str),
    OneOf(&'static [Choice], &'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), &'static str> {
        match *self {
            Rule::Required(message) => {
                if value.trim().is_empty() {
                    return Err(message);
                }
            }
            // Only presence is enforced on empty values.
            _ if value.is_empty() => {}
            Rule::MinLength(min, message) => {
                if value.chars().count() < min {
                    return Err(message);
                }
            }
            Rule::MaxLength(max, message) => {
                if value.chars().count() > max {
                    return Err(message);
                }
            }
            Rule::Email(message) => {
                if !is_valid_email(value) {
                    return Err(message);
                }
            }
            Rule::OneOf(choices, message) => {
                if !choices.iter().any(|choice| choice.value == value) {
                    return Err(message);
                }
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    /// First failing rule's message, if any.
    pub fn validate(&self, value: &str) -> Option<&'static str> {
        self.rules.iter().find_map(|rule| rule.check(value).err())
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|rule| matches!(rule, Rule::Required(_)))
    }

    pub fn choices(&self) -> &'static [Choice] {
        self.rules
            .iter()
            .find_map(|rule| match rule {
                Rule::OneOf(choices, _) => Some(*choices),
                _ => None,
            })
            .unwrap_or(&[])
    }
}

/// Per-field messages for every field that failed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub BTreeMap<String, String>);

impl ValidationErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

pub fn validate_fields(
    fields: &[FieldSpec],
    values: &BTreeMap<String, String>,
) -> Result<(), ValidationErrors> {
    let errors: BTreeMap<String, String> = fields
        .iter()
        .filter_map(|field| {
            let value = values.get(field.name).map(String::as_str).unwrap_or("");
            field
                .validate(value)
                .map(|message| (field.name.to_string(), message.to_string()))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Trims, drops angle brackets and caps the length of user input before it leaves the page.
pub fn sanitize_input(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .take(MAX_SANITIZED_LEN)
        .collect()
}
