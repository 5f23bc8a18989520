//! Book form: untrusted urlencoded input, cleaning and error annotation

use std::collections::BTreeMap;

use serde::Deserialize;
use validator::Validate;

use crate::models::book::{Book, BookFields};

pub const REQUIRED: &str = "This field is required.";
pub const NOT_A_NUMBER: &str = "Enter a whole number.";
pub const TOO_LARGE: &str = "Ensure this value is less than or equal to 2147483647.";
pub const TOO_SMALL: &str = "Ensure this value is greater than or equal to -2147483648.";

/// Raw form submission. Unknown fields are dropped, missing ones are empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pages: String,
}

/// Field-level error messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<validator::ValidationErrors> for FormErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = FormErrors::default();
        for (field, list) in errors.field_errors() {
            for error in list {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", error.code));
                out.add(&field, message);
            }
        }
        out
    }
}

impl BookForm {
    /// Pre-populate from an existing book
    pub fn from_book(book: &Book) -> Self {
        Self {
            name: book.name.clone(),
            pages: book.pages.to_string(),
        }
    }

    /// Coerce and validate into storable fields
    pub fn clean(&self) -> Result<BookFields, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", REQUIRED);
        }

        let pages = self.pages.trim();
        let pages = if pages.is_empty() {
            errors.add("pages", REQUIRED);
            None
        } else {
            match pages.parse::<i64>().map(i32::try_from) {
                Ok(Ok(n)) => Some(n),
                Ok(Err(_)) => {
                    let message = if pages.starts_with('-') { TOO_SMALL } else { TOO_LARGE };
                    errors.add("pages", message);
                    None
                }
                Err(_) => {
                    errors.add("pages", NOT_A_NUMBER);
                    None
                }
            }
        };

        let fields = match pages {
            Some(pages) if errors.is_empty() => BookFields {
                name: name.to_string(),
                pages,
            },
            _ => return Err(errors),
        };

        fields.validate()?;
        Ok(fields)
    }
}

/// Where a form page stands: shown fresh, or shown again after a rejected submission
#[derive(Debug, Clone)]
pub enum FormState {
    AwaitingInput(BookForm),
    Submitted { form: BookForm, errors: FormErrors },
}

impl FormState {
    pub fn form(&self) -> &BookForm {
        match self {
            FormState::AwaitingInput(form) => form,
            FormState::Submitted { form, .. } => form,
        }
    }

    pub fn errors(&self) -> Option<&FormErrors> {
        match self {
            FormState::AwaitingInput(_) => None,
            FormState::Submitted { errors, .. } => Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, pages: &str) -> BookForm {
        BookForm {
            name: name.to_string(),
            pages: pages.to_string(),
        }
    }

    #[test]
    fn test_clean_valid() {
        let fields = form("  Catch 22 ", " 300").clean().unwrap();
        assert_eq!(fields.name, "Catch 22");
        assert_eq!(fields.pages, 300);
    }

    #[test]
    fn test_clean_missing_fields() {
        let errors = BookForm::default().clean().unwrap_err();
        assert_eq!(errors.field("name"), [REQUIRED.to_string()]);
        assert_eq!(errors.field("pages"), [REQUIRED.to_string()]);
    }

    #[test]
    fn test_clean_non_integer_pages() {
        for bad in ["three hundred", "12.5", "1e3"] {
            let errors = form("Dune", bad).clean().unwrap_err();
            assert_eq!(errors.field("pages"), [NOT_A_NUMBER.to_string()]);
            assert!(errors.field("name").is_empty());
        }
    }

    #[test]
    fn test_clean_pages_out_of_range() {
        let errors = form("Dune", "99999999999").clean().unwrap_err();
        assert_eq!(errors.field("pages"), [TOO_LARGE.to_string()]);

        let errors = form("Dune", "-2147483649").clean().unwrap_err();
        assert_eq!(errors.field("pages"), [TOO_SMALL.to_string()]);

        assert_eq!(form("Dune", "2147483647").clean().unwrap().pages, i32::MAX);
    }

    #[test]
    fn test_clean_name_too_long() {
        let errors = form(&"a".repeat(201), "10").clean().unwrap_err();
        assert_eq!(errors.field("name").len(), 1);
        assert!(errors.field("pages").is_empty());
    }

    #[test]
    fn test_from_book() {
        let book = Book { id: 3, name: "Emma".to_string(), pages: 474 };
        let form = BookForm::from_book(&book);
        assert_eq!(form.pages, "474");
        assert_eq!(form.clean().unwrap(), book.fields());
    }

    #[test]
    fn test_form_state() {
        let fresh = FormState::AwaitingInput(BookForm::default());
        assert!(fresh.errors().is_none());

        let bound = form("", "x");
        let errors = bound.clean().unwrap_err();
        let state = FormState::Submitted { form: bound, errors };
        assert_eq!(state.form().pages, "x");
        assert!(!state.errors().unwrap().is_empty());
    }
}
