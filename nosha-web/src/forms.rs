//! Field-level form validation.
//!
//! One [`FormState`] backs each form (login, the sign-up wizard, the
//! settings pages). Fields are declared up front with their rules; errors
//! only ever surface for fields the user has touched, except at submit time
//! when [`FormState::validate_all`] force-reveals everything.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// Simple `local@domain.tld` shape check, same as the backend's.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\S+@\S+\.\S+$").unwrap_or_else(|_| unreachable!("static pattern"))
});

/// A single validation rule. Rules are pure: the same value (and peer
/// values) always produce the same outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming.
    Required,
    /// At least this many characters.
    MinLength(usize),
    /// Must look like `local@domain.tld`.
    Email,
    /// Must contain a lowercase letter, an uppercase letter and a digit.
    PasswordStrength,
    /// Must equal the named peer field (confirm-password).
    Matches(&'static str),
}

impl Rule {
    fn check(&self, label: &str, value: &str, values: &BTreeMap<&'static str, String>) -> Option<String> {
        match self {
            Self::Required => value.trim().is_empty().then(|| format!("{label} is required")),
            Self::MinLength(min) => {
                // Emptiness is Required's job; a bare MinLength stays quiet
                // on an empty value so the two messages never stack.
                (!value.is_empty() && value.chars().count() < *min)
                    .then(|| format!("{label} must be at least {min} characters"))
            }
            Self::Email => {
                (!value.is_empty() && !EMAIL_RE.is_match(value))
                    .then(|| "Email is not valid".to_string())
            }
            Self::PasswordStrength => {
                let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
                let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
                let has_digit = value.chars().any(|c| c.is_ascii_digit());
                (!value.is_empty() && !(has_lower && has_upper && has_digit))
                    .then(|| "Password must contain uppercase, lowercase and numbers".to_string())
            }
            Self::Matches(other) => {
                let other_value = values.get(other).map_or("", String::as_str);
                (!value.is_empty() && value != other_value)
                    .then(|| "Passwords do not match".to_string())
            }
        }
    }
}

/// Declaration of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Stable field name, used as the key in values/touched/errors.
    pub name: &'static str,
    /// Human-facing label used in error messages.
    pub label: &'static str,
    /// Rules evaluated in order; the first failure wins.
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    /// Convenience constructor.
    #[must_use]
    pub fn new(name: &'static str, label: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, label, rules }
    }
}

/// One in-progress form: values, the touched set and derived errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    specs: Vec<FieldSpec>,
    values: BTreeMap<&'static str, String>,
    touched: BTreeSet<&'static str>,
}

impl FormState {
    /// Create a form with empty values and nothing touched.
    #[must_use]
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        let values = specs.iter().map(|spec| (spec.name, String::new())).collect();
        Self {
            specs,
            values,
            touched: BTreeSet::new(),
        }
    }

    /// Current value of a field (empty string for unknown names).
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Update a field's value. Does not touch the field: errors stay hidden
    /// until the user leaves it, so the first keystroke never flickers red.
    pub fn set_value(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    /// Mark a field as interacted-with; its errors become visible.
    pub fn touch(&mut self, name: &'static str) {
        self.touched.insert(name);
    }

    /// Mark every field touched (submit-time force reveal).
    pub fn touch_all(&mut self) {
        for spec in &self.specs {
            self.touched.insert(spec.name);
        }
    }

    /// Mark a subset of fields touched (one wizard step's worth).
    pub fn touch_fields(&mut self, names: &[&'static str]) {
        for name in names {
            self.touched.insert(name);
        }
    }

    /// Whether a field has been touched.
    #[must_use]
    #[allow(dead_code)]
    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    fn check_field(&self, spec: &FieldSpec) -> Option<String> {
        let value = self.value(spec.name);
        spec.rules
            .iter()
            .find_map(|rule| rule.check(spec.label, value, &self.values))
    }

    /// Errors for touched fields only. This drives inline display.
    #[must_use]
    #[allow(dead_code)]
    pub fn errors(&self) -> BTreeMap<&'static str, String> {
        self.specs
            .iter()
            .filter(|spec| self.touched.contains(spec.name))
            .filter_map(|spec| self.check_field(spec).map(|message| (spec.name, message)))
            .collect()
    }

    /// The visible error for one field, if any.
    #[must_use]
    pub fn error(&self, name: &str) -> Option<String> {
        self.specs
            .iter()
            .find(|spec| spec.name == name && self.touched.contains(spec.name))
            .and_then(|spec| self.check_field(spec))
    }

    /// Errors for every field regardless of touched state. Used at submit
    /// time to decide whether the form may be sent.
    #[must_use]
    pub fn validate_all(&self) -> BTreeMap<&'static str, String> {
        self.specs
            .iter()
            .filter_map(|spec| self.check_field(spec).map(|message| (spec.name, message)))
            .collect()
    }

    /// Errors restricted to the named fields, regardless of touched state.
    #[must_use]
    pub fn validate_fields(&self, names: &[&'static str]) -> BTreeMap<&'static str, String> {
        self.specs
            .iter()
            .filter(|spec| names.contains(&spec.name))
            .filter_map(|spec| self.check_field(spec).map(|message| (spec.name, message)))
            .collect()
    }

    /// Whether the whole form would pass validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate_all().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_form() -> FormState {
        FormState::new(vec![
            FieldSpec::new("email", "Email", vec![Rule::Required, Rule::Email]),
            FieldSpec::new("password", "Password", vec![Rule::Required]),
        ])
    }

    fn signup_password_form() -> FormState {
        FormState::new(vec![
            FieldSpec::new(
                "password",
                "Password",
                vec![Rule::Required, Rule::MinLength(8), Rule::PasswordStrength],
            ),
            FieldSpec::new(
                "confirmPassword",
                "Confirm Password",
                vec![Rule::Required, Rule::Matches("password")],
            ),
        ])
    }

    #[test]
    fn untouched_fields_never_show_errors() {
        let mut form = login_form();
        form.set_value("email", "not-an-email");
        assert!(form.errors().is_empty());
        assert_eq!(form.error("email"), None);
    }

    #[test]
    fn touched_invalid_field_shows_error() {
        let mut form = login_form();
        form.set_value("email", "x");
        form.touch("email");
        assert_eq!(form.error("email").as_deref(), Some("Email is not valid"));
    }

    #[test]
    fn required_beats_format_on_empty_value() {
        let mut form = login_form();
        form.touch("email");
        assert_eq!(form.error("email").as_deref(), Some("Email is required"));
    }

    #[test]
    fn validate_all_ignores_touched_gating() {
        let form = login_form();
        let errors = form.validate_all();
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Password is required")
        );
        assert!(!form.is_valid());
    }

    #[test]
    fn validation_is_deterministic() {
        let mut form = login_form();
        form.set_value("email", "a@b");
        form.touch("email");
        let first = form.error("email");
        let second = form.error("email");
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("Email is not valid"));
    }

    #[test]
    fn valid_login_passes() {
        let mut form = login_form();
        form.set_value("email", "a@b.com");
        form.set_value("password", "whatever");
        assert!(form.is_valid());
        form.touch_all();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn min_length_message_names_field_and_bound() {
        let mut form = FormState::new(vec![FieldSpec::new(
            "firstName",
            "First Name",
            vec![Rule::Required, Rule::MinLength(2)],
        )]);
        form.set_value("firstName", "A");
        form.touch("firstName");
        assert_eq!(
            form.error("firstName").as_deref(),
            Some("First Name must be at least 2 characters")
        );
    }

    #[test]
    fn password_strength_requires_all_three_classes() {
        let mut form = signup_password_form();
        form.touch_all();

        form.set_value("password", "alllowercase1");
        assert_eq!(
            form.error("password").as_deref(),
            Some("Password must contain uppercase, lowercase and numbers")
        );

        form.set_value("password", "Password123");
        form.set_value("confirmPassword", "Password123");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn confirm_password_must_match() {
        let mut form = signup_password_form();
        form.set_value("password", "Password123");
        form.set_value("confirmPassword", "Password124");
        form.touch_all();
        assert_eq!(
            form.error("confirmPassword").as_deref(),
            Some("Passwords do not match")
        );

        form.set_value("confirmPassword", "Password123");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn validate_fields_scopes_to_subset() {
        let mut form = login_form();
        form.set_value("email", "a@b.com");
        let errors = form.validate_fields(&["email"]);
        assert!(errors.is_empty());
        let errors = form.validate_fields(&["password"]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn touch_is_monotonic() {
        let mut form = login_form();
        form.touch("email");
        form.touch("email");
        assert!(form.is_touched("email"));
        assert!(!form.is_touched("password"));
        form.touch_fields(&["password"]);
        assert!(form.is_touched("password"));
    }
}
