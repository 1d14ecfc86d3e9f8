//! Step controller for the sign-up wizard.
//!
//! Steps are named subsets of one [`FormState`]'s fields. Forward
//! navigation is gated on the current step's fields validating; backward
//! navigation is always allowed and never discards entered values.

use crate::forms::FormState;

/// One wizard step: a title for the progress header and the form fields it
/// owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSpec {
    /// Title shown in the step header.
    pub title: &'static str,
    /// The form fields validated by this step.
    pub fields: Vec<&'static str>,
}

impl StepSpec {
    /// Convenience constructor.
    #[must_use]
    pub fn new(title: &'static str, fields: Vec<&'static str>) -> Self {
        Self { title, fields }
    }
}

/// Finite step sequence with a cursor that never leaves `[0, N)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    steps: Vec<StepSpec>,
    current: usize,
}

impl Wizard {
    /// Create a wizard positioned on its first step.
    ///
    /// # Panics
    /// Panics if `steps` is empty; a wizard with no steps has no valid
    /// cursor position.
    #[must_use]
    pub fn new(steps: Vec<StepSpec>) -> Self {
        assert!(!steps.is_empty(), "wizard needs at least one step");
        Self { steps, current: 0 }
    }

    /// Zero-based index of the current step.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The current step's spec.
    #[must_use]
    pub fn current_step(&self) -> &StepSpec {
        &self.steps[self.current]
    }

    /// Total number of steps.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether the cursor is on the terminal step (where submit lives).
    #[must_use]
    pub fn on_last_step(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// Whether the current step's fields all validate.
    #[must_use]
    pub fn current_step_valid(&self, form: &FormState) -> bool {
        form.validate_fields(&self.current_step().fields).is_empty()
    }

    /// Attempt to advance.
    ///
    /// If the current step validates, the cursor moves forward (capped at
    /// the last step) and `true` is returned. Otherwise the step's fields
    /// are touched so their errors become visible, the cursor stays, and
    /// `false` is returned.
    pub fn next(&mut self, form: &mut FormState) -> bool {
        let fields = self.current_step().fields.clone();
        if form.validate_fields(&fields).is_empty() {
            if self.current + 1 < self.steps.len() {
                self.current += 1;
            }
            true
        } else {
            form.touch_fields(&fields);
            false
        }
    }

    /// Move back one step, flooring at the first. Entered values are kept.
    pub fn back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FieldSpec, Rule};

    fn form() -> FormState {
        FormState::new(vec![
            FieldSpec::new("email", "Email", vec![Rule::Required, Rule::Email]),
            FieldSpec::new("marketName", "Market Name", vec![Rule::Required]),
            FieldSpec::new("password", "Password", vec![Rule::Required, Rule::MinLength(8)]),
        ])
    }

    fn wizard() -> Wizard {
        Wizard::new(vec![
            StepSpec::new("Your details", vec!["email"]),
            StepSpec::new("Your market", vec!["marketName"]),
            StepSpec::new("Security", vec!["password"]),
        ])
    }

    #[test]
    fn invalid_step_blocks_and_touches() {
        let mut wizard = wizard();
        let mut form = form();
        form.set_value("email", "x");

        assert!(!wizard.next(&mut form));
        assert_eq!(wizard.current_index(), 0);
        // The failed attempt revealed the step's errors.
        assert!(form.is_touched("email"));
        assert_eq!(form.error("email").as_deref(), Some("Email is not valid"));
        // Fields of later steps stay untouched.
        assert!(!form.is_touched("marketName"));
    }

    #[test]
    fn valid_step_advances() {
        let mut wizard = wizard();
        let mut form = form();
        form.set_value("email", "a@b.com");

        assert!(wizard.next(&mut form));
        assert_eq!(wizard.current_index(), 1);
        assert_eq!(wizard.current_step().title, "Your market");
    }

    #[test]
    fn cursor_never_leaves_bounds() {
        let mut wizard = wizard();
        let mut form = form();
        form.set_value("email", "a@b.com");
        form.set_value("marketName", "Teddy store");
        form.set_value("password", "Password123");

        wizard.back();
        assert_eq!(wizard.current_index(), 0);

        for _ in 0..10 {
            wizard.next(&mut form);
        }
        assert_eq!(wizard.current_index(), 2);
        assert!(wizard.on_last_step());

        for _ in 0..10 {
            wizard.back();
        }
        assert_eq!(wizard.current_index(), 0);
    }

    #[test]
    fn values_survive_navigation() {
        let mut wizard = wizard();
        let mut form = form();
        form.set_value("email", "a@b.com");
        wizard.next(&mut form);
        form.set_value("marketName", "Teddy store");
        wizard.back();

        assert_eq!(form.value("email"), "a@b.com");
        assert_eq!(form.value("marketName"), "Teddy store");
    }

    #[test]
    fn step_validity_is_scoped() {
        let wizard = wizard();
        let mut form = form();
        form.set_value("email", "a@b.com");
        // Later steps are still invalid, but step one stands on its own.
        assert!(wizard.current_step_valid(&form));
        assert!(!form.is_valid());
    }

    #[test]
    #[should_panic(expected = "at least one step")]
    fn empty_wizard_is_rejected() {
        let _ = Wizard::new(vec![]);
    }
}
