use pagekit_bridge::config::ValidationMessages;
use pagekit_bridge::{FieldElement, FormElement, InputType};

use crate::parse::{is_email, parse_float_prefix};

/// Validates form fields and keeps their inline feedback up to date.
///
/// Each validator returns whether the field passed. On failure the field is
/// marked invalid and gets exactly one feedback element; on success any
/// existing feedback is cleared. Validation problems are never errors.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    messages: ValidationMessages,
}

impl FormValidator {
    pub fn new(messages: ValidationMessages) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &ValidationMessages {
        &self.messages
    }

    /// Fails when the trimmed value is empty. `message` replaces the
    /// configured "required" message.
    pub fn validate_required<F>(&self, field: &mut F, message: Option<&str>) -> bool
    where
        F: FieldElement + ?Sized,
    {
        if field.value().trim().is_empty() {
            let message = message.unwrap_or(self.messages.required.as_str());
            self.show_field_error(field, message);
            return false;
        }
        self.clear_field_error(field);
        true
    }

    pub fn validate_email<F>(&self, field: &mut F) -> bool
    where
        F: FieldElement + ?Sized,
    {
        if !is_email(&field.value()) {
            self.show_field_error(field, &self.messages.email);
            return false;
        }
        self.clear_field_error(field);
        true
    }

    /// Fails when the value does not start with a number, or when it lies
    /// outside the optional inclusive bounds.
    pub fn validate_number<F>(&self, field: &mut F, min: Option<f64>, max: Option<f64>) -> bool
    where
        F: FieldElement + ?Sized,
    {
        let Some(value) = parse_float_prefix(&field.value()) else {
            self.show_field_error(field, &self.messages.not_a_number);
            return false;
        };

        if let Some(min) = min
            && value < min
        {
            let message = self.messages.number_below_min.replace("{min}", &min.to_string());
            self.show_field_error(field, &message);
            return false;
        }

        if let Some(max) = max
            && value > max
        {
            let message = self.messages.number_above_max.replace("{max}", &max.to_string());
            self.show_field_error(field, &message);
            return false;
        }

        self.clear_field_error(field);
        true
    }

    /// Marks the field invalid and replaces its feedback with `message`.
    pub fn show_field_error<F>(&self, field: &mut F, message: &str)
    where
        F: FieldElement + ?Sized,
    {
        field.set_invalid(true);
        field.remove_feedback();
        field.append_feedback(message);
    }

    pub fn clear_field_error<F>(&self, field: &mut F)
    where
        F: FieldElement + ?Sized,
    {
        field.set_invalid(false);
        field.remove_feedback();
    }

    /// Validates every relevant field of the form.
    ///
    /// Required fields are checked first, then non-empty email fields, then
    /// non-empty number fields (without bounds). Every field is evaluated even
    /// after a failure so that all feedback reflects the current values.
    pub fn validate_form<F: FormElement>(&self, form: &mut F) -> bool {
        let mut valid = true;

        for field in form.fields_mut().filter(|field| field.is_required()) {
            valid &= self.validate_required(field, None);
        }

        for field in form
            .fields_mut()
            .filter(|field| field.input_type() == InputType::Email)
        {
            if !field.value().is_empty() {
                valid &= self.validate_email(field);
            }
        }

        for field in form
            .fields_mut()
            .filter(|field| field.input_type() == InputType::Number)
        {
            if !field.value().is_empty() {
                valid &= self.validate_number(field, None, None);
            }
        }

        log::debug!("Form validation finished, valid: {valid}");
        valid
    }
}
