/// Kind of an input control, as given by its `type` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Number,
    /// Any other type (`password`, `date`, `select`, ...). Never validated
    /// beyond the `required` check.
    Other,
}

impl InputType {
    /// Maps an HTML `type` attribute to an input type.
    pub fn from_attr(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "" | "text" => InputType::Text,
            "email" => InputType::Email,
            "number" => InputType::Number,
            _ => InputType::Other,
        }
    }
}

/// A single input control together with the container holding its error
/// feedback.
///
/// The binding only exposes primitive operations. Keeping at most one
/// feedback element per field is the validator's job, so a binding must not
/// deduplicate on its own.
pub trait FieldElement {
    /// Current raw value of the control.
    fn value(&self) -> String;

    fn input_type(&self) -> InputType;

    /// Whether the control carries the `required` attribute.
    fn is_required(&self) -> bool;

    /// Toggles the invalid marker (`is-invalid` class).
    fn set_invalid(&mut self, invalid: bool);

    /// Removes the first feedback element under the field. Returns whether
    /// one was found.
    fn remove_feedback(&mut self) -> bool;

    /// Appends a new feedback element with the given text.
    fn append_feedback(&mut self, message: &str);
}

/// A form whose descendant fields can be walked in document order.
pub trait FormElement {
    type Field: FieldElement;

    fn fields_mut(&mut self) -> impl Iterator<Item = &mut Self::Field>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_type_from_attribute() {
        assert_eq!(InputType::from_attr("EMAIL"), InputType::Email);
        assert_eq!(InputType::from_attr("number"), InputType::Number);
        assert_eq!(InputType::from_attr(""), InputType::Text);
        assert_eq!(InputType::from_attr("password"), InputType::Other);
    }
}
