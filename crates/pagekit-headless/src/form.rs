use std::collections::BTreeMap;

use pagekit_bridge::{FieldElement, FormElement, InputType, LoadingTarget};

/// A child of a field's container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerNode {
    Label(String),
    /// An `invalid-feedback` element.
    Feedback(String),
}

/// An input control and its parent container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessField {
    pub name: String,
    pub input_type: InputType,
    pub value: String,
    pub required: bool,
    pub invalid: bool,
    pub container: Vec<ContainerNode>,
}

impl HeadlessField {
    pub fn new(name: impl Into<String>, input_type: InputType) -> Self {
        let name = name.into();
        Self {
            container: vec![ContainerNode::Label(name.clone())],
            name,
            input_type,
            value: String::new(),
            required: false,
            invalid: false,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Number of feedback elements under the field.
    pub fn feedback_count(&self) -> usize {
        self.container
            .iter()
            .filter(|node| matches!(node, ContainerNode::Feedback(_)))
            .count()
    }

    /// Text of the first feedback element, if any.
    pub fn feedback(&self) -> Option<&str> {
        self.container.iter().find_map(|node| match node {
            ContainerNode::Feedback(text) => Some(text.as_str()),
            ContainerNode::Label(_) => None,
        })
    }
}

impl FieldElement for HeadlessField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn input_type(&self) -> InputType {
        self.input_type
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    fn remove_feedback(&mut self) -> bool {
        match self
            .container
            .iter()
            .position(|node| matches!(node, ContainerNode::Feedback(_)))
        {
            Some(index) => {
                self.container.remove(index);
                true
            }
            None => false,
        }
    }

    fn append_feedback(&mut self, message: &str) {
        self.container
            .push(ContainerNode::Feedback(message.to_string()));
    }
}

/// A form holding fields in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessForm {
    pub fields: Vec<HeadlessField>,
}

impl HeadlessForm {
    pub fn new(fields: impl IntoIterator<Item = HeadlessField>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&HeadlessField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut HeadlessField> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    /// Total number of feedback elements in the form.
    pub fn feedback_count(&self) -> usize {
        self.fields.iter().map(HeadlessField::feedback_count).sum()
    }
}

impl FormElement for HeadlessForm {
    type Field = HeadlessField;

    fn fields_mut(&mut self) -> impl Iterator<Item = &mut Self::Field> {
        self.fields.iter_mut()
    }
}

/// A button that can show a loading indicator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessButton {
    pub inner_html: String,
    pub disabled: bool,
    pub data: BTreeMap<String, String>,
}

impl HeadlessButton {
    pub fn new(inner_html: impl Into<String>) -> Self {
        Self {
            inner_html: inner_html.into(),
            ..Self::default()
        }
    }
}

impl LoadingTarget for HeadlessButton {
    fn inner_html(&self) -> String {
        self.inner_html.clone()
    }

    fn set_inner_html(&mut self, html: &str) {
        self.inner_html = html.to_string();
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn data(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_data(&mut self, key: &str, value: &str) {
        self.data.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_accumulates_without_dedup() {
        let mut field = HeadlessField::new("email", InputType::Email);
        field.append_feedback("first");
        field.append_feedback("second");
        assert_eq!(field.feedback_count(), 2);
        assert_eq!(field.feedback(), Some("first"));

        assert!(field.remove_feedback());
        assert!(field.remove_feedback());
        assert!(!field.remove_feedback());
        assert_eq!(field.container, vec![ContainerNode::Label("email".into())]);
    }
}
