//! In-memory form document.
//!
//! A flat, ordered list of sibling nodes standing in for the form's
//! children. Message elements live directly after the input they
//! annotate, so "the annotation of a field" is simply "the next sibling,
//! if it is a message". Useful for headless runs and tests.

use crate::{ErrorAnnotation, FieldView, FormError, FormSubmitter};
use formguard_config::FieldIds;

/// A text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputElement {
    pub id: String,
    pub value: String,
    /// Inline outline style; empty when not highlighted.
    pub outline: String,
}

/// A message element inserted after an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageElement {
    pub text: String,
    pub color: String,
    pub font_size: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Input(InputElement),
    Message(MessageElement),
    /// Labels, buttons and anything else the validator never touches.
    ///
    /// Only [`Node::Message`] elements inserted by the validator count as
    /// annotations; pre-existing markup after an input is never reused or
    /// removed, whatever its tag.
    Other { tag: String },
}

#[derive(Debug, Clone, Default)]
pub struct FormDocument {
    nodes: Vec<Node>,
    submissions: usize,
}

impl FormDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A label and an empty input per contact form field, then a submit button.
    pub fn contact_form(fields: &FieldIds) -> Self {
        let mut document = Self::new();
        for (_, id) in fields.iter() {
            document.push_element("label");
            document.push_input(id, "");
        }
        document.push_element("button");
        document
    }

    pub fn with_input(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_input(id, value);
        self
    }

    pub fn with_element(mut self, tag: impl Into<String>) -> Self {
        self.push_element(tag);
        self
    }

    pub fn push_input(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.nodes.push(Node::Input(InputElement {
            id: id.into(),
            value: value.into(),
            outline: String::new(),
        }));
    }

    pub fn push_element(&mut self, tag: impl Into<String>) {
        self.nodes.push(Node::Other { tag: tag.into() });
    }

    /// Replace a field's value, as a user edit would. Annotations are left
    /// alone; clearing them is the input handler's job.
    pub fn type_into(&mut self, id: &str, value: impl Into<String>) -> Result<(), FormError> {
        let index = self.position(id)?;
        if let Node::Input(input) = &mut self.nodes[index] {
            input.value = value.into();
        }
        Ok(())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn input(&self, id: &str) -> Option<&InputElement> {
        self.nodes.iter().find_map(|node| match node {
            Node::Input(input) if input.id == id => Some(input),
            _ => None,
        })
    }

    /// The message element annotating `id`, if any.
    pub fn message_for(&self, id: &str) -> Option<&MessageElement> {
        let index = self.position(id).ok()?;
        match self.nodes.get(index + 1) {
            Some(Node::Message(message)) => Some(message),
            _ => None,
        }
    }

    /// Number of message elements in the document.
    pub fn annotation_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Message(_)))
            .count()
    }

    /// Ids of inputs currently carrying a message, in document order.
    pub fn annotated_fields(&self) -> Vec<&str> {
        self.nodes
            .windows(2)
            .filter_map(|pair| match pair {
                [Node::Input(input), Node::Message(_)] => Some(input.id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn submissions(&self) -> usize {
        self.submissions
    }

    fn position(&self, id: &str) -> Result<usize, FormError> {
        self.nodes
            .iter()
            .position(|node| matches!(node, Node::Input(input) if input.id == id))
            .ok_or_else(|| FormError::FieldNotFound(id.to_string()))
    }
}

impl FieldView for FormDocument {
    fn get_value(&self, field: &str) -> Result<String, FormError> {
        self.input(field)
            .map(|input| input.value.clone())
            .ok_or_else(|| FormError::FieldNotFound(field.to_string()))
    }

    fn set_error_state(
        &mut self,
        field: &str,
        annotation: &ErrorAnnotation<'_>,
    ) -> Result<(), FormError> {
        let index = self.position(field)?;
        if let Node::Input(input) = &mut self.nodes[index] {
            input.outline = annotation.style.outline.clone();
        }

        match self.nodes.get_mut(index + 1) {
            Some(Node::Message(message)) => message.text = annotation.message.to_string(),
            _ => self.nodes.insert(
                index + 1,
                Node::Message(MessageElement {
                    text: annotation.message.to_string(),
                    color: annotation.style.color.clone(),
                    font_size: annotation.style.font_size.clone(),
                    display: annotation.style.display.clone(),
                }),
            ),
        }
        Ok(())
    }

    fn clear_error_state(&mut self, field: &str) -> Result<(), FormError> {
        let index = self.position(field)?;
        if let Node::Input(input) = &mut self.nodes[index] {
            input.outline.clear();
        }
        if matches!(self.nodes.get(index + 1), Some(Node::Message(_))) {
            self.nodes.remove(index + 1);
        }
        Ok(())
    }
}

impl FormSubmitter for FormDocument {
    fn submit(&mut self) -> Result<(), FormError> {
        self.submissions += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formguard_config::AnnotationStyle;

    fn annotation<'a>(message: &'a str, style: &'a AnnotationStyle) -> ErrorAnnotation<'a> {
        ErrorAnnotation { message, style }
    }

    #[test]
    fn test_contact_form_layout() {
        let document = FormDocument::contact_form(&FieldIds::default());
        assert_eq!(document.nodes().len(), 11);
        assert_eq!(document.get_value("comments").unwrap(), "");
        assert!(matches!(
            document.get_value("txtEmail"),
            Err(FormError::FieldNotFound(_))
        ));
    }

    #[test]
    fn test_set_error_state_inserts_after_input() {
        let style = AnnotationStyle::default();
        let mut document = FormDocument::new()
            .with_input("email", "bad@x.com")
            .with_element("label")
            .with_input("phone", "");

        document
            .set_error_state("email", &annotation("bad email", &style))
            .unwrap();

        assert!(matches!(document.nodes()[1], Node::Message(_)));
        assert!(matches!(document.nodes()[2], Node::Other { .. }));
        let message = document.message_for("email").unwrap();
        assert_eq!(message.text, "bad email");
        assert_eq!(message.color, "red");
        assert_eq!(message.font_size, "12px");
        assert_eq!(message.display, "block");
        assert_eq!(document.input("email").unwrap().outline, "2px solid red");
    }

    #[test]
    fn test_set_error_state_is_idempotent() {
        let style = AnnotationStyle::default();
        let mut document = FormDocument::new().with_input("first-name", "");

        document
            .set_error_state("first-name", &annotation("required", &style))
            .unwrap();
        document
            .set_error_state("first-name", &annotation("too short", &style))
            .unwrap();

        assert_eq!(document.annotation_count(), 1);
        assert_eq!(document.message_for("first-name").unwrap().text, "too short");
    }

    #[test]
    fn test_clear_error_state() {
        let style = AnnotationStyle::default();
        let mut document = FormDocument::new()
            .with_input("email", "")
            .with_input("phone", "");

        document.clear_error_state("email").unwrap();
        assert_eq!(document.nodes().len(), 2);

        document
            .set_error_state("email", &annotation("bad", &style))
            .unwrap();
        document.clear_error_state("email").unwrap();

        assert_eq!(document.annotation_count(), 0);
        assert!(document.input("email").unwrap().outline.is_empty());
        assert!(document.input("phone").is_some());
    }

    #[test]
    fn test_clear_leaves_other_siblings() {
        let mut document = FormDocument::new()
            .with_input("email", "")
            .with_element("small");

        document.clear_error_state("email").unwrap();
        assert_eq!(document.nodes().len(), 2);

        let style = AnnotationStyle::default();
        document
            .set_error_state("email", &annotation("Invalid email", &style))
            .unwrap();
        assert_eq!(document.nodes().len(), 3);
        assert_eq!(
            document.nodes()[2],
            Node::Other {
                tag: "small".to_string()
            }
        );
        assert_eq!(document.annotation_count(), 1);
    }

    #[test]
    fn test_type_into_and_submit() {
        let mut document = FormDocument::new().with_input("comments", "");
        document.type_into("comments", "Great service!").unwrap();
        assert_eq!(document.get_value("comments").unwrap(), "Great service!");
        assert!(document.type_into("nope", "x").is_err());

        document.submit().unwrap();
        assert_eq!(document.submissions(), 1);
    }

    #[test]
    fn test_annotated_fields() {
        let style = AnnotationStyle::default();
        let mut document = FormDocument::contact_form(&FieldIds::default());
        document
            .set_error_state("comments", &annotation("short", &style))
            .unwrap();
        document
            .set_error_state("email", &annotation("bad", &style))
            .unwrap();

        assert_eq!(document.annotated_fields(), vec!["email", "comments"]);
    }
}
