//! Tree decoder engine.
//!
//! The engine walks a parsed XML document in a single forward pass and
//! populates record types according to their [`Decode`] bindings. It
//! holds no mutable state, so one decoder can serve any number of
//! independent documents.

use std::fmt;
use std::str::FromStr;

use roxmltree::{Document, Node};

use crate::error::{Result, WxrError};
use crate::scalar::ScalarRegistry;
use crate::schema::{Binding, BindingKind, Decode, Source};
use crate::xml::{direct_text, get_tag_name};

/// Engine that decodes markup into typed records.
#[derive(Debug)]
pub struct Decoder {
    scalars: ScalarRegistry,
}

impl Decoder {
    /// Create a decoder with the default scalar registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scalars: ScalarRegistry::with_defaults(),
        }
    }

    /// Create a decoder with a caller-supplied scalar registry.
    #[must_use]
    pub fn with_registry(scalars: ScalarRegistry) -> Self {
        Self { scalars }
    }

    /// Get a reference to the underlying scalar registry.
    #[must_use]
    pub fn scalars(&self) -> &ScalarRegistry {
        &self.scalars
    }

    /// Parse a document and decode its root element as `T`.
    ///
    /// # Errors
    /// Returns `StructuralMismatch` if the root element's local name is
    /// not `T::ELEMENT`, or any error from [`decode_element`](Self::decode_element).
    pub fn decode_document<T: Decode>(&self, xml: &str) -> Result<T> {
        let doc = Document::parse(xml)?;
        let root = doc.root_element();
        let root_name = get_tag_name(root);
        if root_name != T::ELEMENT {
            return Err(WxrError::StructuralMismatch {
                element: T::ELEMENT.to_string(),
                context: format!("document root <{root_name}>"),
            });
        }
        self.decode_element(root)
    }

    /// Decode one element as record type `T`.
    ///
    /// Attribute and character-data bindings are resolved when the
    /// element is entered; child elements are then visited in document
    /// order and dispatched to the first binding matching their local
    /// name. Children with no binding are skipped. Any assignment
    /// failure aborts the record and propagates.
    ///
    /// # Errors
    /// Returns `StructuralMismatch` if a required binding never matched,
    /// or the first scalar/nested decode failure encountered.
    pub fn decode_element<T: Decode>(&self, node: Node<'_, '_>) -> Result<T> {
        let mut record = T::default();
        let mut matched: Vec<&'static str> = Vec::new();

        for binding in T::bindings() {
            match binding.kind {
                BindingKind::Attribute(name) => {
                    if let Some(value) = node.attribute(name) {
                        record.assign(binding.field, Source::Attr(value), self)?;
                        matched.push(binding.field);
                    }
                }
                BindingKind::Text => {
                    let text = direct_text(node);
                    if !text.is_empty() {
                        record.assign(binding.field, Source::Text(text), self)?;
                        matched.push(binding.field);
                    }
                }
                _ => {}
            }
        }

        for child in node.children().filter(|c| c.is_element()) {
            let tag = get_tag_name(child);
            match T::bindings().iter().find(|b| b.kind.element() == Some(tag)) {
                Some(binding) => {
                    record.assign(binding.field, Source::Node(child), self)?;
                    matched.push(binding.field);
                }
                None => {
                    tracing::debug!(tag, parent = T::ELEMENT, "skipping unbound element");
                }
            }
        }

        for binding in T::bindings().iter().filter(|b| b.required) {
            if !matched.contains(&binding.field) {
                return Err(WxrError::StructuralMismatch {
                    element: construct_name(binding),
                    context: format!("<{}>", T::ELEMENT),
                });
            }
        }

        Ok(record)
    }

    /// Decode a matched construct as a scalar via the registry.
    ///
    /// # Errors
    /// Returns `MalformedScalar` naming the field and raw text when the
    /// text does not satisfy the scalar's grammar.
    pub fn scalar<T>(&self, field: &'static str, source: &Source<'_, '_>) -> Result<T>
    where
        T: FromStr + 'static,
        T::Err: fmt::Display,
    {
        let raw = match source {
            Source::Attr(value) => (*value).to_string(),
            Source::Text(text) => text.clone(),
            Source::Node(node) => direct_text(*node),
        };
        self.scalars
            .decode(&raw)
            .map_err(|message| WxrError::MalformedScalar {
                field: field.to_string(),
                value: raw,
                message,
            })
    }

    /// Decode a matched child element as a nested record.
    ///
    /// # Errors
    /// Returns `StructuralMismatch` if the construct is not an element,
    /// or any failure from decoding the nested record.
    pub fn nested<T: Decode>(&self, field: &'static str, source: &Source<'_, '_>) -> Result<T> {
        match source {
            Source::Node(node) => self.decode_element(*node),
            Source::Attr(_) | Source::Text(_) => Err(WxrError::StructuralMismatch {
                element: field.to_string(),
                context: "expected a child element".to_string(),
            }),
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Name of the markup construct a binding matches, for error messages.
fn construct_name(binding: &Binding) -> String {
    match binding.kind {
        BindingKind::Attribute(name) => format!("@{name}"),
        BindingKind::Text => "#text".to_string(),
        _ => binding
            .kind
            .element()
            .unwrap_or(binding.field)
            .to_string(),
    }
}
