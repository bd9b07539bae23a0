//! Schema binding model: how record fields map to markup constructs.
//!
//! Each record type declares a fixed, ordered list of [`Binding`]s. The
//! decode engine walks the document and hands matched constructs to the
//! record through the [`Decode`] trait; the bindings themselves are inert
//! data and can be inspected and tested without an engine.

use roxmltree::Node;

use crate::engine::Decoder;
use crate::error::Result;

/// The markup construct a field is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// Attribute on the record's own element.
    Attribute(&'static str),
    /// Character data directly inside the record's own element.
    Text,
    /// Single child element decoded as a scalar.
    Scalar(&'static str),
    /// Repeated child element, each occurrence decoded as a scalar.
    /// Encounter order is preserved.
    RepeatedScalar(&'static str),
    /// Single child element decoded as a nested record.
    Nested(&'static str),
    /// Repeated child element decoded as nested records.
    /// Encounter order is preserved.
    RepeatedNested(&'static str),
}

impl BindingKind {
    /// The child element name this binding matches, if it matches one.
    #[must_use]
    pub fn element(&self) -> Option<&'static str> {
        match self {
            Self::Scalar(name)
            | Self::RepeatedScalar(name)
            | Self::Nested(name)
            | Self::RepeatedNested(name) => Some(name),
            Self::Attribute(_) | Self::Text => None,
        }
    }
}

/// One field binding in a record's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Field key passed to [`Decode::assign`].
    pub field: &'static str,
    /// The markup construct feeding the field.
    pub kind: BindingKind,
    /// Whether absence of the construct is a structural error.
    pub required: bool,
}

impl Binding {
    /// Bind a field to an attribute of the record's element.
    #[must_use]
    pub const fn attribute(name: &'static str, field: &'static str) -> Self {
        Self {
            field,
            kind: BindingKind::Attribute(name),
            required: false,
        }
    }

    /// Bind a field to the element's own character data.
    #[must_use]
    pub const fn text(field: &'static str) -> Self {
        Self {
            field,
            kind: BindingKind::Text,
            required: false,
        }
    }

    /// Bind a field to a single scalar child element.
    #[must_use]
    pub const fn scalar(element: &'static str, field: &'static str) -> Self {
        Self {
            field,
            kind: BindingKind::Scalar(element),
            required: false,
        }
    }

    /// Bind a collection field to a repeated scalar child element.
    #[must_use]
    pub const fn repeated_scalar(element: &'static str, field: &'static str) -> Self {
        Self {
            field,
            kind: BindingKind::RepeatedScalar(element),
            required: false,
        }
    }

    /// Bind a field to a single nested record child element.
    #[must_use]
    pub const fn nested(element: &'static str, field: &'static str) -> Self {
        Self {
            field,
            kind: BindingKind::Nested(element),
            required: false,
        }
    }

    /// Bind a collection field to a repeated nested record element.
    #[must_use]
    pub const fn repeated_nested(element: &'static str, field: &'static str) -> Self {
        Self {
            field,
            kind: BindingKind::RepeatedNested(element),
            required: false,
        }
    }

    /// Mark the binding as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A matched markup construct handed to a record for assignment.
#[derive(Debug)]
pub enum Source<'a, 'input> {
    /// An attribute value.
    Attr(&'a str),
    /// Accumulated character data.
    Text(String),
    /// A matched child element.
    Node(Node<'a, 'input>),
}

/// Contract between a record type and the decode engine.
///
/// Records start from their `Default` zero value; the engine calls
/// [`assign`](Decode::assign) once per matched construct, in document
/// order, so repeated bindings append as they are encountered.
pub trait Decode: Default {
    /// Element name this record decodes from.
    const ELEMENT: &'static str;

    /// Ordered field bindings consulted by the engine.
    fn bindings() -> &'static [Binding];

    /// Assign one decoded markup construct to the named field.
    ///
    /// # Errors
    /// Propagates scalar or nested-record decode failures, aborting
    /// construction of this record and its ancestors.
    fn assign(
        &mut self,
        field: &'static str,
        source: Source<'_, '_>,
        decoder: &Decoder,
    ) -> Result<()>;
}
