//! Class-to-annotation rendering
//!
//! Pipeline per element: [`extract`] the class reference, walk the class
//! with a [`ClassTransformer`], hand the fragments back to the host through
//! an [`ElementParser`].

pub mod element;
pub mod extract;
pub mod fragment;
pub mod kind;
pub mod render;
pub mod transform;

pub use element::{Element, ElementParser};
pub use extract::{ClassReference, extract};
pub use fragment::AnnotationFragment;
pub use kind::AnnotationKind;
pub use render::{NativeType, TypeClass, classify};
pub use transform::{ClassTransformer, TraversalContext};
