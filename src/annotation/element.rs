//! Host-facing element parser
//!
//! The documentation generator hands over its collection of parsed elements
//! with the triggering class element at the tail. That element is replaced
//! by one element per rendered field.

use super::extract::extract;
use super::fragment::AnnotationFragment;
use super::kind::AnnotationKind;
use super::transform::ClassTransformer;
use crate::error::ElementResult;
use crate::parsing::analyzer::SourceAnalyzer;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// An element as the documentation generator represents it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Element body without the tag
    pub content: String,
    /// Lowercase tag, e.g. `apisuccess`
    pub name: String,
    /// Full source line, e.g. `@apiSuccess {String} name Name\n`
    pub source: String,
    /// Tag as written, e.g. `apiSuccess`
    pub source_name: String,
}

impl Element {
    /// A class element as the host hands it over, e.g. `(src/dto.ts) {User}`
    pub fn class_element(kind: AnnotationKind, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            source: format!("@{} {content}\n", kind.mode()),
            name: kind.mode().to_lowercase(),
            source_name: kind.mode().to_string(),
            content,
        }
    }
}

impl From<AnnotationFragment> for Element {
    fn from(fragment: AnnotationFragment) -> Self {
        let kind = fragment.kind();
        Self {
            source: fragment.source_line(),
            name: kind.name().to_string(),
            source_name: kind.tag().to_string(),
            content: fragment.content().to_string(),
        }
    }
}

/// Expands `@apiSuccessClass` / `@apiParamClass` elements
///
/// All elements handled by one parser share its analysis session, so each
/// source file is loaded at most once.
pub struct ElementParser<A> {
    transformer: ClassTransformer<A>,
}

impl<A: SourceAnalyzer> ElementParser<A> {
    pub fn new(analyzer: A, kind: AnnotationKind) -> Self {
        Self {
            transformer: ClassTransformer::new(analyzer, kind),
        }
    }

    pub fn kind(&self) -> AnnotationKind {
        self.transformer.kind()
    }

    pub fn transformer_mut(&mut self) -> &mut ClassTransformer<A> {
        &mut self.transformer
    }

    /// Render the fragments for one raw element definition
    pub fn render(&mut self, content: &str) -> ElementResult<Vec<AnnotationFragment>> {
        let reference = extract(content)?;
        self.transformer.transform_reference(&reference)
    }

    /// Replace the triggering element at the tail of `elements`
    ///
    /// Returns the number of elements appended. On failure the triggering
    /// element stays removed, nothing is appended, and the error is returned.
    pub fn try_parse_elements(
        &mut self,
        elements: &mut Vec<Element>,
        element: &Element,
    ) -> ElementResult<usize> {
        elements.pop();
        let fragments = self.render(&element.content)?;
        let count = fragments.len();
        elements.extend(fragments.into_iter().map(Element::from));
        Ok(count)
    }

    /// Entry point for the documentation generator; never fails
    ///
    /// Errors are logged and the element is dropped from the collection.
    pub fn parse_elements(&mut self, elements: &mut Vec<Element>, element: &Element) {
        if let Err(e) = self.try_parse_elements(elements, element) {
            warn!(
                code = %e.status_code(),
                content = %element.content,
                "dropping element: {e}"
            );
        }
    }
}
