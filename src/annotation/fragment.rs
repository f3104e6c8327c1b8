use super::kind::AnnotationKind;
use serde::Serialize;

/// One rendered annotation line describing a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationFragment {
    content: String,
    kind: AnnotationKind,
}

impl AnnotationFragment {
    pub fn new(content: String, kind: AnnotationKind) -> Self {
        Self { content, kind }
    }

    /// Annotation body, e.g. `{Number} [age] age`
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> AnnotationKind {
        self.kind
    }

    /// Fully tagged, newline-terminated line: `@apiSuccess <content>\n`
    pub fn source_line(&self) -> String {
        format!("@{} {}\n", self.kind.tag(), self.content)
    }
}
