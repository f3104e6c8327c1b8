//! Recursive class-to-annotation transformation
//!
//! Properties are walked in declaration order. A property whose type names
//! another class declared in the same file is followed by that class's
//! fragments, prefixed with the property's dotted name, before the walk
//! moves on to the next sibling.

use super::extract::ClassReference;
use super::fragment::AnnotationFragment;
use super::kind::AnnotationKind;
use super::render::{classify, fragment_body, rendered_type, type_annotation};
use crate::error::{ElementError, ElementResult};
use crate::parsing::analyzer::SourceAnalyzer;
use crate::parsing::schema::{ClassSchema, SourceFile};
use std::path::Path;
use tracing::debug;

/// Per-call traversal state, passed down by value
#[derive(Debug, Clone)]
pub struct TraversalContext<'a> {
    pub file: &'a SourceFile,
    pub class: &'a ClassSchema,
    /// Dotted name path, empty at the root
    pub prefix: String,
}

impl<'a> TraversalContext<'a> {
    pub fn new(file: &'a SourceFile, class: &'a ClassSchema, prefix: impl Into<String>) -> Self {
        Self {
            file,
            class,
            prefix: prefix.into(),
        }
    }

    /// `<prefix>.<ident>`, or the bare identifier at the root
    pub fn qualify(&self, ident: &str) -> String {
        if self.prefix.is_empty() {
            ident.to_string()
        } else {
            format!("{}.{ident}", self.prefix)
        }
    }

    /// `<prefix> > <text>`, or the bare text at the root
    pub fn describe(&self, text: &str) -> String {
        if self.prefix.is_empty() {
            text.to_string()
        } else {
            format!("{} > {text}", self.prefix)
        }
    }

    fn nested(&self, class: &'a ClassSchema, prefix: String) -> Self {
        Self {
            file: self.file,
            class,
            prefix,
        }
    }
}

/// Turns class schemas into annotation fragments of one kind
pub struct ClassTransformer<A> {
    analyzer: A,
    kind: AnnotationKind,
}

impl<A: SourceAnalyzer> ClassTransformer<A> {
    pub fn new(analyzer: A, kind: AnnotationKind) -> Self {
        Self { analyzer, kind }
    }

    pub fn kind(&self) -> AnnotationKind {
        self.kind
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn analyzer_mut(&mut self) -> &mut A {
        &mut self.analyzer
    }

    /// Transform the class named by an element definition
    pub fn transform_reference(
        &mut self,
        reference: &ClassReference,
    ) -> ElementResult<Vec<AnnotationFragment>> {
        self.transform(&reference.file_path, &reference.class_name, "")
    }

    /// Render every property of `class_name` in `file_path`, nested classes included
    pub fn transform(
        &mut self,
        file_path: &Path,
        class_name: &str,
        prefix: &str,
    ) -> ElementResult<Vec<AnnotationFragment>> {
        let file = self.analyzer.open_file(file_path)?;
        let class = file
            .get_class(class_name)
            .ok_or_else(|| ElementError::ClassNotFound {
                class_name: class_name.to_string(),
                path: file.path().to_path_buf(),
            })?;

        // Recursion never leaves the root file, so class names are enough
        // to identify the active path.
        let mut active = vec![class_name.to_string()];
        let mut fragments = Vec::new();
        self.walk(
            TraversalContext::new(&file, class, prefix),
            &mut active,
            &mut fragments,
        )?;

        debug!(
            class = class_name,
            path = %file.path().display(),
            fragments = fragments.len(),
            "transformed class"
        );
        Ok(fragments)
    }

    fn walk(
        &self,
        context: TraversalContext<'_>,
        active: &mut Vec<String>,
        fragments: &mut Vec<AnnotationFragment>,
    ) -> ElementResult<()> {
        for property in &context.class.properties {
            let name = context.qualify(&property.name);
            let description = context.describe(property.description());
            let type_class = classify(&property.declared_type);

            let annotation = type_annotation(
                rendered_type(&property.declared_type, type_class),
                property,
            );
            fragments.push(AnnotationFragment::new(
                fragment_body(&annotation, &name, property.is_optional, &description),
                self.kind,
            ));

            if type_class.is_native() {
                continue;
            }

            let nested_name = property.declared_type.trim().trim_end_matches("[]").trim();
            let Some(nested) = context.file.get_class(nested_name) else {
                // Interfaces and external types stay opaque
                continue;
            };

            if active.iter().any(|c| c == nested_name) {
                let mut chain = active.clone();
                chain.push(nested_name.to_string());
                return Err(ElementError::CyclicClassReference { chain });
            }

            debug!(field = %name, class = nested_name, "expanding nested class");
            active.push(nested_name.to_string());
            self.walk(context.nested(nested, name), active, fragments)?;
            active.pop();
        }

        Ok(())
    }
}
