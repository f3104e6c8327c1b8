//! Read-only class schema model
//!
//! These types are what a source-analysis service reports about a file:
//! the classes it declares and, for each class, its properties in
//! declaration order.

use std::path::{Path, PathBuf};

/// A declarative constraint attached to a property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Lower bound, rendered verbatim (empty when the marker had no argument)
    Min(String),
    /// Upper bound, rendered verbatim (empty when the marker had no argument)
    Max(String),
    /// Enumerated allowed values
    AllowedValues(Vec<String>),
}

/// A single declared property of a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySchema {
    pub name: String,
    /// Textual type expression, e.g. `string`, `Address`, `Address[]`
    pub declared_type: String,
    pub is_optional: bool,
    /// First attached documentation comment, if any
    pub doc_comment: Option<String>,
    pub constraints: Vec<Constraint>,
}

impl PropertySchema {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            is_optional: false,
            doc_comment: None,
            constraints: Vec::new(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Documentation text, falling back to the property name
    pub fn description(&self) -> &str {
        self.doc_comment.as_deref().unwrap_or(&self.name)
    }

    /// First lower bound marker
    pub fn min(&self) -> Option<&str> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::Min(v) => Some(v.as_str()),
            _ => None,
        })
    }

    /// First upper bound marker
    pub fn max(&self) -> Option<&str> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::Max(v) => Some(v.as_str()),
            _ => None,
        })
    }

    /// First allowed-value set
    pub fn allowed_values(&self) -> Option<&[String]> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::AllowedValues(v) => Some(v.as_slice()),
            _ => None,
        })
    }
}

/// Declared shape of a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSchema {
    pub name: String,
    pub properties: Vec<PropertySchema>,
}

impl ClassSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: PropertySchema) -> Self {
        self.properties.push(property);
        self
    }
}

/// A loaded source file and the classes declared at its top level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    classes: Vec<ClassSchema>,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, classes: Vec<ClassSchema>) -> Self {
        Self {
            path: path.into(),
            classes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn classes(&self) -> &[ClassSchema] {
        &self.classes
    }

    /// Look up a class by exact name
    pub fn get_class(&self, name: &str) -> Option<&ClassSchema> {
        self.classes.iter().find(|c| c.name == name)
    }
}
