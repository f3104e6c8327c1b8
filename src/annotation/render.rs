//! Type classification and annotation text rendering

use crate::parsing::schema::PropertySchema;

/// Documentation types rendered as themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeType {
    Boolean,
    String,
    Number,
    Date,
    Any,
}

impl NativeType {
    /// Case-insensitive lookup
    pub fn from_type_text(text: &str) -> Option<Self> {
        [
            Self::Boolean,
            Self::String,
            Self::Number,
            Self::Date,
            Self::Any,
        ]
        .into_iter()
        .find(|native| native.as_str().eq_ignore_ascii_case(text))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Number => "number",
            Self::Date => "date",
            Self::Any => "any",
        }
    }
}

/// How a declared type is documented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    Native(NativeType),
    /// Any other scalar type, rendered as `Object`
    ObjectSingle,
    /// Any other array type, rendered as `Object[]`
    ObjectArray,
}

impl TypeClass {
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }
}

/// Classify declared type text
///
/// Arrays are recognised only by a literal `[]` suffix, so `string[]` is an
/// object array rather than a native type.
pub fn classify(declared_type: &str) -> TypeClass {
    let text = declared_type.trim();
    if let Some(native) = NativeType::from_type_text(text) {
        TypeClass::Native(native)
    } else if text.ends_with("[]") {
        TypeClass::ObjectArray
    } else {
        TypeClass::ObjectSingle
    }
}

/// Type name placed inside the annotation braces, before capitalization
pub fn rendered_type<'a>(declared_type: &'a str, class: TypeClass) -> &'a str {
    match class {
        TypeClass::Native(_) => declared_type.trim(),
        TypeClass::ObjectSingle => "Object",
        TypeClass::ObjectArray => "Object[]",
    }
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Render `{Type}` with any bound and allowed-value suffix
///
/// The combined form keeps the closing brace of the bounds and adds its own,
/// e.g. `{String {1~10}=a,b }`. Hosts parse this exact shape.
pub fn type_annotation(type_name: &str, property: &PropertySchema) -> String {
    let mut annotation = format!("{{{}", capitalize(type_name));

    let (min, max) = (property.min(), property.max());
    let has_bounds = min.is_some() || max.is_some();
    let bounds = format!("{{{}~{}}}", min.unwrap_or(""), max.unwrap_or(""));

    match (has_bounds, property.allowed_values()) {
        (true, Some(values)) => {
            annotation.push_str(&format!(" {bounds}={} }}", values.join(",")));
        }
        (true, None) => annotation.push_str(&format!(" {bounds} }}")),
        (false, Some(values)) => annotation.push_str(&format!("={} }}", values.join(","))),
        (false, None) => annotation.push('}'),
    }

    annotation
}

/// Fragment body: `<type> <name> <description>`, with `[name]` when optional
pub fn fragment_body(
    type_annotation: &str,
    name: &str,
    optional: bool,
    description: &str,
) -> String {
    if optional {
        format!("{type_annotation} [{name}] {description}")
    } else {
        format!("{type_annotation} {name} {description}")
    }
}
