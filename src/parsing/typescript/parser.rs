//! TypeScript class schema extraction
//!
//! **Tree-sitter grammar**: tree-sitter-typescript 0.23
//!
//! `.tsx` files use the TSX dialect, everything else the plain TypeScript
//! grammar. TSX reads angle-bracket casts (`<any>value`) as JSX, so it cannot
//! stand in for plain TypeScript.
//!
//! Only top-level class declarations are reported, optionally wrapped in an
//! `export` statement or declared `abstract`. Interfaces and type aliases are
//! deliberately skipped: they never expand into nested annotations.

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, AnalysisResult};
use crate::parsing::schema::{ClassSchema, Constraint, PropertySchema};
use std::path::Path;
use tree_sitter::{Language, Node, Parser};

/// Extracts class schemas from TypeScript source
pub struct TypeScriptParser {
    typescript: Parser,
    tsx: Parser,
    config: AnalysisConfig,
}

impl TypeScriptParser {
    /// Create a parser recognising the default class-validator decorators
    pub fn new() -> AnalysisResult<Self> {
        Self::with_config(AnalysisConfig::default())
    }

    /// Create a parser with custom constraint decorator names
    pub fn with_config(config: AnalysisConfig) -> AnalysisResult<Self> {
        let typescript: Language = tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into();
        let tsx: Language = tree_sitter_typescript::LANGUAGE_TSX.into();

        Ok(Self {
            typescript: new_parser(typescript, "TypeScript")?,
            tsx: new_parser(tsx, "TSX")?,
            config,
        })
    }

    /// Parse TypeScript source and return its top-level classes in order
    ///
    /// The grammar is chosen from the extension of `path`.
    pub fn parse(&mut self, code: &str, path: &Path) -> AnalysisResult<Vec<ClassSchema>> {
        let is_tsx = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tsx"));
        let (parser, language) = if is_tsx {
            (&mut self.tsx, "TSX")
        } else {
            (&mut self.typescript, "TypeScript")
        };

        let tree = parser
            .parse(code, None)
            .ok_or_else(|| AnalysisError::ParseFailed {
                path: path.to_path_buf(),
                language: language.to_string(),
            })?;

        let root = tree.root_node();
        let mut classes = Vec::new();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            let declaration = match child.kind() {
                "export_statement" => child.child_by_field_name("declaration"),
                _ => Some(child),
            };
            if let Some(node) = declaration {
                if matches!(
                    node.kind(),
                    "class_declaration" | "abstract_class_declaration"
                ) {
                    if let Some(class) = self.process_class(node, code) {
                        classes.push(class);
                    }
                }
            }
        }

        Ok(classes)
    }

    fn process_class(&self, node: Node, code: &str) -> Option<ClassSchema> {
        let name = node
            .child_by_field_name("name")
            .or_else(|| {
                node.children(&mut node.walk())
                    .find(|n| n.kind() == "type_identifier")
            })
            .map(|n| &code[n.byte_range()])?;

        let mut class = ClassSchema::new(name);
        if let Some(body) = node.child_by_field_name("body") {
            let mut cursor = body.walk();
            for child in body.children(&mut cursor) {
                if matches!(
                    child.kind(),
                    "public_field_definition" | "property_declaration"
                ) {
                    if let Some(property) = self.process_property(child, code) {
                        class.properties.push(property);
                    }
                }
            }
        }

        Some(class)
    }

    fn process_property(&self, node: Node, code: &str) -> Option<PropertySchema> {
        let name_node = node.child_by_field_name("name")?;
        let name = code[name_node.byte_range()].trim_matches(|c| c == '\'' || c == '"');

        // Without an annotation the type comes from a literal or `new`
        // initializer; anything else documents as `any`.
        let declared_type = node
            .child_by_field_name("type")
            .and_then(|ann| ann.named_child(0))
            .map(|t| normalize_type_text(&code[t.byte_range()]))
            .or_else(|| {
                node.child_by_field_name("value")
                    .and_then(|value| initializer_type(value, code))
            })
            .unwrap_or_else(|| "any".to_string());

        let mut property = PropertySchema::new(name, declared_type);
        property.is_optional = node
            .children(&mut node.walk())
            .any(|c| !c.is_named() && c.kind() == "?");
        property.doc_comment = self.extract_doc_comment(&node, code);

        let mut cursor = node.walk();
        for decorator in node
            .children(&mut cursor)
            .filter(|c| c.kind() == "decorator")
        {
            if let Some(constraint) = self.process_decorator(decorator, code) {
                property.constraints.push(constraint);
            }
        }

        Some(property)
    }

    /// Map a decorator such as `@Min(1)` or `@IsIn(['a', 'b'])` to a constraint
    fn process_decorator(&self, node: Node, code: &str) -> Option<Constraint> {
        let expr = node.named_child(0)?;
        let (callee, arguments) = match expr.kind() {
            "decorator_call_expression" | "call_expression" => (
                expr.child_by_field_name("function")?,
                expr.child_by_field_name("arguments"),
            ),
            _ => (expr, None),
        };
        let name = decorator_name(callee, code);

        let first_arg = arguments.and_then(|args| {
            let mut cursor = args.walk();
            args.named_children(&mut cursor)
                .find(|n| n.kind() != "comment")
        });

        if self.config.min_decorators.iter().any(|d| d == name) {
            Some(Constraint::Min(
                first_arg.map(|n| code[n.byte_range()].to_string()).unwrap_or_default(),
            ))
        } else if self.config.max_decorators.iter().any(|d| d == name) {
            Some(Constraint::Max(
                first_arg.map(|n| code[n.byte_range()].to_string()).unwrap_or_default(),
            ))
        } else if self.config.allowed_decorators.iter().any(|d| d == name) {
            Some(Constraint::AllowedValues(
                first_arg.map(|n| allowed_values(n, code)).unwrap_or_default(),
            ))
        } else {
            None
        }
    }

    /// Description text of the JSDoc block directly preceding a member
    ///
    /// Tag lines (`@param`, `@example`, ...) end the description; the
    /// remaining lines are joined with single spaces so the result fits on
    /// one annotation line.
    fn extract_doc_comment(&self, node: &Node, code: &str) -> Option<String> {
        let prev = node.prev_sibling()?;
        if prev.kind() != "comment" {
            return None;
        }
        let comment = &code[prev.byte_range()];
        if !comment.starts_with("/**") {
            return None;
        }

        let text = comment
            .trim_start_matches("/**")
            .trim_end_matches("*/")
            .lines()
            .map(|line| line.trim().trim_start_matches('*').trim())
            .take_while(|line| !line.starts_with('@'))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if text.is_empty() { None } else { Some(text) }
    }
}

fn new_parser(language: Language, name: &str) -> AnalysisResult<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| AnalysisError::ParserInit {
            language: name.to_string(),
            reason: e.to_string(),
        })?;
    Ok(parser)
}

/// Type implied by an initializer: `5` → `number`, `new Date()` → `Date`
fn initializer_type(value: Node, code: &str) -> Option<String> {
    match value.kind() {
        "number" => Some("number".to_string()),
        "string" | "template_string" => Some("string".to_string()),
        "true" | "false" => Some("boolean".to_string()),
        "new_expression" => value
            .child_by_field_name("constructor")
            .filter(|c| matches!(c.kind(), "identifier" | "type_identifier"))
            .map(|c| code[c.byte_range()].to_string()),
        _ => None,
    }
}

/// Bare name of a decorator callee, `validator.Min` → `Min`
fn decorator_name<'a>(callee: Node, code: &'a str) -> &'a str {
    match callee.kind() {
        "member_expression" | "decorator_member_expression" => callee
            .child_by_field_name("property")
            .map(|p| &code[p.byte_range()])
            .unwrap_or(&code[callee.byte_range()]),
        _ => &code[callee.byte_range()],
    }
}

fn allowed_values(node: Node, code: &str) -> Vec<String> {
    if node.kind() == "array" {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|n| n.kind() != "comment")
            .map(|n| literal_text(n, code))
            .collect()
    } else {
        vec![literal_text(node, code)]
    }
}

fn literal_text(node: Node, code: &str) -> String {
    let text = &code[node.byte_range()];
    match node.kind() {
        "string" => text.trim_matches(|c| c == '\'' || c == '"').to_string(),
        "template_string" => text.trim_matches('`').to_string(),
        _ => text.to_string(),
    }
}

/// Normalize type text so arrays always use the `T[]` spelling
pub fn normalize_type_text(text: &str) -> String {
    let text = text.trim();
    if let Some(inner) = text
        .strip_prefix("Array<")
        .and_then(|rest| rest.strip_suffix('>'))
    {
        return format!("{}[]", normalize_type_text(inner));
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(code: &str) -> Vec<ClassSchema> {
        let mut parser = TypeScriptParser::new().unwrap();
        parser.parse(code, Path::new("test.ts")).unwrap()
    }

    #[test]
    fn test_exported_and_plain_classes_are_found() {
        let classes = parse(
            r#"
export class User {
  name: string;
}

class Address {
  city: string;
}

interface Shape {
  sides: number;
}
"#,
        );

        let names: Vec<_> = classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["User", "Address"]);
    }

    #[test]
    fn test_optional_marker_and_type_text() {
        let classes = parse(
            r#"
class User {
  age?: number;
  tags: string[];
  friends: Array<User>;
  nickname;
}
"#,
        );
        let props = &classes[0].properties;

        assert_eq!(props[0].name, "age");
        assert!(props[0].is_optional);
        assert_eq!(props[0].declared_type, "number");

        assert!(!props[1].is_optional);
        assert_eq!(props[1].declared_type, "string[]");
        assert_eq!(props[2].declared_type, "User[]");
        assert_eq!(props[3].declared_type, "any");
    }

    #[test]
    fn test_jsdoc_description_stops_at_tags() {
        let classes = parse(
            r#"
class User {
  /**
   * Display name
   * shown in the header
   * @example "Ada"
   */
  name: string;

  // not a doc comment
  email: string;
}
"#,
        );
        let props = &classes[0].properties;

        assert_eq!(
            props[0].doc_comment.as_deref(),
            Some("Display name shown in the header")
        );
        assert_eq!(props[1].doc_comment, None);
    }

    #[test]
    fn test_class_validator_decorators() {
        let classes = parse(
            r#"
class Query {
  /** Sort order */
  @IsOptional()
  @MinLength(1)
  @MaxLength(10)
  @IsIn(['asc', "desc"])
  order?: string;

  @validator.Max(100)
  limit: number;
}
"#,
        );
        let props = &classes[0].properties;

        assert_eq!(props[0].doc_comment.as_deref(), Some("Sort order"));
        assert_eq!(props[0].min(), Some("1"));
        assert_eq!(props[0].max(), Some("10"));
        assert_eq!(
            props[0].allowed_values(),
            Some(&["asc".to_string(), "desc".to_string()][..])
        );
        assert!(props[0].is_optional);

        assert_eq!(props[1].min(), None);
        assert_eq!(props[1].max(), Some("100"));
    }

    #[test]
    fn test_angle_bracket_cast_in_ts_file() {
        let mut parser = TypeScriptParser::new().unwrap();
        let code = r#"
let y = <any>z;
const identity = <T>(value: T): T => value;

export class A {
  x: string;
}
"#;
        let classes = parser.parse(code, Path::new("casts.ts")).unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "A");
        assert_eq!(classes[0].properties[0].declared_type, "string");
    }

    #[test]
    fn test_tsx_extension_uses_jsx_grammar() {
        let mut parser = TypeScriptParser::new().unwrap();
        let code = r#"
const view = <div className="card">{title}</div>;

export class Props {
  title: string;
}
"#;
        let classes = parser.parse(code, Path::new("Card.tsx")).unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Props");
    }

    #[test]
    fn test_initializer_implies_type() {
        let classes = parse(
            r#"
class Defaults {
  count = 5;
  label = 'none';
  enabled = false;
  createdAt = new Date();
  items = [];
}
"#,
        );
        let types: Vec<_> = classes[0]
            .properties
            .iter()
            .map(|p| p.declared_type.as_str())
            .collect();
        assert_eq!(types, vec!["number", "string", "boolean", "Date", "any"]);
    }

    #[test]
    fn test_methods_are_not_properties() {
        let classes = parse(
            r#"
class Service {
  id: number;
  load(): void {}
}
"#,
        );
        assert_eq!(classes[0].properties.len(), 1);
    }

    #[test]
    fn test_normalize_nested_generic_array() {
        assert_eq!(normalize_type_text(" Array<Array<Tag>> "), "Tag[][]");
        assert_eq!(normalize_type_text("Map<string, Tag>"), "Map<string, Tag>");
    }
}
