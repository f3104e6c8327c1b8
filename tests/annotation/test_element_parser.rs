use classdoc::{AnnotationKind, Element, ElementError, ElementParser, TypeScriptProject};
use std::fs;
use tempfile::TempDir;

const ORDER: &str = r#"
export class Item {
  /** Stock keeping unit */
  sku: string;
  quantity: number;
}

export class Order {
  /** Order lines */
  items: Item[];
  note?: string;
}
"#;

fn write_order(dir: &TempDir) {
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/order.ts"), ORDER).unwrap();
}

#[test]
fn test_parse_elements_replaces_trigger() {
    let temp_dir = TempDir::new().unwrap();
    write_order(&temp_dir);

    let project = TypeScriptProject::new().unwrap().with_root(temp_dir.path());
    let mut parser = ElementParser::new(project, AnnotationKind::SuccessType);

    let trigger = Element::class_element(AnnotationKind::SuccessType, "(src/order.ts) {Order}");
    let mut elements = vec![trigger.clone()];
    parser.parse_elements(&mut elements, &trigger);

    let sources: Vec<&str> = elements.iter().map(|e| e.source.as_str()).collect();
    assert_eq!(
        sources,
        vec![
            "@apiSuccess {Object[]} items Order lines\n",
            "@apiSuccess {String} items.sku items > Stock keeping unit\n",
            "@apiSuccess {Number} items.quantity items > quantity\n",
            "@apiSuccess {String} [note] note\n",
        ]
    );
    assert!(elements.iter().all(|e| e.name == "apisuccess"));
    assert!(elements.iter().all(|e| e.source_name == "apiSuccess"));
}

#[test]
fn test_two_elements_share_the_session() {
    let temp_dir = TempDir::new().unwrap();
    write_order(&temp_dir);

    let project = TypeScriptProject::new().unwrap().with_root(temp_dir.path());
    let mut parser = ElementParser::new(project, AnnotationKind::ParamType);

    let first = Element::class_element(AnnotationKind::ParamType, "(src/order.ts) {Item}");
    let second = Element::class_element(AnnotationKind::ParamType, "(src/order.ts) {Order}");

    let mut elements = vec![first.clone()];
    parser.parse_elements(&mut elements, &first);
    elements.push(second.clone());
    parser.parse_elements(&mut elements, &second);

    assert_eq!(elements.len(), 2 + 4);
    assert_eq!(elements[0].content, "{String} sku Stock keeping unit");
    assert_eq!(parser.transformer_mut().analyzer().loaded_files(), 1);
}

#[test]
fn test_unreadable_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let project = TypeScriptProject::new().unwrap().with_root(temp_dir.path());
    let mut parser = ElementParser::new(project, AnnotationKind::SuccessType);

    let trigger = Element::class_element(AnnotationKind::SuccessType, "(missing.ts) {Order}");
    let mut elements = vec![trigger.clone()];
    let err = parser.try_parse_elements(&mut elements, &trigger).unwrap_err();

    assert!(matches!(err, ElementError::Analysis(_)));
    assert_eq!(err.status_code(), "FILE_READ_ERROR");
    assert!(elements.is_empty());
}

#[test]
fn test_earlier_elements_survive_a_failure() {
    let temp_dir = TempDir::new().unwrap();
    write_order(&temp_dir);

    let project = TypeScriptProject::new().unwrap().with_root(temp_dir.path());
    let mut parser = ElementParser::new(project, AnnotationKind::SuccessType);

    let good = Element::class_element(AnnotationKind::SuccessType, "(src/order.ts) {Item}");
    let bad = Element::class_element(AnnotationKind::SuccessType, "src/order.ts Order");

    let mut elements = vec![good.clone()];
    parser.parse_elements(&mut elements, &good);
    elements.push(bad.clone());
    parser.parse_elements(&mut elements, &bad);

    assert_eq!(elements.len(), 2);
    assert_eq!(elements[1].content, "{Number} quantity quantity");
}

#[test]
fn test_borrowed_session_outlives_the_parser() {
    let temp_dir = TempDir::new().unwrap();
    write_order(&temp_dir);

    let mut project = TypeScriptProject::new().unwrap().with_root(temp_dir.path());
    {
        let mut parser = ElementParser::new(&mut project, AnnotationKind::SuccessType);
        let fragments = parser.render("(src/order.ts) {Item}").unwrap();
        assert_eq!(fragments.len(), 2);
    }

    assert_eq!(project.loaded_files(), 1);
}
