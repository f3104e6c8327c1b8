use classdoc::{AnnotationKind, ClassTransformer, TypeScriptProject};
use std::path::{Path, PathBuf};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/typescript")
}

fn transformer(kind: AnnotationKind) -> ClassTransformer<TypeScriptProject> {
    let project = TypeScriptProject::new().unwrap().with_root(fixtures());
    ClassTransformer::new(project, kind)
}

#[test]
fn test_user_dto_renders_in_declaration_order() {
    let mut transformer = transformer(AnnotationKind::SuccessType);
    let fragments = transformer
        .transform(Path::new("user.dto.ts"), "UserDto", "")
        .unwrap();

    let contents: Vec<&str> = fragments.iter().map(|f| f.content()).collect();
    assert_eq!(
        contents,
        vec![
            "{Number} id Unique id",
            "{String {1~10}=a,b } name Display name",
            "{Number {0~} } [age] age",
            "{String=admin,member } role Account role",
            "{Object} address Home address",
            "{String} address.city address > City name",
            "{String {5~10} } address.zip address > Postal code",
            "{Object[]} [tags] tags",
            "{String} tags.label tags > label",
            "{Object} preferences preferences",
            "{Date} createdAt createdAt",
            "{Any} payload payload",
        ]
    );
}

#[test]
fn test_param_mode_tags_every_line() {
    let mut transformer = transformer(AnnotationKind::ParamType);
    let fragments = transformer
        .transform(Path::new("user.dto.ts"), "Address", "")
        .unwrap();

    let lines: Vec<String> = fragments.iter().map(|f| f.source_line()).collect();
    assert_eq!(
        lines,
        vec![
            "@apiParam {String} city City name\n",
            "@apiParam {String {5~10} } zip Postal code\n",
        ]
    );
}

#[test]
fn test_empty_class_and_interface() {
    let mut transformer = transformer(AnnotationKind::SuccessType);

    let fragments = transformer
        .transform(Path::new("user.dto.ts"), "Empty", "")
        .unwrap();
    assert!(fragments.is_empty());

    // Interfaces are not classes and cannot be a root
    let result = transformer.transform(Path::new("user.dto.ts"), "Preferences", "");
    assert!(result.is_err());
}

#[test]
fn test_repeated_transforms_share_one_file_load() {
    let mut transformer = transformer(AnnotationKind::SuccessType);
    let first = transformer
        .transform(Path::new("user.dto.ts"), "UserDto", "")
        .unwrap();
    let second = transformer
        .transform(Path::new("user.dto.ts"), "UserDto", "")
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(transformer.analyzer().loaded_files(), 1);
}

#[test]
fn test_ts_file_with_angle_bracket_cast() {
    let mut transformer = transformer(AnnotationKind::SuccessType);
    let fragments = transformer
        .transform(Path::new("casts.ts"), "Coordinates", "")
        .unwrap();

    let contents: Vec<&str> = fragments.iter().map(|f| f.content()).collect();
    assert_eq!(
        contents,
        vec![
            "{Number {-90~90} } lat Latitude",
            "{Number} lng lng",
            "{Any} label label",
        ]
    );
}
