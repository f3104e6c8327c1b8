use classdoc::{AnnotationKind, ClassTransformer, ElementError, TypeScriptProject};
use std::path::Path;

fn transformer() -> ClassTransformer<TypeScriptProject> {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/typescript");
    let project = TypeScriptProject::new().unwrap().with_root(fixtures);
    ClassTransformer::new(project, AnnotationKind::SuccessType)
}

#[test]
fn test_self_reference_fails_fast() {
    let mut transformer = transformer();
    let err = transformer
        .transform(Path::new("cyclic.dto.ts"), "Category", "")
        .unwrap_err();

    match err {
        ElementError::CyclicClassReference { chain } => {
            assert_eq!(chain, vec!["Category", "Category"]);
        }
        other => panic!("expected a cyclic reference, got {other}"),
    }
}

#[test]
fn test_indirect_cycle_reports_full_chain() {
    let mut transformer = transformer();
    let err = transformer
        .transform(Path::new("cyclic.dto.ts"), "Menu", "")
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Cyclic class reference: Menu -> Folder -> Menu"
    );
}

#[test]
fn test_cycle_detected_from_any_member() {
    let mut transformer = transformer();

    // Starting below the cycle still loops back through Menu
    assert!(
        transformer
            .transform(Path::new("cyclic.dto.ts"), "Folder", "")
            .is_err()
    );
}
