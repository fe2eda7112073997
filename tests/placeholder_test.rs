use monogen::naming::Scope;
use monogen::placeholder::{PlaceholderMapping, PlaceholderSubstitutor};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_project_mapping() {
    let mapping = PlaceholderMapping::for_scope(&Scope::sanitize("My Cool App!!"));
    let entries: Vec<(&str, &str)> = mapping.iter().collect();
    assert_eq!(
        entries,
        [
            ("__PROJECT_NAME__", "my-cool-app"),
            ("__SCOPE__", "my-cool-app"),
            ("__DB_NAME__", "my_cool_app"),
        ]
    );
}

#[test]
fn test_substitute_all_occurrences() {
    let substitutor =
        PlaceholderSubstitutor::new(PlaceholderMapping::for_scope(&Scope::sanitize("acme"))).unwrap();
    let out = substitutor
        .substitute("# __PROJECT_NAME__\n@__SCOPE__/server on __DB_NAME__ (__PROJECT_NAME__)")
        .unwrap();
    assert_eq!(out, "# acme\n@acme/server on acme (acme)");
}

#[test]
fn test_no_token_no_change() {
    let substitutor =
        PlaceholderSubstitutor::new(PlaceholderMapping::for_scope(&Scope::sanitize("acme"))).unwrap();
    assert_eq!(substitutor.substitute("nothing to see"), None);
}

#[test]
fn test_replacement_is_not_rescanned() {
    let mut mapping = PlaceholderMapping::new();
    mapping.insert("__A__", "__B__");
    mapping.insert("__B__", "b");
    let substitutor = PlaceholderSubstitutor::new(mapping).unwrap();

    assert_eq!(substitutor.substitute("__A__ __B__").unwrap(), "__B__ b");
}

#[test]
fn test_earlier_token_wins_on_overlap() {
    let mut mapping = PlaceholderMapping::new();
    mapping.insert("__NAME__", "first");
    mapping.insert("__NAME", "second");
    let substitutor = PlaceholderSubstitutor::new(mapping).unwrap();

    assert_eq!(substitutor.substitute("__NAME__").unwrap(), "first");
}

#[test]
fn test_substitution_is_idempotent() {
    let substitutor =
        PlaceholderSubstitutor::new(PlaceholderMapping::for_scope(&Scope::sanitize("x_y-z"))).unwrap();
    let inputs = [
        "__PROJECT_NAME__",
        "a__SCOPE__b__DB_NAME__c",
        "____SCOPE____",
        "__PROJECT_NAME____SCOPE__",
        "plain",
    ];
    for input in inputs {
        let once = substitutor.substitute(input).unwrap_or_else(|| input.to_string());
        assert_eq!(substitutor.substitute(&once), None, "second pass changed {once:?}");
    }
}

#[test]
fn test_empty_mapping() {
    let substitutor = PlaceholderSubstitutor::new(PlaceholderMapping::new()).unwrap();
    assert_eq!(substitutor.substitute("__SCOPE__"), None);
}

#[test]
fn test_substitute_tree() {
    let root = TempDir::new().unwrap();
    write(root.path(), "README.md", "# __PROJECT_NAME__\n");
    write(root.path(), "apps/server/.env", "DB=__DB_NAME__\n");
    write(root.path(), "apps/server/src/types.d.ts", "declare module '@__SCOPE__/x'\n");
    write(root.path(), "apps/server/.env.example", "DB=__DB_NAME__\n");
    write(root.path(), "notes.txt", "__PROJECT_NAME__\n");
    write(root.path(), "node_modules/pkg/README.md", "__PROJECT_NAME__\n");
    write(root.path(), "docs/plain.md", "no tokens\n");
    let substitutor =
        PlaceholderSubstitutor::new(PlaceholderMapping::for_scope(&Scope::sanitize("My App"))).unwrap();

    let rewritten = substitutor.substitute_tree(root.path()).unwrap();

    assert_eq!(rewritten, 3);
    let read = |p: &str| fs::read_to_string(root.path().join(p)).unwrap();
    assert_eq!(read("README.md"), "# my-app\n");
    assert_eq!(read("apps/server/.env"), "DB=my_app\n");
    assert_eq!(read("apps/server/src/types.d.ts"), "declare module '@my-app/x'\n");
    assert_eq!(read("apps/server/.env.example"), "DB=__DB_NAME__\n");
    assert_eq!(read("notes.txt"), "__PROJECT_NAME__\n");
    assert_eq!(read("node_modules/pkg/README.md"), "__PROJECT_NAME__\n");

    assert_eq!(substitutor.substitute_tree(root.path()).unwrap(), 0);
}

#[test]
fn test_tokens_with_pattern_syntax_match_literally() {
    let mut mapping = PlaceholderMapping::new();
    mapping.insert("${NAME}", "acme");
    mapping.insert("[a-z]+", "literal");
    let substitutor = PlaceholderSubstitutor::new(mapping).unwrap();

    assert_eq!(substitutor.substitute("abc"), None);
    assert_eq!(substitutor.substitute("${NAME} [a-z]+").unwrap(), "acme literal");
}
