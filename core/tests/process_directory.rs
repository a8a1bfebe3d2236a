use decomment_core::{
    CoreError, DecommentArgs, Strategy, find_files, process_directory, process_files,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const JAVA: &str = "package a;\n\n// Entry point.\npublic class Main {\n    /* unused\n       field */\n    String url = \"http://example.com\"; // site\n}\n";
const JAVA_STRIPPED: &str =
    "package a;\npublic class Main {\n    String url = \"http://example.com\";\n}";

fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

fn relative(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn rewrites_matching_files_in_nested_directories() {
    let dir = TempDir::new().unwrap();
    let top = write(dir.path(), "Main.java", JAVA);
    let nested = write(dir.path(), "src/deep/er/Other.java", JAVA);

    let mut seen = Vec::new();
    let summary = process_directory(&DecommentArgs::with_path(dir.path()), |p| {
        seen.push(p.to_path_buf())
    })
    .unwrap();

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.changed, 2);
    assert_eq!(read(&top), JAVA_STRIPPED);
    assert_eq!(read(&nested), JAVA_STRIPPED);
    assert_eq!(seen.len(), 2);
    assert!(seen.contains(&top));
    assert!(seen.contains(&nested));
}

#[test]
fn other_extensions_are_left_alone() {
    let dir = TempDir::new().unwrap();
    let kotlin = write(dir.path(), "Main.kt", JAVA);
    let backup = write(dir.path(), "Main.java.bak", JAVA);
    let java = write(dir.path(), "Main.java", JAVA);

    let files = find_files(&DecommentArgs::with_path(dir.path())).unwrap();
    assert_eq!(files, vec![java.clone()]);

    process_files(&files, Strategy::TwoPass, |_| {}).unwrap();
    assert_eq!(read(&java), JAVA_STRIPPED);
    assert_eq!(read(&kotlin), JAVA);
    assert_eq!(read(&backup), JAVA);
}

#[test]
fn custom_extension_is_honoured() {
    let dir = TempDir::new().unwrap();
    let kotlin = write(dir.path(), "Main.kt", JAVA);
    let java = write(dir.path(), "Main.java", JAVA);

    let args = DecommentArgs {
        ext: ".kt".to_string(),
        ..DecommentArgs::with_path(dir.path())
    };
    process_directory(&args, |_| {}).unwrap();

    assert_eq!(read(&kotlin), JAVA_STRIPPED);
    assert_eq!(read(&java), JAVA);
}

#[test]
fn hidden_and_ignored_files_are_visited_by_default() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".ignore", "build/\n");
    write(dir.path(), "build/Gen.java", JAVA);
    write(dir.path(), ".hidden/Secret.java", JAVA);
    write(dir.path(), "App.java", JAVA);

    let all = find_files(&DecommentArgs::with_path(dir.path())).unwrap();
    assert_eq!(
        relative(dir.path(), &all),
        vec![".hidden/Secret.java", "App.java", "build/Gen.java"]
    );

    let filtered = find_files(&DecommentArgs {
        respect_ignore: true,
        ..DecommentArgs::with_path(dir.path())
    })
    .unwrap();
    assert_eq!(relative(dir.path(), &filtered), vec!["App.java"]);
}

#[test]
fn exclude_patterns_skip_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "gen/Gen.java", JAVA);
    write(dir.path(), "App.java", JAVA);

    let files = find_files(&DecommentArgs {
        exclude: vec!["gen/".to_string()],
        ..DecommentArgs::with_path(dir.path())
    })
    .unwrap();
    assert_eq!(relative(dir.path(), &files), vec!["App.java"]);
}

#[test]
fn invalid_pattern_is_reported() {
    let dir = TempDir::new().unwrap();
    let result = find_files(&DecommentArgs {
        include: vec!["a[".to_string()],
        ..DecommentArgs::with_path(dir.path())
    });
    assert!(matches!(result, Err(CoreError::Pattern { .. })));
}

#[test]
fn files_without_comments_are_rewritten_unchanged() {
    let dir = TempDir::new().unwrap();
    let clean = write(dir.path(), "Clean.java", "class Clean {}");

    let summary = process_directory(&DecommentArgs::with_path(dir.path()), |_| {}).unwrap();

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.changed, 0);
    assert_eq!(read(&clean), "class Clean {}");
}

#[test]
fn undecodable_file_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    let first = write(dir.path(), "A.java", JAVA);
    let broken = dir.path().join("B.java");
    fs::write(&broken, [0x63, 0x6c, 0xff, 0xfe, 0x0a]).unwrap();
    let last = write(dir.path(), "C.java", JAVA);

    let mut seen = Vec::new();
    let result = process_directory(&DecommentArgs::with_path(dir.path()), |p| {
        seen.push(p.to_path_buf())
    });

    match result {
        Err(CoreError::Read { path, .. }) => assert_eq!(path, broken),
        other => panic!("expected a read error, got {other:?}"),
    }
    assert_eq!(seen, vec![first.clone(), broken.clone()]);
    assert_eq!(read(&first), JAVA_STRIPPED);
    assert_eq!(read(&last), JAVA);
    assert_eq!(fs::read(&broken).unwrap(), vec![0x63, 0x6c, 0xff, 0xfe, 0x0a]);
}

#[test]
fn lexical_strategy_protects_block_markers_in_literals() {
    let dir = TempDir::new().unwrap();
    let source = "class A {\n    String s = \"/* keep */\"; /* drop */\n}\n";
    let path = write(dir.path(), "A.java", source);

    let args = DecommentArgs {
        strategy: Strategy::Lexical,
        ..DecommentArgs::with_path(dir.path())
    };
    process_directory(&args, |_| {}).unwrap();

    assert_eq!(
        read(&path),
        "class A {\n    String s = \"/* keep */\"; \n}"
    );
}

#[cfg(unix)]
#[test]
fn symlinked_files_are_rewritten_through_the_link() {
    use std::os::unix::fs::symlink;

    let dir = TempDir::new().unwrap();
    let target = write(dir.path(), "real.txt", "int a; // c\n");
    let link = dir.path().join("Link.java");
    symlink(&target, &link).unwrap();
    let outside = write(dir.path(), "lib/Inner.java", JAVA);
    symlink(dir.path().join("lib"), dir.path().join("linked_lib")).unwrap();

    let files = find_files(&DecommentArgs::with_path(dir.path())).unwrap();
    assert_eq!(
        relative(dir.path(), &files),
        vec!["Link.java", "lib/Inner.java"]
    );

    process_files(&files, Strategy::TwoPass, |_| {}).unwrap();
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(read(&target), "int a;");
    assert_eq!(read(&outside), JAVA_STRIPPED);
}

#[cfg(unix)]
#[test]
fn dangling_symlinks_are_skipped() {
    use std::os::unix::fs::symlink;

    let dir = TempDir::new().unwrap();
    symlink(dir.path().join("missing.txt"), dir.path().join("Gone.java")).unwrap();
    write(dir.path(), "App.java", JAVA);

    let files = find_files(&DecommentArgs::with_path(dir.path())).unwrap();
    assert_eq!(relative(dir.path(), &files), vec!["App.java"]);
}
