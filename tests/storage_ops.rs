//! Integration tests for the storage layer.

use hive_workdir::{storage, SandboxResolver, SessionIdentity, StorageError, WorkdirError};
use tempfile::TempDir;

fn identity() -> SessionIdentity {
    SessionIdentity::new("ws1", "agent1", "sess1")
}

#[test]
fn write_then_read_round_trips_within_the_session() {
    let root = TempDir::new().unwrap();
    let resolver = SandboxResolver::with_root(root.path(), false);

    storage::write_file(&resolver, &identity(), "notes.txt", b"hello").unwrap();
    let contents = storage::read_file(&resolver, &identity(), "notes.txt").unwrap();
    assert_eq!(contents, b"hello");

    // the file landed inside the session directory, nowhere else
    assert!(root.path().join("ws1/agent1/sess1/notes.txt").is_file());
}

#[test]
fn write_requires_an_existing_parent() {
    let root = TempDir::new().unwrap();
    let resolver = SandboxResolver::with_root(root.path(), false);

    let result = storage::write_file(&resolver, &identity(), "no-such-dir/a.txt", b"x");
    assert!(matches!(result, Err(StorageError::DirectoryNotFound(_))));

    storage::create_directory(&resolver, &identity(), "no-such-dir").unwrap();
    storage::write_file(&resolver, &identity(), "no-such-dir/a.txt", b"x").unwrap();
}

#[test]
fn missing_parent_error_cites_the_callers_path() {
    let root = TempDir::new().unwrap();
    let resolver = SandboxResolver::with_root(root.path(), false);

    let err = storage::write_file(&resolver, &identity(), "no-such-dir/a.txt", b"x").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("no-such-dir"));
    // the resolved session-dir location must not leak
    assert!(!message.contains(root.path().to_str().unwrap()));
}

#[test]
fn list_directory_marks_subdirectories() {
    let root = TempDir::new().unwrap();
    let resolver = SandboxResolver::with_root(root.path(), false);

    storage::create_directory(&resolver, &identity(), "sub").unwrap();
    storage::write_file(&resolver, &identity(), "a.txt", b"a").unwrap();

    let entries = storage::list_directory(&resolver, &identity(), "").unwrap();
    assert_eq!(entries, vec!["a.txt".to_string(), "sub/".to_string()]);
}

#[test]
fn list_of_missing_directory_fails_cleanly() {
    let root = TempDir::new().unwrap();
    let resolver = SandboxResolver::with_root(root.path(), false);

    let result = storage::list_directory(&resolver, &identity(), "absent");
    assert!(matches!(result, Err(StorageError::DirectoryNotFound(_))));
}

#[test]
fn delete_removes_only_files() {
    let root = TempDir::new().unwrap();
    let resolver = SandboxResolver::with_root(root.path(), false);

    storage::create_directory(&resolver, &identity(), "sub").unwrap();
    let result = storage::delete_file(&resolver, &identity(), "sub");
    assert!(matches!(result, Err(StorageError::NotAFile(_))));

    storage::write_file(&resolver, &identity(), "gone.txt", b"x").unwrap();
    storage::delete_file(&resolver, &identity(), "gone.txt").unwrap();
    let result = storage::read_file(&resolver, &identity(), "gone.txt");
    assert!(matches!(result, Err(StorageError::FileNotFound(_))));
}

#[test]
fn storage_refuses_escaping_paths() {
    let root = TempDir::new().unwrap();
    let resolver = SandboxResolver::with_root(root.path(), false);

    let result = storage::read_file(&resolver, &identity(), "../../../etc/passwd");
    match result {
        Err(StorageError::Sandbox(e)) => {
            assert!(e.to_string().contains("outside the session sandbox"));
        }
        other => panic!("expected sandbox rejection, got {:?}", other),
    }
}

#[test]
fn pseudo_absolute_writes_stay_in_the_sandbox() {
    let root = TempDir::new().unwrap();
    let resolver = SandboxResolver::with_root(root.path(), false);

    storage::create_directory(&resolver, &identity(), "/etc").unwrap();
    storage::write_file(&resolver, &identity(), "/etc/passwd", b"not the real one").unwrap();

    assert!(root.path().join("ws1/agent1/sess1/etc/passwd").is_file());
}

#[test]
fn errors_convert_into_the_umbrella_type() {
    let root = TempDir::new().unwrap();
    let resolver = SandboxResolver::with_root(root.path(), false);

    fn read_via_umbrella(
        resolver: &SandboxResolver,
        identity: &SessionIdentity,
        path: &str,
    ) -> Result<Vec<u8>, WorkdirError> {
        Ok(storage::read_file(resolver, identity, path)?)
    }

    let err = read_via_umbrella(&resolver, &identity(), "missing.txt").unwrap_err();
    assert!(matches!(err, WorkdirError::Storage(StorageError::FileNotFound(_))));
    assert!(err.to_string().contains("missing.txt"));
}
