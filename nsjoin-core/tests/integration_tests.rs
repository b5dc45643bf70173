use nsjoin_core::*;
use std::path::PathBuf;

#[test]
fn test_paths_for_every_kind() {
    let target = TargetPid::from(1);
    let paths: Vec<PathBuf> = JOIN_ORDER.iter().map(|k| target.ns_path(*k)).collect();

    assert_eq!(
        paths,
        vec![
            PathBuf::from("/proc/1/ns/ipc"),
            PathBuf::from("/proc/1/ns/uts"),
            PathBuf::from("/proc/1/ns/net"),
            PathBuf::from("/proc/1/ns/pid"),
            PathBuf::from("/proc/1/ns/mnt"),
        ]
    );
}

#[test]
fn test_malformed_target_is_accepted() {
    // Never validated: the bad value only surfaces as a path nobody can open
    let target = TargetPid::from("not a pid");
    assert_eq!(target.to_string(), "not a pid");
    assert_eq!(
        target.ns_path(NamespaceKind::Uts),
        PathBuf::from("/proc/not a pid/ns/uts")
    );
}

#[test]
fn test_relative_target_stays_under_proc() {
    let target = TargetPid::from("../1");
    let path = target.ns_path(NamespaceKind::Mnt);
    assert!(path.starts_with("/proc"));
    assert_eq!(path, PathBuf::from("/proc/../1/ns/mnt"));
}

#[test]
fn test_kind_serialization() {
    let json = serde_json::to_string(&JOIN_ORDER).unwrap();
    assert_eq!(json, r#"["ipc","uts","net","pid","mnt"]"#);
}

#[test]
fn test_target_from_number() {
    let target = TargetPid::from(4321);
    assert_eq!(target.to_string(), "4321");
    assert_eq!(target.as_os_str(), "4321");
}
