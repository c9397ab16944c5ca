use super::*;

const INDEX: &str = "drycc-v1.9.0-linux-amd64\n\
                     drycc-v1.9.0-darwin-arm64\n\
                     drycc-v1.9.0-windows-amd64.exe\n";

#[test]
fn index_lines_match_the_platform_suffix() {
    assert_eq!(
        parse_index(INDEX, "-darwin-arm64"),
        Some(Published {
            version: "v1.9.0".to_string(),
            file: "drycc-v1.9.0-darwin-arm64".to_string(),
        })
    );
    assert_eq!(
        parse_index(INDEX, "-windows-amd64").map(|p| p.file),
        Some("drycc-v1.9.0-windows-amd64.exe".to_string())
    );
    assert_eq!(parse_index(INDEX, "-plan9-mips"), None);
    assert_eq!(parse_index("drycc--linux-amd64\n", "-linux-amd64"), None);
}

#[test]
fn platform_suffix_uses_release_names() {
    let suffix = platform_suffix();
    assert!(suffix.starts_with('-'));
    assert!(!suffix.contains("x86_64"));
    assert!(!suffix.contains("macos"));
}

#[test]
fn versions_compare_without_prefix() {
    assert!(same_version("v1.9.0", "1.9.0"));
    assert!(!same_version("v1.9.0", "1.8.2"));
}

#[test]
fn install_replaces_the_target() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("drycc");
    std::fs::write(&target, b"old").unwrap();

    install(b"new build", &target).unwrap();
    assert_eq!(std::fs::read(&target).unwrap(), b"new build");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
