use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn config_pairs_keep_order_and_last_value() {
    let parsed = parse_config(&strings(&["B=2", "A=x=y", "B=3", "EMPTY="])).unwrap();
    assert_eq!(
        parsed,
        vec![
            ("B".to_string(), "3".to_string()),
            ("A".to_string(), "x=y".to_string()),
            ("EMPTY".to_string(), String::new()),
        ]
    );
}

#[test]
fn malformed_config_names_the_token() {
    let err = parse_config(&strings(&["OK=1", "bad key=1"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "'bad key=1' does not match the pattern 'key=var', ex: MODE=test"
    );
}

#[test]
fn limits_require_lowercase_ptypes() {
    let parsed = parse_limits(&strings(&["web=std1.large.c1m1", "worker-2=std1"])).unwrap();
    assert_eq!(parsed["web"], "std1.large.c1m1");
    assert_eq!(parsed["worker-2"], "std1");
    assert!(parse_limits(&strings(&["Web=std1"])).is_err());
    assert!(parse_limits(&strings(&["web"])).is_err());
}

#[test]
fn volume_paths_must_be_absolute() {
    let parsed = parse_volume_paths(&strings(&["web=/data/files"])).unwrap();
    assert_eq!(parsed["web"], "/data/files");
    let err = parse_volume_paths(&strings(&["web=data"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "'web=data' does not match the pattern 'ptype=/path', ex: web=/data"
    );
}

#[test]
fn scale_rejects_missing_counts() {
    let parsed = parse_scale(&strings(&["web=2", "worker=0"])).unwrap();
    assert_eq!(parsed["web"], 2);
    assert_eq!(parsed["worker"], 0);
    let err = parse_scale(&strings(&["test"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "'test' does not match the pattern 'ptype=num', ex: web=2"
    );
}

#[test]
fn sizes_are_whole_gigabytes() {
    assert!(check_size("2G").is_ok());
    assert!(check_size("10g").is_ok());
    for bad in ["500K", "0G", "G", "1.5G", "2Gi"] {
        assert!(check_size(bad).is_err(), "{bad}");
    }
    assert_eq!(
        check_size("500K").unwrap_err().to_string(),
        "500K doesn't fit format #unit\nExamples: 2G 2g"
    );
}

#[test]
fn bare_domains_expand_under_the_controller() {
    assert_eq!(expand_url("drycc.foo.com", "test.com"), "test.com");
    assert_eq!(expand_url("drycc.foo.com", "test"), "test.foo.com");
    assert_eq!(expand_url("localhost", "test"), "test");
}

#[test]
fn env_files_skip_comments_and_exports() {
    let parsed = parse_env_file("# comment\n\nexport A=1\nB=two words\n").unwrap();
    assert_eq!(
        parsed,
        vec![
            ("A".to_string(), "1".to_string()),
            ("B".to_string(), "two words".to_string()),
        ]
    );
}

#[test]
fn versions_accept_an_optional_prefix() {
    assert_eq!(parse_version("v3").unwrap(), 3);
    assert_eq!(parse_version("12").unwrap(), 12);
    assert_eq!(
        parse_version("latest").unwrap_err().to_string(),
        "latest is not a valid release version, ex: v2"
    );
}

#[test]
fn procfiles_map_ptypes_to_commands() {
    let parsed = parse_procfile("web: ./server --port 8000\n# note\nworker: ./work\n").unwrap();
    assert_eq!(parsed["web"], "./server --port 8000");
    assert_eq!(parsed["worker"], "./work");
    assert!(parse_procfile("just a command").is_err());
}

#[test]
fn volume_urls_split_name_and_path() {
    assert_eq!(
        parse_volume_url("vol://data/a/b.txt"),
        Some(("data".to_string(), "a/b.txt".to_string()))
    );
    assert_eq!(
        parse_volume_url("vol://data"),
        Some(("data".to_string(), String::new()))
    );
    assert_eq!(parse_volume_url("vol:///x"), None);
    assert_eq!(parse_volume_url("/local/file"), None);
}

#[test]
fn lists_drop_blank_items() {
    assert_eq!(split_list("web, worker,,"), vec!["web", "worker"]);
}
