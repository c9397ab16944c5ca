use super::*;

#[test]
fn defaults_request_three_hundred_lines() {
    let query = logs_query(&LogOptions::default());
    assert_eq!(
        query,
        vec![
            ("lines", "300".to_string()),
            ("follow", "false".to_string()),
            ("timeout", "300".to_string()),
        ]
    );
}

#[test]
fn filters_are_appended_when_set() {
    let opts = LogOptions {
        lines: 10,
        follow: true,
        timeout: 30,
        ptype: Some("web".to_string()),
        pod: Some("web-abc-123".to_string()),
        container: Some("sidecar".to_string()),
    };
    let query = logs_query(&opts);
    assert_eq!(query[0], ("lines", "10".to_string()));
    assert_eq!(query[1], ("follow", "true".to_string()));
    assert!(query.contains(&("ptype", "web".to_string())));
    assert!(query.contains(&("pod_id", "web-abc-123".to_string())));
    assert!(query.contains(&("container", "sidecar".to_string())));
}
