use super::*;

fn client(controller: &str, token: &str) -> Client {
    let mut profile = Profile::new(controller, true);
    profile.token = token.to_string();
    Client::new(&profile).unwrap()
}

#[test]
fn base_url_drops_trailing_slash() {
    let c = client("http://drycc.example.com/", "");
    assert_eq!(c.base_url(), "http://drycc.example.com");
    assert_eq!(c.url("/v2/apps/"), "http://drycc.example.com/v2/apps/");
}

#[test]
fn version_header_is_always_sent() {
    let headers = client("http://d.example.com", "").default_headers();
    assert_eq!(headers.get(VERSION_HEADER).map(String::as_str), Some(API_VERSION));
    assert!(!headers.contains_key("Authorization"));

    let headers = client("http://d.example.com", "abc").default_headers();
    assert_eq!(
        headers.get("Authorization").map(String::as_str),
        Some("Bearer abc")
    );
}

#[test]
fn versions_compare_on_major_and_minor() {
    assert!(versions_compatible("2.3", "2.3"));
    assert!(versions_compatible("2.3", "v2.3.7"));
    assert!(!versions_compatible("2.3", "2.4"));
    assert!(!versions_compatible("2.3", "3.3"));
    assert!(versions_compatible("2", "2.0"));
}

#[test]
fn unknown_server_version_is_compatible() {
    let c = client("http://d.example.com", "");
    assert_eq!(c.server_version(), None);
    assert!(c.check_api_compatibility().is_ok());
}

#[test]
fn recorded_mismatch_is_reported() {
    let c = client("http://d.example.com", "");
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(API_VERSION_HEADER, "9.1".parse().unwrap());
    c.record_server_version(&headers);

    assert_eq!(c.server_version().as_deref(), Some("9.1"));
    match c.check_api_compatibility() {
        Err(ApiError::ApiMismatch { client, server }) => {
            assert_eq!(client, API_VERSION);
            assert_eq!(server, "9.1");
        }
        other => panic!("expected mismatch, got {other:?}"),
    }
}

#[test]
fn segments_are_percent_encoded() {
    assert_eq!(segment("web-1.v2_x~"), "web-1.v2_x~");
    assert_eq!(segment("a b/c"), "a%20b%2Fc");
    assert_eq!(segment("a+b"), "a%2Bb");
}

#[test]
fn filer_paths_keep_separators_and_encode_spaces() {
    assert_eq!(
        volumes::filer_path("myapp", "data", "/dir/my file.txt"),
        "/v2/apps/myapp/volumes/data/filer/dir/my%20file.txt"
    );
    assert_eq!(
        volumes::filer_path("myapp", "data", ""),
        "/v2/apps/myapp/volumes/data/filer/"
    );
}

/// Has no `Default`, like most list item types.
#[derive(Debug, serde::Deserialize, PartialEq)]
struct Item {
    id: String,
}

#[test]
fn pages_decode_items_without_default() {
    let page: Page<Item> = serde_json::from_str(
        r#"{"count": 2, "next": "http://d/v2/apps/?page=2", "results": [{"id": "a"}]}"#,
    )
    .unwrap();
    assert_eq!(page.count, 2);
    assert_eq!(page.results, vec![Item { id: "a".into() }]);

    let empty: Page<Item> = serde_json::from_str("{}").unwrap();
    assert!(empty.results.is_empty());
    assert_eq!(empty.next, None);
}
