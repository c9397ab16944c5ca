use super::*;

#[test]
fn statuses_map_to_kinds() {
    let cases = [
        (StatusCode::UNAUTHORIZED, "Unauthorized"),
        (StatusCode::FORBIDDEN, "Forbidden"),
        (StatusCode::NOT_FOUND, "NotFound"),
        (StatusCode::CONFLICT, "Conflict"),
        (StatusCode::UNPROCESSABLE_ENTITY, "Validation"),
        (StatusCode::BAD_GATEWAY, "Server"),
        (StatusCode::IM_A_TEAPOT, "Unexpected"),
    ];
    for (status, kind) in cases {
        let err = from_status(status, b"");
        let got = match err {
            ApiError::Unauthorized(_) => "Unauthorized",
            ApiError::Forbidden(_) => "Forbidden",
            ApiError::NotFound(_) => "NotFound",
            ApiError::Conflict(_) => "Conflict",
            ApiError::Validation(_) => "Validation",
            ApiError::Server { .. } => "Server",
            ApiError::Unexpected { .. } => "Unexpected",
            _ => "other",
        };
        assert_eq!(got, kind, "status {status}");
        assert_eq!(from_status(status, b"").status(), Some(status));
    }
}

#[test]
fn detail_bodies_render_the_detail() {
    let err = from_status(StatusCode::NOT_FOUND, br#"{"detail":"Not found."}"#);
    assert_eq!(err.to_string(), "Not Found: Not found.");
    assert!(err.is_not_found());
}

#[test]
fn validation_messages_are_verbatim_per_field() {
    let body = br#"{"id":["App with this id already exists.","Too long."],"owner":"required"}"#;
    let err = from_status(StatusCode::BAD_REQUEST, body);
    assert_eq!(
        err.to_string(),
        "id: App with this id already exists.\nid: Too long.\nowner: required"
    );
}

#[test]
fn plain_text_bodies_are_trimmed() {
    assert_eq!(body_messages(b"  upstream timeout \n"), vec!["upstream timeout"]);
    assert!(body_messages(b"").is_empty());
}

#[test]
fn empty_bodies_fall_back_to_the_reason_phrase() {
    let err = from_status(StatusCode::SERVICE_UNAVAILABLE, b"");
    assert_eq!(err.to_string(), "503 Service Unavailable: Service Unavailable");
}
