use super::*;

#[test]
fn frames_carry_a_channel_prefix() {
    assert_eq!(Frame::Stdin(b"ls\n".to_vec()).encode(), b"\x00ls\n".to_vec());
    assert_eq!(Frame::decode(b"\x01hello"), Some(Frame::Stdout(b"hello".to_vec())));
    assert_eq!(Frame::decode(b"\x02oops"), Some(Frame::Stderr(b"oops".to_vec())));
    assert_eq!(Frame::decode(b"\x09junk"), None);
    assert_eq!(Frame::decode(b""), None);
}

#[test]
fn resize_frames_are_json() {
    let frame = Frame::Resize {
        width: 120,
        height: 40,
    };
    let encoded = frame.encode();
    assert_eq!(encoded[0], 4);
    let body: serde_json::Value = serde_json::from_slice(&encoded[1..]).unwrap();
    assert_eq!(body, serde_json::json!({"Width": 120, "Height": 40}));
    assert_eq!(Frame::decode(&encoded), Some(frame));
}

#[test]
fn close_frames_name_the_finished_channel() {
    assert_eq!(Frame::Close(0).encode(), vec![255, 0]);
    assert_eq!(Frame::decode(&[255, 0]), Some(Frame::Close(0)));
    assert_eq!(Frame::decode(&[255]), None);
}

#[test]
fn input_ends_with_a_stdin_close_frame() {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let frames = rt.block_on(async {
        let (tx, mut rx) = mpsc::channel(16);
        pump_input(&b"echo hi\n"[..], tx).await;
        let mut frames = Vec::new();
        while let Some(frame) = rx.recv().await {
            frames.push(frame);
        }
        frames
    });
    assert_eq!(
        frames,
        vec![Frame::Stdin(b"echo hi\n".to_vec()), Frame::Close(0)]
    );
}

#[test]
fn status_frames_map_to_exit_codes() {
    assert_eq!(exit_code(br#"{"metadata":{},"status":"Success"}"#), 0);
    let failed = br#"{
        "status": "Failure",
        "reason": "NonZeroExitCode",
        "details": {"causes": [{"reason": "ExitCode", "message": "42"}]}
    }"#;
    assert_eq!(exit_code(failed), 42);
    assert_eq!(exit_code(br#"{"status":"Failure","reason":"InternalError"}"#), 1);
    assert_eq!(exit_code(b"not json"), 1);
}

#[test]
fn exec_url_follows_the_controller_scheme() {
    assert_eq!(
        exec_url("http://drycc.example.com", "myapp", "web-1").unwrap(),
        "ws://drycc.example.com/v2/apps/myapp/pods/web-1/exec/"
    );
    assert_eq!(
        exec_url("https://drycc.example.com:8443/", "myapp", "web-1").unwrap(),
        "wss://drycc.example.com:8443/v2/apps/myapp/pods/web-1/exec/"
    );
    assert!(exec_url("not a url", "myapp", "web-1").is_err());
}
