use super::*;

#[test]
fn bare_hosts_get_http() {
    assert_eq!(
        normalize_controller("drycc.example.com/"),
        "http://drycc.example.com"
    );
    assert_eq!(
        normalize_controller(" https://drycc.example.com:8443// "),
        "https://drycc.example.com:8443"
    );
}
