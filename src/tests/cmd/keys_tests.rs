use super::*;

#[test]
fn abbreviates_long_key_bodies() {
    let key = "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABAQC7 user@host";
    assert_eq!(abbreviate(key), "ssh-rsa AAAAB3NzaC...ABAAABAQC7 user@host");
}

#[test]
fn short_keys_pass_through() {
    assert_eq!(abbreviate("ssh-ed25519 AAAA me"), "ssh-ed25519 AAAA me");
    assert_eq!(abbreviate("garbage"), "garbage");
}
