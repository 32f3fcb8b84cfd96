use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn unprovisioned_secrets_fail_with_diagnostic() {
    // The conventional secret paths under /run/secrets are not
    // provisioned in the test environment, so the binary must exit
    // non-zero with a diagnostic on stderr naming the failing secret.
    let mut cmd = Command::cargo_bin("ssh-proxy-setup").unwrap();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error writing configuration"))
        .stderr(predicate::str::contains("UAA client password"));
}
