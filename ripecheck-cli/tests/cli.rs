use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("check_ripe_db").unwrap()
}

#[test]
fn missing_objecttype_is_unknown() {
    cmd()
        .args(["-k", "AS3333", "-e", "(status, SINGLEVALUE, ACTIVE)"])
        .assert()
        .code(3)
        .stdout(contains("UNKNOWN - The DB objecttype"));
}

#[test]
fn missing_key_is_unknown() {
    cmd()
        .args(["-o", "aut-num", "-e", "(status, SINGLEVALUE, ACTIVE)"])
        .assert()
        .code(3)
        .stdout(contains("UNKNOWN - The DB key"));
}

#[test]
fn missing_expected_is_unknown() {
    cmd()
        .args(["-o", "aut-num", "-k", "AS3333"])
        .assert()
        .code(3)
        .stdout(contains("UNKNOWN - The expected values"));
}

#[test]
fn malformed_expectation_spec_is_unknown() {
    cmd()
        .args(["-o", "aut-num", "-k", "AS3333", "-e", "not-a-valid-spec"])
        .assert()
        .code(3)
        .stdout(contains("UNKNOWN - Malformed expectation spec"));
}

#[test]
fn unknown_match_mode_is_unknown() {
    cmd()
        .args(["-o", "aut-num", "-k", "AS3333", "-e", "(status, SOMEVALUES, ACTIVE)"])
        .assert()
        .code(3)
        .stdout(contains("UNKNOWN"));
}

#[test]
fn invalid_key_is_unknown_before_any_request() {
    cmd()
        .args(["-o", "aut-num", "-k", "AS3333 x", "-e", "(status, SINGLEVALUE, ACTIVE)"])
        .assert()
        .code(3)
        .stdout(contains("UNKNOWN - Invalid query component"));
}

#[test]
fn json_format_emits_unknown_status() {
    cmd()
        .args(["-f", "json", "-o", "aut-num", "-k", "AS3333", "-e", "junk"])
        .assert()
        .code(3)
        .stdout(contains("\"UNKNOWN\""));
}

#[test]
fn help_mentions_the_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--objecttype"))
        .stdout(contains("--expected"));
}
