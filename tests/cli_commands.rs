mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn render_initiator_unix_curl_from_session_file() {
    let ctx = TestContext::new();
    ctx.write_session();

    ctx.cli()
        .args(["render", "--role", "initiator", "--name", "Unix (curl)", "--session", "session.toml"])
        .assert()
        .success()
        .stdout("sh <(curl -sSf https://lets.tunshell.com/init.sh) L abc s3cr3t\n");
}

#[test]
fn render_remote_unix_curl_from_flags() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "render",
            "-r",
            "remote",
            "-n",
            "Unix (curl)",
            "--remote-key",
            "xyz",
            "--encryption-secret",
            "s3cr3t",
        ])
        .assert()
        .success()
        .stdout("curl -sSf https://lets.tunshell.com/init.sh | sh /dev/stdin T xyz s3cr3t\n");
}

#[test]
fn render_flags_override_session_file() {
    let ctx = TestContext::new();
    ctx.write_session();

    ctx.cli()
        .args([
            "render",
            "--role",
            "target",
            "--name",
            "Python 3",
            "--session",
            "session.toml",
            "--remote-key",
            "other",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{'p':["T","other","s3cr3t"]}"#));
}

#[test]
fn render_with_argument_override_needs_no_session() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "--role", "initiator", "--name", "Docker", "--", "L", "k1", "k2"])
        .assert()
        .success()
        .stdout("docker run --rm -it timetoogo/tunshell L k1 k2\n");
}

#[test]
fn render_rejects_unknown_method() {
    let ctx = TestContext::new();
    ctx.write_session();

    ctx.cli()
        .args(["render", "--role", "initiator", "--name", "nonexistent", "-s", "session.toml"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("'nonexistent' not found"))
        .stderr(predicate::str::contains("Unix (curl), Unix (wget), Windows (PowerShell), Docker"));
}

#[test]
fn render_rejects_method_for_other_role() {
    let ctx = TestContext::new();
    ctx.write_session();

    ctx.cli()
        .args(["render", "--role", "remote", "--name", "Docker", "-s", "session.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found for remote"));
}

#[test]
fn render_reports_missing_keys() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "--role", "remote", "--name", "Java", "--remote-key", "xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing: encryption_secret"));
}

#[test]
fn render_reports_missing_session_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "--role", "remote", "--name", "Java", "--session", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session file not found"));
}

#[test]
fn render_reports_malformed_session_file() {
    let ctx = TestContext::new();
    ctx.write_session_content("initiator_key = [\n");

    ctx.cli()
        .args(["render", "--role", "initiator", "--name", "Docker", "--session", "session.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid session file"));
}

#[test]
fn render_without_name_fails_when_not_interactive() {
    let ctx = TestContext::new();
    ctx.write_session();

    ctx.cli()
        .args(["render", "--role", "initiator", "--session", "session.toml"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pass --name"));
}

#[test]
fn rejects_invalid_role() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["list", "--role", "observer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid role 'observer'"));
}

#[test]
fn list_shows_methods_in_catalog_order() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["list", "--role", "initiator"])
        .assert()
        .success()
        .stdout(
            "Install methods for initiator:\n  \
             Unix (curl) [bash]\n  \
             Unix (wget) [bash]\n  \
             Windows (PowerShell) [powershell]\n  \
             Docker [bash] (private)\n",
        );
}

#[test]
fn list_public_only_hides_private_methods() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["ls", "--role", "remote", "--public-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Windows (PowerShell)"))
        .stdout(predicate::str::contains("Node.js").not())
        .stdout(predicate::str::contains("(private)").not());
}

#[test]
fn list_json_is_machine_readable() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["list", "--role", "remote", "--json"]).output().unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 8);
    assert_eq!(entries[0]["name"], "Unix (curl)");
    assert_eq!(entries[7]["name"], "PHP");
    assert_eq!(entries[7]["environment"], "php");
    assert_eq!(entries[7]["public_safe"], false);
}

#[test]
fn args_prints_one_argument_per_line() {
    let ctx = TestContext::new();
    ctx.write_session();

    ctx.cli()
        .args(["args", "--role", "remote", "--session", "session.toml"])
        .assert()
        .success()
        .stdout("T\nxyz\ns3cr3t\n");
}

#[test]
fn debug_logging_stays_off_stdout_and_hides_keys() {
    let ctx = TestContext::new();
    ctx.write_session();

    ctx.cli()
        .env("RUST_LOG", "debug")
        .args(["render", "--role", "initiator", "--name", "Docker", "--session", "session.toml"])
        .assert()
        .success()
        .stdout("docker run --rm -it timetoogo/tunshell L abc s3cr3t\n")
        .stderr(predicate::str::contains("rendering install command"))
        .stderr(predicate::str::contains("s3cr3t").not());
}

#[test]
fn logging_initializes_without_warning() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("RUST_LOG", "debug")
        .args(["list", "--role", "remote"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Logging disabled").not());
}
