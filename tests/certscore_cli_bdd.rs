//! Behaviour tests for the `certscore` CLI.

use assert_cmd::Command;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;
use std::process::Output;

#[derive(Default)]
struct CliContext {
    output: RefCell<Option<Output>>,
}

#[fixture]
fn cli_context() -> CliContext {
    CliContext::default()
}

#[given("the certscore binary")]
fn given_binary(#[from(cli_context)] ctx: &CliContext) {
    let _ = ctx;
}

#[when("running with \"{args}\" and input \"{input}\"")]
#[expect(
    clippy::needless_pass_by_value,
    reason = "BDD macro injects owned value"
)]
#[expect(clippy::expect_used, reason = "tests should fail loudly")]
fn when_running(args: String, input: String, #[from(cli_context)] ctx: &CliContext) {
    let output = Command::cargo_bin("certscore")
        .unwrap_or_else(|e| panic!("failed to locate certscore binary: {e}"))
        .args(args.split_whitespace())
        .write_stdin(input)
        .output()
        .expect("failed to run certscore");
    *ctx.output.borrow_mut() = Some(output);
}

#[then("it exits successfully")]
#[expect(clippy::expect_used, reason = "tests should fail loudly")]
fn then_success(#[from(cli_context)] ctx: &CliContext) {
    let status = ctx.output.borrow().as_ref().expect("missing output").status;
    assert!(status.success());
}

#[then("it exits with an error")]
#[expect(clippy::expect_used, reason = "tests should fail loudly")]
fn then_error(#[from(cli_context)] ctx: &CliContext) {
    let status = ctx.output.borrow().as_ref().expect("missing output").status;
    assert!(!status.success());
}

#[then("the report total is {expected:u64}")]
#[expect(clippy::expect_used, reason = "tests should fail loudly")]
fn then_total(expected: u64, #[from(cli_context)] ctx: &CliContext) {
    let output = ctx.output.borrow();
    let stdout = &output.as_ref().expect("missing output").stdout;
    let report: Value = serde_json::from_slice(stdout).expect("report is JSON");
    assert_eq!(report["totalPoints"].as_u64(), Some(expected));
}

#[scenario(path = "tests/features/certscore_cli.feature", index = 0)]
fn scores_stdin(cli_context: CliContext) {
    let _ = cli_context;
}

#[scenario(path = "tests/features/certscore_cli.feature", index = 1)]
fn invalid_flag(cli_context: CliContext) {
    let _ = cli_context;
}
