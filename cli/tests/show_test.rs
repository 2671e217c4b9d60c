//! Integration tests for the `show` command.

mod common;

use common::{check_stdout, contig};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn show_defaults_to_reverse() {
    check_stdout(
        &["show"],
        expect![[r#"
            [ 19 18 17 16 15 14 13 12 11 10 9 8 7 6 5 4 3 2 1 0  ]
        "#]],
    );
}

#[test]
fn show_forward() {
    check_stdout(
        &["show", "--order", "forward"],
        expect![[r#"
            [ 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19  ]
        "#]],
    );
}

#[test]
fn show_with_negative_step() {
    check_stdout(
        &["show", "--order", "forward", "--start", "3", "--step", "-1"],
        expect![[r#"
            [ 3 2 1 0 -1 -2 -3 -4 -5 -6 -7 -8 -9 -10 -11 -12 -13 -14 -15 -16  ]
        "#]],
    );
}

#[test]
fn show_is_quiet_on_stderr() {
    contig().arg("show").assert().success().stderr("");
}

#[test]
fn show_verbose_logs_fill() {
    contig()
        .args(["--verbose", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("filled sample array"));
}

#[test]
fn show_overflow_fails() {
    contig()
        .args(["--no-color", "show", "--start", "9223372036854775800"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("element 8 overflows i64"));
}

#[test]
fn show_rejects_unknown_order() {
    contig()
        .args(["show", "--order", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'sideways'"));
}
