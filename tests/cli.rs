use std::process::{Command, Output};

fn cubic(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cubic"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run cubic")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn three_real_roots() {
    let output = cubic(&["1", "-6", "11", "-6"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0.9999999999999998\n3\n2\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn conjugate_pair() {
    let output = cubic(&["1", "0", "0", "-8"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "2\n-1 - 1.732050807568877 i\n-1 + 1.732050807568877 i\n"
    );
}

#[test]
fn fractional_coefficients() {
    let output = cubic(&["0.5", "0.25", "-0.125", "0.0625"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "-0.9196433776070806\n\
         0.2098216888035403 - 0.3031453646035996 i\n\
         0.2098216888035403 + 0.3031453646035996 i\n"
    );
}

#[test]
fn leading_zero_is_rejected() {
    let output = cubic(&["0", "1", "2", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "cubic: sorry buddy, that's a quadratic.\n");
}

#[test]
fn wrong_argument_count() {
    let output = cubic(&["1", "2", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        stderr(&output),
        "syntax: cubic c3 c2 c1 c0\nIndicate missing terms with zeroes.\n"
    );
}

#[test]
fn unparsable_argument() {
    let output = cubic(&["1", "2", "three", "4"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "cubic: cannot parse three\n");
}

#[test]
fn hex_coefficients() {
    let output = cubic(&["0x10", "-0x60", "0xB0", "-0x60"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0.9999999999999998\n3\n2\n");
}

#[test]
fn incomplete_infinity_is_rejected() {
    let output = cubic(&["1", "infin", "1", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "cubic: cannot parse infin\n");
}

#[test]
fn near_double_root_prints_finite_roots() {
    let output = cubic(&["1", "-2.0000000088928864", "-4.0", "8.000000035571546"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-2\n2.000000004446442\n2.000000004446444\n");
}
