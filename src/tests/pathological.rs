use super::*;
use ntest::timeout;

// input: python3 -c 'n = 50000; print("*a " * n)'
#[test]
#[timeout(4000)]
fn pathological_emphasis() {
    let n = 50_000;
    let input = "*a ".repeat(n);
    let out = compile_str(&input, &Options::default()).unwrap();
    assert!(out.contains("<em>"));
}

#[test]
#[timeout(4000)]
fn pathological_brackets() {
    let n = 20_000;
    let input = format!("{}{}", "[".repeat(n), "]".repeat(n));
    let out = compile_str(&input, &Options::default()).unwrap();
    assert!(out.contains('['));
}

#[test]
#[timeout(4000)]
fn pathological_blank_lines() {
    let n = 100_000;
    let input = "\n".repeat(n);
    compile_str(&input, &Options::default()).unwrap();
}
