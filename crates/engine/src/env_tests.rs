// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[yare::parameterized(
    range      = { "0,50", Some((0, 50)) },
    spaced     = { " 10 , 20 ", Some((10, 20)) },
    fixed      = { "25", Some((25, 25)) },
    inverted   = { "50,10", None },
    three      = { "1,2,3", None },
    not_number = { "a,b", None },
    empty      = { "", None },
)]
fn jitter_parsing(text: &str, expected: Option<(u64, u64)>) {
    let expected = expected.map(|(a, b)| (Duration::from_millis(a), Duration::from_millis(b)));
    assert_eq!(parse_jitter_ms(text), expected);
}

#[test]
#[serial(env)]
fn timeout_override_reads_milliseconds() {
    std::env::set_var("SWEEP_TIMEOUT_MS", "1500");
    assert_eq!(timeout_override(), Some(Duration::from_millis(1500)));
    std::env::set_var("SWEEP_TIMEOUT_MS", "soon");
    assert_eq!(timeout_override(), None);
    std::env::remove_var("SWEEP_TIMEOUT_MS");
    assert_eq!(timeout_override(), None);
}

#[test]
#[serial(env)]
fn health_timeout_defaults_to_ten_seconds() {
    std::env::remove_var("SWEEP_HEALTH_TIMEOUT_MS");
    assert_eq!(health_check_timeout(), Duration::from_secs(10));
    std::env::set_var("SWEEP_HEALTH_TIMEOUT_MS", "200");
    assert_eq!(health_check_timeout(), Duration::from_millis(200));
    std::env::remove_var("SWEEP_HEALTH_TIMEOUT_MS");
}

#[test]
#[serial(env)]
fn jitter_override_reads_env() {
    std::env::set_var("SWEEP_JITTER_MS", "5,9");
    assert_eq!(
        jitter_override(),
        Some((Duration::from_millis(5), Duration::from_millis(9)))
    );
    std::env::remove_var("SWEEP_JITTER_MS");
    assert_eq!(jitter_override(), None);
}
