//! Brute-force properties of the range pattern compiler.
//!
//! Checks compiled patterns against naive enumeration rather than against
//! any particular decomposition: every number in the range must match,
//! every number outside it must not, including numbers of a different
//! width.

use dialrange_engine::compile_range_regex;
use regex::Regex;

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$"))
        .unwrap_or_else(|e| panic!("compiled pattern {pattern:?} is not valid regex: {e}"))
}

/// Deterministic xorshift so failing samples reproduce across runs.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

#[test]
fn exhaustive_fixed_width_pairs_up_to_two_digits() {
    for width in 1..=2usize {
        let max = 10u64.pow(width as u32);
        for lo in 0..max {
            for hi in lo..max {
                let lo_s = format!("{lo:0width$}");
                let hi_s = format!("{hi:0width$}");
                let re = anchored(&compile_range_regex(&lo_s, &hi_s).unwrap());
                for probe in 0..max {
                    let p = format!("{probe:0width$}");
                    assert_eq!(
                        re.is_match(&p),
                        lo <= probe && probe <= hi,
                        "pattern for [{lo_s}, {hi_s}] against {p}"
                    );
                }
            }
        }
    }
}

#[test]
fn sampled_fixed_width_pairs_three_and_four_digits() {
    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
    for &width in &[3usize, 4] {
        let max = 10u64.pow(width as u32);
        for _ in 0..120 {
            let a = rng.below(max);
            let b = rng.below(max);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo_s = format!("{lo:0width$}");
            let hi_s = format!("{hi:0width$}");
            let re = anchored(&compile_range_regex(&lo_s, &hi_s).unwrap());
            for probe in 0..max {
                let p = format!("{probe:0width$}");
                assert_eq!(
                    re.is_match(&p),
                    lo <= probe && probe <= hi,
                    "pattern for [{lo_s}, {hi_s}] against {p}"
                );
            }
            // A fixed-width pattern must not match other widths.
            assert!(!re.is_match(&format!("{lo:0w$}", w = width + 1)));
            assert!(!re.is_match(&lo_s[1..]) || lo_s[1..].is_empty());
        }
    }
}

#[test]
fn sampled_numeric_pairs_across_widths() {
    let mut rng = XorShift(0xDEAD_BEEF_CAFE_F00D);
    for _ in 0..150 {
        let a = rng.below(100_000);
        let b = rng.below(100_000);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let re = anchored(&compile_range_regex(&lo.to_string(), &hi.to_string()).unwrap());

        // Boundary neighborhoods plus a random sample of the whole domain.
        let mut probes: Vec<u64> = (lo.saturating_sub(2)..=(lo + 2).min(99_999)).collect();
        probes.extend(hi.saturating_sub(2)..=(hi + 2).min(99_999));
        for _ in 0..500 {
            probes.push(rng.below(100_000));
        }
        for probe in probes {
            assert_eq!(
                re.is_match(&probe.to_string()),
                lo <= probe && probe <= hi,
                "pattern for [{lo}, {hi}] against {probe}"
            );
        }
    }
}

#[test]
fn leading_zero_range_matches_only_padded_strings() {
    let re = anchored(&compile_range_regex("0050", "0099").unwrap());
    for probe in 0..10_000u32 {
        let p = format!("{probe:04}");
        assert_eq!(re.is_match(&p), (50..=99).contains(&probe), "probe {p}");
    }
    // The unpadded spellings are different dial strings.
    assert!(!re.is_match("50"));
    assert!(!re.is_match("99"));
}

#[test]
fn known_minimal_forms() {
    assert_eq!(compile_range_regex("0", "9").unwrap(), "[0-9]");
    assert_eq!(compile_range_regex("1000", "1999").unwrap(), "1[0-9]{3}");
    assert_eq!(compile_range_regex("42", "42").unwrap(), "42");
    assert_eq!(compile_range_regex("1", "999").unwrap(), "[1-9][0-9]{0,2}");
}

#[test]
fn wide_ranges_stay_in_the_string_domain() {
    // Far beyond u64; the compiler never parses the whole numeral.
    let lo = "1".repeat(40);
    let hi = "9".repeat(40);
    let re = anchored(&compile_range_regex(&lo, &hi).unwrap());
    assert!(re.is_match(&"5".repeat(40)));
    assert!(re.is_match(&lo));
    assert!(re.is_match(&hi));
    assert!(!re.is_match(&"9".repeat(41)));
    assert!(!re.is_match(&format!("0{}", "9".repeat(39))));
}
