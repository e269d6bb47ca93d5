use math::prelude::{decode_big, BigInt, MAX_BASE, MIN_BASE};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use share_recovery::input::{EncodedShare, Keys, TestCase};
use share_recovery::params::DEFAULT_TOLERANCE;
use share_recovery::{constant_term, find_outliers, find_outliers_exact};

/// Write `value` in `base` using the same alphabet the decoder accepts.
fn encode(value: &BigInt, base: u32) -> String {
    value.to_str_radix(base).to_uppercase()
}

fn evaluate(coeffs: &[i64], x: i64) -> BigInt {
    coeffs
        .iter()
        .rev()
        .fold(BigInt::from(0), |acc, &c| acc * x + c)
}

/// Shares of the polynomial with `coeffs` at `x = 1..=n`, with bases cycling
/// through 2..=36.
fn shares(coeffs: &[i64], n: usize) -> TestCase {
    let shares = (1..=n as i64)
        .map(|x| {
            let base = (x as u32 * 7) % 35 + 2;
            let y = evaluate(coeffs, x);
            (x.to_string(), EncodedShare::new(base, encode(&y, base)))
        })
        .collect();
    TestCase {
        keys: Keys { n, k: coeffs.len() },
        shares,
    }
}

fn small(coeffs: Vec<i8>) -> Vec<i64> {
    // Non-negative values keep the encoding within the digit alphabet.
    coeffs.into_iter().map(|c| i64::from(c.unsigned_abs())).collect()
}

#[quickcheck]
fn recovers_constant_of_random_polynomial(coeffs: Vec<i8>, extra: u8) -> TestResult {
    let coeffs = small(coeffs);
    if coeffs.is_empty() || coeffs.len() > 6 {
        return TestResult::discard();
    }
    let n = coeffs.len() + usize::from(extra % 4);

    let store = shares(&coeffs, n).to_store().unwrap();
    let c = constant_term(&store).unwrap();
    TestResult::from_bool((c - coeffs[0] as f64).abs() < 1e-3)
}

#[quickcheck]
fn flags_exactly_the_corrupted_share(coeffs: Vec<i8>, pick: u8, delta: u16) -> TestResult {
    let coeffs = small(coeffs);
    if coeffs.is_empty() || coeffs.len() > 5 || delta == 0 {
        return TestResult::discard();
    }
    let k = coeffs.len();
    let n = k + 3;
    let bad_x = k + 1 + usize::from(pick) % 3;

    let mut case = shares(&coeffs, n);
    let key = bad_x.to_string();
    let y = evaluate(&coeffs, bad_x as i64) + u32::from(delta);
    case.shares.insert(key, EncodedShare::new(10, y.to_string()));

    let store = case.to_store().unwrap();
    let expected = vec![bad_x as u64];
    TestResult::from_bool(
        find_outliers(&store, DEFAULT_TOLERANCE).unwrap() == expected
            && find_outliers_exact(&store).unwrap() == expected,
    )
}

#[test]
fn perturbed_extra_point_is_the_only_outlier() {
    // y = 3x + 7, x = 4 moved by +1000
    let mut case = shares(&[7, 3], 5);
    case.shares
        .insert("4".into(), EncodedShare::new(10, (3 * 4 + 7 + 1000).to_string()));
    let store = case.to_store().unwrap();
    assert_eq!(find_outliers(&store, DEFAULT_TOLERANCE).unwrap(), vec![4]);
}

#[test]
fn encoder_matches_decoder() {
    for base in MIN_BASE..=MAX_BASE {
        let value = BigInt::from(123_456_789_i64);
        let encoded = encode(&value, base);
        assert_eq!(decode_big(&encoded, base), Ok(value));
    }
}
