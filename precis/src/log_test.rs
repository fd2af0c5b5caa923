use crate::log::{lg, ln, ln2, ln3, ln10};
use crate::{Number, Value, exp};

const LN2_60: &str = "0.693147180559945309417232121458176568075500134360255254120680";
const LN3_60: &str = "1.098612288668109691395245236922525704647490557822749451734694";
const LN10_60: &str = "2.302585092994045684017991454684364207601101488628772976033327";

fn finite(v: Value) -> Number {
    match v {
        Value::Number(n) => n,
        other => panic!("expected a finite number, got {:?}", other),
    }
}

macro_rules! assert_close {
    ($val:expr, $reference:expr, $digits:expr) => {
        let want: Number = $reference.parse().unwrap();
        let diff = (&$val - &want).abs();
        assert!(
            diff < Number::delta($digits),
            "off by {} (more than 1e-{})",
            diff,
            $digits
        );
    };
}

#[test]
fn ln2_matches_reference_digits() {
    assert_eq!(ln2(20).unwrap().to_string(), "0.69314718055994530942");
    assert_close!(ln2(50).unwrap(), LN2_60, 49);
}

#[test]
fn ln3_and_ln10_match_reference_digits() {
    assert_close!(ln3(50).unwrap(), LN3_60, 49);
    assert_close!(ln10(50).unwrap(), LN10_60, 49);
}

#[test]
fn ln_domain_edges() {
    assert_eq!(ln(0, 36).unwrap(), Value::MinusInf);
    assert_eq!(ln(-2.5, 36).unwrap(), Value::Undefined);
    assert_eq!(finite(ln(1, 36).unwrap()).to_string(), "0");
}

#[test]
fn ln_uses_closed_forms_for_small_powers() {
    let l8 = finite(ln(8, 40).unwrap());
    let three_ln2 = &ln2(44).unwrap() * &Number::from(3);
    assert_close!(l8, &three_ln2.to_string(), 38);

    let l81 = finite(ln(81, 40).unwrap());
    let four_ln3 = &ln3(44).unwrap() * &Number::from(4);
    assert_close!(l81, &four_ln3.to_string(), 38);
}

#[test]
fn ln_general_arguments() {
    // ln(2.5) = ln10 - ln4
    let want = &ln10(50).unwrap() - &(&ln2(50).unwrap() * &Number::from(2));
    let got = finite(ln(2.5, 40).unwrap());
    assert_close!(got, &want.to_string(), 38);
    // a value below one comes out negative
    let neg = finite(ln(0.5, 40).unwrap());
    assert!(neg.is_negative());
    assert_close!(-neg, LN2_60, 38);
}

#[test]
fn exp_of_ln_round_trips() {
    for x in ["3.7", "0.42", "55.5", "97"] {
        let x: Number = x.parse().unwrap();
        let l = finite(ln(x.clone(), 40).unwrap());
        let back = finite(exp(l, 40).unwrap());
        let diff = (&back - &x).abs();
        assert!(diff < Number::delta(33), "round trip of {} off by {}", x, diff);
    }
}

#[test]
fn lg_shortcuts_and_values() {
    assert_eq!(lg(0, 36).unwrap(), Value::MinusInf);
    assert_eq!(lg(-1, 36).unwrap(), Value::Undefined);
    assert_eq!(finite(lg(1, 36).unwrap()).to_string(), "0");
    assert_eq!(finite(lg(10, 36).unwrap()).to_string(), "1");
    assert_close!(finite(lg(100, 36).unwrap()), "2", 30);
    assert_close!(finite(lg(2, 50).unwrap()), "0.301029995663981195213738894724493026768189881462108", 48);
}
