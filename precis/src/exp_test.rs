use crate::constant::e;
use crate::{Number, Value, exp};

fn finite(v: Value) -> Number {
    match v {
        Value::Number(n) => n,
        other => panic!("expected a finite number, got {:?}", other),
    }
}

#[test]
fn exact_anchors() {
    let one = finite(exp(0, 36).unwrap());
    assert_eq!(one.to_string(), "1");
    assert!(one.is_accurate());

    assert_eq!(finite(exp(1, 40).unwrap()), e(40).unwrap());

    let inv = finite(exp(-1, 40).unwrap());
    let prod = &inv * &e(44).unwrap();
    assert!((&prod - &Number::one()).abs() < Number::delta(38));
}

#[test]
fn sentinels_propagate() {
    assert_eq!(exp(Value::PlusInf, 36).unwrap(), Value::PlusInf);
    assert_eq!(finite(exp(Value::MinusInf, 36).unwrap()).to_string(), "0");
    assert_eq!(exp(Value::Undefined, 36).unwrap(), Value::Undefined);
}

#[test]
fn reciprocal_identity() {
    for x in ["0.5", "3.25", "12.8", "30.2025"] {
        let x: Number = x.parse().unwrap();
        let up = finite(exp(x.clone(), 40).unwrap());
        let down = finite(exp(-x, 40).unwrap());
        let prod = &up * &down;
        let diff = (&prod - &Number::one()).abs();
        assert!(diff < Number::delta(24), "exp(x)*exp(-x) off by {}", diff);
    }
}

#[test]
fn doubling_identity() {
    // e^(2x) = (e^x)^2 ties the reduced and unreduced paths together
    let x: Number = "1.7".parse().unwrap();
    let once = finite(exp(x.clone(), 45).unwrap());
    let twice = finite(exp(x.double(), 45).unwrap());
    let squared = &once * &once;
    let diff = (&twice - &squared).abs();
    assert!(diff < Number::delta(38), "doubling identity off by {}", diff);
}

#[test]
fn known_value_e_tenth() {
    // e^0.1 to plenty of digits
    let got = finite(exp(0.1, 40).unwrap());
    let want: Number = "1.1051709180756476248117078264902466682245"
        .parse()
        .unwrap();
    assert!((&got - &want).abs() < Number::delta(38));
}
