use crate::{Number, Value, acosech, acosh, acoth, asech, asinh, atanh, sinh, tanh};

fn finite(v: Value) -> Number {
    match v {
        Value::Number(n) => n,
        other => panic!("expected a finite number, got {:?}", other),
    }
}

#[test]
fn domain_checks() {
    assert_eq!(acosh(0.5, 36).unwrap(), Value::Undefined);
    assert_eq!(acosh(-3, 36).unwrap(), Value::Undefined);
    assert_eq!(atanh(2, 36).unwrap(), Value::Undefined);
    assert_eq!(atanh(-1.5, 36).unwrap(), Value::Undefined);
    assert_eq!(acoth(0.5, 36).unwrap(), Value::Undefined);
    assert_eq!(asech(1.5, 36).unwrap(), Value::Undefined);
    assert_eq!(asech(-0.2, 36).unwrap(), Value::Undefined);
    assert_eq!(acosech(-1, 36).unwrap(), Value::Undefined);
}

#[test]
fn poles_and_edges() {
    assert_eq!(finite(asinh(0, 36).unwrap()).to_string(), "0");
    assert_eq!(finite(acosh(1, 36).unwrap()).to_string(), "0");
    assert_eq!(atanh(1, 36).unwrap(), Value::PlusInf);
    assert_eq!(atanh(-1, 36).unwrap(), Value::MinusInf);
    assert_eq!(acoth(1, 36).unwrap(), Value::PlusInf);
    assert_eq!(acoth(-1, 36).unwrap(), Value::MinusInf);
    assert_eq!(asech(0, 36).unwrap(), Value::PlusInf);
    assert_eq!(acosech(0, 36).unwrap(), Value::PlusInf);
    assert_eq!(finite(asech(1, 36).unwrap()).to_string(), "0");
    assert_eq!(asinh(Value::MinusInf, 36).unwrap(), Value::MinusInf);
    assert_eq!(finite(acoth(Value::PlusInf, 36).unwrap()).to_string(), "0");
}

#[test]
fn reference_values() {
    let got = finite(asinh(5, 36).unwrap());
    let want: Number = "2.31243834127275262025356234136441439".parse().unwrap();
    assert!((&got - &want).abs() < Number::delta(30));

    let got = finite(acosh(5, 36).unwrap());
    let want: Number = "2.29243166956117768780078731134801543".parse().unwrap();
    assert!((&got - &want).abs() < Number::delta(30));

    let got = finite(atanh(0.56987, 36).unwrap());
    let want: Number = "0.647330301894214558717038806058200135".parse().unwrap();
    assert!((&got - &want).abs() < Number::delta(30));

    let got = finite(acoth(2.56987, 50).unwrap());
    let want: Number = "0.41076818358928460020331713592873887968720681439533"
        .parse()
        .unwrap();
    assert!((&got - &want).abs() < Number::delta(44));

    let got = finite(asech(0.999, 36).unwrap());
    let want: Number = "0.0447400054775150981356221725525384249".parse().unwrap();
    assert!((&got - &want).abs() < Number::delta(30));
}

#[test]
fn odd_symmetry() {
    let a = finite(atanh(0.37, 40).unwrap());
    let b = finite(atanh(-0.37, 40).unwrap());
    assert_eq!(a, -b);

    let a = finite(acoth(-2.56987, 40).unwrap());
    let b = finite(acoth(2.56987, 40).unwrap());
    assert_eq!(a, -b);

    let a = finite(asinh(-5, 40).unwrap());
    let b = finite(asinh(5, 40).unwrap());
    assert_eq!(a, -b);
}

#[test]
fn round_trips() {
    for x in ["0.5", "-2.25", "10"] {
        let x: Number = x.parse().unwrap();
        let a = finite(asinh(x.clone(), 40).unwrap());
        let back = finite(sinh(a, 40).unwrap());
        let diff = (&back - &x).abs();
        assert!(diff < Number::delta(30), "sinh(asinh({})) off by {}", x, diff);
    }
    let x: Number = "0.642".parse().unwrap();
    let a = finite(atanh(x.clone(), 40).unwrap());
    let back = finite(tanh(a, 40).unwrap());
    assert!((&back - &x).abs() < Number::delta(32));
}
