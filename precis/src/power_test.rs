use crate::{Number, Value, power, sqrt2};

fn finite(v: Value) -> Number {
    match v {
        Value::Number(n) => n,
        other => panic!("expected a finite number, got {:?}", other),
    }
}

#[test]
fn exceptional_case_table() {
    assert_eq!(power(0, 0, 36).unwrap(), Value::Undefined);
    assert_eq!(finite(power(0, 5, 36).unwrap()).to_string(), "0");
    assert_eq!(power(0, -2, 36).unwrap(), Value::PlusInf);

    assert_eq!(power(Value::PlusInf, 3, 36).unwrap(), Value::PlusInf);
    assert_eq!(finite(power(Value::PlusInf, -3, 36).unwrap()).to_string(), "0");
    assert_eq!(power(Value::PlusInf, 0, 36).unwrap(), Value::Undefined);
    assert_eq!(power(Value::MinusInf, 2, 36).unwrap(), Value::Undefined);

    assert_eq!(power(5, Value::PlusInf, 36).unwrap(), Value::PlusInf);
    assert_eq!(finite(power(5, Value::MinusInf, 36).unwrap()).to_string(), "0");
    assert_eq!(power(Value::Undefined, 2, 36).unwrap(), Value::Undefined);
    assert_eq!(power(2, Value::Undefined, 36).unwrap(), Value::Undefined);
}

#[test]
fn negative_base_needs_integer_exponent() {
    assert_eq!(power(-2, 0.5, 36).unwrap(), Value::Undefined);
    assert_eq!(power(-12.47, 6.29, 36).unwrap(), Value::Undefined);
    assert_eq!(finite(power(-2, 3, 36).unwrap()).to_string(), "-8");
    assert_eq!(finite(power(-2, 4, 36).unwrap()).to_string(), "16");
    assert_eq!(finite(power(-2.5, 2, 36).unwrap()).to_string(), "6.25");
}

#[test]
fn shortcut_cases() {
    assert_eq!(finite(power(1, 123.456, 36).unwrap()).to_string(), "1");
    assert_eq!(finite(power(7.7, 0, 36).unwrap()).to_string(), "1");
    assert_eq!(finite(power(7.7, 1, 36).unwrap()).to_string(), "7.7");
}

#[test]
fn integer_exponents() {
    assert_eq!(finite(power(2, 10, 36).unwrap()).to_string(), "1024");
    assert_eq!(finite(power(2, -3, 36).unwrap()).to_string(), "0.125");
    assert_eq!(
        finite(power(2, 100, 36).unwrap()).to_string(),
        "1267650600228229401496703205376"
    );
}

#[test]
fn fractional_exponents() {
    let got = finite(power(2, 0.5, 40).unwrap());
    let want = sqrt2(40).unwrap();
    assert!((&got - &want).abs() < Number::delta(34));

    let got = finite(power(12.47, 6.29, 36).unwrap());
    let want: Number = "7816277.90874183493285715989953841593632664".parse().unwrap();
    assert!((&got - &want).abs() < Number::delta(20));

    let got = finite(power(12.47, -6.29, 36).unwrap());
    let want: Number = "0.000000127938132660506602850427035795013608".parse().unwrap();
    assert!((&got - &want).abs() < Number::delta(30));
}

#[test]
fn negative_fractional_exponent_inverts() {
    let up = finite(power(3.5, 2.25, 40).unwrap());
    let down = finite(power(3.5, -2.25, 40).unwrap());
    let prod = &up * &down;
    assert!((&prod - &Number::one()).abs() < Number::delta(30));
}
