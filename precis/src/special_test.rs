use crate::{Number, Value, beta, erf, erfc, gamma};

fn finite(v: Value) -> Number {
    match v {
        Value::Number(n) => n,
        other => panic!("expected a finite number, got {:?}", other),
    }
}

#[test]
fn gamma_domain_and_integers() {
    assert_eq!(gamma(-1, 36).unwrap(), Value::Undefined);
    assert_eq!(gamma(-0.5, 36).unwrap(), Value::Undefined);
    assert_eq!(gamma(0, 36).unwrap(), Value::PlusInf);
    assert_eq!(finite(gamma(1, 36).unwrap()).to_string(), "1");
    assert_eq!(finite(gamma(2, 36).unwrap()).to_string(), "1");
    // gamma(n) = (n-1)!, exactly
    let g5 = finite(gamma(5, 36).unwrap());
    assert_eq!(g5.to_string(), "24");
    assert!(g5.is_accurate());
    assert_eq!(finite(gamma(10, 36).unwrap()).to_string(), "362880");
}

#[test]
fn gamma_lanczos_values() {
    // the fixed coefficient table bounds accuracy near double precision
    let got = finite(gamma(5.001, 20).unwrap());
    let want: Number = "24.0361767181".parse().unwrap();
    assert!((&got - &want).abs() < Number::delta(7));

    // gamma(1/2) = sqrt(pi)
    let got = finite(gamma(0.5, 20).unwrap());
    let want: Number = "1.7724538509055160273".parse().unwrap();
    assert!((&got - &want).abs() < Number::delta(7));

    let got = finite(gamma(1.25, 20).unwrap());
    let want: Number = "0.90640247705547227929".parse().unwrap();
    assert!((&got - &want).abs() < Number::delta(7));
}

#[test]
fn beta_values() {
    assert_eq!(beta(-5, 1, 36).unwrap(), Value::Undefined);
    assert_eq!(beta(1, -2, 36).unwrap(), Value::Undefined);
    assert_eq!(beta(0, 5, 36).unwrap(), Value::PlusInf);
    assert_eq!(beta(5, 0, 36).unwrap(), Value::PlusInf);

    // beta(2, 5) = 1/30
    let got = finite(beta(2, 5, 36).unwrap());
    let want = Number::one().div_prec(&Number::from(30), 40);
    assert!((&got - &want).abs() < Number::delta(30));

    // symmetric in its arguments
    let a = finite(beta(5.2, 3.57, 36).unwrap());
    let b = finite(beta(3.57, 5.2, 36).unwrap());
    assert!((&a - &b).abs() < Number::delta(7));
}

#[test]
fn erf_odd_and_saturating() {
    assert_eq!(finite(erf(0, 36).unwrap()).to_string(), "0");
    let sat = finite(erf(10, 36).unwrap());
    assert_eq!(sat.to_string(), "1");
    assert!(sat.is_accurate());
    assert_eq!(finite(erf(-9.5, 36).unwrap()).to_string(), "-1");

    let a = finite(erf(3, 36).unwrap());
    let b = finite(erf(-3, 36).unwrap());
    assert_eq!(a, -b);
}

#[test]
fn erf_series_values() {
    let got = finite(erf(3, 36).unwrap());
    let want: Number = "0.999977909503001414558627223870417681".parse().unwrap();
    assert!((&got - &want).abs() < Number::delta(30));

    let got = finite(erf(0.5, 36).unwrap());
    let want: Number = "0.520499877813046537682746653891964528".parse().unwrap();
    assert!((&got - &want).abs() < Number::delta(30));
}

#[test]
fn erfc_complements_erf() {
    assert_eq!(finite(erfc(0, 36).unwrap()).to_string(), "1");

    let got = finite(erfc(2, 36).unwrap());
    let want: Number = "0.00467773498104726583793074363274707".parse().unwrap();
    assert!((&got - &want).abs() < Number::delta(30));

    let got = finite(erfc(-2, 36).unwrap());
    let want: Number = "1.99532226501895273416206925636725293".parse().unwrap();
    assert!((&got - &want).abs() < Number::delta(30));

    let e = finite(erf(1.3, 40).unwrap());
    let c = finite(erfc(1.3, 40).unwrap());
    let sum = &e + &c;
    assert!((&sum - &Number::one()).abs() < Number::delta(36));
}

#[test]
fn sentinel_arguments() {
    assert_eq!(gamma(Value::PlusInf, 36).unwrap(), Value::PlusInf);
    assert_eq!(gamma(Value::MinusInf, 36).unwrap(), Value::Undefined);
    assert_eq!(finite(erf(Value::PlusInf, 36).unwrap()).to_string(), "1");
    assert_eq!(finite(erfc(Value::MinusInf, 36).unwrap()).to_string(), "2");
    assert_eq!(beta(Value::Undefined, 1, 36).unwrap(), Value::Undefined);
}
