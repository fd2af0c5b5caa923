use num_bigint::BigInt;
use num_traits::One;

use crate::number::Number;
use crate::value::{Error, MAX_SERIES_ITERATIONS, Value, normalize_prec};

pub fn sqrt(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf => return Ok(Value::PlusInf),
        Value::MinusInf | Value::Undefined => return Ok(Value::Undefined),
    };
    if x.is_negative() {
        return Ok(Value::Undefined);
    }
    Ok(Value::Number(sqrt_number(&x, prec)?))
}

pub fn sqrt2(prec: u32) -> Result<Number, Error> {
    let prec = normalize_prec(prec);
    let prec2 = prec + 4;
    let root = bakhshali(&Number::from(2), Number::one(), prec, prec2)?;
    Ok(root.rescale(prec, false))
}

pub fn sqrt10(prec: u32) -> Result<Number, Error> {
    let prec = normalize_prec(prec);
    let prec2 = prec + 4;
    let root = bakhshali(&Number::from(10), Number::from(3), prec, prec2)?;
    Ok(root.rescale(prec, false))
}

// x must be nonnegative
pub(crate) fn sqrt_number(x: &Number, prec: u32) -> Result<Number, Error> {
    if *x == Number::from(2) {
        return sqrt2(prec);
    }
    if *x == Number::from(10) {
        return sqrt10(prec);
    }
    if let Some(root) = exact_root(x) {
        return Ok(root);
    }

    let prec2 = if prec <= 36 { prec + 4 } else { prec + prec / 10 };
    let one = Number::one();
    let hundred = Number::from(100);

    if *x > one {
        // pull out factors of 100 until x lands in [1, 100)
        let mut x = x.clone();
        let mut m = BigInt::one();
        while x >= hundred {
            x = &x * &Number::lit("0.01");
            m *= 10;
            if x == one {
                return Ok(Number::from(m));
            }
        }
        let seed = seed_above_one(&x);
        let root = bakhshali(&x, seed, prec, prec2)?;
        let root = &root * &Number::from(m);
        if root.is_integer() {
            Ok(root.rescale(prec, true))
        } else {
            Ok(root.rescale(prec, false))
        }
    } else {
        // scale up by 100 until x lands in (0.01, 1)
        let mut x = x.clone();
        let mut m = BigInt::one();
        let limit = Number::lit("0.01");
        while x <= limit {
            x = &x * &hundred;
            m *= 10;
            if x == one {
                let inv = one.div_prec(&Number::from(m), prec2);
                return Ok(Number::new(inv.magnitude().clone(), true));
            }
        }
        let seed = seed_below_one(&x);
        let root = bakhshali(&x, seed, prec, prec2)?;
        Ok(root.div_prec(&Number::from(m), prec2).rescale(prec, false))
    }
}

// perfect squares and short decimals resolve without iterating
fn exact_root(x: &Number) -> Option<Number> {
    let squares = [
        ("0", "0"),
        ("1", "1"),
        ("4", "2"),
        ("9", "3"),
        ("16", "4"),
        ("25", "5"),
        ("36", "6"),
        ("49", "7"),
        ("64", "8"),
        ("81", "9"),
        ("100", "10"),
        ("0.01", "0.1"),
        ("0.04", "0.2"),
        ("0.09", "0.3"),
        ("0.16", "0.4"),
        ("0.25", "0.5"),
        ("0.36", "0.6"),
        ("0.49", "0.7"),
        ("0.64", "0.8"),
        ("0.81", "0.9"),
    ];
    for (sq, root) in squares {
        if *x == Number::lit(sq) {
            return Some(Number::lit(root));
        }
    }
    None
}

fn seed_above_one(x: &Number) -> Number {
    for (bound, seed) in [(4, 2), (9, 3), (16, 4), (25, 5), (36, 6), (49, 7), (64, 8), (81, 9)] {
        if *x <= Number::from(bound) {
            return Number::from(seed);
        }
    }
    Number::from(9)
}

fn seed_below_one(x: &Number) -> Number {
    for (bound, seed) in [
        ("0.81", "0.9"),
        ("0.64", "0.8"),
        ("0.49", "0.7"),
        ("0.36", "0.6"),
        ("0.25", "0.5"),
        ("0.16", "0.4"),
        ("0.09", "0.3"),
        ("0.04", "0.2"),
    ] {
        if *x >= Number::lit(bound) {
            return Number::lit(seed);
        }
    }
    Number::lit("0.1")
}

// Bakhshali iteration: a = x/(2*xn) - xn/2, b = xn + a, next = b - a^2/(2*b);
// quadratic convergence from the nearest anchor seed
fn bakhshali(x: &Number, seed: Number, prec: u32, prec2: u32) -> Result<Number, Error> {
    let delp = Number::delta(prec);
    let mut xn = seed;
    for _ in 0..MAX_SERIES_ITERATIONS {
        let a = &x.div_prec(&xn.double(), prec2) - &xn.half();
        let b = &xn + &a;
        let next = &b - &(&a * &a).div_prec(&b.double(), prec2);
        if (&next - &xn).abs() < delp {
            return Ok(next);
        }
        xn = next;
    }
    Err(Error::NoConvergence("sqrt"))
}
