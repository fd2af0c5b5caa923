use num_traits::{ToPrimitive, Zero};

use crate::exp::exp_number;
use crate::log::ln_number;
use crate::number::Number;
use crate::value::{Error, Value, normalize_prec};

// exponents beyond this go through exp(y*ln x) instead of a multiply loop
const MAX_MULTIPLY_EXPONENT: u64 = 100_000;

// x^y with the exceptional cases spelled out rather than inferred:
//   undefined operand        -> Undefined
//   0^0                      -> Undefined
//   0^y                      -> 0 for y > 0, +Infinity for y < 0
//   (+inf)^y                 -> +Infinity for y > 0, 0 for y < 0, Undefined at 0
//   (-inf)^y                 -> Undefined
//   x^(+inf)                 -> +Infinity,  x^(-inf) -> 0   (finite x)
//   x < 0 with fractional y  -> Undefined
pub fn power(x: impl Into<Value>, y: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let (x, y) = match (x.into(), y.into()) {
        (Value::Undefined, _) | (_, Value::Undefined) => return Ok(Value::Undefined),
        (Value::MinusInf, _) => return Ok(Value::Undefined),
        (Value::PlusInf, Value::PlusInf) => return Ok(Value::PlusInf),
        (Value::PlusInf, Value::MinusInf) => return Ok(Value::Number(Number::zero())),
        (Value::PlusInf, Value::Number(y)) => {
            return Ok(if y.is_zero() {
                Value::Undefined
            } else if y.is_negative() {
                Value::Number(Number::zero())
            } else {
                Value::PlusInf
            });
        }
        (Value::Number(_), Value::PlusInf) => return Ok(Value::PlusInf),
        (Value::Number(_), Value::MinusInf) => return Ok(Value::Number(Number::zero())),
        (Value::Number(x), Value::Number(y)) => (x, y),
    };

    let one = Number::one();
    if x.is_zero() {
        return Ok(if y.is_zero() {
            Value::Undefined
        } else if y.is_negative() {
            Value::PlusInf
        } else {
            Value::Number(Number::zero())
        });
    }
    if x == one {
        return Ok(Value::Number(one));
    }
    if y.is_zero() {
        return Ok(Value::Number(one));
    }
    if y == one {
        return Ok(Value::Number(x));
    }

    if !y.is_integer() && x.is_negative() {
        return Ok(Value::Undefined);
    }

    let negate = x.is_negative() && y.to_bigint_exact().is_some_and(|m| !(&m % 2u8).is_zero());
    let v = power_number(&x.abs(), &y, prec)?;
    let v = if negate { -v } else { v };
    if v.is_accurate() && v.magnitude().digits() <= prec as u64 {
        Ok(Value::Number(v))
    } else {
        Ok(Value::Number(v.rescale(prec, false)))
    }
}

// x must be strictly positive; the result keeps its working digits so
// callers choose the final rounding
pub(crate) fn power_number(x: &Number, y: &Number, prec: u32) -> Result<Number, Error> {
    let one = Number::one();
    if y.is_zero() {
        return Ok(one);
    }
    if *y == one {
        return Ok(x.clone());
    }
    let prec2 = prec + 6;

    if y.is_integer() {
        let ay = y.abs();
        let v = match ay.trunc().to_u64().filter(|m| *m <= MAX_MULTIPLY_EXPONENT) {
            Some(mu) => multiply_out(x, mu, prec2),
            // far out of multiply range: x^|y| = e^(|y|*ln x)
            None => exp_number(&(&ay * &ln_number(x, prec2)?), prec2)?,
        };
        return Ok(if y.is_negative() { one.div_prec(&v, prec2) } else { v });
    }

    // x^y = x^m * e^(f*ln x) with y = m + f split at the decimal point
    let ay = y.abs();
    let m = ay.trunc();
    let f = ay.fract();
    let whole = match m.to_u64().filter(|m| *m <= MAX_MULTIPLY_EXPONENT) {
        Some(mu) => multiply_out(x, mu, prec2),
        None => exp_number(&(&Number::from(m) * &ln_number(x, prec2)?), prec2)?,
    };
    let frac = exp_number(&(&f * &ln_number(x, prec2)?), prec2)?;
    let v = &whole * &frac;
    Ok(if y.is_negative() { one.div_prec(&v, prec2) } else { v })
}

fn multiply_out(x: &Number, m: u64, prec2: u32) -> Number {
    let mut prod = Number::one();
    for _ in 0..m {
        prod = &prod * x;
        if prod.magnitude().digits() > prec2 as u64 {
            prod = prod.rescale(prec2, false);
        }
    }
    prod
}
