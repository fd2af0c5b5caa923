use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::constant;
use crate::log::ln2;
use crate::number::Number;
use crate::value::{Error, MAX_SERIES_ITERATIONS, Value, normalize_prec};

// largest binary exponent the range reduction will expand into 2^k
const MAX_BINARY_EXPONENT: u64 = 1_000_000;

pub fn exp(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf => return Ok(Value::PlusInf),
        Value::MinusInf => return Ok(Value::Number(Number::zero())),
        Value::Undefined => return Ok(Value::Undefined),
    };
    Ok(Value::Number(exp_number(&x, prec)?))
}

// e^x by writing x = r + k*ln2 with r in [0, ln2), evaluating e^r by the
// continued fraction and scaling by 2^k; negative x goes through 1/e^|x|
pub(crate) fn exp_number(x: &Number, prec: u32) -> Result<Number, Error> {
    let one = Number::one();
    if x.is_zero() {
        return Ok(one);
    }
    if *x == one {
        return Ok(constant::e(prec)?);
    }
    let prec2 = prec + 6;
    if *x == -&one {
        let inv = one.div_prec(&constant::e(prec2)?, prec2);
        return Ok(inv.rescale(prec, false));
    }

    let delp = Number::delta(prec);
    let neg = x.is_negative();
    let ax = x.abs();

    let (residual, multiplier) = if ax > one {
        let l2 = ln2(prec2)?;
        let k = ax.div_floor_positive(&l2);
        let Some(ku) = k.to_u64().filter(|k| *k <= MAX_BINARY_EXPONENT) else {
            return Err(Error::InvalidArgument(format!("exp argument {} too large", x)));
        };
        let r = &ax - &(&l2 * &Number::from(k));
        (r, Number::from(num_traits::pow(BigInt::from(2), ku as usize)))
    } else {
        (ax, one.clone())
    };

    let er = exp_cf(&residual, prec2, &delp)?;
    let v = &er * &multiplier;
    let v = if neg { one.div_prec(&v, prec2) } else { v };
    Ok(v.rescale(prec, false))
}

// e^x = 1 + 2x/(2 - x + x^2/(6 + x^2/(10 + x^2/(14 + ...)))) for x in [0, 1);
// the depth grows until two successive estimates agree within 10^-prec
fn exp_cf(x: &Number, prec2: u32, delp: &Number) -> Result<Number, Error> {
    let one = Number::one();
    if x.is_zero() {
        return Ok(one);
    }
    let x2 = (x * x).rescale(prec2, false);
    let two = Number::from(2);
    let step = ((prec2 / 4) as u64).max(2);
    let mut depth = step;
    let mut prev: Option<Number> = None;
    for _ in 0..MAX_SERIES_ITERATIONS {
        let mut deno = Number::from(4 * depth + 2);
        for j in (1..depth).rev() {
            deno = &Number::from(4 * j + 2) + &x2.div_prec(&deno, prec2);
        }
        let d = &(&two - x) + &x2.div_prec(&deno, prec2);
        let est = &one + &x.double().div_prec(&d, prec2);
        if let Some(p) = &prev {
            if (&est - p).abs() < *delp {
                return Ok(est);
            }
        }
        prev = Some(est);
        depth += step;
    }
    Err(Error::NoConvergence("exp"))
}
