use std::sync::OnceLock;

use num_bigint::BigInt;

use crate::constant::{self, ConstCache, cached};
use crate::number::Number;
use crate::value::{Error, MAX_SERIES_ITERATIONS, Value, normalize_prec};

static LN2_CACHE: ConstCache = OnceLock::new();
static LN3_CACHE: ConstCache = OnceLock::new();
static LN10_CACHE: ConstCache = OnceLock::new();

// ln2 = 2*artanh(1/3) = sum 2/(3*(2i+1)*9^i)
pub fn ln2(prec: u32) -> Result<Number, Error> {
    let prec = normalize_prec(prec);
    cached(&LN2_CACHE, prec, compute_ln2)
}

fn compute_ln2(prec: u32) -> Result<Number, Error> {
    let prec2 = prec + 4;
    let delp = Number::delta(prec);
    let mut sum = Number::zero();
    let mut m = BigInt::from(1); // 9^i
    for i in 0..MAX_SERIES_ITERATIONS as u64 {
        let den = &Number::from(3 * (2 * i + 1)) * &Number::from(m.clone());
        let t = Number::from(2).div_prec(&den, prec2);
        if t < delp {
            return Ok(sum.rescale(prec, false));
        }
        sum = &sum + &t;
        m *= 9;
    }
    Err(Error::NoConvergence("ln2"))
}

// ln3 = 2*artanh(1/2) = 2 * sum 1/(2*(2i+1)*4^i)
pub fn ln3(prec: u32) -> Result<Number, Error> {
    let prec = normalize_prec(prec);
    cached(&LN3_CACHE, prec, compute_ln3)
}

fn compute_ln3(prec: u32) -> Result<Number, Error> {
    let prec2 = prec + 4;
    let delp = Number::delta(prec);
    let mut sum = Number::zero();
    let mut m = BigInt::from(2); // 2*4^i
    for i in 0..MAX_SERIES_ITERATIONS as u64 {
        let den = &Number::from(m.clone()) * &Number::from(2 * i + 1);
        let t = Number::one().div_prec(&den, prec2);
        if t < delp {
            return Ok(sum.double().rescale(prec, false));
        }
        sum = &sum + &t;
        m *= 4;
    }
    Err(Error::NoConvergence("ln3"))
}

// ln10 = ln(5/4) + 3*ln2; the first term is the alternating series
// sum (-1)^(r+1)/(r*4^r)
pub fn ln10(prec: u32) -> Result<Number, Error> {
    let prec = normalize_prec(prec);
    cached(&LN10_CACHE, prec, compute_ln10)
}

fn compute_ln10(prec: u32) -> Result<Number, Error> {
    let prec2 = prec + 4;
    let delp = Number::delta(prec);
    let mut sum = Number::zero();
    let mut m = BigInt::from(4); // 4^r
    for r in 1..=MAX_SERIES_ITERATIONS as u64 {
        let den = &Number::from(m.clone()) * &Number::from(r);
        let mut t = Number::one().div_prec(&den, prec2);
        if t < delp {
            let three_ln2 = &ln2(prec2)? * &Number::from(3);
            return Ok((&sum + &three_ln2).rescale(prec, false));
        }
        if r % 2 == 0 {
            t = -t;
        }
        sum = &sum + &t;
        m *= 4;
    }
    Err(Error::NoConvergence("ln10"))
}

// ln(x): exact shortcuts, then decimal and binary reduction down to a
// residual in (-1/2, 0], then the alternating ln(1+r) series
pub fn ln(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf => return Ok(Value::PlusInf),
        Value::MinusInf | Value::Undefined => return Ok(Value::Undefined),
    };
    if x.is_zero() {
        return Ok(Value::MinusInf);
    }
    if x.is_negative() {
        return Ok(Value::Undefined);
    }
    Ok(Value::Number(ln_number(&x, prec)?))
}

// x must be strictly positive
pub(crate) fn ln_number(x: &Number, prec: u32) -> Result<Number, Error> {
    let one = Number::one();
    if *x == one {
        return Ok(Number::zero());
    }
    if let Some(v) = ln_lookup(x, prec)? {
        return Ok(v);
    }
    if *x == constant::e(prec)? {
        return Ok(Number::one());
    }

    let prec2 = prec + 4;
    let delp = Number::delta(prec);

    // strip the decimal exponent: x = m * 10^k with m in [1, 10)
    let (k, mantissa) = x.decimal_normalize();
    let mut addme = if k != 0 {
        &ln10(prec2)? * &Number::from(k)
    } else {
        Number::zero()
    };
    // halve the mantissa into (1/2, 1]
    let mut m = mantissa;
    let mut n: i64 = 0;
    while m > one {
        m = m.half();
        n += 1;
    }
    if n != 0 {
        addme = &addme + &(&ln2(prec2)? * &Number::from(n));
    }
    if m == one {
        return Ok(addme.rescale(prec, false));
    }

    // ln(1+r) = r - r^2/2 + r^3/3 - ...; t_{i+1} = -i*t_i*r/(i+1)
    let r = &m - &one;
    let mut t = r.clone();
    let mut s = r.clone();
    for i in 1..=MAX_SERIES_ITERATIONS as u64 {
        t = -(&(&t * &r) * &Number::from(i)).div_prec(&Number::from(i + 1), prec2);
        if t.abs() < delp {
            return Ok((&s + &addme).rescale(prec, false));
        }
        s = &s + &t;
    }
    Err(Error::NoConvergence("ln"))
}

// closed forms for the small powers of 2, 3 and 10
fn ln_lookup(x: &Number, prec: u32) -> Result<Option<Number>, Error> {
    let Some(i) = x.to_bigint_exact() else {
        return Ok(None);
    };
    let Ok(i) = u32::try_from(i) else {
        return Ok(None);
    };
    let prec2 = prec + 4;
    let pick = match i {
        2 => Some((ln2(prec2)?, 1)),
        3 => Some((ln3(prec2)?, 1)),
        4 => Some((ln2(prec2)?, 2)),
        8 => Some((ln2(prec2)?, 3)),
        9 => Some((ln3(prec2)?, 2)),
        10 => Some((ln10(prec2)?, 1)),
        16 => Some((ln2(prec2)?, 4)),
        27 => Some((ln3(prec2)?, 3)),
        32 => Some((ln2(prec2)?, 5)),
        64 => Some((ln2(prec2)?, 6)),
        81 => Some((ln3(prec2)?, 4)),
        100 => Some((ln10(prec2)?, 2)),
        _ => None,
    };
    Ok(pick.map(|(c, k)| (&c * &Number::from(k)).rescale(prec, false)))
}

// lg(x) = ln(x)/ln(10) with exact shortcuts at 0, 1 and 10
pub fn lg(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf => return Ok(Value::PlusInf),
        Value::MinusInf | Value::Undefined => return Ok(Value::Undefined),
    };
    if x.is_zero() {
        return Ok(Value::MinusInf);
    }
    if x.is_negative() {
        return Ok(Value::Undefined);
    }
    if x == Number::one() {
        return Ok(Value::Number(Number::zero()));
    }
    if x == Number::from(10) {
        return Ok(Value::Number(Number::one()));
    }
    let prec2 = prec + 4;
    let l = ln_number(&x, prec2)?;
    let lg = l.div_prec(&ln10(prec2)?, prec2);
    Ok(Value::Number(lg.rescale(prec, false)))
}
