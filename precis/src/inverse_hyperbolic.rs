use crate::log::ln_number;
use crate::number::Number;
use crate::root::sqrt_number;
use crate::value::{Error, MAX_SERIES_ITERATIONS, Value, normalize_prec};

// Inverse hyperbolics are logarithmic closed forms except atanh and acoth,
// which have their own series.

pub fn asinh(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf => return Ok(Value::PlusInf),
        Value::MinusInf => return Ok(Value::MinusInf),
        Value::Undefined => return Ok(Value::Undefined),
    };
    if x.is_zero() {
        return Ok(Value::Number(Number::zero()));
    }
    // asinh(x) = ln(x + sqrt(x^2 + 1)); the sign is folded out first so the
    // log argument never cancels toward zero
    let pg = prec + 4;
    let neg = x.is_negative();
    let ax = x.abs();
    let root = sqrt_number(&(&(&ax * &ax) + &Number::one()).rescale(pg, false), pg)?;
    let v = ln_number(&(&ax + &root), pg)?;
    let v = if neg { -v } else { v };
    Ok(Value::Number(v.rescale(prec, false)))
}

pub fn acosh(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf => return Ok(Value::PlusInf),
        Value::MinusInf | Value::Undefined => return Ok(Value::Undefined),
    };
    let one = Number::one();
    if x == one {
        return Ok(Value::Number(Number::zero()));
    }
    if x < one {
        return Ok(Value::Undefined);
    }
    // acosh(x) = ln(x + sqrt(x^2 - 1)), x >= 1
    let pg = prec + 4;
    let root = sqrt_number(&(&(&x * &x) - &one).rescale(pg, false), pg)?;
    let v = ln_number(&(&x + &root), pg)?;
    Ok(Value::Number(v.rescale(prec, false)))
}

pub fn atanh(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        _ => return Ok(Value::Undefined),
    };
    let one = Number::one();
    if x == one {
        return Ok(Value::PlusInf);
    }
    if x == -&one {
        return Ok(Value::MinusInf);
    }
    if x.abs() > one {
        return Ok(Value::Undefined);
    }
    if x.is_zero() {
        return Ok(Value::Number(Number::zero()));
    }

    // atanh(x) = x + x^3/3 + x^5/5 + ...; t_{r+1} = t_r*x^2*(2r-1)/(2r+1)
    let prec2 = prec + 4;
    let delp = Number::delta(prec);
    let neg = x.is_negative();
    let ax = x.abs();
    let x2 = (&ax * &ax).rescale(prec2, false);
    let mut t = ax.clone();
    let mut s = ax;
    for r in 1..=MAX_SERIES_ITERATIONS as u64 {
        t = (&(&t * &x2) * &Number::from(2 * r - 1)).div_prec(&Number::from(2 * r + 1), prec2);
        if t < delp {
            let s = if neg { -s } else { s };
            return Ok(Value::Number(s.rescale(prec, false)));
        }
        s = &s + &t;
    }
    Err(Error::NoConvergence("atanh"))
}

pub fn acoth(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf | Value::MinusInf => return Ok(Value::Number(Number::zero())),
        Value::Undefined => return Ok(Value::Undefined),
    };
    let one = Number::one();
    if x == one {
        return Ok(Value::PlusInf);
    }
    if x == -&one {
        return Ok(Value::MinusInf);
    }
    if x.abs() < one {
        return Ok(Value::Undefined);
    }

    // acoth(x) = 1/x + 1/(3x^3) + 1/(5x^5) + ...; t_{r+1} = t_r*(2r-1)/(x^2*(2r+1))
    let prec2 = prec + 4;
    let delp = Number::delta(prec);
    let neg = x.is_negative();
    let ax = x.abs();
    let x2 = (&ax * &ax).rescale(prec2, false);
    let mut t = one.div_prec(&ax, prec2);
    let mut s = t.clone();
    for r in 1..=MAX_SERIES_ITERATIONS as u64 {
        let den = (&x2 * &Number::from(2 * r + 1)).rescale(prec2, false);
        t = (&t * &Number::from(2 * r - 1)).div_prec(&den, prec2);
        if t < delp {
            let s = if neg { -s } else { s };
            return Ok(Value::Number(s.rescale(prec, false)));
        }
        s = &s + &t;
    }
    Err(Error::NoConvergence("acoth"))
}

pub fn asech(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        _ => return Ok(Value::Undefined),
    };
    let one = Number::one();
    if x.is_zero() {
        return Ok(Value::PlusInf);
    }
    if x.is_negative() || x > one {
        return Ok(Value::Undefined);
    }
    if x == one {
        return Ok(Value::Number(Number::zero()));
    }
    // asech(x) = ln((1 + sqrt(1 - x^2))/x), 0 < x <= 1
    let pg = prec + 4;
    let root = sqrt_number(&(&one - &(&x * &x)).rescale(pg, false), pg)?;
    let v = ln_number(&(&one + &root).div_prec(&x, pg), pg)?;
    Ok(Value::Number(v.rescale(prec, false)))
}

pub fn acosech(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        _ => return Ok(Value::Undefined),
    };
    if x.is_negative() {
        return Ok(Value::Undefined);
    }
    if x.is_zero() {
        return Ok(Value::PlusInf);
    }
    // acosech(x) = ln((1 + sqrt(1 + x^2))/x), x > 0
    let pg = prec + 4;
    let one = Number::one();
    let root = sqrt_number(&(&one + &(&x * &x)).rescale(pg, false), pg)?;
    let v = ln_number(&(&one + &root).div_prec(&x, pg), pg)?;
    Ok(Value::Number(v.rescale(prec, false)))
}
