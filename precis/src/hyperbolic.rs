use crate::exp::exp_number;
use crate::number::Number;
use crate::value::{Error, Value, normalize_prec};

// All six functions are closed-form combinations of e^x; tanh and coth use
// the single exponential e^(2x). coth and cosech have a two-sided pole at
// the origin, reported as Undefined rather than either signed infinity.

pub fn sinh(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
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
    let pg = prec + 4;
    let ex = exp_number(&x, pg)?;
    let enx = exp_number(&-&x, pg)?;
    Ok(Value::Number((&ex - &enx).half().rescale(prec, false)))
}

pub fn cosh(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf | Value::MinusInf => return Ok(Value::PlusInf),
        Value::Undefined => return Ok(Value::Undefined),
    };
    if x.is_zero() {
        return Ok(Value::Number(Number::one()));
    }
    let pg = prec + 4;
    let ex = exp_number(&x, pg)?;
    let enx = exp_number(&-&x, pg)?;
    Ok(Value::Number((&ex + &enx).half().rescale(prec, false)))
}

pub fn tanh(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf => return Ok(Value::Number(Number::one())),
        Value::MinusInf => return Ok(Value::Number(-Number::one())),
        Value::Undefined => return Ok(Value::Undefined),
    };
    if x.is_zero() {
        return Ok(Value::Number(Number::zero()));
    }
    let pg = prec + 4;
    let one = Number::one();
    let t = exp_number(&x.double(), pg)?;
    let v = (&t - &one).div_prec(&(&t + &one), pg);
    Ok(Value::Number(v.rescale(prec, false)))
}

pub fn coth(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf => return Ok(Value::Number(Number::one())),
        Value::MinusInf => return Ok(Value::Number(-Number::one())),
        Value::Undefined => return Ok(Value::Undefined),
    };
    if x.is_zero() {
        return Ok(Value::Undefined);
    }
    let pg = prec + 4;
    let one = Number::one();
    let t = exp_number(&x.double(), pg)?;
    if t == one {
        // e^(2x) rounded all the way back to 1: the pole has swallowed
        // every working digit
        return Ok(if x.is_negative() { Value::MinusInf } else { Value::PlusInf });
    }
    let v = (&t + &one).div_prec(&(&t - &one), pg);
    Ok(Value::Number(v.rescale(prec, false)))
}

pub fn sech(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf | Value::MinusInf => return Ok(Value::Number(Number::zero())),
        Value::Undefined => return Ok(Value::Undefined),
    };
    if x.is_zero() {
        return Ok(Value::Number(Number::one()));
    }
    let pg = prec + 4;
    let ex = exp_number(&x, pg)?;
    let enx = exp_number(&-&x, pg)?;
    let v = Number::from(2).div_prec(&(&ex + &enx), pg);
    Ok(Value::Number(v.rescale(prec, false)))
}

pub fn cosech(x: impl Into<Value>, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf | Value::MinusInf => return Ok(Value::Number(Number::zero())),
        Value::Undefined => return Ok(Value::Undefined),
    };
    if x.is_zero() {
        return Ok(Value::Undefined);
    }
    let pg = prec + 4;
    let ex = exp_number(&x, pg)?;
    let enx = exp_number(&-&x, pg)?;
    let den = &ex - &enx;
    if den.is_zero() {
        return Ok(if x.is_negative() { Value::MinusInf } else { Value::PlusInf });
    }
    let v = Number::from(2).div_prec(&den, pg);
    Ok(Value::Number(v.rescale(prec, false)))
}
