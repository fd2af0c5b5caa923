use crate::constant::pi;
use crate::number::Number;
use crate::value::{Error, MAX_SERIES_ITERATIONS, Unit, Value, normalize_prec};

// Inverse trigonometric functions. Results come back in the requested unit;
// out-of-domain inputs are Undefined, never an error.

pub fn asin(x: impl Into<Value>, unit: Unit, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let one = Number::one();
    let x = match x.into() {
        Value::Number(n) => n,
        _ => return Ok(Value::Undefined),
    };
    if x.abs() > one {
        return Ok(Value::Undefined);
    }
    if x.is_zero() {
        return Ok(Value::Number(Number::zero()));
    }
    let prec2 = prec + 8;
    if let Some(v) = asin_closed(&x, unit, prec, prec2)? {
        return Ok(v);
    }
    let s = asin_series(&x, prec, prec2)?;
    Ok(Value::Number(in_unit(s, unit, prec, prec2)?))
}

// the exact anchors 0, +-1/2, +-1
fn asin_closed(x: &Number, unit: Unit, prec: u32, prec2: u32) -> Result<Option<Value>, Error> {
    let deg = |d: i64| Some(Value::Number(Number::from(d)));
    let rad = |num: i64, den: i64| -> Result<Option<Value>, Error> {
        let pi = pi(prec2)?;
        let v = (&pi * &Number::from(num)).div_prec(&Number::from(den), prec2);
        Ok(Some(Value::Number(v.rescale(prec, false))))
    };
    let half = Number::lit("0.5");
    let one = Number::one();
    match unit {
        Unit::Degree => Ok(if *x == half {
            deg(30)
        } else if *x == one {
            deg(90)
        } else if *x == -&half {
            deg(-30)
        } else if *x == -&one {
            deg(-90)
        } else {
            None
        }),
        Unit::Radian => {
            if *x == half {
                rad(1, 6)
            } else if *x == one {
                rad(1, 2)
            } else if *x == -&half {
                rad(-1, 6)
            } else if *x == -&one {
                rad(-1, 2)
            } else {
                Ok(None)
            }
        }
    }
}

pub fn acos(x: impl Into<Value>, unit: Unit, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let one = Number::one();
    let x = match x.into() {
        Value::Number(n) => n,
        _ => return Ok(Value::Undefined),
    };
    if x.abs() > one {
        return Ok(Value::Undefined);
    }
    let prec2 = prec + 8;
    let half = Number::lit("0.5");
    // exact anchors; acos(-x) = pi - acos(x)
    if x == one {
        return Ok(Value::Number(Number::zero()));
    }
    if x.is_zero() {
        return angle_of(1, 2, 90, unit, prec, prec2);
    }
    if x == half {
        return angle_of(1, 3, 60, unit, prec, prec2);
    }
    if x == -&half {
        return angle_of(2, 3, 120, unit, prec, prec2);
    }
    if x == -&one {
        return angle_of(1, 1, 180, unit, prec, prec2);
    }
    let s = asin_series(&x, prec, prec2)?;
    let pi = pi(prec2)?;
    match unit {
        Unit::Radian => {
            let v = &pi.half() - &s;
            Ok(Value::Number(v.rescale(prec, false)))
        }
        Unit::Degree => {
            let d = (&s * &Number::from(180)).div_prec(&pi, prec2);
            Ok(Value::Number((&Number::from(90) - &d).rescale(prec, false)))
        }
    }
}

// num/den of pi for radians, whole degrees otherwise
fn angle_of(num: i64, den: i64, degrees: i64, unit: Unit, prec: u32, prec2: u32) -> Result<Value, Error> {
    match unit {
        Unit::Degree => Ok(Value::Number(Number::from(degrees))),
        Unit::Radian => {
            let pi = pi(prec2)?;
            let v = (&pi * &Number::from(num)).div_prec(&Number::from(den), prec2);
            Ok(Value::Number(v.rescale(prec, false)))
        }
    }
}

pub fn atan(x: impl Into<Value>, unit: Unit, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf => return angle_of(1, 2, 90, unit, prec, prec + 8),
        Value::MinusInf => return angle_of(-1, 2, -90, unit, prec, prec + 8),
        Value::Undefined => return Ok(Value::Undefined),
    };
    let prec2 = prec + 8;
    if x.is_zero() {
        return Ok(Value::Number(Number::zero()));
    }
    if x == Number::one() {
        return angle_of(1, 4, 45, unit, prec, prec2);
    }
    if x == -Number::one() {
        return angle_of(-1, 4, -45, unit, prec, prec2);
    }
    let r = atan_number(&x, prec, prec2)?;
    Ok(Value::Number(in_unit(r, unit, prec, prec2)?))
}

// atan in radians at working precision; |x| > 1 converges through the
// reflection atan(x) = pi/2 - atan(1/x) (sign-adjusted below the axis)
pub(crate) fn atan_number(x: &Number, prec: u32, prec2: u32) -> Result<Number, Error> {
    let one = Number::one();
    if x.abs() == one {
        let quarter_pi = pi(prec2)?.div_prec(&Number::from(4), prec2);
        return Ok(if x.is_negative() { -quarter_pi } else { quarter_pi });
    }
    if x.abs() < one {
        return atan_series(x, prec, prec2);
    }
    let inv = one.div_prec(x, prec2);
    let s = atan_series(&inv, prec, prec2)?;
    let half_pi = pi(prec2)?.half();
    if x.is_negative() {
        Ok(&(-half_pi) - &s)
    } else {
        Ok(&half_pi - &s)
    }
}

pub fn acot(x: impl Into<Value>, unit: Unit, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let prec2 = prec + 8;
    // acot(x) = pi/2 - atan(x), with range (0, pi)
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf => return Ok(Value::Number(Number::zero())),
        Value::MinusInf => return angle_of(1, 1, 180, unit, prec, prec2),
        Value::Undefined => return Ok(Value::Undefined),
    };
    if x.is_zero() {
        return angle_of(1, 2, 90, unit, prec, prec2);
    }
    if x == Number::one() {
        return angle_of(1, 4, 45, unit, prec, prec2);
    }
    if x == -Number::one() {
        return angle_of(3, 4, 135, unit, prec, prec2);
    }
    let a = atan_number(&x, prec, prec2)?;
    let r = &pi(prec2)?.half() - &a;
    Ok(Value::Number(in_unit(r, unit, prec, prec2)?))
}

pub fn asec(x: impl Into<Value>, unit: Unit, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let prec2 = prec + 8;
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf | Value::MinusInf => return angle_of(1, 2, 90, unit, prec, prec2),
        Value::Undefined => return Ok(Value::Undefined),
    };
    let one = Number::one();
    if x.abs() < one {
        return Ok(Value::Undefined);
    }
    if x == one {
        return Ok(Value::Number(Number::zero()));
    }
    if x == -&one {
        return angle_of(1, 1, 180, unit, prec, prec2);
    }
    if x == Number::from(2) {
        return angle_of(1, 3, 60, unit, prec, prec2);
    }
    if x == Number::from(-2) {
        return angle_of(2, 3, 120, unit, prec, prec2);
    }
    // asec(x) = acos(1/x)
    let inv = one.div_prec(&x, prec2);
    acos(inv, unit, prec)
}

pub fn acosec(x: impl Into<Value>, unit: Unit, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let prec2 = prec + 8;
    let x = match x.into() {
        Value::Number(n) => n,
        Value::PlusInf | Value::MinusInf => return Ok(Value::Number(Number::zero())),
        Value::Undefined => return Ok(Value::Undefined),
    };
    let one = Number::one();
    if x.abs() < one {
        return Ok(Value::Undefined);
    }
    if x == one {
        return angle_of(1, 2, 90, unit, prec, prec2);
    }
    if x == -&one {
        return angle_of(-1, 2, -90, unit, prec, prec2);
    }
    if x == Number::from(2) {
        return angle_of(1, 6, 30, unit, prec, prec2);
    }
    if x == Number::from(-2) {
        return angle_of(-1, 6, -30, unit, prec, prec2);
    }
    // acosec(x) = asin(1/x)
    let inv = one.div_prec(&x, prec2);
    asin(inv, unit, prec)
}

// radians to the requested unit, rounded to the output precision
fn in_unit(radians: Number, unit: Unit, prec: u32, prec2: u32) -> Result<Number, Error> {
    match unit {
        Unit::Radian => Ok(radians.rescale(prec, false)),
        Unit::Degree => {
            let pi = pi(prec2)?;
            let d = (&radians * &Number::from(180)).div_prec(&pi, prec2);
            Ok(d.rescale(prec, false))
        }
    }
}

// asin x = x + x^3/6 + 3x^5/40 + ...; t_{i+1} = t_i*x^2*(2i-1)^2/(2i*(2i+1))
fn asin_series(x: &Number, prec: u32, prec2: u32) -> Result<Number, Error> {
    let delp = Number::delta(prec);
    let x2 = (x * x).rescale(prec2, false);
    let mut t = x.clone();
    let mut s = x.clone();
    for i in 1..=MAX_SERIES_ITERATIONS as u64 {
        let c = (2 * i - 1) * (2 * i - 1);
        let den = 2 * i * (2 * i + 1);
        t = (&(&t * &x2) * &Number::from(c)).div_prec(&Number::from(den), prec2);
        if t.abs() < delp {
            return Ok(s);
        }
        s = &s + &t;
    }
    Err(Error::NoConvergence("asin"))
}

// atan x = x - x^3/3 + x^5/5 - ...; t_{r+1} = -t_r*x^2*(2r-1)/(2r+1)
fn atan_series(x: &Number, prec: u32, prec2: u32) -> Result<Number, Error> {
    let delp = Number::delta(prec);
    let x2 = (x * x).rescale(prec2, false);
    let mut t = x.clone();
    let mut s = x.clone();
    for r in 1..=MAX_SERIES_ITERATIONS as u64 {
        t = -(&(&t * &x2) * &Number::from(2 * r - 1)).div_prec(&Number::from(2 * r + 1), prec2);
        if t.abs() < delp {
            return Ok(s);
        }
        s = &s + &t;
    }
    Err(Error::NoConvergence("atan"))
}
