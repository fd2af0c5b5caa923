use num_traits::{ToPrimitive, Zero};

use crate::constant::pi;
use crate::number::Number;
use crate::value::{Error, MAX_SERIES_ITERATIONS, Unit, Value, normalize_prec};

#[derive(Clone, Copy, PartialEq)]
enum Circular {
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Cosec,
}

pub fn sin(x: impl Into<Value>, unit: Unit, prec: u32) -> Result<Value, Error> {
    circular(Circular::Sin, x.into(), unit, prec)
}

pub fn cos(x: impl Into<Value>, unit: Unit, prec: u32) -> Result<Value, Error> {
    circular(Circular::Cos, x.into(), unit, prec)
}

pub fn tan(x: impl Into<Value>, unit: Unit, prec: u32) -> Result<Value, Error> {
    circular(Circular::Tan, x.into(), unit, prec)
}

pub fn cot(x: impl Into<Value>, unit: Unit, prec: u32) -> Result<Value, Error> {
    circular(Circular::Cot, x.into(), unit, prec)
}

pub fn sec(x: impl Into<Value>, unit: Unit, prec: u32) -> Result<Value, Error> {
    circular(Circular::Sec, x.into(), unit, prec)
}

pub fn cosec(x: impl Into<Value>, unit: Unit, prec: u32) -> Result<Value, Error> {
    circular(Circular::Cosec, x.into(), unit, prec)
}

// Shared pipeline: fold the sign out, consult the exact-angle table, convert
// to radians, reduce to a first-quadrant angle plus a quadrant index, try the
// reduced closed forms, and only then sum a series.
fn circular(f: Circular, x: Value, unit: Unit, prec: u32) -> Result<Value, Error> {
    let prec = normalize_prec(prec);
    let x = match x {
        Value::Number(n) => n,
        _ => return Ok(Value::Undefined),
    };
    let prec2 = prec + 8;
    let neg = x.is_negative();
    let ax = x.abs();

    if unit == Unit::Degree {
        if let Some(v) = exact_degrees(f, &ax, neg) {
            return Ok(v);
        }
    }

    // guard digits grow with the integer part so large angles reduce cleanly
    let wide = prec2 + ax.int_digits();
    let pi = pi(wide)?;
    let half_pi = pi.half();
    let rad = match unit {
        Unit::Degree => (&ax * &pi).div_prec(&Number::from(180), wide),
        Unit::Radian => ax,
    };
    let (q, basic) = reduce_quadrant(&rad, &half_pi, neg);

    let pi_6 = pi.div_prec(&Number::from(6), prec2);
    let pi_4 = pi.div_prec(&Number::from(4), prec2);
    let pi_3 = pi.div_prec(&Number::from(3), prec2);

    let one = Number::one();
    let result = match f {
        Circular::Sin => {
            let plus = q <= 2;
            if basic.is_zero() {
                Value::Number(Number::zero())
            } else if basic == half_pi {
                Value::Number(signed(one, plus))
            } else if basic == pi_6 {
                Value::Number(signed(Number::lit("0.5"), plus))
            } else {
                let s = sin_series(&basic, prec, prec2)?;
                Value::Number(signed(s, plus).rescale(prec, false))
            }
        }
        Circular::Cos => {
            let plus = q == 1 || q == 4;
            if basic.is_zero() {
                Value::Number(signed(one, plus))
            } else if basic == half_pi {
                Value::Number(Number::zero())
            } else if basic == pi_3 {
                Value::Number(signed(Number::lit("0.5"), plus))
            } else {
                let c = cos_series(&basic, prec, prec2)?;
                Value::Number(signed(c, plus).rescale(prec, false))
            }
        }
        Circular::Tan => {
            let plus = q == 1 || q == 3;
            if basic.is_zero() {
                Value::Number(Number::zero())
            } else if basic == half_pi {
                pole(!neg)
            } else if basic == pi_4 {
                Value::Number(signed(one, plus))
            } else {
                let s = sin_series(&basic, prec, prec2)?;
                let c = cos_series(&basic, prec, prec2)?;
                Value::Number(signed(s.div_prec(&c, prec2), plus).rescale(prec, false))
            }
        }
        Circular::Cot => {
            let plus = q == 1 || q == 3;
            if basic.is_zero() {
                pole(!neg)
            } else if basic == half_pi {
                Value::Number(Number::zero())
            } else if basic == pi_4 {
                Value::Number(signed(one, plus))
            } else {
                let s = sin_series(&basic, prec, prec2)?;
                let c = cos_series(&basic, prec, prec2)?;
                Value::Number(signed(c.div_prec(&s, prec2), plus).rescale(prec, false))
            }
        }
        Circular::Sec => {
            let plus = q == 1 || q == 4;
            if basic.is_zero() {
                Value::Number(signed(one, plus))
            } else if basic == half_pi {
                Value::PlusInf
            } else if basic == pi_3 {
                Value::Number(signed(Number::from(2), plus))
            } else {
                let c = cos_series(&basic, prec, prec2)?;
                Value::Number(signed(one.div_prec(&c, prec2), plus).rescale(prec, false))
            }
        }
        Circular::Cosec => {
            let plus = q <= 2;
            if basic.is_zero() {
                Value::PlusInf
            } else if basic == half_pi {
                Value::Number(signed(one, plus))
            } else if basic == pi_6 {
                Value::Number(signed(Number::from(2), plus))
            } else {
                let s = sin_series(&basic, prec, prec2)?;
                Value::Number(signed(one.div_prec(&s, prec2), plus).rescale(prec, false))
            }
        }
    };
    Ok(result)
}

fn signed(n: Number, plus: bool) -> Number {
    if plus { n } else { -n }
}

fn pole(plus: bool) -> Value {
    if plus { Value::PlusInf } else { Value::MinusInf }
}

// q is the quadrant of the signed angle (1..4); basic is its first-quadrant
// representative in [0, pi/2]
fn reduce_quadrant(rad: &Number, half_pi: &Number, neg: bool) -> (u8, Number) {
    let k = rad.div_floor_positive(half_pi);
    let qm = (&k % 4u8).to_u8().unwrap_or(0);
    let mut q = 1 + qm;
    if neg {
        q = 5 - q;
    }
    let rem = rad - &(half_pi * &Number::from(k));
    let basic = if qm % 2 == 1 { half_pi - &rem } else { rem };
    (q, basic)
}

// sin x = x - x^3/3! + x^5/5! - ...; t_{i+1} = -t_i*x^2/(2i*(2i+1))
fn sin_series(x: &Number, prec: u32, prec2: u32) -> Result<Number, Error> {
    let delp = Number::delta(prec);
    let x2 = (x * x).rescale(prec2, false);
    let mut t = x.clone();
    let mut s = x.clone();
    for i in 1..=MAX_SERIES_ITERATIONS as u64 {
        t = -(&t * &x2).div_prec(&Number::from(2 * i * (2 * i + 1)), prec2);
        if t.abs() < delp {
            return Ok(s);
        }
        s = &s + &t;
    }
    Err(Error::NoConvergence("sin"))
}

// cos x = 1 - x^2/2! + x^4/4! - ...; t_{i+1} = -t_i*x^2/(2i*(2i-1))
fn cos_series(x: &Number, prec: u32, prec2: u32) -> Result<Number, Error> {
    let delp = Number::delta(prec);
    let x2 = (x * x).rescale(prec2, false);
    let mut t = Number::one();
    let mut s = Number::one();
    for i in 1..=MAX_SERIES_ITERATIONS as u64 {
        t = -(&t * &x2).div_prec(&Number::from(2 * i * (2 * i - 1)), prec2);
        if t.abs() < delp {
            return Ok(s);
        }
        s = &s + &t;
    }
    Err(Error::NoConvergence("cos"))
}

enum Cell {
    Num(&'static str),
    Pole(bool),
}

// One table answers every special angle: the 30-degree grid carries
// sin/cos/sec/cosec, the 45-degree grid carries tan/cot. Entries are exact
// and bypass the series entirely.
fn exact_degrees(f: Circular, ax: &Number, neg: bool) -> Option<Value> {
    let d = ax.to_bigint_exact()?;
    let (cell, odd, flip_pole) = match f {
        Circular::Sin | Circular::Cos | Circular::Sec | Circular::Cosec => {
            if !(&d % 30u8).is_zero() {
                return None;
            }
            let c = ((&d / 30u8) % 12u8).to_u8().unwrap_or(0);
            match f {
                Circular::Sin => (sin_cell(c)?, true, true),
                Circular::Cos => (cos_cell(c)?, false, false),
                Circular::Sec => (sec_cell(c)?, false, false),
                // the cosecant poles keep their sign under negation, like
                // the other two-sided poles at multiples of pi
                Circular::Cosec => (cosec_cell(c)?, true, false),
                _ => return None,
            }
        }
        Circular::Tan | Circular::Cot => {
            if !(&d % 45u8).is_zero() {
                return None;
            }
            let c = ((&d / 45u8) % 8u8).to_u8().unwrap_or(0);
            match f {
                Circular::Tan => (tan_cell(c)?, true, true),
                Circular::Cot => (cot_cell(c)?, true, true),
                _ => return None,
            }
        }
    };
    Some(match cell {
        Cell::Num(s) => {
            let n = Number::lit(s);
            Value::Number(if neg && odd && !n.is_zero() { -n } else { n })
        }
        Cell::Pole(p) => pole(if neg && flip_pole { !p } else { p }),
    })
}

fn sin_cell(c: u8) -> Option<Cell> {
    match c {
        0 | 6 => Some(Cell::Num("0")),
        1 | 5 => Some(Cell::Num("0.5")),
        7 | 11 => Some(Cell::Num("-0.5")),
        3 => Some(Cell::Num("1")),
        9 => Some(Cell::Num("-1")),
        _ => None,
    }
}

fn cos_cell(c: u8) -> Option<Cell> {
    match c {
        0 => Some(Cell::Num("1")),
        6 => Some(Cell::Num("-1")),
        2 | 10 => Some(Cell::Num("0.5")),
        4 | 8 => Some(Cell::Num("-0.5")),
        3 | 9 => Some(Cell::Num("0")),
        _ => None,
    }
}

fn sec_cell(c: u8) -> Option<Cell> {
    match c {
        0 => Some(Cell::Num("1")),
        6 => Some(Cell::Num("-1")),
        2 | 10 => Some(Cell::Num("2")),
        4 | 8 => Some(Cell::Num("-2")),
        3 | 9 => Some(Cell::Pole(true)),
        _ => None,
    }
}

fn cosec_cell(c: u8) -> Option<Cell> {
    match c {
        0 | 6 => Some(Cell::Pole(true)),
        1 | 5 => Some(Cell::Num("2")),
        7 | 11 => Some(Cell::Num("-2")),
        3 => Some(Cell::Num("1")),
        9 => Some(Cell::Num("-1")),
        _ => None,
    }
}

fn tan_cell(c: u8) -> Option<Cell> {
    match c {
        0 | 4 => Some(Cell::Num("0")),
        1 | 5 => Some(Cell::Num("1")),
        3 | 7 => Some(Cell::Num("-1")),
        2 => Some(Cell::Pole(true)),
        6 => Some(Cell::Pole(false)),
        _ => None,
    }
}

fn cot_cell(c: u8) -> Option<Cell> {
    match c {
        0 => Some(Cell::Pole(true)),
        4 => Some(Cell::Pole(false)),
        1 | 5 => Some(Cell::Num("1")),
        3 | 7 => Some(Cell::Num("-1")),
        2 | 6 => Some(Cell::Num("0")),
        _ => None,
    }
}
