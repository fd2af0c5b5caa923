use std::fmt;
use std::str::FromStr;

use crate::number::Number;

// Tagged result so arithmetic can never be applied to an infinity or an
// undefined by accident. Domain failures come back as Undefined, poles as a
// signed infinity; only malformed inputs are raised as errors.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(Number),
    PlusInf,
    MinusInf,
    Undefined,
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Value {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Number(Number::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value::Number(Number::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Value {
        Value::Number(Number::from(v))
    }
}

// floats come in through their shortest decimal form so 0.1 means 0.1,
// not its binary expansion; non-finite floats map onto the sentinels
impl From<f64> for Value {
    fn from(v: f64) -> Value {
        if v.is_nan() {
            Value::Undefined
        } else if v.is_infinite() {
            if v > 0.0 { Value::PlusInf } else { Value::MinusInf }
        } else {
            Value::Number(Number::lit(&format!("{}", v)))
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::PlusInf => write!(f, "Infinity"),
            Value::MinusInf => write!(f, "-Infinity"),
            Value::Undefined => write!(f, "Undefined"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Degree,
    Radian,
}

impl FromStr for Unit {
    type Err = Error;
    fn from_str(s: &str) -> Result<Unit, Error> {
        match s {
            "d" | "D" | "deg" | "Deg" | "degre" | "Degre" | "degree" | "Degree" => Ok(Unit::Degree),
            "r" | "R" | "c" | "rad" | "Rad" | "radian" | "Radian" => Ok(Unit::Radian),
            other => Err(Error::InvalidArgument(format!("bad angle unit {:?}", other))),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidArgument(String),
    // a series hit the iteration cap before the term dropped below 10^-prec
    NoConvergence(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Error::NoConvergence(func) => write!(f, "{} did not converge", func),
        }
    }
}

impl std::error::Error for Error {}

// every series loop is bounded; hitting the cap reports NoConvergence
// instead of spinning or returning a short result
pub(crate) const MAX_SERIES_ITERATIONS: usize = 200_000;

// an absent or non-positive precision falls back to 36
pub(crate) fn normalize_prec(prec: u32) -> u32 {
    if prec < 1 { 36 } else { prec }
}
