use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::value::Error;

// Immutable arbitrary-precision decimal plus a provenance flag. The flag is
// true only for values reached through exact arithmetic or closed forms;
// any rounded result carries false.
#[derive(Clone, Debug)]
pub struct Number {
    mag: BigDecimal,
    acc: bool,
}

pub(crate) fn pow10(e: u64) -> BigInt {
    num_traits::pow(BigInt::from(10), e as usize)
}

impl Number {
    pub fn new(mag: BigDecimal, is_accurate: bool) -> Number {
        Number { mag, acc: is_accurate }
    }

    pub fn zero() -> Number {
        Number::new(BigDecimal::zero(), true)
    }

    pub fn one() -> Number {
        Number::new(BigDecimal::one(), true)
    }

    // for in-source constants that are known to parse
    pub(crate) fn lit(s: &str) -> Number {
        match s.parse() {
            Ok(n) => n,
            Err(e) => panic!("BUG: bad numeric literal {:?}: {:?}", s, e),
        }
    }

    pub fn magnitude(&self) -> &BigDecimal {
        &self.mag
    }

    pub fn is_accurate(&self) -> bool {
        self.acc
    }

    pub fn is_zero(&self) -> bool {
        self.mag.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mag < BigDecimal::zero()
    }

    pub fn is_integer(&self) -> bool {
        self.mag.is_integer()
    }

    pub fn abs(&self) -> Number {
        Number::new(self.mag.abs(), self.acc)
    }

    pub(crate) fn half(&self) -> Number {
        Number::new(&self.mag * BigDecimal::new(BigInt::from(5), 1), self.acc)
    }

    pub(crate) fn double(&self) -> Number {
        Number::new(&self.mag * BigDecimal::from(2), self.acc)
    }

    // round to `prec` significant decimal digits; trailing zeros dropped
    pub fn rescale(&self, prec: u32, is_accurate: bool) -> Number {
        Number::new(self.mag.with_prec(prec as u64).normalized(), is_accurate)
    }

    // quotient carrying `prec` significant digits; the divisor must be
    // nonzero, which every call site guards before dividing
    pub fn div_prec(&self, rhs: &Number, prec: u32) -> Number {
        let (an, ae) = self.mag.as_bigint_and_exponent();
        let (bn, be) = rhs.mag.as_bigint_and_exponent();
        if an.is_zero() {
            return Number::new(BigDecimal::zero(), self.acc && rhs.acc);
        }
        let ad = self.mag.digits() as i64;
        let bd = rhs.mag.digits() as i64;
        let shift = (prec as i64 + bd - ad + 1).max(0);
        let q = (an * pow10(shift as u64)) / bn;
        let mag = BigDecimal::new(q, ae - be + shift).with_prec(prec as u64);
        Number::new(mag.normalized(), false)
    }

    // 10^-prec, the convergence threshold for a requested precision
    pub(crate) fn delta(prec: u32) -> Number {
        Number::new(BigDecimal::new(BigInt::one(), prec as i64), true)
    }

    // exact integer value, None when self has a fractional part
    pub(crate) fn to_bigint_exact(&self) -> Option<BigInt> {
        if !self.mag.is_integer() {
            return None;
        }
        let (n, s) = self.mag.as_bigint_and_exponent();
        if s >= 0 {
            Some(n / pow10(s as u64))
        } else {
            Some(n * pow10(-s as u64))
        }
    }

    // integer part truncated toward zero
    pub(crate) fn trunc(&self) -> BigInt {
        let (n, s) = self.mag.as_bigint_and_exponent();
        if s >= 0 {
            n / pow10(s as u64)
        } else {
            n * pow10(-s as u64)
        }
    }

    pub(crate) fn fract(&self) -> Number {
        self - &Number::from(self.trunc())
    }

    // exact floor of self/rhs for nonnegative self, positive rhs
    pub(crate) fn div_floor_positive(&self, rhs: &Number) -> BigInt {
        let (an, ae) = self.mag.as_bigint_and_exponent();
        let (bn, be) = rhs.mag.as_bigint_and_exponent();
        let e = be - ae;
        if e >= 0 {
            (an * pow10(e as u64)) / bn
        } else {
            an / (bn * pow10(-e as u64))
        }
    }

    // count of digits left of the decimal point (0 for |x| < 1)
    pub(crate) fn int_digits(&self) -> u32 {
        let (_, s) = self.mag.as_bigint_and_exponent();
        (self.mag.digits() as i64 - s).max(0) as u32
    }

    // self = mantissa * 10^k with mantissa in [1, 10)
    pub(crate) fn decimal_normalize(&self) -> (i64, Number) {
        let nd = self.mag.normalized();
        let (n, s) = nd.as_bigint_and_exponent();
        let d = nd.digits() as i64;
        (d - 1 - s, Number::new(BigDecimal::new(n, d - 1), self.acc))
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Number {
        Number::new(BigDecimal::from(v), true)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Number {
        Number::from(v as i64)
    }
}

impl From<u32> for Number {
    fn from(v: u32) -> Number {
        Number::from(v as i64)
    }
}

impl From<u64> for Number {
    fn from(v: u64) -> Number {
        Number::new(BigDecimal::from(v), true)
    }
}

impl From<BigInt> for Number {
    fn from(v: BigInt) -> Number {
        Number::new(BigDecimal::from(v), true)
    }
}

impl FromStr for Number {
    type Err = Error;
    fn from_str(s: &str) -> Result<Number, Error> {
        match BigDecimal::from_str(s) {
            Ok(mag) => Ok(Number::new(mag, true)),
            Err(e) => Err(Error::InvalidArgument(format!("bad number {:?}: {}", s, e))),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.mag)
    }
}

// equality and order are numeric; the provenance flag does not participate
impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        self.mag == other.mag
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Number) -> Ordering {
        self.mag.cmp(&other.mag)
    }
}

impl Add for &Number {
    type Output = Number;
    fn add(self, rhs: &Number) -> Number {
        Number::new(&self.mag + &rhs.mag, self.acc && rhs.acc)
    }
}

impl Sub for &Number {
    type Output = Number;
    fn sub(self, rhs: &Number) -> Number {
        Number::new(&self.mag - &rhs.mag, self.acc && rhs.acc)
    }
}

impl Mul for &Number {
    type Output = Number;
    fn mul(self, rhs: &Number) -> Number {
        Number::new(&self.mag * &rhs.mag, self.acc && rhs.acc)
    }
}

impl Neg for &Number {
    type Output = Number;
    fn neg(self) -> Number {
        Number::new(-&self.mag, self.acc)
    }
}

impl Neg for Number {
    type Output = Number;
    fn neg(self) -> Number {
        Number::new(-self.mag, self.acc)
    }
}
