use num_bigint::BigInt;
use num_traits::One;

use crate::number::Number;
use crate::value::Error;

// Exact integer combinatorics. Arguments must be nonnegative integers with
// n >= r; anything else is rejected at entry.

pub fn fact(n: i64) -> Result<Number, Error> {
    if n < 0 {
        return Err(Error::InvalidArgument(format!("fact({}) needs n >= 0", n)));
    }
    Ok(Number::from(fact_bigint(n as u64)))
}

pub(crate) fn fact_bigint(n: u64) -> BigInt {
    let mut p = BigInt::one();
    for i in 2..=n {
        p *= i;
    }
    p
}

pub fn ncr(n: i64, r: i64) -> Result<Number, Error> {
    check_pair("nCr", n, r)?;
    Ok(Number::from(ncr_bigint(n as u64, r as u64)))
}

// nCr = nC(n-r); building the product with a rolling exact division keeps
// intermediates at binomial size
pub(crate) fn ncr_bigint(n: u64, r: u64) -> BigInt {
    let r = r.min(n - r);
    let mut p = BigInt::one();
    for i in 0..r {
        p *= n - i;
        p /= i + 1;
    }
    p
}

pub fn npr(n: i64, r: i64) -> Result<Number, Error> {
    check_pair("nPr", n, r)?;
    let (n, r) = (n as u64, r as u64);
    let mut p = BigInt::one();
    for i in (n - r + 1)..=n {
        p *= i;
    }
    Ok(Number::from(p))
}

fn check_pair(func: &str, n: i64, r: i64) -> Result<(), Error> {
    if n < 0 || r < 0 || r > n {
        return Err(Error::InvalidArgument(format!(
            "{}({}, {}) needs 0 <= r <= n",
            func, n, r
        )));
    }
    Ok(())
}
