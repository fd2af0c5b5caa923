use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::combin::ncr_bigint;
use crate::number::Number;
use crate::value::Error;

// Euler, Bernoulli and tangent numbers by exact integer recurrences. Odd
// indices are zero throughout; Bernoulli numbers come back as exact
// rationals since no finite decimal holds 1/6.

pub fn euler_number(r: i64) -> Result<Number, Error> {
    if r < 0 {
        return Err(Error::InvalidArgument(format!("eulerNumber({}) needs r >= 0", r)));
    }
    Ok(Number::from(euler_bigint(r as u64)))
}

// E_k = sum_{i=1..k} (-1)^i/2^i * sum_{j=0..2i} (-1)^j*C(2i,j)*(i-j)^k
pub(crate) fn euler_bigint(k: u64) -> BigInt {
    if k == 0 {
        return BigInt::one();
    }
    if k % 2 == 1 {
        return BigInt::zero();
    }
    let mut outer = BigRational::zero();
    for i in 1..=k {
        let mut inner = BigInt::zero();
        for j in 0..=2 * i {
            let c = ncr_bigint(2 * i, j);
            let base = BigInt::from(i as i64 - j as i64);
            let term = c * num_traits::pow(base, k as usize);
            if j % 2 == 0 {
                inner += term;
            } else {
                inner -= term;
            }
        }
        let contrib = BigRational::new(inner, num_traits::pow(BigInt::from(2), i as usize));
        if i % 2 == 0 {
            outer += contrib;
        } else {
            outer -= contrib;
        }
    }
    outer.to_integer()
}

// B_k = (sum_{i=0,2,..,k-2} C(k-1,i)*k*E_i) / (4^k - 2^k)
pub fn bernoulli_number(r: i64) -> Result<BigRational, Error> {
    if r < 1 {
        return Err(Error::InvalidArgument(format!("bernoulliNumber({}) needs r >= 1", r)));
    }
    let k = r as u64;
    if k % 2 == 1 {
        return Ok(BigRational::zero());
    }
    let deno = pow2(2 * k) - pow2(k); // 4^k - 2^k
    Ok(BigRational::new(euler_weighted_sum(k), deno))
}

// T_k = +-2^k*(2^k - 1)*B_k/k, integral for every even k
pub fn tangent_number(r: i64) -> Result<Number, Error> {
    if r < 1 {
        return Err(Error::InvalidArgument(format!("tangentNumber({}) needs r >= 1", r)));
    }
    let k = r as u64;
    if k % 2 == 1 {
        return Ok(Number::from(0));
    }
    let p = pow2(k);
    let deno = (pow2(2 * k) - &p) * BigInt::from(k);
    let num = &p * (&p - BigInt::one()) * euler_weighted_sum(k);
    let t = BigRational::new(num, deno).to_integer();
    Ok(Number::from(if (k / 2) % 2 == 0 { -t } else { t }))
}

fn euler_weighted_sum(k: u64) -> BigInt {
    let mut sum = BigInt::zero();
    for i in (0..k).step_by(2) {
        sum += ncr_bigint(k - 1, i) * BigInt::from(k) * euler_bigint(i);
    }
    sum
}

fn pow2(k: u64) -> BigInt {
    num_traits::pow(BigInt::from(2), k as usize)
}
