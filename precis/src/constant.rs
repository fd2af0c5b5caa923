use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::One;

use crate::number::Number;
use crate::value::{Error, MAX_SERIES_ITERATIONS, normalize_prec};

// Constants are deterministic per requested precision, so each one sits
// behind a precision-keyed cache. A poisoned lock just recomputes.
pub(crate) type ConstCache = OnceLock<Mutex<HashMap<u32, BigDecimal>>>;

pub(crate) fn cached(
    slot: &'static ConstCache,
    prec: u32,
    compute: fn(u32) -> Result<Number, Error>,
) -> Result<Number, Error> {
    let cell = slot.get_or_init(|| Mutex::new(HashMap::new()));
    if let Ok(map) = cell.lock() {
        if let Some(mag) = map.get(&prec) {
            return Ok(Number::new(mag.clone(), false));
        }
    }
    let value = compute(prec)?;
    if let Ok(mut map) = cell.lock() {
        map.insert(prec, value.magnitude().clone());
    }
    Ok(value)
}

static PI_CACHE: ConstCache = OnceLock::new();
static E_CACHE: ConstCache = OnceLock::new();

// pi by Bellard's series: rapid convergence, roughly three digits per term
pub fn pi(prec: u32) -> Result<Number, Error> {
    let prec = normalize_prec(prec);
    cached(&PI_CACHE, prec, compute_pi)
}

fn compute_pi(prec: u32) -> Result<Number, Error> {
    let prec2 = prec + 4;
    let delp = Number::delta(prec);
    let frac = |num: i64, den: u64| Number::from(num).div_prec(&Number::from(den), prec2);

    let mut sum = Number::zero();
    let mut pow2 = BigInt::one(); // 2^(10n)
    let mut n: u64 = 0;
    loop {
        if n as usize > MAX_SERIES_ITERATIONS {
            return Err(Error::NoConvergence("pi"));
        }
        let mut b = frac(256, 10 * n + 1);
        b = &b + &frac(1, 10 * n + 9);
        b = &b - &frac(64, 10 * n + 3);
        b = &b - &frac(32, 4 * n + 1);
        b = &b - &frac(4, 10 * n + 5);
        b = &b - &frac(4, 10 * n + 7);
        b = &b - &frac(1, 4 * n + 3);
        let mut t = b.div_prec(&Number::from(pow2.clone()), prec2);
        if n % 2 == 1 {
            t = -t;
        }
        if t.abs() < delp {
            break;
        }
        sum = &sum + &t;
        pow2 *= 1024;
        n += 1;
    }
    Ok(sum.div_prec(&Number::from(64), prec2).rescale(prec, false))
}

// e as the reciprocal-factorial series 1 + 1/1! + 1/2! + ...
pub fn e(prec: u32) -> Result<Number, Error> {
    let prec = normalize_prec(prec);
    cached(&E_CACHE, prec, compute_e)
}

fn compute_e(prec: u32) -> Result<Number, Error> {
    let prec2 = prec + 4;
    let delp = Number::delta(prec);
    let mut t = Number::one();
    let mut sum = Number::one();
    for k in 1..=MAX_SERIES_ITERATIONS as u64 {
        t = t.div_prec(&Number::from(k), prec2);
        if t < delp {
            return Ok(sum.rescale(prec, false));
        }
        sum = &sum + &t;
    }
    Err(Error::NoConvergence("e"))
}
