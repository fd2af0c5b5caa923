#![deny(warnings)]

mod number;
pub use number::Number;

mod value;
pub use value::{Error, Unit, Value};

mod constant;
pub use constant::{e, pi};

mod combin;
pub use combin::{fact, ncr, npr};

mod log;
pub use log::{lg, ln, ln2, ln3, ln10};

mod exp;
pub use exp::exp;

mod root;
pub use root::{sqrt, sqrt2, sqrt10};

mod power;
pub use power::power;

mod trig;
pub use trig::{cos, cosec, cot, sec, sin, tan};

mod inverse_trig;
pub use inverse_trig::{acos, acosec, acot, asec, asin, atan};

mod hyperbolic;
pub use hyperbolic::{cosech, cosh, coth, sech, sinh, tanh};

mod inverse_hyperbolic;
pub use inverse_hyperbolic::{acosech, acosh, acoth, asech, asinh, atanh};

mod special;
pub use special::{beta, erf, erfc, gamma};

mod number_theory;
pub use number_theory::{bernoulli_number, euler_number, tangent_number};

#[cfg(test)]
mod combin_test;
#[cfg(test)]
mod log_test;
#[cfg(test)]
mod exp_test;
#[cfg(test)]
mod power_test;
#[cfg(test)]
mod inverse_hyperbolic_test;
#[cfg(test)]
mod special_test;
#[cfg(test)]
mod number_theory_test;
