use num_rational::BigRational;

use crate::{bernoulli_number, euler_number, tangent_number};

fn ratio(num: i64, den: i64) -> BigRational {
    BigRational::new(num.into(), den.into())
}

#[test]
fn euler_numbers_match_table() {
    // E(0..10) = 1, 0, -1, 0, 5, 0, -61, 0, 1385, 0, -50521
    let table = ["1", "0", "-1", "0", "5", "0", "-61", "0", "1385", "0", "-50521"];
    for (r, want) in table.iter().enumerate() {
        assert_eq!(euler_number(r as i64).unwrap().to_string(), *want);
    }
    assert_eq!(euler_number(12).unwrap().to_string(), "2702765");
    assert_eq!(euler_number(18).unwrap().to_string(), "-2404879675441");
}

#[test]
fn euler_rejects_negative() {
    assert!(euler_number(-2).is_err());
}

#[test]
fn bernoulli_numbers_match_table() {
    assert_eq!(bernoulli_number(2).unwrap(), ratio(1, 6));
    assert_eq!(bernoulli_number(4).unwrap(), ratio(-1, 30));
    assert_eq!(bernoulli_number(6).unwrap(), ratio(1, 42));
    assert_eq!(bernoulli_number(8).unwrap(), ratio(-1, 30));
    assert_eq!(bernoulli_number(10).unwrap(), ratio(5, 66));
    assert_eq!(bernoulli_number(12).unwrap(), ratio(-691, 2730));
    for odd in [1, 3, 5, 7, 9] {
        assert_eq!(bernoulli_number(odd).unwrap(), ratio(0, 1));
    }
}

#[test]
fn bernoulli_rejects_nonpositive() {
    assert!(bernoulli_number(0).is_err());
    assert!(bernoulli_number(-4).is_err());
}

#[test]
fn tangent_numbers_match_table() {
    assert_eq!(tangent_number(2).unwrap().to_string(), "1");
    assert_eq!(tangent_number(4).unwrap().to_string(), "2");
    assert_eq!(tangent_number(6).unwrap().to_string(), "16");
    assert_eq!(tangent_number(8).unwrap().to_string(), "272");
    assert_eq!(tangent_number(10).unwrap().to_string(), "7936");
    assert_eq!(tangent_number(7).unwrap().to_string(), "0");
}
