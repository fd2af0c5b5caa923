use crate::combin::{fact, ncr, npr};

#[test]
fn factorials_match_reference() {
    let mut expected: u64 = 1;
    for n in 0..=10 {
        if n > 0 {
            expected *= n as u64;
        }
        assert_eq!(fact(n).unwrap().to_string(), expected.to_string());
    }
    assert_eq!(fact(20).unwrap().to_string(), "2432902008176640000");
    assert_eq!(
        fact(30).unwrap().to_string(),
        "265252859812191058636308480000000"
    );
}

#[test]
fn fact_rejects_negative() {
    assert!(fact(-1).is_err());
}

#[test]
fn combinations() {
    assert_eq!(ncr(5, 0).unwrap().to_string(), "1");
    assert_eq!(ncr(5, 5).unwrap().to_string(), "1");
    assert_eq!(ncr(5, 2).unwrap().to_string(), "10");
    assert_eq!(ncr(52, 5).unwrap().to_string(), "2598960");
    assert_eq!(ncr(100, 50).unwrap().to_string(), "100891344545564193334812497256");
}

#[test]
fn permutations() {
    assert_eq!(npr(5, 0).unwrap().to_string(), "1");
    assert_eq!(npr(5, 1).unwrap().to_string(), "5");
    assert_eq!(npr(5, 5).unwrap().to_string(), "120");
    assert_eq!(npr(10, 3).unwrap().to_string(), "720");
}

#[test]
fn pair_checks_reject_bad_shapes() {
    assert!(ncr(3, 5).is_err());
    assert!(ncr(-1, 0).is_err());
    assert!(npr(3, -2).is_err());
}
