use rust_decimal_macros::dec;

use super::*;

#[test]
fn test_share() {
    assert_eq!(share(dec!(25), dec!(100)), "25.0%");
    assert_eq!(share(dec!(1), dec!(3)), "33.3%");
    assert_eq!(share(dec!(5), Decimal::ZERO), "-");
}
