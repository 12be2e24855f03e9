//! Unit tests for the Money module
//!
//! Tests cover money creation, predicates, checked arithmetic,
//! currency parsing, and display formatting.

use core_kernel::{Money, Currency, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050, Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_from_minor_handles_jpy_no_decimals() {
        let m = Money::from_minor(10000, Currency::JPY);
        assert_eq!(m.amount(), dec!(10000));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_positive_true_for_positive_amount() {
        let m = Money::new(dec!(0.01), Currency::USD);
        assert!(m.is_positive());
    }

    #[test]
    fn test_is_positive_false_for_zero() {
        let m = Money::zero(Currency::USD);
        assert!(!m.is_positive());
    }

    #[test]
    fn test_is_positive_false_for_negative() {
        let m = Money::new(dec!(-100.00), Currency::USD);
        assert!(!m.is_positive());
        assert!(m.is_negative());
    }

    #[test]
    fn test_is_negative_false_for_zero() {
        let m = Money::zero(Currency::USD);
        assert!(!m.is_negative());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::USD);
        let result = a.checked_add(&b).unwrap();
        assert_eq!(result.amount(), dec!(150.00));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::EUR);
        let result = a.checked_add(&b);
        assert_eq!(
            result,
            Err(MoneyError::CurrencyMismatch("USD".to_string(), "EUR".to_string()))
        );
    }

    #[test]
    fn test_checked_sub_can_go_negative() {
        let a = Money::new(dec!(30.00), Currency::USD);
        let b = Money::new(dec!(100.00), Currency::USD);
        let result = a.checked_sub(&b).unwrap();
        assert_eq!(result.amount(), dec!(-70.00));
    }

    #[test]
    fn test_sum_of_empty_sequence_is_zero() {
        let total = Money::sum(Currency::GBP, &Vec::<Money>::new()).unwrap();
        assert!(total.is_zero());
        assert_eq!(total.currency(), Currency::GBP);
    }

    #[test]
    fn test_sum_of_donations() {
        let amounts = vec![
            Money::new(dec!(100), Currency::USD),
            Money::new(dec!(150), Currency::USD),
            Money::new(dec!(200), Currency::USD),
        ];
        let total = Money::sum(Currency::USD, &amounts).unwrap();
        assert_eq!(total.amount(), dec!(450));
    }

    #[test]
    fn test_sum_rejects_mixed_currencies() {
        let amounts = vec![
            Money::new(dec!(100), Currency::USD),
            Money::new(dec!(100), Currency::CAD),
        ];
        let result = Money::sum(Currency::USD, &amounts);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("eur".parse::<Currency>(), Ok(Currency::EUR));
        assert_eq!(" Jpy ".parse::<Currency>(), Ok(Currency::JPY));
    }

    #[test]
    fn test_parse_unknown_code() {
        assert_eq!(
            "DOGE".parse::<Currency>(),
            Err(MoneyError::UnknownCurrency("DOGE".to_string()))
        );
    }

    #[test]
    fn test_code_round_trips_through_parse() {
        for currency in [Currency::USD, Currency::INR, Currency::AUD, Currency::CHF] {
            assert_eq!(currency.code().parse::<Currency>(), Ok(currency));
        }
    }
}

mod display {
    use super::*;

    #[test]
    fn test_usd_display_has_two_places() {
        let m = Money::new(dec!(150), Currency::USD);
        assert_eq!(m.to_string(), "$ 150.00");
    }

    #[test]
    fn test_jpy_display_has_no_places() {
        let m = Money::new(Decimal::new(5000, 0), Currency::JPY);
        assert_eq!(m.to_string(), "¥ 5000");
    }
}
