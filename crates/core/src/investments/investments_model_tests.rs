//! Tests for Investment domain models.

#[cfg(test)]
mod tests {
    use crate::investments::investments_model::*;
    use crate::investments::InvestmentError;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ============================================================================
    // InvestmentType
    // ============================================================================

    #[test]
    fn test_investment_type_sign() {
        assert_eq!(InvestmentType::Deposit.sign(), dec!(1));
        assert_eq!(InvestmentType::Withdrawal.sign(), dec!(-1));
        assert_eq!(InvestmentType::default(), InvestmentType::Deposit);
    }

    #[test]
    fn test_investment_type_parse_and_display() {
        assert_eq!("Withdrawal".parse::<InvestmentType>(), Ok(InvestmentType::Withdrawal));
        assert_eq!(" deposit ".parse::<InvestmentType>(), Ok(InvestmentType::Deposit));
        assert!("transfer".parse::<InvestmentType>().is_err());
        assert_eq!(InvestmentType::Withdrawal.to_string(), "withdrawal");
    }

    // ============================================================================
    // Investment::from_entry
    // ============================================================================

    #[test]
    fn test_from_entry_deposit_is_positive() {
        let investment = Investment::from_entry(
            "id-1".to_string(),
            day(2024, 1, 15),
            dec!(1000),
            dec!(2500),
            InvestmentType::Deposit,
        )
        .unwrap();

        assert_eq!(investment.amount, dec!(1000));
        assert_eq!(investment.eth_amount, dec!(0.4));
        assert_eq!(investment.eth_price, dec!(2500));
        assert!(!investment.is_withdrawal());
    }

    #[test]
    fn test_from_entry_withdrawal_negates_both_amounts() {
        let investment = Investment::from_entry(
            "id-2".to_string(),
            day(2024, 1, 15),
            dec!(1000),
            dec!(2500),
            InvestmentType::Withdrawal,
        )
        .unwrap();

        assert_eq!(investment.amount, dec!(-1000));
        assert_eq!(investment.eth_amount, dec!(-0.4));
        assert_eq!(investment.eth_price, dec!(2500));
        assert_eq!(investment.magnitude(), dec!(1000));
        assert_eq!(investment.eth_amount, investment.amount / investment.eth_price);
    }

    #[test]
    fn test_from_entry_rejects_non_positive() {
        let err = Investment::from_entry(
            "id".to_string(),
            day(2024, 1, 15),
            dec!(0),
            dec!(2500),
            InvestmentType::Deposit,
        )
        .unwrap_err();
        assert_eq!(err, InvestmentError::NonPositive);

        let err = Investment::from_entry(
            "id".to_string(),
            day(2024, 1, 15),
            dec!(10),
            dec!(-1),
            InvestmentType::Deposit,
        )
        .unwrap_err();
        assert_eq!(err, InvestmentError::NonPositive);
    }

    #[test]
    fn test_from_entry_rejects_eth_amount_rounding_to_zero() {
        for investment_type in [InvestmentType::Deposit, InvestmentType::Withdrawal] {
            let err = Investment::from_entry(
                "id".to_string(),
                day(2024, 1, 15),
                dec!(0.0000000000000000000000000001),
                dec!(10),
                investment_type,
            )
            .unwrap_err();
            assert_eq!(err, InvestmentError::InvalidNumber);
        }

        let err = Investment::from_entry(
            "id".to_string(),
            day(2024, 1, 15),
            dec!(0.000000000000000000001),
            dec!(100000000),
            InvestmentType::Withdrawal,
        )
        .unwrap_err();
        assert_eq!(err, InvestmentError::InvalidNumber);
    }

    // ============================================================================
    // Serialization
    // ============================================================================

    #[test]
    fn test_serializes_camel_case_with_type_field() {
        let investment = Investment::from_entry(
            "id-3".to_string(),
            day(2024, 2, 1),
            dec!(500),
            dec!(2000),
            InvestmentType::Withdrawal,
        )
        .unwrap();

        let value = serde_json::to_value(&investment).unwrap();
        assert_eq!(value["id"], "id-3");
        assert_eq!(value["date"], "2024-02-01");
        assert_eq!(value["type"], "withdrawal");
        assert!(value.get("ethPrice").is_some());
        assert!(value.get("ethAmount").is_some());
    }

    #[test]
    fn test_deserialize_defaults_type_and_truncates_timestamp() {
        let value = json!({
            "id": "legacy",
            "date": "2023-11-30T23:10:00Z",
            "amount": "250",
            "ethPrice": "2000",
            "ethAmount": "0.125"
        });

        let investment: Investment = serde_json::from_value(value).unwrap();
        assert_eq!(investment.date, day(2023, 11, 30));
        assert_eq!(investment.investment_type, InvestmentType::Deposit);
        assert_eq!(investment.eth_amount, dec!(0.125));
    }

    #[test]
    fn test_deserialize_rejects_bad_date() {
        let value = json!({
            "id": "bad",
            "date": "yesterday",
            "amount": "1",
            "ethPrice": "1",
            "ethAmount": "1",
            "type": "deposit"
        });
        assert!(serde_json::from_value::<Investment>(value).is_err());
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    #[test]
    fn test_parse_decimal_input() {
        assert_eq!(parse_decimal_input("1000"), Some(dec!(1000)));
        assert_eq!(parse_decimal_input(" 12.50 "), Some(dec!(12.5)));
        assert_eq!(parse_decimal_input("-5"), Some(dec!(-5)));
        assert_eq!(parse_decimal_input("1e3"), Some(dec!(1000)));
        assert_eq!(parse_decimal_input("abc"), None);
        assert_eq!(parse_decimal_input(""), None);
    }

    #[test]
    fn test_parse_decimal_input_rejects_separators() {
        assert_eq!(parse_decimal_input("1_000"), None);
        assert_eq!(parse_decimal_input("2_500.5"), None);
    }

    #[test]
    fn test_parse_decimal_input_rejects_lost_precision() {
        // 29 and 30 fractional digits
        assert_eq!(parse_decimal_input("0.00000000000000000000000000001"), None);
        assert_eq!(parse_decimal_input("1.000000000000000000000000000001"), None);
        assert_eq!(parse_decimal_input("1e-40"), None);

        // Trailing zeros don't count
        assert_eq!(
            parse_decimal_input("1.500000000000000000000000000000"),
            Some(dec!(1.5))
        );
        assert_eq!(
            parse_decimal_input("0.0000000000000000000000000001"),
            Some(dec!(0.0000000000000000000000000001))
        );
        assert_eq!(parse_decimal_input("0.00"), Some(dec!(0)));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = generate_investment_id();
        let b = generate_investment_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }
}
