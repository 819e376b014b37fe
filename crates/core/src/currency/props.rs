//! Property-based tests for exchange derivation and request counting.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::ExchangeService;
use super::store::RateStore;
use super::types::CurrencyRecord;

/// Strategy to generate positive EUR-relative rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate quantities (0.01 to 1,000,000.00).
fn quantity() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// One lookup-carrying call against the two-currency table.
#[derive(Debug, Clone, Copy)]
enum Query {
    ToEur,
    Cross,
    Convert,
}

fn query() -> impl Strategy<Value = Query> {
    prop_oneof![Just(Query::ToEur), Just(Query::Cross), Just(Query::Convert)]
}

fn two_currency_service(aaa: Decimal, bbb: Decimal) -> ExchangeService {
    let store = RateStore::from_records(vec![
        CurrencyRecord::new("AAA", aaa, "Alpha", "Alpha units"),
        CurrencyRecord::new("BBB", bbb, "Beta", "Beta units"),
    ])
    .unwrap();
    ExchangeService::new(Arc::new(store))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The to-EUR rate is 1/stored rate rounded half-up to 3 places.
    #[test]
    fn prop_rate_to_eur_matches_derivation(rate in positive_rate()) {
        let service = two_currency_service(rate, Decimal::ONE);
        let result = service.rate_to_eur("AAA").unwrap();
        prop_assert_eq!(result.rate, ExchangeService::round(Decimal::ONE / rate, 3));
        prop_assert!(result.rate.scale() <= 3);
    }

    /// The cross rate goes through the rounded to-EUR leg, then rounds to 2 places.
    #[test]
    fn prop_cross_rate_matches_derivation(from in positive_rate(), to in positive_rate()) {
        let service = two_currency_service(from, to);
        let result = service.cross_rate("AAA", "BBB").unwrap();
        let leg = ExchangeService::round(Decimal::ONE / from, 3);
        prop_assert_eq!(result.rate, ExchangeService::round(to * leg, 2));
        prop_assert!(result.rate.scale() <= 2);
    }

    /// The conversion amount is exactly rate times quantity.
    #[test]
    fn prop_convert_amount_is_rate_times_quantity(
        from in positive_rate(),
        to in positive_rate(),
        quantity in quantity(),
    ) {
        let service = two_currency_service(from, to);
        let result = service.convert("AAA", "BBB", quantity).unwrap();
        prop_assert_eq!(result.amount, result.rate * quantity);
        prop_assert_eq!(result.quantity, quantity);
    }

    /// Every successful lookup adds exactly one to the looked-up code.
    #[test]
    fn prop_counts_track_every_lookup(queries in prop::collection::vec(query(), 0..50)) {
        let service = two_currency_service(Decimal::new(1186, 3), Decimal::new(36683, 2));
        let mut expected_aaa = 0u64;
        let mut expected_bbb = 0u64;

        for query in &queries {
            match query {
                Query::ToEur => {
                    service.rate_to_eur("AAA").unwrap();
                    expected_aaa += 1;
                }
                Query::Cross => {
                    service.cross_rate("AAA", "BBB").unwrap();
                    expected_aaa += 1;
                    expected_bbb += 1;
                }
                Query::Convert => {
                    service.convert("BBB", "AAA", Decimal::TEN).unwrap();
                    expected_aaa += 1;
                    expected_bbb += 1;
                }
            }
            prop_assert!(service.rate_to_eur("ZZZ").is_err());
        }

        let counts = service.store().request_counts();
        prop_assert_eq!(counts.get("AAA"), Some(expected_aaa));
        prop_assert_eq!(counts.get("BBB"), Some(expected_bbb));
    }

    /// Repeated listings without lookups keep the same order.
    #[test]
    fn prop_supported_currencies_order_is_stable(lookups in 0usize..20) {
        let service = two_currency_service(Decimal::ONE, Decimal::TWO);
        for _ in 0..lookups {
            service.rate_to_eur("BBB").unwrap();
        }
        let first = service.supported_currencies();
        let second = service.supported_currencies();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first[0].currency.as_str(), "AAA");
        prop_assert_eq!(first[1].currency.as_str(), "BBB");
    }
}
