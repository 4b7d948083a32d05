//! Property tests for the critical-point optimiser against arbitrary splits.

use paysplit_core::{
    Jurisdiction, critical_points, dividend_tax, optimal_split, personal_allowance, wage_tax,
};
use proptest::prelude::{Strategy, prop_assert, prop_assert_eq, proptest};
use proptest::sample::select;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn jurisdictions() -> impl Strategy<Value = Jurisdiction> {
    select(Jurisdiction::ALL.to_vec())
}

fn pence(amount: u64) -> Decimal {
    Decimal::new(amount as i64, 2)
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn prop_optimal_split_conserves_income_and_is_non_negative(
        income_pence in 0u64..50_000_000,
        jurisdiction in jurisdictions()
    ) {
        let income = pence(income_pence);
        let best = optimal_split(income, jurisdiction).unwrap();

        prop_assert_eq!(best.wage + best.dividend, income);
        prop_assert!(best.wage >= Decimal::ZERO);
        prop_assert!(best.dividend >= Decimal::ZERO);
        prop_assert!(best.total_tax >= Decimal::ZERO);
        prop_assert_eq!(best.total_tax, best.wage_tax + best.dividend_tax);
    }

    #[test]
    fn prop_no_split_beats_the_optimum(
        income_pence in 0u64..30_000_000,
        wage_permille in 0u32..=1000,
        jurisdiction in jurisdictions()
    ) {
        let income = pence(income_pence);
        let wage = income * Decimal::new(i64::from(wage_permille), 3);
        let dividend = income - wage;

        let alternative = wage_tax(wage, income, jurisdiction).unwrap()
            + dividend_tax(dividend, wage, jurisdiction).unwrap();
        let best = optimal_split(income, jurisdiction).unwrap();

        prop_assert!(
            best.total_tax <= alternative,
            "wage {} of {} owes {} but optimum owes {}",
            wage, income, alternative, best.total_tax
        );
    }

    #[test]
    fn prop_critical_points_sorted_and_bounded(
        income_pence in 0u64..100_000_000,
        jurisdiction in jurisdictions()
    ) {
        let income = pence(income_pence);
        let points = critical_points(income, jurisdiction).unwrap();
        let limit = if jurisdiction == Jurisdiction::Scotland { 12 } else { 10 };

        prop_assert_eq!(points.first().copied(), Some(Decimal::ZERO));
        prop_assert_eq!(points.last().copied(), Some(income));
        prop_assert!(points.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(points.len() <= limit);
    }

    #[test]
    fn prop_personal_allowance_never_increases(
        low_pence in 0u64..20_000_000,
        gap_pence in 0u64..5_000_000
    ) {
        let low = pence(low_pence);
        let high = low + pence(gap_pence);

        prop_assert!(personal_allowance(high).unwrap() <= personal_allowance(low).unwrap());
    }

    #[test]
    fn prop_rest_of_uk_jurisdictions_agree(
        wage in 0u32..300_000,
        dividend in 0u32..300_000
    ) {
        let wage = Decimal::from(wage);
        let dividend = Decimal::from(dividend);
        let total = wage + dividend;

        for jurisdiction in [Jurisdiction::Wales, Jurisdiction::NorthernIreland] {
            prop_assert_eq!(
                wage_tax(wage, total, jurisdiction),
                wage_tax(wage, total, Jurisdiction::England)
            );
            prop_assert_eq!(
                dividend_tax(dividend, wage, jurisdiction),
                dividend_tax(dividend, wage, Jurisdiction::England)
            );
        }
    }
}

#[test]
fn allowance_is_full_below_threshold_and_zero_above_ceiling() {
    assert_eq!(personal_allowance(dec!(100000)).unwrap(), dec!(12570));
    assert_eq!(personal_allowance(dec!(125140)).unwrap(), Decimal::ZERO);
}

#[test]
fn scotland_differs_from_england_at_mid_incomes() {
    let income = dec!(50000);

    assert_ne!(
        wage_tax(income, income, Jurisdiction::Scotland),
        wage_tax(income, income, Jurisdiction::England)
    );
}
