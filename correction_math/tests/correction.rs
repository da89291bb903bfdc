use approx::assert_relative_eq;
use correction_math::{accumulate, correct_value, CorrectionError, Period, RateObservation, Series};
use rstest::rstest;

fn period(year: i32, month: u32) -> Period {
    Period::new(year, month).unwrap()
}

fn table() -> correction_math::CumulativeIndexTable {
    let series = Series::new(vec![
        RateObservation::new(period(2024, 1), 1.0),
        RateObservation::new(period(2024, 2), 2.0),
        RateObservation::new(period(2024, 3), 3.0),
    ])
    .unwrap();
    accumulate(&series)
}

#[test]
fn test_multiplies_principal_by_index() {
    let correction = correct_value(250.0, period(2024, 1), &table()).unwrap();

    assert_eq!(correction.period, period(2024, 1));
    assert_relative_eq!(correction.taxa, 1.02 * 1.01);
    assert_relative_eq!(correction.valor_previsto, 250.0 * 1.02 * 1.01);
}

#[rstest]
#[case(2023, 12)]
#[case(2024, 4)]
#[case(1986, 8)]
fn test_reference_outside_coverage(#[case] year: i32, #[case] month: u32) {
    let result = correct_value(100.0, period(year, month), &table());
    assert_eq!(
        result.unwrap_err(),
        CorrectionError::ReferenceNotFound(period(year, month))
    );
}
