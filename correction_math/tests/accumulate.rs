use approx::assert_relative_eq;
use correction_math::{accumulate, Period, RateObservation, Series};
use rstest::rstest;

fn obs(year: i32, month: u32, rate: f64) -> RateObservation {
    RateObservation::new(Period::new(year, month).unwrap(), rate)
}

fn period(year: i32, month: u32) -> Period {
    Period::new(year, month).unwrap()
}

#[test]
fn test_empty_series_gives_empty_table() {
    let table = accumulate(&Series::default());
    assert!(table.is_empty());
}

#[rstest]
#[case(0.0)]
#[case(10.0)]
#[case(-3.5)]
fn test_single_observation_is_baseline(#[case] rate: f64) {
    let series = Series::new(vec![obs(2024, 1, rate)]).unwrap();
    let table = accumulate(&series);

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(period(2024, 1)), Some(1.0));
}

#[test]
fn test_zero_rates_keep_index_at_one() {
    let observations = (1..=12).map(|m| obs(2023, m, 0.0)).collect();
    let table = accumulate(&Series::new(observations).unwrap());

    assert_eq!(table.len(), 12);
    for (_, index) in table.iter() {
        assert_eq!(index, 1.0);
    }
}

#[test]
fn test_compounds_backwards_from_most_recent() {
    let series = Series::new(vec![
        obs(2024, 1, 2.0),
        obs(2024, 2, 1.0),
        obs(2024, 3, 5.0),
    ])
    .unwrap();
    let table = accumulate(&series);

    // Most recent month is the baseline; its own rate is ignored.
    assert_eq!(table.get(period(2024, 3)), Some(1.0));
    assert_relative_eq!(table.get(period(2024, 2)).unwrap(), 1.01);
    assert_relative_eq!(table.get(period(2024, 1)).unwrap(), 1.01 * 1.02);
}

#[test]
fn test_negative_rates_decrease_index() {
    let series = Series::new(vec![obs(2024, 1, -2.0), obs(2024, 2, 0.0)]).unwrap();
    let table = accumulate(&series);

    assert_relative_eq!(table.get(period(2024, 1)).unwrap(), 0.98);
}

#[test]
fn test_sorts_before_accumulating() {
    let ascending = Series::new(vec![
        obs(2023, 11, 1.0),
        obs(2023, 12, 2.0),
        obs(2024, 1, 3.0),
    ])
    .unwrap();
    let shuffled = Series::new(vec![
        obs(2023, 12, 2.0),
        obs(2024, 1, 3.0),
        obs(2023, 11, 1.0),
    ])
    .unwrap();

    let expected = accumulate(&ascending);
    assert_eq!(accumulate(&shuffled), expected);

    // Folding in caller order would have made 2023-11 the baseline.
    assert_eq!(expected.get(period(2024, 1)), Some(1.0));
    assert_ne!(expected.get(period(2023, 11)), Some(1.0));
}

#[test]
fn test_table_bounds() {
    let series = Series::new(vec![obs(2020, 5, 1.0), obs(2021, 2, 1.0)]).unwrap();
    let table = accumulate(&series);

    assert_eq!(table.first_period(), Some(period(2020, 5)));
    assert_eq!(table.last_period(), Some(period(2021, 2)));
}
