use ticker_dashboard_wasm::domain::market_data::DateRange;
use ticker_dashboard_wasm::time_utils::parse_date;

#[test]
fn chronological_range_is_accepted() {
    let range =
        DateRange::new(parse_date("2020-01-01").unwrap(), parse_date("2020-02-01").unwrap())
            .unwrap();

    assert_eq!(range.start_ms(), 1_577_836_800_000);
    assert_eq!(range.end_ms(), 1_580_515_200_000);
    assert_eq!(range.start_secs(), 1_577_836_800);
}

#[test]
fn reversed_or_equal_range_is_rejected() {
    let jan = parse_date("2020-01-01").unwrap();
    let feb = parse_date("2020-02-01").unwrap();

    assert!(DateRange::new(feb, jan).is_err());
    assert!(DateRange::new(jan, jan).is_err());
}
