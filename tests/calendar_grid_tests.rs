use musicvibes::calendar::date_utils::{
    days_in_month, first_weekday_of_month, format_date_range, previous_month, RangeError,
};
use musicvibes::calendar::grid::{build_grid, CalendarCell, GRID_CELLS};
use musicvibes::catalog::loader::sample_catalog;

fn every_month() -> impl Iterator<Item = (i32, u32)> {
    (1899..=2101).flat_map(|year| (0..12).map(move |month0| (year, month0)))
}

#[test_log::test]
fn should_always_build_42_cells_with_the_whole_month() {
    for (year, month0) in every_month() {
        let grid = build_grid(year, month0).unwrap();
        let days = days_in_month(year, month0).unwrap();

        assert_eq!(grid.len(), GRID_CELLS, "{}-{}", year, month0);
        assert_eq!(
            grid.iter().filter(|cell| cell.belongs_to_target_month).count(),
            days as usize,
            "{}-{}",
            year,
            month0
        );
    }
}

#[test_log::test]
fn should_start_the_month_at_its_first_weekday() {
    for (year, month0) in every_month() {
        let grid = build_grid(year, month0).unwrap();
        let first_weekday = first_weekday_of_month(year, month0).unwrap() as usize;

        let first_target = grid
            .iter()
            .position(|cell| cell.belongs_to_target_month)
            .unwrap();

        assert_eq!(first_target, first_weekday, "{}-{}", year, month0);
        assert_eq!(grid[first_target].day_of_month, 1);
    }
}

#[test_log::test]
fn should_end_leading_days_right_before_the_first() {
    for (year, month0) in every_month() {
        let grid = build_grid(year, month0).unwrap();
        let first_weekday = first_weekday_of_month(year, month0).unwrap() as usize;
        let (previous_year, previous_month0) = previous_month(year, month0).unwrap();

        if first_weekday > 0 {
            assert_eq!(
                grid[first_weekday - 1].day_of_month,
                days_in_month(previous_year, previous_month0).unwrap(),
                "{}-{}",
                year,
                month0
            );
        }
    }
}

#[test_log::test]
fn should_build_january_2024() {
    let grid = build_grid(2024, 0).unwrap();

    let leading = &grid[..1];
    let target = &grid[1..32];
    let trailing = &grid[32..];

    assert_eq!(
        leading,
        &[CalendarCell {
            day_of_month: 31,
            belongs_to_target_month: false
        }]
    );
    assert!(target
        .iter()
        .zip(1..)
        .all(|(cell, day)| cell.day_of_month == day && cell.belongs_to_target_month));
    assert!(trailing
        .iter()
        .zip(1..)
        .all(|(cell, day)| cell.day_of_month == day && !cell.belongs_to_target_month));
    assert_eq!(trailing.len(), 10);
}

#[test_log::test]
fn should_take_january_leading_days_from_the_previous_december() {
    // 2023-01-01 was a Sunday, 2022-01-01 a Saturday
    assert!(build_grid(2023, 0).unwrap()[0].belongs_to_target_month);

    let grid = build_grid(2022, 0).unwrap();
    let leading = grid[..6]
        .iter()
        .map(|cell| cell.day_of_month)
        .collect::<Vec<u32>>();

    assert_eq!(leading, vec![26, 27, 28, 29, 30, 31]);
}

#[test_log::test]
fn should_count_february() {
    assert_eq!(days_in_month(2024, 1), Ok(29));
    assert_eq!(days_in_month(2023, 1), Ok(28));
}

#[test_log::test]
fn when_month_is_out_of_range_should_fail_loudly() {
    assert_eq!(build_grid(2024, 12), Err(RangeError::MonthIndex(12)));
}

#[test_log::test]
fn should_format_a_single_day_event_the_same_with_or_without_end() {
    let catalog = sample_catalog().unwrap();

    for event in &catalog {
        let start = event.starts_at().unwrap();

        assert_eq!(
            format_date_range(&start, None),
            format_date_range(&start, Some(&start))
        );
    }
}
