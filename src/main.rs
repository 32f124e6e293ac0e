use chrono::{Datelike, Local, Utc};
use musicvibes::calendar::date_utils::{
    format_clock_time, format_date_range, month_abbreviation, visible_months, weekday_abbreviation,
    DateBadge,
};
use musicvibes::calendar::grid::{build_grid, weeks};
use musicvibes::calendar::grouping::{group_by_day, has_event};
use musicvibes::catalog::loader::{load_catalog, sample_catalog};
use musicvibes::catalog::model::Event;
use musicvibes::config::env_loader::{load_category_mapping, load_config};
use musicvibes::config::model::Config;
use musicvibes::navigation::Destination;
use musicvibes::query::engine::{search, upcoming};
use musicvibes::query::model::QuerySpec;
use musicvibes::tracing::setup_tracing;
use std::error::Error;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    setup_tracing();

    match load_config().map_err(Box::<dyn Error>::from).and_then(|config| run(&config)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let catalog = match &config.catalog_path {
        Some(path) => load_catalog(path)?,
        None => sample_catalog()?,
    };
    let categories = load_category_mapping(config)?;

    let search_config = &config.search_config;
    let now = Local::now();

    let mut spec = QuerySpec::text(&search_config.text).priced(search_config.price);
    spec.category = search_config.category;
    spec.date_window = search_config.date_range.window(&now);

    let results = search(&catalog, &spec, &categories);

    info!("{} events found", results.len());
    results.iter().for_each(|event| log_event(event));

    let calendar_config = &config.calendar_config;
    let year = calendar_config.year.unwrap_or(now.year());
    let month0 = calendar_config.month0.unwrap_or(now.month0());

    info!(
        "Months: {}",
        visible_months(month0, calendar_config.visible_months)?.join(" ")
    );

    let grid = build_grid(year, month0)?;
    let buckets = group_by_day(&catalog, year, month0)?;

    info!("{} {}", month_abbreviation(month0)?, year);
    info!(
        "{}",
        (0..7)
            .map(|weekday| weekday_abbreviation(weekday).map(|w| format!("{:>3} ", w)))
            .collect::<Result<String, _>>()?
    );

    for week in weeks(&grid) {
        let row = week
            .iter()
            .map(|cell| {
                let marker = match cell.belongs_to_target_month {
                    true if has_event(&buckets, cell.day_of_month) => '*',
                    true => ' ',
                    false => '.',
                };

                format!("{:>3}{}", cell.day_of_month, marker)
            })
            .collect::<String>();

        info!("{}", row);
    }

    for (day, events) in &buckets {
        let titles = events.iter().map(|e| e.title.as_str()).collect::<Vec<_>>();

        info!("{:>2}: {}", day, titles.join(", "));
    }

    info!("Up next:");
    upcoming(&catalog, Utc::now(), search_config.upcoming_limit)
        .iter()
        .for_each(|event| log_event(event));

    Ok(())
}

fn log_event(event: &Event) {
    match event.starts_at_in(&Local) {
        Ok(starts_at) => {
            let badge = DateBadge::new(&starts_at);

            info!(
                "{} {} {} | {} | {} at {} | {} | {}",
                badge.weekday,
                badge.month,
                badge.day,
                event.title,
                format_date_range(&starts_at, None),
                format_clock_time(&starts_at),
                event.venue_name,
                Destination::event(event)
            );
        }
        Err(err) => error!("{}", err),
    }
}
