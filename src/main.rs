use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use std::io::Write;
use std::time::Duration;

use daypin::calendar::{CalendarModel, MonthCursor};
use daypin::cli::Args;
use daypin::config::Config;
use daypin::logging::init_tracing;
use daypin::ui::app::App;
use daypin::ui::plain::render_month;

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    if let Some(path) = &args.log_file {
        config.logging.file = Some(path.clone());
    }
    init_tracing(&config.logging)?;

    let today = Local::now().date_naive();
    let cursor = args.start_cursor(MonthCursor::from_date(today));
    let calendar = CalendarModel::new(cursor);
    tracing::info!(%cursor, print = args.print, "starting");

    if args.print {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(render_month(&calendar).as_bytes())
            .context("writing month to stdout")?;
        return Ok(());
    }

    let focused_day = if cursor == MonthCursor::from_date(today) {
        today.day()
    } else {
        1
    };
    let app = App::new(calendar).with_focused_day(focused_day);
    daypin::ui::run(app, Duration::from_millis(config.ui.tick_rate_ms))
        .context("running terminal ui")?;
    Ok(())
}
