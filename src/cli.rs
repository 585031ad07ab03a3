use clap::Parser;
use std::path::PathBuf;

use crate::calendar::MonthCursor;

#[derive(Parser, Debug)]
#[command(name = "daypin", version, about = "Pin short notes to days of a month calendar")]
pub struct Args {
    /// Config file (default: <config dir>/daypin/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Year to open instead of the current one
    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Month (1-12) to open instead of the current one
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the month as plain text and exit
    #[arg(long)]
    pub print: bool,
}

impl Args {
    /// Startup month: `today` with any `--year`/`--month` overrides applied.
    pub fn start_cursor(&self, today: MonthCursor) -> MonthCursor {
        let year = self.year.unwrap_or(today.year());
        let month = self.month.unwrap_or(today.month());
        MonthCursor::new(year, month).unwrap_or(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("daypin").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn overrides_apply_independently() {
        let today = MonthCursor::new(2026, 10).unwrap();
        assert_eq!(parse(&[]).start_cursor(today), today);
        assert_eq!(
            parse(&["--month", "2"]).start_cursor(today),
            MonthCursor::new(2026, 2).unwrap()
        );
        assert_eq!(
            parse(&["--year", "1999", "--month", "12"]).start_cursor(today),
            MonthCursor::new(1999, 12).unwrap()
        );
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["daypin", "--month", "13"]).is_err());
        assert!(Args::try_parse_from(["daypin", "--month", "0"]).is_err());
    }

    #[test]
    fn negative_year_parses() {
        assert_eq!(parse(&["--year", "-44"]).year, Some(-44));
    }
}
