//! Convert dates between the Jalaali and Gregorian calendars and Julian Day Numbers.

use std::time::SystemTime;

use clap::{Args, Parser, Subcommand, ValueEnum};
use jalaali::{
    Day, Error, GregorianDate, JalaaliDate, Jdn, Month, Year, days_in_month,
    jalaali_calendar_info, traits::ToJdn,
};

#[derive(Parser)]
#[command(name = "jdate", version, about = "Jalaali <-> Gregorian <-> JDN date converter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Gregorian date to Jalaali
    ToJalaali(Ymd),
    /// Convert a Jalaali date to Gregorian
    ToGregorian(Ymd),
    /// Print the Julian Day Number of a date
    Jdn {
        /// Calendar of the given date
        #[arg(short, long, value_enum, default_value_t = Calendar::Jalaali)]
        calendar: Calendar,
        #[command(flatten)]
        date: Ymd,
    },
    /// Print the dates of a Julian Day Number in both calendars
    FromJdn {
        #[arg(allow_negative_numbers = true)]
        jdn: Jdn,
    },
    /// Print the leap offset and Gregorian New Year of a Jalaali year
    Info {
        #[arg(allow_negative_numbers = true)]
        year: Year,
    },
    /// Tell whether a Jalaali year is leap
    Leap {
        #[arg(allow_negative_numbers = true)]
        year: Year,
    },
    /// Print the number of days in a Jalaali month
    MonthLength {
        #[arg(allow_negative_numbers = true)]
        year: Year,
        month: Month,
    },
    /// Print today's date (UTC) in both calendars
    Today,
}

#[derive(Clone, Copy, ValueEnum)]
enum Calendar {
    Jalaali,
    Gregorian,
}

/// A year, month and day given as three numbers.
#[derive(Args)]
struct Ymd {
    #[arg(allow_negative_numbers = true)]
    year: Year,
    month: Month,
    day: Day,
}

fn both(jdn: Jdn) -> Result<String, Error> {
    let g = GregorianDate::from_jdn(jdn);
    let j = JalaaliDate::from_jdn(jdn)?;
    Ok(format!("{} {} (JDN {})", j, g, jdn))
}

fn run(command: Command) -> Result<String, Error> {
    Ok(match command {
        Command::ToJalaali(Ymd { year, month, day }) => {
            GregorianDate::new(year, month, day)?.to_jalaali()?.to_string()
        }
        Command::ToGregorian(Ymd { year, month, day }) => {
            JalaaliDate::new(year, month, day)?.to_gregorian()?.to_string()
        }
        Command::Jdn {
            calendar: Calendar::Jalaali,
            date: Ymd { year, month, day },
        } => JalaaliDate::new(year, month, day)?.to_jdn()?.to_string(),
        Command::Jdn {
            calendar: Calendar::Gregorian,
            date: Ymd { year, month, day },
        } => GregorianDate::new(year, month, day)?.to_jdn().to_string(),
        Command::FromJdn { jdn } => both(jdn)?,
        Command::Info { year } => {
            let info = jalaali_calendar_info(year)?;
            format!(
                "leap offset: {}, new year: {}",
                info.leap_offset,
                GregorianDate::from_jdn(info.new_year_jdn())
            )
        }
        Command::Leap { year } => jalaali::is_leap_jalaali_year(year)?.to_string(),
        Command::MonthLength { year, month } => days_in_month(year, month)?.to_string(),
        Command::Today => both(SystemTime::now().jdn())?,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    println!("{}", run(cli.command)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String, Error> {
        let cli = Cli::try_parse_from(std::iter::once("jdate").chain(args.iter().copied()))
            .expect("arguments should parse");
        run(cli.command)
    }

    #[test]
    fn test_conversions() {
        assert_eq!(run_args(&["to-jalaali", "2024", "3", "20"]).unwrap(), "1403/1/1");
        assert_eq!(run_args(&["to-gregorian", "1403", "12", "30"]).unwrap(), "2025-03-20");
        assert_eq!(run_args(&["jdn", "1403", "1", "1"]).unwrap(), "2460390");
        assert_eq!(
            run_args(&["jdn", "--calendar", "gregorian", "2000", "1", "1"]).unwrap(),
            "2451545"
        );
        assert_eq!(
            run_args(&["from-jdn", "2440588"]).unwrap(),
            "1348/10/11 1970-01-01 (JDN 2440588)"
        );
    }

    #[test]
    fn test_year_queries() {
        assert_eq!(run_args(&["leap", "1403"]).unwrap(), "true");
        assert_eq!(run_args(&["month-length", "1404", "12"]).unwrap(), "29");
        assert_eq!(
            run_args(&["info", "1404"]).unwrap(),
            "leap offset: 1, new year: 2025-03-21"
        );
        assert_eq!(run_args(&["info", "-61"]).unwrap(), "leap offset: 0, new year: 560-03-20");
    }

    #[test]
    fn test_invalid_input_fails() {
        assert_eq!(
            run_args(&["leap", "3178"]),
            Err(Error::InvalidJalaaliYear(3178))
        );
        assert_eq!(
            run_args(&["to-gregorian", "1404", "12", "30"]),
            Err(Error::InvalidJalaaliDate(1404, 12, 30))
        );
        assert!(Cli::try_parse_from(["jdate", "leap", "abc"]).is_err());
    }

    #[test]
    fn test_today_is_convertible() {
        assert!(run_args(&["today"]).is_ok());
    }
}
