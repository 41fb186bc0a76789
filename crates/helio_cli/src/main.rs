use chrono::{DateTime, Duration, SecondsFormat, Utc};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use helio_core::{
    DateLike, Daylight, GeoCoordinate, OrbitalElements, SolarError, SolarEvent, SunTimes,
    equation_of_time_for, event_minutes, event_time, julian_century, julian_day,
    minutes_to_time_of_day, sun_times,
};

#[derive(Parser)]
#[command(name = "helio", about = "NOAA solar noon, sunrise and sunset calculator (UTC)")]
struct Cli {
    /// Log verbosity: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solar noon
    Noon {
        #[command(flatten)]
        site: Site,
        /// Print minutes after UTC midnight instead of an instant
        #[arg(long)]
        minutes: bool,
    },
    /// Sunrise
    Sunrise {
        #[command(flatten)]
        site: Site,
        /// Print minutes after UTC midnight instead of an instant
        #[arg(long)]
        minutes: bool,
    },
    /// Sunset
    Sunset {
        #[command(flatten)]
        site: Site,
        /// Print minutes after UTC midnight instead of an instant
        #[arg(long)]
        minutes: bool,
    },
    /// Sunrise, solar noon, sunset and day length
    Times {
        #[command(flatten)]
        site: Site,
    },
    /// Intermediate orbital quantities for a date
    Elements {
        /// Date or timestamp (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        date: String,
    },
    /// Julian day and Julian century for a date
    Jd {
        /// Date or timestamp (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        date: String,
    },
}

#[derive(Args)]
struct Site {
    /// Date or timestamp (YYYY-MM-DD or RFC 3339); time of day is ignored
    #[arg(long)]
    date: String,
    /// Latitude in degrees (north positive)
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees (east positive, west negative)
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    TermLogger::init(
        log_level(verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|e| eprintln!("Unable to initialise logger: {e}"));
}

fn format_instant(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn format_duration(d: Duration) -> String {
    let total = d.num_seconds();
    format!("{}h {:02}m {:02}s", total / 3600, (total % 3600) / 60, total % 60)
}

fn format_times(times: &SunTimes) -> String {
    let loc = times.location;
    let mut out = format!(
        "Solar events for {} at {:.4}°N, {:.4}°E (UTC):\n\n",
        times.date, loc.latitude_deg, loc.longitude_deg
    );
    match times.daylight {
        Daylight::Events { sunrise, sunset } => {
            out.push_str(&format!("  {:<11} {}\n", "Sunrise", format_instant(sunrise)));
            out.push_str(&format!(
                "  {:<11} {}\n",
                "Solar noon",
                format_instant(times.solar_noon)
            ));
            out.push_str(&format!("  {:<11} {}\n", "Sunset", format_instant(sunset)));
        }
        Daylight::NeverRises => {
            out.push_str(&format!(
                "  {:<11} {}\n",
                "Solar noon",
                format_instant(times.solar_noon)
            ));
            out.push_str("  Sun never rises (polar night)\n");
        }
        Daylight::NeverSets => {
            out.push_str(&format!(
                "  {:<11} {}\n",
                "Solar noon",
                format_instant(times.solar_noon)
            ));
            out.push_str("  Sun never sets (midnight sun)\n");
        }
    }
    out.push_str(&format!(
        "  {:<11} {}\n",
        "Day length",
        format_duration(times.day_length())
    ));
    out
}

fn format_elements(jd: f64, e: &OrbitalElements) -> String {
    let rows = [
        ("Julian day", jd),
        ("Julian century", e.julian_century),
        ("Mean obliquity (deg)", e.mean_obliquity),
        ("Oblique correction (deg)", e.oblique_correction),
        ("Mean anomaly (deg)", e.mean_anomaly),
        ("Mean longitude (deg)", e.mean_longitude),
        ("Eccentricity", e.eccentricity),
        ("Equation of center (deg)", e.equation_of_center),
        ("True longitude (deg)", e.true_longitude),
        ("Apparent longitude (deg)", e.apparent_longitude),
        ("Declination (deg)", e.declination),
        ("y", e.y),
        ("Equation of time (min)", equation_of_time_for(e)),
    ];
    rows.iter()
        .map(|(name, value)| format!("{name:<26} {value:.9}\n"))
        .collect()
}

fn print_event(event: SolarEvent, site: &Site, minutes: bool) -> Result<(), SolarError> {
    if minutes {
        let m = event_minutes(event, site.date.as_str(), site.lat, site.lon)?;
        println!("{m:.6}  ({} UTC)", minutes_to_time_of_day(m));
    } else {
        let t = event_time(event, site.date.as_str(), site.lat, site.lon)?;
        println!("{}", format_instant(t));
    }
    Ok(())
}

fn run(command: Commands) -> Result<(), SolarError> {
    match command {
        Commands::Noon { site, minutes } => print_event(SolarEvent::SolarNoon, &site, minutes),
        Commands::Sunrise { site, minutes } => print_event(SolarEvent::Sunrise, &site, minutes),
        Commands::Sunset { site, minutes } => print_event(SolarEvent::Sunset, &site, minutes),
        Commands::Times { site } => {
            let times = sun_times(site.date.as_str(), &GeoCoordinate::new(site.lat, site.lon))?;
            print!("{}", format_times(&times));
            Ok(())
        }
        Commands::Elements { date } => {
            let date = date.calendar_date()?;
            let jd = julian_day(date)?;
            let elements = OrbitalElements::at_century(julian_century(jd));
            print!("{}", format_elements(jd, &elements));
            Ok(())
        }
        Commands::Jd { date } => {
            let jd = julian_day(date.as_str())?;
            println!("JD {jd:.1}");
            println!("T  {:.10}", julian_century(jd));
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn parses_negative_longitude() {
        let cli = Cli::try_parse_from([
            "helio", "sunrise", "--date", "2010-01-01", "--lat", "40.75", "--lon", "-73.99",
        ])
        .unwrap();
        match cli.command {
            Commands::Sunrise { site, minutes } => {
                assert_eq!(site.lat, 40.75);
                assert_eq!(site.lon, -73.99);
                assert!(!minutes);
            }
            _ => panic!("expected sunrise subcommand"),
        }
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["helio", "-vv", "jd", "--date", "2015-06-21"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(log_level(cli.verbose), LevelFilter::Debug);
        assert_eq!(log_level(7), LevelFilter::Trace);
    }

    #[test]
    fn rejects_missing_latitude() {
        assert!(Cli::try_parse_from(["helio", "noon", "--date", "2010-01-01", "--lon", "0"]).is_err());
    }

    #[test]
    fn invalid_date_fails_run() {
        let cli = Cli::try_parse_from([
            "helio", "times", "--date", "yesterday", "--lat", "0", "--lon", "0",
        ])
        .unwrap();
        assert!(matches!(run(cli.command), Err(SolarError::InvalidInput(_))));
    }

    #[test]
    fn polar_night_fails_sunrise_run() {
        let cli = Cli::try_parse_from([
            "helio", "sunrise", "--date", "2019-12-10", "--lat", "71.706936", "--lon", "-42.604303",
        ])
        .unwrap();
        assert!(matches!(
            run(cli.command),
            Err(SolarError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn formats_instant_with_millis() {
        let t = Utc.with_ymd_and_hms(2010, 1, 1, 12, 20, 5).unwrap();
        assert_eq!(format_instant(t), "2010-01-01T12:20:05.000Z");
    }

    #[test]
    fn formats_duration() {
        assert_eq!(format_duration(Duration::minutes(558) + Duration::seconds(21)), "9h 18m 21s");
    }

    #[test]
    fn times_report_lists_events() {
        let date = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        let times = sun_times(date, &GeoCoordinate::new(40.75, -73.99)).unwrap();
        let out = format_times(&times);
        assert!(out.contains("Sunrise     2010-01-01T12:20:05"), "{out}");
        assert!(out.contains("Solar noon  2010-01-01T16:59:16"), "{out}");
        assert!(out.contains("Sunset      2010-01-01T21:38:27"), "{out}");
        assert!(out.contains("Day length  9h 18m"), "{out}");
    }

    #[test]
    fn times_report_polar_night() {
        let date = NaiveDate::from_ymd_opt(2019, 12, 10).unwrap();
        let times = sun_times(date, &GeoCoordinate::new(71.706936, -42.604303)).unwrap();
        let out = format_times(&times);
        assert!(out.contains("never rises"), "{out}");
        assert!(out.contains("Day length  0h 00m 00s"), "{out}");
    }

    #[test]
    fn elements_report_has_every_row() {
        let e = OrbitalElements::at_century(0.1);
        let out = format_elements(2_455_197.5, &e);
        assert_eq!(out.lines().count(), 13);
        assert!(out.starts_with("Julian day"));
        assert!(out.contains("Declination (deg)"));
    }
}
