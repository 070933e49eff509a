use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};

use coligny_almanac::{
    festivals_from_reader, link_full_moons, named_moons_from_reader, upcoming_events, day_sheets,
};
use coligny_moon::{MeanLunation, classify, classify_range, next_eclipse_markers};
use coligny_time::{CalendarDate, Moment};
use coligny_wheel::{
    CelticScheme, ZODIAC_SIGNS, celtic_date, resolve_zodiac, zodiac_by_name, zodiac_for_date,
};

mod logging;

#[derive(Parser)]
#[command(name = "coligny", about = "Coligny lunar calendar CLI")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lunar phase for a single date
    Phase {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Lunar phase timeline for a date range, with named-moon linking
    Phases {
        /// Start date (YYYY-MM-DD)
        start: String,
        /// End date (YYYY-MM-DD), inclusive
        end: String,
        /// JSON file of named full moon records
        #[arg(long)]
        moons: Option<PathBuf>,
    },
    /// Celtic calendar date for a Gregorian date
    Celtic {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Scheme: fixed (28-day divisions) or range (solstice ranges)
        #[arg(long)]
        scheme: String,
    },
    /// Zodiac sign for a month/day pair
    Zodiac {
        /// Month (1-12)
        month: u32,
        /// Day of month
        day: u32,
    },
    /// Zodiac sign by name
    ZodiacName {
        /// Sign name (case-insensitive)
        name: String,
    },
    /// All zodiac signs with their dates and lore
    ZodiacInsights,
    /// Upcoming eclipse-adjacent markers
    Eclipses {
        /// Starting instant (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS); default now
        #[arg(long)]
        from: Option<String>,
    },
    /// Events within the next days
    Upcoming {
        /// Window size in days
        #[arg(long, default_value = "3")]
        days: i64,
        /// JSON file of festival records
        #[arg(long)]
        festivals: Option<PathBuf>,
    },
    /// Per-day sheets (phase + Celtic date) for a range
    Sheets {
        /// Start date (YYYY-MM-DD)
        start: String,
        /// End date (YYYY-MM-DD), inclusive
        end: String,
        /// Scheme: fixed or range
        #[arg(long)]
        scheme: String,
    },
    /// Today's date across the engine
    Today {
        /// Scheme: fixed or range
        #[arg(long, default_value = "fixed")]
        scheme: String,
    },
}

fn parse_date(s: &str) -> Result<CalendarDate, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_scheme(s: &str) -> Result<CelticScheme, String> {
    match s {
        "fixed" | "division" => Ok(CelticScheme::FixedDivision),
        "range" | "solstice" => Ok(CelticScheme::SolsticeRange),
        other => Err(format!(
            "unknown scheme '{other}': expected 'fixed' or 'range'"
        )),
    }
}

fn parse_moment(s: &str) -> Result<Moment, String> {
    let (date_part, time_part) = match s.split_once('T') {
        Some((d, t)) => (d, Some(t.trim_end_matches('Z'))),
        None => (s, None),
    };
    let date = parse_date(date_part)?;
    let Some(time) = time_part else {
        return Ok(Moment::from_date(date));
    };
    let mut fields = time.splitn(3, ':');
    let hour = fields
        .next()
        .and_then(|f| f.parse::<u32>().ok())
        .filter(|h| *h < 24)
        .ok_or_else(|| format!("bad time in '{s}'"))?;
    let minute = fields
        .next()
        .and_then(|f| f.parse::<u32>().ok())
        .filter(|m| *m < 60)
        .ok_or_else(|| format!("bad time in '{s}'"))?;
    let second = fields
        .next()
        .map(|f| f.parse::<f64>().map_err(|_| format!("bad time in '{s}'")))
        .transpose()?
        .unwrap_or(0.0);
    Ok(Moment::new(
        date.year, date.month, date.day, hour, minute, second,
    ))
}

fn now_moment() -> Moment {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    Moment::from_day_number(secs / 86_400.0)
}

fn bail(message: &str) -> ! {
    eprintln!("error: {message}");
    std::process::exit(2)
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let eph = MeanLunation;

    match cli.command {
        Commands::Phase { date } => {
            let date = parse_date(&date).unwrap_or_else(|e| bail(&e));
            let sample = classify(&eph, date);
            println!("{} {}  {}", sample.icon, date, sample.description());
        }

        Commands::Phases { start, end, moons } => {
            let start = parse_date(&start).unwrap_or_else(|e| bail(&e));
            let end = parse_date(&end).unwrap_or_else(|e| bail(&e));
            let named = match moons {
                Some(path) => {
                    let file = std::fs::File::open(&path)
                        .unwrap_or_else(|e| bail(&format!("{}: {e}", path.display())));
                    let records = named_moons_from_reader(file)
                        .unwrap_or_else(|e| bail(&format!("{}: {e}", path.display())));
                    tracing::info!(count = records.len(), "loaded named moon records");
                    records
                }
                None => Vec::new(),
            };
            let samples = classify_range(&eph, start, end).unwrap_or_else(|e| bail(&e.to_string()));
            let annotated = link_full_moons(&samples, &named, &mut rand::thread_rng());
            for entry in annotated {
                let name = entry.moon_name.as_deref().unwrap_or("-");
                println!(
                    "{} {} {:<16} {:>6.2}%  {}",
                    entry.sample.date,
                    entry.sample.icon,
                    entry.sample.phase.name(),
                    entry.sample.illumination_pct,
                    name
                );
                if let Some(poem) = entry.poem {
                    println!("    {poem}");
                }
            }
        }

        Commands::Celtic { date, scheme } => {
            let date = parse_date(&date).unwrap_or_else(|e| bail(&e));
            let scheme = parse_scheme(&scheme).unwrap_or_else(|e| bail(&e));
            let celtic = celtic_date(date, scheme);
            match celtic.day {
                Some(day) => println!("{date} -> {} {day}", celtic.month),
                None => println!("{date} -> {}", celtic.month),
            }
        }

        Commands::Zodiac { month, day } => {
            match resolve_zodiac(month, day).unwrap_or_else(|e| bail(&e.to_string())) {
                Some(sign) => print_sign(sign),
                None => println!("no sign matches {month}/{day}"),
            }
        }

        Commands::ZodiacName { name } => match zodiac_by_name(&name) {
            Some(sign) => print_sign(sign),
            None => bail(&format!("unknown zodiac sign '{name}'")),
        },

        Commands::ZodiacInsights => {
            for sign in &ZODIAC_SIGNS {
                println!("{:<9} {:<26} {}", sign.name, sign.dates(), sign.symbolism);
            }
        }

        Commands::Eclipses { from } => {
            let now = match from {
                Some(s) => parse_moment(&s).unwrap_or_else(|e| bail(&e)),
                None => now_moment(),
            };
            for marker in next_eclipse_markers(&eph, now) {
                println!("{} near {}", marker.title, marker.moment);
                println!("    {}", marker.description);
            }
            println!("(syzygy estimates only; eclipse geometry is not checked)");
        }

        Commands::Upcoming { days, festivals } => {
            let records = match festivals {
                Some(path) => {
                    let file = std::fs::File::open(&path)
                        .unwrap_or_else(|e| bail(&format!("{}: {e}", path.display())));
                    let records = festivals_from_reader(file)
                        .unwrap_or_else(|e| bail(&format!("{}: {e}", path.display())));
                    tracing::info!(count = records.len(), "loaded festival records");
                    records
                }
                None => Vec::new(),
            };
            let today = now_moment().date();
            let horizon = today.add_days(days);
            let phases =
                classify_range(&eph, today, horizon).unwrap_or_else(|e| bail(&e.to_string()));
            let events = upcoming_events(today, days, &records, &phases);
            if events.is_empty() {
                println!("no events in the next {days} days");
            }
            for event in events {
                println!(
                    "{} (+{}d) {} [{}] {}",
                    event.date, event.days_until, event.name, event.kind, event.description
                );
            }
        }

        Commands::Sheets { start, end, scheme } => {
            let start = parse_date(&start).unwrap_or_else(|e| bail(&e));
            let end = parse_date(&end).unwrap_or_else(|e| bail(&e));
            let scheme = parse_scheme(&scheme).unwrap_or_else(|e| bail(&e));
            let sheets =
                day_sheets(&eph, start, end, scheme).unwrap_or_else(|e| bail(&e.to_string()));
            for sheet in sheets {
                let day = sheet
                    .celtic
                    .day
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{} {} {:<16} {:<10} {}",
                    sheet.date,
                    sheet.sample.icon,
                    sheet.sample.phase.name(),
                    sheet.celtic.month,
                    day
                );
            }
        }

        Commands::Today { scheme } => {
            let scheme = parse_scheme(&scheme).unwrap_or_else(|e| bail(&e));
            let now = now_moment();
            let today = now.date();
            let sample = classify(&eph, today);
            let celtic = celtic_date(today, scheme);
            println!("{} ({})", today, today.weekday().name());
            println!("{} {}", sample.icon, sample.description());
            match celtic.day {
                Some(day) => println!("Celtic date: {} {day}", celtic.month),
                None => println!("Celtic date: {}", celtic.month),
            }
            if let Some(sign) = zodiac_for_date(today) {
                println!("Zodiac: {} ({})", sign.name, sign.dates());
            }
        }
    }
}

fn print_sign(sign: &coligny_wheel::ZodiacSignDef) {
    println!("{} ({})", sign.name, sign.dates());
    println!("  symbolism: {}", sign.symbolism);
    println!("  animal: {}", sign.animal);
    println!("  mythical creature: {}", sign.mythical_creature);
}
