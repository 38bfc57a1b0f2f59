use std::path::PathBuf;

use bazi_base::{
    ALL_ELEMENTS, AnnualPillar, BaziChart, DaYunSequence, ElementalBalance, Sex, Stem,
    analyze_balance, annual_pillars, generate_decade_cycles, hour_branch, hour_stem,
};
use bazi_calendar::SolarDateTime;
use bazi_rs::{
    BaziReport, BirthData, MAX_ANNUAL_COUNT, ReportConfig, SolarTermCalendar, compute_report,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bazi", about = "BaZi four-pillar chart CLI")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Full report: chart, balance, decade cycles, annual pillars
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM or HH:MM:SS), local civil time
        #[arg(long, default_value = "00:00")]
        time: String,
        /// Sex: male or female
        #[arg(long)]
        sex: String,
        /// Optional TOML report config
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Chart from explicit year/month/day pillars (e.g. 乙丑 辛巳 丙寅)
    Pillars {
        /// Year pillar
        #[arg(long)]
        year: String,
        /// Month pillar
        #[arg(long)]
        month: String,
        /// Day pillar
        #[arg(long)]
        day: String,
        /// Birth hour (0-23)
        #[arg(long)]
        hour: u32,
        /// Sex, to also print decade cycles
        #[arg(long)]
        sex: Option<String>,
    },
    /// Decade cycles (DaYun)
    Dayun {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM)
        #[arg(long, default_value = "00:00")]
        time: String,
        /// Sex: male or female
        #[arg(long)]
        sex: String,
    },
    /// Elemental balance and favorable elements
    Balance {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM)
        #[arg(long, default_value = "00:00")]
        time: String,
    },
    /// Annual pillars (LiuNian)
    Annual {
        /// Birth year, for nominal age
        #[arg(long)]
        birth_year: i32,
        /// First year of the run (default: birth year)
        #[arg(long)]
        start: Option<i32>,
        /// Number of years
        #[arg(long, default_value = "10")]
        count: usize,
    },
    /// Hour pillar from a clock hour and day stem
    Hour {
        /// Clock hour (0-23)
        #[arg(long)]
        hour: u32,
        /// Day stem (甲 or Jia)
        #[arg(long)]
        day_stem: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn parse_datetime(date: &str, time: &str) -> SolarDateTime {
    SolarDateTime::from_parts(date, Some(time)).unwrap_or_else(|e| fail(e))
}

fn parse_sex(s: &str) -> Sex {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Valid: male, female");
        fail(e)
    })
}

fn load_config(path: Option<&PathBuf>) -> ReportConfig {
    match path {
        Some(p) => ReportConfig::load(p).unwrap_or_else(|e| fail(e)),
        None => ReportConfig::default(),
    }
}

/// Annual run for the `annual` command, capped like the report config.
fn annual_run(
    birth_year: i32,
    start: Option<i32>,
    count: usize,
) -> Result<Vec<AnnualPillar>, String> {
    if count > MAX_ANNUAL_COUNT {
        return Err(format!("--count {count} exceeds {MAX_ANNUAL_COUNT}"));
    }
    annual_pillars(birth_year, start.unwrap_or(birth_year), count).map_err(|e| e.to_string())
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn print_chart(chart: &BaziChart) {
    println!("        Year  Month  Day  Hour");
    let p = chart.pillars();
    println!("Pillar  {}  {}   {}  {}", p[0], p[1], p[2], p[3]);
    println!(
        "Day master: {} ({}, {})",
        chart.day_master,
        chart.day_master.name(),
        chart.day_master_element
    );
    println!(
        "Zodiac:     {} ({})",
        chart.zodiac_animal.name(),
        chart.zodiac_animal.symbol()
    );
}

fn print_balance(balance: &ElementalBalance) {
    println!("Elements:");
    for e in ALL_ELEMENTS {
        println!("  {} {:<5} {}", e.symbol(), e.name(), balance.counts.get(e));
    }
    println!("  Strongest: {}  Weakest: {}", balance.max_element, balance.min_element);
    println!(
        "  Chart:      {} ({})",
        balance.chart_strength.name(),
        balance.chart_strength.symbol()
    );
    println!("  Day master: {:?}", balance.day_master_strength);
    let [a, b] = balance.favorable_elements;
    println!("  Favorable:  {a}, {b}");
}

fn print_dayun(seq: &DaYunSequence) {
    println!("Decade cycles ({:?}):", seq.direction);
    for (i, e) in seq.iter().enumerate() {
        println!(
            "  {:>2}. {}  age {:>3}-{:<3} {}",
            i + 1,
            e.pillar,
            e.start_age,
            e.end_age,
            e.element
        );
    }
}

fn print_annual(run: &[AnnualPillar]) {
    println!("Annual pillars:");
    for a in run {
        println!("  {}  {}  age {:>3}  {}", a.year, a.pillar, a.age, a.element);
    }
}

fn print_report(r: &BaziReport) {
    println!("Born: {} ({})", r.birth.datetime, r.birth.sex);
    println!();
    print_chart(&r.chart);
    println!();
    print_balance(&r.balance);
    for attrs in &r.favorable_attributes {
        println!(
            "    {} colours {}, direction {}, digits {:?}",
            attrs.symbol,
            attrs.colors.join("/"),
            attrs.direction,
            attrs.lucky_digits
        );
        println!(
            "      accessories {}, plants {}",
            attrs.accessories.join("/"),
            attrs.plants.join("/")
        );
    }
    println!("  Avoid colours: {}", r.unfavorable_colors.join("/"));
    println!();
    print_dayun(&r.dayun);
    println!();
    print_annual(&r.annual);
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let json = cli.format == Format::Json;
    tracing::debug!(json, "bazi cli started");

    match cli.command {
        Commands::Chart {
            date,
            time,
            sex,
            config,
        } => {
            let birth = BirthData::new(parse_datetime(&date, &time), parse_sex(&sex));
            let config = load_config(config.as_ref());
            let report = compute_report(&SolarTermCalendar::new(), &birth, &config)
                .unwrap_or_else(|e| fail(e));
            if json {
                print_json(&report);
            } else {
                print_report(&report);
            }
        }

        Commands::Pillars {
            year,
            month,
            day,
            hour,
            sex,
        } => {
            let chart = bazi_rs::chart_from_symbols(&year, &month, &day, hour)
                .unwrap_or_else(|e| fail(e));
            let balance = analyze_balance(&chart);
            let dayun = sex.map(|s| generate_decade_cycles(&chart, parse_sex(&s)));
            if json {
                print_json(&serde_json::json!({
                    "chart": chart,
                    "balance": balance,
                    "dayun": dayun,
                }));
            } else {
                print_chart(&chart);
                println!();
                print_balance(&balance);
                if let Some(seq) = &dayun {
                    println!();
                    print_dayun(seq);
                }
            }
        }

        Commands::Dayun { date, time, sex } => {
            let seq = bazi_rs::dayun(parse_datetime(&date, &time), parse_sex(&sex))
                .unwrap_or_else(|e| fail(e));
            if json {
                print_json(&seq);
            } else {
                print_dayun(&seq);
            }
        }

        Commands::Balance { date, time } => {
            let balance =
                bazi_rs::balance(parse_datetime(&date, &time)).unwrap_or_else(|e| fail(e));
            if json {
                print_json(&balance);
            } else {
                print_balance(&balance);
            }
        }

        Commands::Annual {
            birth_year,
            start,
            count,
        } => {
            let run = annual_run(birth_year, start, count).unwrap_or_else(|e| fail(e));
            if json {
                print_json(&run);
            } else {
                print_annual(&run);
            }
        }

        Commands::Hour { hour, day_stem } => {
            let stem: Stem = day_stem.parse().unwrap_or_else(|e| fail(e));
            let branch = hour_branch(hour).unwrap_or_else(|e| fail(e));
            let hs = hour_stem(stem, branch);
            if json {
                print_json(&serde_json::json!({
                    "hour": hour,
                    "stem": hs,
                    "branch": branch,
                }));
            } else {
                let range = branch.hour_range();
                println!(
                    "{}{} ({} {}, {:02}:00-{:02}:00)",
                    hs,
                    branch,
                    hs.name(),
                    branch.name(),
                    range.start,
                    range.end
                );
            }
        }
    }
}
