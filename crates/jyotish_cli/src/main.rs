mod logging;
mod table;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};
use clap::{Args, Parser, Subcommand};
use jyotish_base::{
    BodyReading, Chart, ChartSettings, Graha, HouseDivision, KpChart, LordChain, compute_chart,
    format_dms, kp_lords, life_area_readings, nakshatra_from_longitude, rashi_from_longitude,
    remedies, resolve_lord_chain, resolve_significators, ruling_planets, vaar_from_weekday,
};
use jyotish_config::JyotishConfig;
use jyotish_core::{AyanamshaSystem, Ephemeris, GeoLocation, HouseSystem, NodeMode};
use jyotish_period::{BirthDetails, ComponentScores, PeriodAnalysis, PeriodOrchestrator, ScoringEngine};
use serde::Serialize;
use tracing::debug;

use crate::table::TableEphemeris;

#[derive(Parser)]
#[command(name = "jyotish", about = "Sidereal charts, KP lords and daily period scores")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "JYOTISH_CONFIG")]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (DD/MM/YYYY or YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Birth time (HH:MM or HH:MM:SS)
    #[arg(long)]
    time: String,
    /// Fixed offset (+05:30) or IANA zone name
    #[arg(long, default_value = "+00:00")]
    tz: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// JSON ephemeris table
    #[arg(long)]
    ephemeris: PathBuf,
}

/// Overrides for the `[chart]` section of the configuration.
#[derive(Args)]
struct FrameArgs {
    /// lahiri, kp, raman or fagan_bradley
    #[arg(long, value_parser = parse_ayanamsha)]
    ayanamsha: Option<AyanamshaSystem>,
    /// mean or true
    #[arg(long, value_parser = parse_node_mode)]
    node_mode: Option<NodeMode>,
    /// House system code: P, K, O, E, R or C
    #[arg(long, value_parser = parse_house_system)]
    house_system: Option<HouseSystem>,
}

#[derive(Subcommand)]
enum Commands {
    /// KP lord chain of a sidereal longitude
    Lords {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Chain depth
        #[arg(long, default_value = "4")]
        depth: usize,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Normalize a civil date, time and zone to a Julian day
    Instant {
        date: String,
        time: String,
        tz: String,
        /// Fail on an unknown zone instead of falling back to UTC
        #[arg(long)]
        strict: bool,
    },
    /// Weighted final score from seven component values
    Score {
        #[arg(allow_negative_numbers = true)]
        dasha: f64,
        #[arg(allow_negative_numbers = true)]
        transit: f64,
        #[arg(allow_negative_numbers = true)]
        tarabala: f64,
        #[arg(allow_negative_numbers = true)]
        chandrabala: f64,
        #[arg(allow_negative_numbers = true)]
        panchang: f64,
        ghataka: f64,
        muhurta: f64,
    },
    /// Sidereal chart at birth
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        frame: FrameArgs,
    },
    /// KP cusps, planets, significators and ruling planets at birth
    Kp {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        frame: FrameArgs,
        /// Occupancy by whole signs instead of quadrant cusps
        #[arg(long)]
        whole_sign: bool,
    },
    /// Daily scores over a date range
    Period {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        frame: FrameArgs,
        /// First day (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Last day, inclusive
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Whole month (YYYY-MM)
        #[arg(long, conflicts_with_all = ["from", "to"])]
        month: Option<String>,
        /// Run days one after another without the worker pool
        #[arg(long)]
        sequential: bool,
    },
}

fn parse_ayanamsha(s: &str) -> Result<AyanamshaSystem, String> {
    serde_json::from_value(serde_json::Value::String(s.to_lowercase().replace('-', "_")))
        .map_err(|_| format!("unknown ayanamsha: {s}"))
}

fn parse_node_mode(s: &str) -> Result<NodeMode, String> {
    serde_json::from_value(serde_json::Value::String(s.to_lowercase()))
        .map_err(|_| format!("unknown node mode: {s} (mean or true)"))
}

fn parse_house_system(s: &str) -> Result<HouseSystem, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => HouseSystem::from_code(c.to_ascii_uppercase()),
        _ => None,
    }
    .ok_or_else(|| format!("unknown house system code: {s}"))
}

fn load_config(path: Option<&Path>) -> Result<JyotishConfig> {
    match path {
        Some(path) => JyotishConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(JyotishConfig::default()),
    }
}

fn apply_frame(config: &mut JyotishConfig, frame: &FrameArgs) {
    if let Some(a) = frame.ayanamsha {
        config.chart.ayanamsha = a;
    }
    if let Some(n) = frame.node_mode {
        config.chart.node_mode = n;
    }
    if let Some(h) = frame.house_system {
        config.chart.house_system = h;
    }
}

/// KP charts use the Krishnamurti ayanamsha and Placidus cusps unless the
/// command line names another frame; `[chart]` only supplies the node mode.
fn apply_kp_frame(config: &mut JyotishConfig, frame: &FrameArgs) {
    apply_frame(config, frame);
    config.chart.ayanamsha = frame.ayanamsha.unwrap_or(AyanamshaSystem::Kp);
    config.chart.house_system = frame.house_system.unwrap_or(HouseSystem::Placidus);
}

fn chart_settings(config: &JyotishConfig) -> ChartSettings {
    ChartSettings {
        ayanamsha: config.chart.ayanamsha,
        node_mode: config.chart.node_mode,
        house_system: config.chart.house_system,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn chain_text(chain: &LordChain) -> String {
    format!(
        "{} / {} / {} / {}",
        chain.sign_lord.name(),
        chain.star_lord.name(),
        chain.sub_lord.name(),
        chain.sub_sub_lord.name()
    )
}

fn names(set: &BTreeSet<Graha>) -> String {
    set.iter().map(|g| g.name()).collect::<Vec<_>>().join(", ")
}

fn birth_chart(birth: &BirthArgs, config: &JyotishConfig) -> Result<(Chart, NaiveDate)> {
    let eph = TableEphemeris::from_path(&birth.ephemeris)?;
    let instant = jyotish_time::to_instant(&birth.date, &birth.time, &birth.tz)
        .context("invalid birth date or time")?;
    let location = GeoLocation::new(birth.lat, birth.lon).context("invalid birth location")?;
    let chart = compute_chart(&eph, instant, location, chart_settings(config))
        .context("chart computation failed")?;
    let local_date = jyotish_time::parse_date(&birth.date)?;
    Ok((chart, local_date))
}

// ---------------------------------------------------------------------------
// Text renderers
// ---------------------------------------------------------------------------

fn print_chart(chart: &Chart) {
    println!("JD (UT):    {:.6}", chart.instant.jd_ut());
    println!("Ayanamsha:  {:.6} deg", chart.ayanamsa_deg);
    println!(
        "Ascendant:  {} {} ({})",
        format_dms(chart.ascendant.longitude_deg),
        chart.ascendant.rashi.rashi.name(),
        chart.ascendant.nakshatra.nakshatra.name()
    );
    println!();
    for reading in &chart.bodies {
        match reading {
            BodyReading::Computed(p) => println!(
                "{:<8} {:>10} {:<10} {:<18} pada {}  house {:>2} (cusp {:>2})  {:<12}{}",
                p.graha.name(),
                format_dms(p.longitude()),
                p.placement.rashi.rashi.name(),
                p.placement.nakshatra.nakshatra.name(),
                p.placement.nakshatra.pada,
                p.whole_sign_house,
                p.cusp_house,
                p.dignity.name(),
                if p.retrograde { " R" } else { "" }
            ),
            BodyReading::Unavailable { graha, reason } => {
                println!("{:<8} unavailable: {reason}", graha.name());
            }
        }
    }
}

fn print_kp(chart: &Chart, kp: &KpChart, weekday: u8) {
    println!("Cusps");
    for cusp in &kp.cusps {
        println!("  {:>2}  {:>10}  {}", cusp.house, cusp.formatted, chain_text(&cusp.lords));
    }
    println!("Planets");
    for planet in &kp.planets {
        println!(
            "  {:<8} {:>10}  house {:>2}  {}{}",
            planet.graha.name(),
            planet.formatted,
            planet.house,
            chain_text(&planet.lords),
            if planet.retrograde { "  R" } else { "" }
        );
    }
    println!("Significators");
    for (house, set) in resolve_significators(kp) {
        println!(
            "  {:>2}  A: [{}]  B: [{}]  C: [{}]  D: [{}]",
            house,
            names(&set.level_a),
            names(&set.level_b),
            names(&set.level_c),
            names(&set.level_d)
        );
    }
    if let Some(rp) = ruling_planets(chart, weekday) {
        println!(
            "Ruling planets: day {}, Moon star {}, Moon sign {}, Lagna star {}, Lagna sign {}",
            rp.day_lord.name(),
            rp.moon_star_lord.name(),
            rp.moon_sign_lord.name(),
            rp.lagna_star_lord.name(),
            rp.lagna_sign_lord.name()
        );
    }
    println!("Life areas");
    for reading in life_area_readings(kp) {
        println!(
            "  {:<11} {:?} ({} favorable)",
            format!("{:?}", reading.area),
            reading.strength,
            reading.favorable_hits
        );
    }
    for remedy in remedies(kp) {
        println!(
            "Remedy for {} in house {}: {}; {}; donate {}",
            remedy.graha.name(),
            remedy.house,
            remedy.data.mantra,
            remedy.data.stone,
            remedy.data.donation
        );
    }
}

fn print_period(analysis: &PeriodAnalysis) {
    println!(
        "{} to {} ({:?}), birth star {} in {}",
        analysis.start,
        analysis.end,
        analysis.mode,
        analysis.birth_nakshatra.name(),
        analysis.birth_rashi.name()
    );
    println!();
    for day in &analysis.days {
        match &day.error {
            Some(reason) => println!("{}  {:<12} failed: {reason}", day.date, day.weekday),
            None => println!(
                "{}  {:<12} {:>6.2}  {:<13} {}",
                day.date,
                day.weekday,
                day.score,
                day.quality.label(),
                day.theme
            ),
        }
    }

    let s = &analysis.summary;
    println!();
    println!(
        "Days: {} ({} valid, {} failed)",
        s.total_days, s.valid_days, s.failed_days
    );
    if let (Some(avg), Some(median)) = (s.average_score, s.median_score) {
        println!("Average {avg:.2}, median {median:.2}, trend {}", s.trend.label());
    }
    println!(
        "Excellent {}, Good {}, Average {}, Below Average {}, Poor {}",
        s.counts.excellent, s.counts.good, s.counts.average, s.counts.below_average, s.counts.poor
    );
    let ranked = |label: &str, days: &[jyotish_period::RankedDay]| {
        let list: Vec<String> = days
            .iter()
            .map(|d| format!("{} ({:.1})", d.date, d.score))
            .collect();
        println!("{label}: {}", list.join(", "));
    };
    ranked("Best", &s.best_days);
    ranked("Worst", &s.worst_days);

    let n = &analysis.narrative;
    println!();
    println!("{}", n.overall);
    println!("Career: {}", n.career);
    println!("Health: {}", n.health);
    println!("Relationships: {}", n.relationships);
    println!("Finances: {}", n.finances);
    for remedy in &n.remedies {
        println!("- {remedy}");
    }
}

fn parse_month(s: &str) -> Result<(i32, u32)> {
    let (year, month) = s
        .split_once('-')
        .with_context(|| format!("month must be YYYY-MM, got {s}"))?;
    Ok((
        year.parse().with_context(|| format!("bad year in {s}"))?,
        month.parse().with_context(|| format!("bad month in {s}"))?,
    ))
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;
    logging::init_tracing(&config.logging);
    debug!(config = ?cli.config, "starting");

    match cli.command {
        Commands::Lords { lon, depth } => {
            if depth == 4 {
                let chain = resolve_lord_chain(lon);
                if cli.json {
                    print_json(&chain)?;
                } else {
                    println!("{}  {}", format_dms(lon.rem_euclid(360.0)), chain_text(&chain));
                }
            } else {
                let lords = kp_lords(lon, depth);
                if cli.json {
                    print_json(&lords)?;
                } else {
                    let names: Vec<&str> = lords.iter().map(|g| g.name()).collect();
                    println!("{}", names.join(" / "));
                }
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            if cli.json {
                print_json(&info)?;
            } else {
                let dms = info.dms;
                println!(
                    "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                    info.rashi.name(),
                    info.rashi.western_name(),
                    dms.degrees,
                    dms.minutes,
                    dms.seconds,
                    info.degrees_in_rashi
                );
            }
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            if cli.json {
                print_json(&info)?;
            } else {
                println!(
                    "{} (index {}) - Pada {}, lord {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                    info.nakshatra.name(),
                    info.nakshatra_index,
                    info.pada,
                    info.lord.name(),
                    info.degrees_in_nakshatra,
                    info.degrees_in_pada
                );
            }
        }

        Commands::Instant {
            date,
            time,
            tz,
            strict,
        } => {
            let instant = if strict {
                jyotish_time::to_instant_strict(&date, &time, &tz)?
            } else {
                jyotish_time::to_instant(&date, &time, &tz)?
            };
            let vaar = vaar_from_weekday(instant.weekday_index());
            if cli.json {
                print_json(&serde_json::json!({
                    "jd_ut": instant.jd_ut(),
                    "utc": instant.to_utc()?,
                    "weekday_utc": vaar.name,
                }))?;
            } else {
                println!("JD (UT): {:.6}", instant.jd_ut());
                println!("UTC:     {}", instant.to_utc()?);
                println!("Weekday: {} (UTC)", vaar.name);
            }
        }

        Commands::Score {
            dasha,
            transit,
            tarabala,
            chandrabala,
            panchang,
            ghataka,
            muhurta,
        } => {
            let engine = ScoringEngine::from_config(&config.scoring)?;
            let day = engine.score_day(&ComponentScores {
                dasha,
                transit,
                tarabala,
                chandrabala,
                panchang,
                ghataka_penalty: ghataka,
                muhurta_bonus: muhurta,
            });
            if cli.json {
                print_json(&day)?;
            } else {
                for c in &day.components {
                    println!(
                        "{:<12} {:>8.2} x {:.2} = {:>8.3}",
                        c.name, c.value, c.weight, c.weighted_value
                    );
                }
                println!("Score: {:.2} ({})", day.score, day.quality.label());
                println!("{}", day.recommendation);
            }
        }

        Commands::Chart { birth, frame } => {
            apply_frame(&mut config, &frame);
            let (chart, _) = birth_chart(&birth, &config)?;
            if cli.json {
                print_json(&chart)?;
            } else {
                print_chart(&chart);
            }
        }

        Commands::Kp {
            birth,
            frame,
            whole_sign,
        } => {
            apply_kp_frame(&mut config, &frame);
            let (chart, local_date) = birth_chart(&birth, &config)?;
            let division = if whole_sign {
                HouseDivision::WholeSign
            } else {
                HouseDivision::QuadrantCusps
            };
            let kp = KpChart::from_chart(&chart, division);
            let weekday = local_date.weekday().num_days_from_sunday() as u8;
            if cli.json {
                print_json(&serde_json::json!({
                    "chart": kp,
                    "significators": resolve_significators(&kp),
                    "ruling_planets": ruling_planets(&chart, weekday),
                    "life_areas": life_area_readings(&kp),
                    "remedies": remedies(&kp),
                }))?;
            } else {
                print_kp(&chart, &kp, weekday);
            }
        }

        Commands::Period {
            birth,
            frame,
            from,
            to,
            month,
            sequential,
        } => {
            apply_frame(&mut config, &frame);
            config.validate()?;
            let ephemeris: Arc<dyn Ephemeris> = Arc::new(TableEphemeris::from_path(&birth.ephemeris)?);
            let details = BirthDetails {
                date: birth.date,
                time: birth.time,
                timezone: birth.tz,
                latitude: birth.lat,
                longitude: birth.lon,
            };
            let orchestrator = PeriodOrchestrator::from_config(ephemeris, &details, &config)
                .context("cannot set up period analysis")?;

            let (start, end) = match (month, from, to) {
                (Some(m), _, _) => {
                    let (year, month) = parse_month(&m)?;
                    jyotish_period::month_bounds(year, month)?
                }
                (None, Some(from), Some(to)) => (
                    jyotish_time::parse_date(&from)?,
                    jyotish_time::parse_date(&to)?,
                ),
                _ => bail!("give --month YYYY-MM, or both --from and --to"),
            };
            let analysis = if sequential {
                orchestrator.analyze_range_blocking(start, end)?
            } else {
                orchestrator.analyze_range(start, end).await?
            };
            if cli.json {
                print_json(&analysis)?;
            } else {
                print_period(&analysis);
            }
        }
    }

    Ok(())
}
