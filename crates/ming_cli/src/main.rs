use clap::{Parser, Subcommand};
use ming_base::{EarthlyBranch, star_info};
use ming_chart::{
    HashPlacement, PillarSlot, ScoreWeights, five_element_distribution, four_pillars, palace_chart,
};
use ming_text::{interpret_pillar, interpret_star_in_palace};
use ming_time::{LocalMoment, SolarConfig, TimeError, parse_date, parse_longitude, parse_time};

#[derive(Parser)]
#[command(name = "ming", about = "Ming chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// BaZi four pillars from a birth date and clock time
    Bazi {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth clock time (HH:MM)
        #[arg(long)]
        time: String,
        /// Birth longitude in degrees east (default 120)
        #[arg(long, default_value = "120")]
        longitude: String,
    },
    /// Ranked five-element distribution of the chart
    Elements {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth clock time (HH:MM)
        #[arg(long)]
        time: String,
        /// Birth longitude in degrees east (default 120)
        #[arg(long, default_value = "120")]
        longitude: String,
    },
    /// Twelve-palace Zi Wei layout with stars and decade windows
    Palaces {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth clock time (HH:MM)
        #[arg(long)]
        time: String,
    },
    /// Cyclic Earthly Branch of a year
    AnnualBranch {
        /// CE year
        year: i32,
    },
    /// Star-in-palace interpretation
    Star {
        /// Star name (e.g. 紫微)
        star: String,
        /// Palace name (e.g. 命宮)
        palace: String,
    },
    /// Pillar commentary for the computed chart
    Pillar {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth clock time (HH:MM)
        #[arg(long)]
        time: String,
        /// Birth longitude in degrees east (default 120)
        #[arg(long, default_value = "120")]
        longitude: String,
        /// Pillar slot: year, month, day or hour
        #[arg(long)]
        slot: String,
    },
}

fn parse_moment(date: &str, time: &str) -> Result<LocalMoment, TimeError> {
    let (year, month, day) = parse_date(date)?;
    let (hour, minute) = parse_time(time)?;
    Ok(LocalMoment {
        year,
        month,
        day,
        hour,
        minute,
    })
}

fn require_moment(date: &str, time: &str) -> LocalMoment {
    match parse_moment(date, time) {
        Ok(moment) => moment,
        Err(e) => {
            eprintln!("Invalid birth moment: {e}");
            std::process::exit(1);
        }
    }
}

fn require_slot(slot: &str) -> PillarSlot {
    match slot {
        "year" => PillarSlot::Year,
        "month" => PillarSlot::Month,
        "day" => PillarSlot::Day,
        "hour" => PillarSlot::Hour,
        _ => {
            eprintln!("Invalid slot: {slot}. Use year, month, day or hour.");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bazi {
            date,
            time,
            longitude,
        } => {
            let moment = require_moment(&date, &time);
            let lon = parse_longitude(&longitude);
            let chart = four_pillars(&moment, lon, &SolarConfig::default());
            println!("True solar time: {}", chart.solar_time_string());
            for (slot, pillar) in chart.pillars() {
                println!(
                    "{} {} ({}) - {}",
                    slot.label(),
                    pillar.name(),
                    slot.marker(),
                    slot.title()
                );
            }
        }

        Commands::Elements {
            date,
            time,
            longitude,
        } => {
            let moment = require_moment(&date, &time);
            let lon = parse_longitude(&longitude);
            let chart = four_pillars(&moment, lon, &SolarConfig::default());
            let scores = five_element_distribution(&chart, &ScoreWeights::default());
            for entry in scores {
                println!(
                    "{} {:.1} ({}%)",
                    entry.element.name(),
                    entry.score,
                    entry.percent
                );
            }
        }

        Commands::Palaces { date, time } => {
            let moment = require_moment(&date, &time);
            let palaces = palace_chart(
                moment.year,
                moment.month,
                moment.day,
                moment.hour,
                &HashPlacement,
            );
            for palace in &palaces {
                let major: Vec<&str> = palace.major_stars.iter().map(|s| s.name()).collect();
                let minor: Vec<&str> = palace.minor_stars.iter().map(|s| s.name()).collect();
                println!(
                    "{}{} {} [{}] ({}) 大限 {}",
                    palace.stem.name(),
                    palace.branch.name(),
                    palace.role.name(),
                    major.join(" "),
                    minor.join(" "),
                    palace.age_range()
                );
            }
        }

        Commands::AnnualBranch { year } => {
            let idx = ming_chart::annual_branch_index(year);
            let branch = EarthlyBranch::from_index(idx as i64);
            println!("{} - {} ({})", idx, branch.name(), branch.animal());
        }

        Commands::Star { star, palace } => {
            if let Some(info) = star_info(&star) {
                println!("{}星 五行屬{}", star, info.element);
            }
            println!("{}", interpret_star_in_palace(&star, &palace));
        }

        Commands::Pillar {
            date,
            time,
            longitude,
            slot,
        } => {
            let moment = require_moment(&date, &time);
            let lon = parse_longitude(&longitude);
            let slot = require_slot(&slot);
            let chart = four_pillars(&moment, lon, &SolarConfig::default());
            let pillar = chart.pillar(slot);
            println!("{} {}", slot.label(), pillar.name());
            println!("{}", interpret_pillar(&pillar, slot));
        }
    }
}
