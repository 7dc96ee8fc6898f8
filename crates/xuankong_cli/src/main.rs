use clap::{Parser, Subcommand};
use xuankong_chart::{
    CELL_NAMES, CalcMethod, ChartView, FlyStarData, compose_chart, configure_project,
    fly_star_sequence, mountain_facing_from_angle,
};
use xuankong_compass::{
    Mountain, Sector, annual_star_from_year, period_from_year, yuan_from_period,
};
use xuankong_rs::current_year;

#[derive(Parser)]
#[command(name = "xuankong", about = "Xuan Kong Fei Xing (flying star) CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mountain containing a compass bearing
    Mountain {
        /// Facing bearing in degrees (0 = north, clockwise)
        deg: f64,
    },
    /// Compass sector containing a bearing
    Sector {
        /// Facing bearing in degrees
        deg: f64,
    },
    /// Construction period and annual star for a CE year
    Period {
        /// CE year
        year: i32,
    },
    /// Flying-star sequence from a starting star
    Flystar {
        /// Starting star (1-9; other values wrap)
        start: i32,
        /// Fly the reverse walk
        #[arg(long)]
        reversed: bool,
    },
    /// Resolve a facing bearing against a construction period
    Facing {
        /// Facing bearing in degrees
        deg: f64,
        /// Construction period (1-9)
        #[arg(long)]
        period: u8,
        /// Calculation method tag
        #[arg(long, default_value = "shen_shi_45")]
        method: String,
    },
    /// Compose the full four-overlay chart for a facing
    Chart {
        /// Facing bearing in degrees
        #[arg(long)]
        facing: f64,
        /// Construction period (1-9); derived from the setup year if omitted
        #[arg(long)]
        period: Option<u8>,
        /// Calculation method tag
        #[arg(long, default_value = "shen_shi_45")]
        method: String,
        /// Year the project was set up (defaults to the display year)
        #[arg(long)]
        setup_year: Option<i32>,
        /// Year to display (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Emit JSON instead of grids
        #[arg(long)]
        json: bool,
    },
}

fn parse_method(s: &str) -> CalcMethod {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn check_period(period: u8) -> u8 {
    if !(1..=9).contains(&period) {
        eprintln!("Period must be 1-9, got {period}");
        std::process::exit(1);
    }
    period
}

fn print_grid(title: &str, seq: &[u8; 9]) {
    println!("{title}:");
    for row in seq.chunks(3) {
        println!("  {} {} {}", row[0], row[1], row[2]);
    }
}

fn print_chart(view: &ChartView) {
    println!("Display year: {}", view.display_year);
    let FlyStarData {
        blacks,
        reds,
        blues,
        purples,
    } = view.stars;
    print_grid("Period (blacks)", &blacks);
    print_grid("Water stars (reds)", &reds);
    print_grid("Mountain stars (blues)", &blues);
    print_grid("Annual stars (purples)", &purples);
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Mountain { deg } => {
            let m = Mountain::from_angle(deg);
            println!(
                "{} ({}) - index {}, center {:.1} deg, trigram {}, {:?} dragon, {:?}",
                m.label(),
                m.name(),
                m.index(),
                m.center_deg(),
                m.trigram().name(),
                m.dragon(),
                m.polarity()
            );
        }

        Commands::Sector { deg } => {
            let s = Sector::from_angle(deg);
            println!("{} - index {}, center {:.1} deg", s.abbrev(), s.index(), s.center_deg());
        }

        Commands::Period { year } => {
            let period = period_from_year(year);
            println!(
                "Period {} ({} yuan), annual star {}",
                period,
                yuan_from_period(period).name(),
                annual_star_from_year(year)
            );
        }

        Commands::Flystar { start, reversed } => {
            let seq = fly_star_sequence(start, reversed);
            print_grid(
                if reversed { "Reverse walk" } else { "Forward walk" },
                &seq,
            );
        }

        Commands::Facing { deg, period, method } => {
            let method = parse_method(&method);
            let r = mountain_facing_from_angle(deg, check_period(period), method);
            match r.sub_facing {
                Some(sub) => println!(
                    "Facing {} ({}) leaning {} ({})",
                    r.main_facing.label(),
                    r.main_facing.name(),
                    sub.label(),
                    sub.name()
                ),
                None => println!("Facing {} ({})", r.main_facing.label(), r.main_facing.name()),
            }
            println!(
                "Mountain star {} ({}), water star {} ({})",
                r.mountain_star,
                if r.mountain_reversed { "reversed" } else { "forward" },
                r.water_star,
                if r.water_reversed { "reversed" } else { "forward" },
            );
        }

        Commands::Chart {
            facing,
            period,
            method,
            setup_year,
            year,
            json,
        } => {
            let method = parse_method(&method);
            let view_year = year.unwrap_or_else(current_year);
            let setup = setup_year.unwrap_or(view_year);
            let period = check_period(period.unwrap_or_else(|| period_from_year(setup)));

            let mut config = configure_project(facing, period, method, setup);
            config.purples.offset = view_year - setup;
            let view = compose_chart(&config, view_year);

            if json {
                let facing_info = mountain_facing_from_angle(facing, period, method);
                let out = serde_json::json!({
                    "facing": {
                        "main": facing_info.main_facing.label(),
                        "sub": facing_info.sub_facing.map(|m| m.label()),
                        "mountain_star": facing_info.mountain_star,
                        "mountain_reversed": facing_info.mountain_reversed,
                        "water_star": facing_info.water_star,
                        "water_reversed": facing_info.water_reversed,
                    },
                    "period": period,
                    "method": method.tag(),
                    "cells": CELL_NAMES,
                    "chart": view,
                });
                println!("{}", serde_json::to_string_pretty(&out).unwrap_or_else(|e| {
                    eprintln!("Failed to encode chart: {e}");
                    std::process::exit(1);
                }));
            } else {
                print_chart(&view);
            }
        }
    }
}
