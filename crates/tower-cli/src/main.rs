//! Command-line driver: populate the stock tower, run simulated time, and
//! print an hourly activity report (or the final snapshot as JSON).

use clap::Parser;
use tower_building::load_building;
use tower_core::WallClock;
use tower_population::ResidentFactory;
use tower_sim::{SimConfig, Simulation, StateSnapshot};

#[derive(Debug, Parser)]
#[command(name = "towerlife", about = "Simulate a day of life in a residential high-rise")]
struct Args {
    /// Seed for population and schedule generation.
    #[arg(long, default_value_t = 2024)]
    seed: u64,
    /// How many simulated hours to run.
    #[arg(long, default_value_t = 24)]
    hours: u32,
    /// Simulated minutes per tick.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=60))]
    tick_minutes: u32,
    /// Print the final state snapshot as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut building = load_building();
    let residents = ResidentFactory::new(args.seed).populate(&mut building);
    let resident_count = residents.len();
    let unit_count = building.units().len();

    let config = SimConfig { start: WallClock::default(), tick_minutes: args.tick_minutes };
    let mut sim = Simulation::with_config(building, residents, config)?;

    if !args.json {
        println!("Populated {resident_count} residents across {unit_count} units.");
        println!("Advancing {} simulated hours...\n", args.hours);
    }

    let ticks_per_hour = 60 / args.tick_minutes;
    let total_ticks = ticks_per_hour * args.hours;
    for tick in 0..total_ticks {
        sim.step();
        if !args.json && (tick + 1) % ticks_per_hour == 0 {
            print_hourly_line(&sim.state_snapshot());
        }
    }

    let state = sim.state_snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!("\nTop amenities this tick:");
    let mut busiest: Vec<(&String, &usize)> = state.amenity_load.iter().collect();
    busiest.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
    for (name, load) in busiest.into_iter().take(3) {
        println!("  - {name}: {load} people");
    }

    println!("\nRecent events:");
    let recent = state.events.iter().rev().take(5).collect::<Vec<_>>();
    for event in recent.into_iter().rev() {
        println!(
            "  {} | {} -> {} ({})",
            event.timestamp, event.resident_name, event.description, event.location
        );
    }

    Ok(())
}

fn print_hourly_line(state: &StateSnapshot) {
    let count = |name: &str| state.activity_breakdown.get(name).copied().unwrap_or(0);
    println!(
        "[{}] Work: {:3} | Amenities: {:3} | Leisure: {:3} | Outside: {}",
        state.clock,
        count("work"),
        count("amenity"),
        count("leisure"),
        count("commute") + count("away"),
    );
}
