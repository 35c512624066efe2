use crate::scenario::Scenario;
use crate::scheduler::Scheduler;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tabled::settings::Style;

mod plane;
mod scenario;
mod scheduler;
mod time;

#[derive(Parser)]
struct Args {
    /// Path to the JSON scenario file
    #[arg(short, long, value_name = "FILE", default_value = "data/default.json")]
    scenario: PathBuf,
    /// Print bare "landing gate-departure" pairs instead of a table
    #[arg(short, long)]
    plain: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let scenario = Scenario::load_from_file(args.scenario.to_str().unwrap())?;
    let count = scenario.planes.len();

    let mut scheduler = Scheduler::new(scenario.capacities);
    let arrangements = scheduler.schedule_batch(scenario.planes);

    if args.plain {
        for a in &arrangements {
            println!("{} {}", a.landing_time, a.gate_departure_time);
        }
    } else {
        println!(
            "Tower online. Loaded {} plane requests from {}",
            count,
            args.scenario.display()
        );
        let mut table = tabled::Table::new(&arrangements);
        table.with(Style::rounded());
        table.with(tabled::settings::Alignment::left());
        println!("{}", table);
        println!("{}", format!("Arranged {} planes.", arrangements.len()).green());
    }
    Ok(())
}
