//! Command-line entry point.
//!
//! Reads a descriptor file, simulates it, writes the transition log and
//! reports summary metrics through the logger (`RUST_LOG` controls the level).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use kernel_sim::engine::{Simulation, SimulationKpi};
use kernel_sim::io::{load_records_from_path, FileLogSink, MemorySink, TeeSink};
use kernel_sim::SimError;

#[derive(Debug, Parser)]
#[command(name = "kernel-sim", version, about = "Single-CPU process lifecycle simulator")]
struct Cli {
    /// Process descriptor file (one header line, then pid,arrival,cpu,io_freq,io_dur)
    #[arg(default_value = "test_case_1.csv")]
    input: PathBuf,
    /// Transition log to create
    #[arg(default_value = "output_1.txt")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SimError> {
    let records = load_records_from_path(&cli.input)?;
    if records.is_empty() {
        // Nothing to simulate; leave any existing log untouched
        return Err(SimError::EmptyWorkload);
    }

    let mut sim = Simulation::new(records)?;
    let log = FileLogSink::create(&cli.output).map_err(SimError::SinkUnavailable)?;
    let mut sink = TeeSink::new(log, MemorySink::new());
    let outcome = sim.run(&mut sink)?;

    info!(
        "wrote {} transition(s) to {}",
        outcome.transitions - outcome.dropped_writes,
        cli.output.display()
    );

    let kpi = SimulationKpi::calculate(sim.records(), sink.secondary.transitions());
    info!(
        "makespan={} cpu_utilization={:.1}% avg_turnaround={:.2} avg_ready_wait={:.2}",
        kpi.makespan,
        kpi.cpu_utilization * 100.0,
        kpi.avg_turnaround,
        kpi.avg_ready_wait
    );
    for p in &kpi.processes {
        info!(
            "pid={} arrival={} completion={} turnaround={} ready_wait={} io_blocks={}",
            p.pid,
            p.arrival_time,
            p.completion_time.map_or_else(|| "-".to_string(), |t| t.to_string()),
            p.turnaround.map_or_else(|| "-".to_string(), |t| t.to_string()),
            p.ready_wait,
            p.io_blocks
        );
    }
    Ok(())
}
