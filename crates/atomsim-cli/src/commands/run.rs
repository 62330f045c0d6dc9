use crate::cli::RunArgs;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use atomsim::engine::config::SimulationConfig;
use atomsim::engine::progress::ProgressReporter;
use atomsim::workflows;
use tracing::info;

pub fn run(args: RunArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            SimulationConfig::load(path)?
        }
        None => {
            info!("No configuration file given; using built-in defaults.");
            SimulationConfig::default()
        }
    };

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Starting simulation ({} steps)...", args.steps);
    let report = workflows::simulate::run(&config, args.steps, &reporter)?;

    println!(
        "Simulated {} particle(s) for {} step(s).",
        report.particle_count, report.steps
    );
    println!(
        "Final instantaneous temperature: {:.1} K (target {:.1} K)",
        report.final_temperature, config.setup.target_temperature
    );

    Ok(())
}
