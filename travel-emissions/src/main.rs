use clap::Parser;
use travel_emissions::app::TravelEmissionsArguments;

fn main() {
    env_logger::init();
    log::info!("starting app at {}", chrono::Local::now().to_rfc3339());
    let args = TravelEmissionsArguments::parse();
    match args.run() {
        Ok(output) => {
            println!("{output}");
            log::info!("finished.");
        }
        Err(e) => {
            log::error!("failed running travel_emissions: {e}");
            std::process::exit(1);
        }
    }
}
