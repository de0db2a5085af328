use clap::Parser;
use trainplan::application::GenerateReportsService;
use trainplan::cli::{format_check_result, format_written_reports, Cli};
use trainplan::error::PlanError;
use trainplan::infrastructure::{Config, ConfigOverrides};
use trainplan::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PlanError> {
    let overrides = ConfigOverrides {
        output_dir: cli.output_dir,
        summary_file: cli.summary,
        detail_file: cli.detail,
        html_file: cli.html,
    };
    let config = Config::resolve(cli.config.as_deref(), overrides)?;
    let service = GenerateReportsService::new(config);

    if cli.check {
        let plan = service.check(&cli.input)?;
        println!("{}", format_check_result(&plan));
    } else {
        let written = service.execute(&cli.input)?;
        print!("{}", format_written_reports(&written));
    }

    Ok(())
}
