use eyre::Result;
use eznm::{CommandOutput, Renderer, Status, Theme, TuiApp};

const ABORTED_EXIT_CODE: i32 = 130;

fn main() -> Result<()> {
    let args = eznm::cli::parse();

    // Initialize logging first
    if let Err(e) = eznm::init_logging(args.verbose) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    log::info!("================================================================================");
    log::info!("NEW WIZARD SESSION STARTING binary={} json={}", args.binary, args.json);
    log::info!("================================================================================");

    let renderer = Renderer::new(Theme::from_color_flag(!args.no_color), args.binary.clone());
    let app = TuiApp::new(renderer);

    let mut terminal = eznm::init_terminal()?;
    let result = app.run(&mut terminal);
    eznm::restore_terminal(&mut terminal)?;
    let wizard = result?;

    match wizard.status() {
        Status::Submitted(tokens) => {
            let output = CommandOutput::new(&args.binary, tokens, wizard.config());
            log::info!("[main] command_ready: {}", output.command);

            if args.json {
                println!("{}", output.to_json()?);
            } else {
                println!("{}", output.command);
            }
            Ok(())
        }
        Status::Aborted => {
            log::info!("[main] aborted: no command produced");
            eprintln!("Aborted, no command generated.");
            std::process::exit(ABORTED_EXIT_CODE);
        }
        Status::Editing => {
            eyre::bail!("form closed before it was submitted");
        }
    }
}
