use clap::Parser;
use tutte_cli::Cli;

fn main() {
    let cli = Cli::parse();
    tutte_cli::init_logging(cli.verbose);

    match tutte_cli::run(&cli) {
        Ok(Some(polynomial)) => println!("{polynomial}"),
        Ok(None) => {}
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}
