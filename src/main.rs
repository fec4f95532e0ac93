use std::error::Error;
use subnet_calc::shell;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    // Logging stays off when no log4rs.yml sits in the working directory;
    // one-shot mode may run from anywhere.
    let _ = log4rs::init_file("log4rs.yml", Default::default());
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        shell::run()
    } else {
        shell::run_once(&args)
    }
}
