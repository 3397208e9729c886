use pokerhand_cli::{config, logging, run};

fn main() {
    let level = config::load()
        .map(|cfg| cfg.log_level)
        .unwrap_or_else(|_| "warn".to_string());
    logging::init_logging(&level);

    let code = run(std::env::args(), &mut std::io::stdout(), &mut std::io::stderr());
    std::process::exit(code);
}
