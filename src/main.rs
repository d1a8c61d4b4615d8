use env_logger::Env;

fn main() {
    // Load .env before the logger so RUST_LOG can come from it
    let dotenv_result = dotenvy::dotenv();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match dotenv_result {
        Ok(path) => log::debug!("loaded env from {}", path.display()),
        Err(err) => log::debug!("no .env loaded: {}", err),
    }

    pitchmail::app::cli::run();
}
