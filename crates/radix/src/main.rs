mod batch;
mod cli;
mod convert;
mod factor;
mod input;
mod models;
mod parse;
mod reverse;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(err) = cli::execute().await {
        eprintln!("{}: {err:#}", ansi_term::Color::Red.bold().paint("error"));
        std::process::exit(models::exit_code(&err));
    }
}
