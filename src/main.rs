use clap::Parser;
use page_lens::{Error, Mode};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let locale = args.locale()?;
    let text = locale.operator_text();

    let url = match &args.url {
        Some(url) => url.clone(),
        None => prompt(text.url_prompt)?,
    };
    let analyzer = args.analyzer(&url)?;

    ::log::info!("Starting analysis of {}", url);
    let page = analyzer.fetch().await?;

    let selector = match &args.mode {
        Some(mode) => mode.clone(),
        None => {
            println!("{}", text.menu_heading);
            for line in Mode::menu(locale) {
                println!("{}", line);
            }
            prompt(text.selection_prompt)?
        }
    };
    let mode = Mode::from_selector(&selector);

    let outcome = analyzer.run(&page, &mode)?;
    println!("{}", outcome.message(locale));

    Ok(())
}

/// Prints `message` and reads one trimmed line from stdin
fn prompt(message: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", message)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
