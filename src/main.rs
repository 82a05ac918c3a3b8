use chat_notebook::{ConvertOptions, convert};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert a ChatGPT conversation export into a Jupyter notebook.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Conversation export (JSON)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Notebook to write (.ipynb)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Node id traversal starts from
    #[arg(long, value_name = "ID", default_value = chat_notebook::config::DEFAULT_ROOT_ID)]
    root_id: String,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Enable logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let options = ConvertOptions {
        root_id: args.root_id,
    };

    match convert(&args.input, &args.output, &options) {
        Ok(_) => {
            println!("Notebook saved to {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
