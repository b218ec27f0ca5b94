use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;

use xmarker::{Config, Document, Fetcher, Target};

#[derive(Parser)]
#[command(name = "xmarker")]
#[command(about = "Convert Markdown files to HTML")]
struct Cli {
    /// Input Markdown file, http(s) URL, or `-` for stdin
    input: String,

    /// Output HTML file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to the built-in config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wrap the output in a complete HTML page
    #[arg(long)]
    standalone: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    // Load config
    let mut config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::compiled_default(),
    };
    if cli.standalone {
        config.output.standalone = true;
    }

    let mut document = Document::with_root_id(&config.output.root_id);
    let target = Target::Id(config.output.root_id.clone());

    // Read and convert input
    let html = if cli.input == "-" {
        let mut markdown = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut markdown) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        if let Err(e) = xmarker::parse_into(&mut document, &markdown, target) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        xmarker::render(&document, document.root(), &config.output)
    } else {
        let fetcher = match Fetcher::new(&config.fetch) {
            Ok(fetcher) => fetcher,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };

        let mut rendered = None;
        let on_parsed = |doc: &mut Document| {
            rendered = Some(xmarker::render(doc, doc.root(), &config.output));
        };

        match fetcher
            .fetch_and_parse_then(&cli.input, &mut document, target, on_parsed)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                eprintln!("Error: could not retrieve {}", cli.input);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }

        rendered.unwrap_or_default()
    };

    // Write HTML
    match &cli.output {
        Some(output) => {
            if let Err(e) = fs::write(output, html) {
                eprintln!("Error writing {}: {}", output.display(), e);
                std::process::exit(1);
            }
            println!("Created {}", output.display());
        }
        None => print!("{}", html),
    }
}
