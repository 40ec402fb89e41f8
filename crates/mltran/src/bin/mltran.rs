// ABOUTME: CLI binary for the mltran Multitran lookup client.
// ABOUTME: Looks up a phrase and pages or prints the text report, optionally as JSON.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitCode, Stdio};
use std::time::Instant;

use clap::Parser;
use mltran::{Client, Lang, LookupResult};

#[derive(Parser, Debug)]
#[command(name = "mltran")]
#[command(about = "Translate a phrase to/from a language with multitran")]
struct Args {
    /// Translation language: en, de, fr, it
    #[arg(short = 'l', long = "lang", default_value = "en")]
    lang: String,

    /// Output as JSON instead of the text report
    #[arg(long = "json")]
    json_output: bool,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print to stdout directly instead of piping through less
    #[arg(long = "no-pager")]
    no_pager: bool,

    /// Multitran endpoint to query (the service runs mirror hosts)
    #[arg(long = "base-url")]
    base_url: Option<String>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// Words of the phrase to look up
    #[arg(required = true)]
    words: Vec<String>,
}

fn format_output(result: &LookupResult, json_output: bool) -> String {
    if json_output {
        let mut s = serde_json::to_string_pretty(result).unwrap();
        s.push('\n');
        s
    } else {
        result.format_report()
    }
}

/// Pipe the report through `less`; fall back to plain stdout when the
/// pager cannot be spawned.
fn print_to_pager(message: &str) {
    match Command::new("less").stdin(Stdio::piped()).spawn() {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                let _ = stdin.write_all(message.as_bytes());
            }
            let _ = child.wait();
        }
        Err(_) => print!("{}", message),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let lang: Lang = match args.lang.parse() {
        Ok(lang) => lang,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    let mut builder = Client::builder().lang(lang);
    if let Some(ref base_url) = args.base_url {
        builder = builder.base_url(base_url);
    }
    let client = builder.build();

    let phrase = args.words.join(" ");
    let start = Instant::now();

    let result = match client.lookup(&phrase).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error looking up {:?}: {}", phrase, e);
            return ExitCode::from(1);
        }
    };

    let elapsed = start.elapsed();

    println!("url: {}", result.url);
    if result.is_empty() {
        eprintln!("no translations found for {:?}", phrase);
    }

    let output_str = format_output(&result, args.json_output);

    if let Some(ref output_path) = args.output {
        if let Err(e) = fs::write(output_path, &output_str) {
            eprintln!("error writing to {:?}: {}", output_path, e);
            return ExitCode::from(1);
        }
    } else if args.no_pager {
        print!("{}", output_str);
    } else {
        print_to_pager(&output_str);
    }

    if args.timing {
        eprintln!("elapsed: {}ms", elapsed.as_millis());
    }

    ExitCode::SUCCESS
}
