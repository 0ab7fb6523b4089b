use std::{fs, process::ExitCode, time::Duration};

use clap::Parser;
use shunt::{
    error::Error,
    report::{
        Reporter,
        webhook::{WebhookCollector, public_ip},
    },
    session::{Entry, Observer, Session},
};

/// shunt evaluates arithmetic expressions such as `-3 + sqrt(16) * 2^2`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunt to read expressions, one per line, from a file instead of
    /// evaluating CONTENTS directly. Blank lines and lines starting with `#`
    /// are skipped.
    #[arg(short, long)]
    file: bool,

    /// Free-text description recorded with each expression.
    #[arg(short, long, default_value = "")]
    description: String,

    /// Prints every outcome as a JSON line instead of plain text.
    #[arg(short, long)]
    json: bool,

    /// Webhook URL that receives every successful result as JSON.
    #[arg(short, long, env = "SHUNT_WEBHOOK")]
    webhook: Option<String>,

    /// Seconds before webhook and IP lookup requests give up.
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// The expression to evaluate, or the file to read with `--file`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

/// Writes outcomes to the terminal.
struct Printer {
    json: bool,
    echo: bool,
}

impl Printer {
    fn print_json(entry: &Entry) {
        match serde_json::to_string(entry) {
            Ok(line) => println!("{line}"),
            Err(e) => log::error!("could not serialize {:?}: {e}", entry.expression),
        }
    }
}

impl Observer for Printer {
    fn on_success(&mut self, entry: &Entry, result: f64) {
        if self.json {
            Self::print_json(entry);
        } else if self.echo {
            println!("{} = {result}", entry.expression);
        } else {
            println!("{result}");
        }
    }

    fn on_failure(&mut self, entry: &Entry, error: &Error) {
        if self.json {
            Self::print_json(entry);
        } else {
            match error {
                Error::Lex(e) => {
                    eprintln!("{}: {}: {e} at byte {}", entry.expression, error.kind(), e.offset());
                },
                _ => eprintln!("{}: {}: {error}", entry.expression, error.kind()),
            }
        }
    }
}

fn reporter(url: String, timeout: Duration) -> Option<Reporter> {
    let started = WebhookCollector::new(url, timeout).and_then(|collector| {
                      let ip = public_ip(collector.client());
                      log::debug!("reporting to {} as {ip}", collector.url());
                      Reporter::new(collector, ip)
                  });
    match started {
        Ok(reporter) => Some(reporter),
        Err(e) => {
            log::warn!("webhook disabled: {e}");
            None
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let expressions: Vec<String> = if args.file {
        let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        });
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty() && !line.starts_with('#'))
              .map(str::to_string)
              .collect()
    } else {
        vec![args.contents.clone()]
    };

    let mut session = Session::new();
    session.subscribe(Box::new(Printer { json: args.json,
                                         echo: args.file, }));
    if let Some(url) = args.webhook
       && let Some(reporter) = reporter(url, Duration::from_secs(args.timeout))
    {
        session.subscribe(Box::new(reporter));
    }

    for expression in &expressions {
        // Outcomes are printed by the observers.
        let _ = session.submit(&args.description, expression);
    }

    if session.history().all(Entry::is_success) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
