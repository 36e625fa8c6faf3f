//! transit-catalogue — build a routing snapshot, then answer queries from it.
//!
//! ```text
//! transit-catalogue build < base.json     # ingest, compile, write snapshot
//! transit-catalogue build --deadline-secs 30 < base.json
//! transit-catalogue serve < stats.json    # load snapshot, print responses
//! ```
//!
//! Both modes read one JSON document (see [`requests`]) from stdin, or from
//! `--input`.  `serve` prints a JSON array of responses on stdout; logs go to
//! stderr.

mod handler;
mod logger;
mod requests;
mod responses;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use requests::RequestDocument;

#[derive(Parser, Debug)]
#[command(name = "transit-catalogue", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Ingest base requests, compile the router and write the snapshot
    #[command(alias = "make_base")]
    Build {
        /// Request document; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Abort when the all-pairs table is not finished within this many seconds
        #[arg(long)]
        deadline_secs: Option<u64>,
    },
    /// Load the snapshot and answer stat requests
    #[command(alias = "process_requests")]
    Serve {
        /// Request document; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger();

    match args.mode {
        Mode::Build { input, deadline_secs } => {
            build(read_document(input)?, deadline_secs.map(Duration::from_secs))
        }
        Mode::Serve { input } => serve(read_document(input)?),
    }
}

fn read_document(input: Option<PathBuf>) -> Result<RequestDocument> {
    let reader: Box<dyn Read> = match &input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    serde_json::from_reader(reader).context("parsing request document")
}

fn build(doc: RequestDocument, deadline: Option<Duration>) -> Result<()> {
    let started = Instant::now();
    let settings = doc.routing_settings.validate().context("routing settings")?;
    let catalogue = handler::ingest(&doc.base_requests)?;
    let router = handler::compile(&catalogue, settings, deadline)?;

    let path = &doc.serialization_settings.file;
    tc_snapshot::save(path, &catalogue, &doc.render_settings, &router)
        .with_context(|| format!("writing snapshot {}", path.display()))?;

    info!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "build finished"
    );
    Ok(())
}

fn serve(doc: RequestDocument) -> Result<()> {
    let path = &doc.serialization_settings.file;
    let snapshot = tc_snapshot::load(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;

    let responses = handler::answer(&snapshot, &doc.stat_requests);
    let mut out = BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut out, &responses).context("writing responses")?;
    writeln!(out)?;
    out.flush()?;

    info!(requests = responses.len(), "serve finished");
    Ok(())
}
