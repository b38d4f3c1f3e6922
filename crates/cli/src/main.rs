// mailrecon CLI - supplier/user email comparison

use std::path::Path;

use clap::Parser;

use mailrecon_cli::pipeline::{self, REPORT_FILE, SUPPLIER_FILE, USER_FILE};

/// Compare supplier contact emails against user account emails and write
/// a four-sheet Excel report plus a text summary.
#[derive(Parser)]
#[command(name = "mailrecon")]
#[command(about = "Reconcile supplier contact emails against user accounts")]
#[command(version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    match pipeline::run(
        Path::new(SUPPLIER_FILE),
        Path::new(USER_FILE),
        Path::new(REPORT_FILE),
    ) {
        Ok(report) => {
            println!("{report}");
            println!("\nReport has been saved to '{REPORT_FILE}'");
        }
        // Single display point; the run still exits with status 0
        Err(e) => println!("An error occurred: {e}"),
    }
}
