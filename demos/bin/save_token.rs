//! Persist the IBM Quantum credential token for the hardware demos.
//!
//! The token comes from your account page at <https://quantum.ibm.com>.
//! Once saved, `demo-search-ibm` picks it up automatically; the
//! `LEITA_IBM_TOKEN` environment variable still takes precedence.

use anyhow::bail;
use clap::Parser;

use leita_demos::{init_tracing, print_info, print_success};
use leita_hal::StoredTokenProvider;

#[derive(Parser, Debug)]
#[command(name = "save-token")]
#[command(about = "Save the IBM Quantum API token for hardware runs")]
struct Args {
    /// The API token to save
    token: Option<String>,

    /// Remove the saved token instead
    #[arg(long)]
    forget: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let provider = StoredTokenProvider::new()?;

    if args.forget {
        provider.forget()?;
        print_success(&format!("removed {}", provider.path().display()));
        return Ok(());
    }

    let Some(token) = args.token else {
        bail!("pass the API token as an argument, or --forget to remove the saved one");
    };

    provider.save(&token)?;
    print_success(&format!("token saved to {}", provider.path().display()));
    print_info("demo-search-ibm will use it when LEITA_IBM_TOKEN is unset");

    Ok(())
}
