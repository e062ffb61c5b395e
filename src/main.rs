//! Entry point for the Localator binary.
//!
//! Running this binary starts an HTTP server exposing the earnings
//! calculator.  A JSON file overriding the default viability
//! thresholds may be specified via the `LOCALATOR_POLICY_FILE`
//! environment variable; if unset the built-in 0.75/1.25 policy is
//! used.  The bind address comes from `LOCALATOR_BIND_ADDR` and
//! defaults to `127.0.0.1:3000`.

use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let policy_file = std::env::var("LOCALATOR_POLICY_FILE")
        .ok()
        .map(PathBuf::from);
    let addr =
        std::env::var("LOCALATOR_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    if let Err(err) = localator::api::serve(&addr, policy_file).await {
        eprintln!("Error running server: {}", err);
        std::process::exit(1);
    }
}
