use anyhow::{Context, Result};
use cw_client::RelayClient;

use crate::cli::Cli;

/// Pushes the local clipboard (or the explicitly given text) to the relay
/// and echoes the server's confirmation to stderr.
pub async fn copy(cli: &Cli, clipboard: Option<String>) -> Result<()> {
    let text =
        cw_platform::fetch_clipboard(clipboard).context("could not read the local clipboard")?;
    let client = RelayClient::new(&cli.server_address, &cli.password);
    let confirmation = client.copy(&text).await?;
    if !confirmation.trim().is_empty() {
        eprintln!("{}", confirmation);
    }
    Ok(())
}

/// Pulls the relay clipboard into the local one. Blank content is
/// reported, not written.
pub async fn paste(cli: &Cli) -> Result<()> {
    let client = RelayClient::new(&cli.server_address, &cli.password);
    let text = client.paste().await?;
    if text.trim().is_empty() {
        eprintln!("server returned empty clipboard");
        return Ok(());
    }
    match cw_platform::set_clipboard(&text) {
        Ok(()) => {
            eprintln!("pasted into local clipboard");
            Ok(())
        }
        Err(err) => {
            // keep the text reachable even though the local write failed
            println!("{}", text);
            Err(err)
        }
    }
}
