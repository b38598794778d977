use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "clipwire", version)]
#[command(about = "Share a clipboard between machines through a password-protected relay")]
pub struct Cli {
    /// Port the relay listens on
    #[arg(short, long, default_value_t = 5025, env = "CLIPBOARD_PORT")]
    pub port: u16,

    /// Shared secret every copy/paste request must carry
    #[arg(long, env = "CLIPBOARD_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Relay address the copy/paste commands talk to
    #[arg(
        long,
        default_value = "http://localhost:5025",
        env = "CLIPBOARD_ADDRESS"
    )]
    pub server_address: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the relay server
    #[command(visible_alias = "s")]
    Server {
        /// Verbose logging
        #[arg(short, long)]
        debug: bool,

        /// Clear the clipboard this many seconds after the last write
        /// (zero disables expiry)
        #[arg(long, default_value_t = 0, env = "CLIPBOARD_CLEAR_AFTER")]
        clear_after: i64,
    },
    /// Push the local clipboard to the relay
    #[command(visible_alias = "c")]
    Copy {
        /// Text to push instead of reading the local clipboard
        #[arg(long, env = "CLIPBOARD_CONTENTS")]
        clipboard: Option<String>,
    },
    /// Pull the relay clipboard into the local one
    #[command(visible_alias = "p")]
    Paste,
}
