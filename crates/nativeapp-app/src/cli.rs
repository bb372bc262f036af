use clap::Parser;

/// NativeApp: a native window hosting a web page over a message bridge.
#[derive(Parser, Debug)]
#[command(name = "nativeapp-demo", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error, or a full filter).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Page to load instead of `webview.start_page`.
    #[arg(long)]
    pub page: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
