use clap::Parser;

/// 16 MiB, the largest statement the parsing service accepts.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Parser, Debug, Clone)]
#[command(name = "statement-viewer", about = "Upload a card statement and view the parsed summary")]
pub struct AppConfig {
    /// Base URL of the statement parsing service
    #[clap(long, env, default_value = "http://127.0.0.1:5000")]
    pub parser_url: String,

    #[clap(long, env, default_value = "0.0.0.0:3000")]
    pub bind_addr: String,

    /// Largest accepted upload body, in bytes
    #[clap(long, env, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,
}
