use crate::quote::client::DEFAULT_API_URL;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "CLI tool to get cryptocurrency prices")]
pub struct Config {
    /// Cryptocurrency symbol to search for
    pub symbol: Option<String>,

    /// Base URL of the CoinGecko API
    #[arg(long, env = "COINGECKO_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// CoinGecko demo API key, sent as `x-cg-demo-api-key` when set
    #[arg(long, env = "COINGECKO_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,
}
