use clap::Parser;
use foodsense_core::domain::common::{FoodsenseConfig, LlmConfig, ProductDbConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodsense-api", about = "foodsense backend API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub product_db: ProductDbArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api".
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma-separated CORS origins; "*" allows any origin.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "*")]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Missing credential is a warning at startup, not a fatal error;
    /// analysis calls will fail until it is provided.
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_TIMEOUT_SECS", default_value_t = 30)]
    pub gemini_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ProductDbArgs {
    #[arg(
        long,
        env = "PRODUCT_DB_URL",
        default_value = "https://world.openfoodfacts.org"
    )]
    pub product_db_url: String,

    #[arg(long, env = "PRODUCT_DB_TIMEOUT_SECS", default_value_t = 10)]
    pub product_db_timeout_secs: u64,
}

impl From<Args> for FoodsenseConfig {
    fn from(args: Args) -> Self {
        FoodsenseConfig {
            llm: LlmConfig {
                gemini_api_key: args.llm.gemini_api_key.unwrap_or_default(),
                gemini_model: args.llm.gemini_model,
                request_timeout_secs: args.llm.gemini_timeout_secs,
            },
            product_db: ProductDbConfig {
                base_url: args.product_db.product_db_url,
                request_timeout_secs: args.product_db.product_db_timeout_secs,
            },
        }
    }
}
