use clap::Parser;
use clap::ValueEnum;

#[derive(Clone, Parser, Debug, Default)]
#[command(name = "feed-api")]
#[command(about = "Social Feed API Server", long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub store: StoreConfig,

    #[command(flatten)]
    pub server: ServerConfig,

    #[arg(
        long = "environment",
        env = "ENVIRONMENT",
        default_value = "development"
    )]
    pub environment: Environment,
}

#[derive(Clone, Parser, Debug, Default)]
pub struct StoreConfig {
    #[arg(
        long = "mongo-uri",
        env = "MONGO_URI",
        default_value = "mongodb://localhost:27017"
    )]
    pub uri: String,

    #[arg(
        long = "mongo-database",
        env = "MONGO_DATABASE",
        default_value = "social_feed"
    )]
    pub database: String,
}

#[derive(Clone, Parser, Debug, Default)]
pub struct ServerConfig {
    #[arg(long = "server-api-port", env = "API_PORT", default_value = "8080")]
    pub api_port: u16,

    #[arg(
        long = "cors-origin",
        env = "CORS_ORIGIN",
        default_value = "http://localhost:3000"
    )]
    pub cors_origin: String,
}

#[derive(Clone, Debug, ValueEnum, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}
