use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "DISCOGRAPHY_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "DISCOGRAPHY_STORAGE_BACKEND";
pub const DATABASE_URL_ENV: &str = "DISCOGRAPHY_DATABASE_URL";
pub const ASSETS_DIR_ENV: &str = "DISCOGRAPHY_ASSETS_DIR";
pub const IMPORT_PATH_ENV: &str = "DISCOGRAPHY_IMPORT_PATH";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://discography.db";
pub const DEFAULT_ASSETS_DIR: &str = "./assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "sqlite")]
    Sqlite,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Sqlite => write!(f, "sqlite"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "discography-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::Sqlite
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = DATABASE_URL_ENV, default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    #[arg(long, env = ASSETS_DIR_ENV, default_value = DEFAULT_ASSETS_DIR)]
    pub assets_dir: PathBuf,

    /// JSON catalog to load into the store before serving.
    #[arg(long = "import", env = IMPORT_PATH_ENV)]
    pub import_path: Option<PathBuf>,
}
