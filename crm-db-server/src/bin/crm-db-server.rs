use clap::Parser;
use crm_db_config_file::CrmDbConfigToml;
use crm_db_server::api::{run_server, ServerConfig};
use crm_db_server::args::Args;
use crm_db_system_store::home_dir_from_env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let file_config = match &args.config {
        Some(path) => CrmDbConfigToml::load(path)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?,
        None => CrmDbConfigToml::default(),
    };
    let config = ServerConfig::from_sources(&args, &file_config, &home_dir_from_env());
    run_server(config).await
}
