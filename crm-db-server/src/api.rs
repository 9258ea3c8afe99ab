use std::path::Path;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use crm_db_api_schema::API_DB_PREFIX;
use crm_db_config_file::CrmDbConfigToml;
use crm_db_system_store::DbLocation;
use log::info;

use crate::args::Args;
use crate::state::ApiState;

use self::db::read::db_read;
use self::db::write::db_write;

pub mod db;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub db_location: DbLocation,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Command-line flags win over the config file, which wins over defaults.
    pub fn from_sources(args: &Args, file: &CrmDbConfigToml, home: &Path) -> Self {
        let default_location = DbLocation::from_home(home);
        let folder = args
            .db_folder
            .clone()
            .or_else(|| file.db_folder.clone())
            .unwrap_or(default_location.folder);
        let file_name = args
            .db_file_name
            .clone()
            .or_else(|| file.db_file_name.clone())
            .unwrap_or(default_location.file_name);

        Self {
            bind_address: args
                .bind
                .clone()
                .unwrap_or_else(|| file.bind_address().to_string()),
            port: args.port.unwrap_or_else(|| file.port()),
            db_location: DbLocation::new(folder, file_name),
            allowed_origins: file.allowed_origins(),
        }
    }
}

/// Mounts the database endpoint. Requests it does not claim fall through to
/// whatever the host app serves next.
///
/// Lifts the payload limit so writes of any size are buffered in full.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(usize::MAX))
        .service(db_read)
        .service(db_write);
}

fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins.iter().fold(
        Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allow_any_header(),
        |cors, origin| cors.allowed_origin(origin),
    )
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}

pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let state = ApiState::new(config.db_location.clone());

    info!(
        "serving {:?} on http://{}:{}{}",
        config.db_location.path(),
        config.bind_address,
        config.port,
        API_DB_PREFIX
    );

    let allowed_origins = config.allowed_origins.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(configure)
            .default_service(web::to(not_found))
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use actix_web::{http::StatusCode, test as actix_test};
    use tempfile::tempdir;

    use super::*;

    #[actix_web::test]
    async fn test_configure_accepts_large_body() {
        let home = tempdir().unwrap();
        let state = ApiState::new(DbLocation::from_home(home.path()));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure),
        )
        .await;

        // above actix-web's default 256 KiB payload limit
        let blob: Vec<u8> = (0..300 * 1024).map(|i| (i % 251) as u8).collect();
        let req = actix_test::TestRequest::post()
            .uri("/api/db")
            .set_payload(blob.clone())
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(std::fs::read(state.store.location().path()).unwrap(), blob);

        let req = actix_test::TestRequest::get().uri("/api/db").to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(&body[..], &blob[..]);
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_sources(
            &Args::default(),
            &CrmDbConfigToml::default(),
            Path::new("/home/alice"),
        );
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.port, 8513);
        assert_eq!(
            config.db_location.path(),
            PathBuf::from("/home/alice/Desktop/CRM Data/database.db")
        );
        assert_eq!(config.allowed_origins, vec!["http://localhost:5173"]);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = CrmDbConfigToml {
            bind_address: Some("0.0.0.0".to_string()),
            port: Some(9000),
            db_folder: Some(PathBuf::from("/srv/crm")),
            db_file_name: None,
            allowed_origins: Some(vec![]),
        };
        let config = ServerConfig::from_sources(&Args::default(), &file, Path::new("/home/alice"));
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.db_location.path(),
            PathBuf::from("/srv/crm/database.db")
        );
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn test_args_override_file() {
        let file = CrmDbConfigToml {
            port: Some(9000),
            db_folder: Some(PathBuf::from("/srv/crm")),
            db_file_name: Some("crm.db".to_string()),
            ..Default::default()
        };
        let args = Args {
            port: Some(9100),
            db_folder: Some(PathBuf::from("/tmp/crm")),
            ..Default::default()
        };
        let config = ServerConfig::from_sources(&args, &file, Path::new("/home/alice"));
        assert_eq!(config.port, 9100);
        assert_eq!(config.db_location.path(), PathBuf::from("/tmp/crm/crm.db"));
    }
}
