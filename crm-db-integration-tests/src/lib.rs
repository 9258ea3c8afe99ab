use std::time::Duration;

use crm_db_api_client::CrmDbApiClient;
use crm_db_server::api::{run_server, ServerConfig};
use crm_db_system_store::DbLocation;
use tempfile::{tempdir, TempDir};

/// A server bound to `127.0.0.1:<port>` with its database under a fresh
/// temporary home directory. The server thread lives until the test process
/// exits, so every test needs its own port.
pub struct TestServer {
    pub base_url: String,
    pub client: CrmDbApiClient,
    pub location: DbLocation,
    _home: TempDir,
}

impl TestServer {
    pub fn spawn(port: u16) -> Self {
        let home = tempdir().unwrap();
        let location = DbLocation::from_home(home.path());
        let config = ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            port,
            db_location: location.clone(),
            allowed_origins: vec![],
        };

        std::thread::spawn(move || {
            actix_web::rt::System::new()
                .block_on(run_server(config))
                .unwrap();
        });

        let base_url = format!("http://127.0.0.1:{}", port);
        wait_until_listening(&base_url);

        Self {
            client: CrmDbApiClient::new(base_url.clone()),
            base_url,
            location,
            _home: home,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn wait_until_listening(base_url: &str) {
    for _ in 0..100 {
        match ureq::get(base_url).call() {
            Ok(_) | Err(ureq::Error::Status(_, _)) => return,
            Err(ureq::Error::Transport(_)) => std::thread::sleep(Duration::from_millis(50)),
        }
    }
    panic!("server at {} did not start", base_url);
}
