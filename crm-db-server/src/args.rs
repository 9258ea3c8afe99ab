use std::path::PathBuf;

use clap::Parser;

/// Serve the CRM database file over `/api/db`
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    pub bind: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    /// Folder holding the database file
    #[arg(long)]
    pub db_folder: Option<PathBuf>,

    #[arg(long)]
    pub db_file_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "crm-db-server",
            "--config",
            "crm-db.toml",
            "--port",
            "9000",
            "--db-folder",
            "/srv/crm",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("crm-db.toml")));
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.db_folder, Some(PathBuf::from("/srv/crm")));
        assert_eq!(args.bind, None);
        assert_eq!(args.db_file_name, None);
    }

    #[test]
    fn test_parse_no_args() {
        let args = Args::try_parse_from(["crm-db-server"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.port.is_none());
    }

    #[test]
    fn test_parse_bad_port() {
        assert!(Args::try_parse_from(["crm-db-server", "--port", "http"]).is_err());
    }
}
