//! Local preview server for the static site.

use crate::telemetry::{log_event, LogLevel, DEFAULT_LOG_LEVEL};
use axum::Router;
use std::path::{Path, PathBuf};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SITE_ROOT: &str = ".";
const PORT_BOUNDS: (u16, u16) = (1, 65_535);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site_root: PathBuf,
    pub log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let site_root = parse_non_empty_string(lookup("SITE_ROOT"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT));
        let log_level = parse_non_empty_string(lookup("LOG_LEVEL"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            site_root,
            log_level,
        }
    }
}

fn parse_u16_with_bounds(value: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Files under `site_root`; unknown paths get `index.html` with a 404 status.
pub fn build_router(site_root: &Path) -> Router {
    let static_service = ServeDir::new(site_root)
        .not_found_service(ServeFile::new(site_root.join("index.html")));

    Router::new().fallback_service(static_service)
}

pub async fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    log_event(
        LogLevel::Info,
        "server_listening",
        serde_json::json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "siteRoot": config.site_root.display().to_string(),
        }),
    );

    axum::serve(listener, build_router(&config.site_root)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::certificate::certificate_path;
    use std::collections::HashMap;
    use std::fs;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| values.get(name).cloned()
    }

    fn scratch_site(label: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!(
            "portfolio-effects-{label}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("Assets/Certificates")).expect("create site dirs");
        fs::write(root.join("index.html"), "<html><body>home page</body></html>")
            .expect("write index");
        fs::write(root.join("Assets/Certificates/foo.pdf"), "%PDF-1.4").expect("write certificate");
        root
    }

    #[test]
    fn config_defaults_without_environment() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.port, 8080);
        assert_eq!(config.site_root, PathBuf::from("."));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn config_reads_valid_values() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", " 3000 "),
            ("SITE_ROOT", "public"),
            ("LOG_LEVEL", "debug"),
        ]));

        assert_eq!(config.port, 3000);
        assert_eq!(config.site_root, PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "0"),
            ("SITE_ROOT", "   "),
            ("LOG_LEVEL", "verbose"),
        ]));

        assert_eq!(config.port, 8080);
        assert_eq!(config.site_root, PathBuf::from("."));
        assert_eq!(config.log_level, LogLevel::Info);

        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")]));
        assert_eq!(config.port, 8080);
    }

    #[tokio::test]
    async fn serves_certificates_and_falls_back_to_index() {
        let root = scratch_site("serve");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let address = listener.local_addr().expect("local address");
        let router = build_router(&root);
        tokio::spawn(async move { axum::serve(listener, router).await });

        let certificate = reqwest::get(format!("http://{address}/{}", certificate_path("foo.pdf")))
            .await
            .expect("certificate request");
        assert_eq!(certificate.status(), reqwest::StatusCode::OK);
        assert_eq!(certificate.text().await.expect("certificate body"), "%PDF-1.4");

        let missing = reqwest::get(format!("http://{address}/no/such/page.html"))
            .await
            .expect("fallback request");
        assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
        assert!(missing.text().await.expect("fallback body").contains("home page"));

        let _ = fs::remove_dir_all(&root);
    }
}
