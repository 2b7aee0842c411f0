#[cfg(not(target_arch = "wasm32"))]
use portfolio_effects::{audit, backend, telemetry};

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = backend::ServerConfig::from_env();
    telemetry::set_log_level(config.log_level);

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None | Some("serve") => backend::run(config).await,
        Some("audit") => {
            let root = args
                .next()
                .map(std::path::PathBuf::from)
                .unwrap_or(config.site_root);
            audit::run_audit(&root)
        }
        Some(other) => Err(format!(
            "unknown command `{other}`; expected `serve` or `audit [site-root]` (build the page bundle with `trunk build --release`)"
        )
        .into()),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    portfolio_effects::frontend::run();
}
