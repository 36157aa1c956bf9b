use std::net::TcpListener;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use dashboard_engine::{EffectRunner, SessionRegistry};
use dashboard_logging::{dash_debug, dash_error, dash_info, dash_warn};

use super::http;
use super::logging::{self, LogDestination};
use super::panels::BuiltinPanels;
use super::settings;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::from_env_value(
        std::env::var("DASHBOARD_LOG").ok().as_deref(),
    ));

    let path = settings::resolve_config_path(
        std::env::args().nth(1),
        std::env::var("DASHBOARD_CONFIG").ok(),
    );
    let settings = match settings::load(&path) {
        Ok(settings) => settings,
        Err(err) => {
            dash_error!("Refusing to start with {:?}: {}", path, err);
            return Err(err).with_context(|| format!("loading {}", path.display()));
        }
    };
    dash_info!(
        "Loaded configuration from {:?}: title={:?} theme={} idle={}s",
        path,
        settings.config.tab_title(),
        settings.config.theme(),
        settings.server.session_idle_secs
    );

    let server = settings.server;
    let panels = Arc::new(BuiltinPanels::new(
        server.api_docs_url.clone(),
        server.parse_endpoint.clone(),
    ));
    let registry = Arc::new(
        SessionRegistry::new(Arc::new(settings.config), EffectRunner::new(panels))
            .with_max_sessions(server.max_sessions),
    );

    // Background sweep for sessions whose tab was closed.
    let max_idle = Duration::from_secs(server.session_idle_secs);
    let sweeper = Arc::clone(&registry);
    thread::spawn(move || {
        let interval = (max_idle / 4).clamp(Duration::from_secs(1), Duration::from_secs(60));
        loop {
            thread::sleep(interval);
            if sweeper.is_empty() {
                continue;
            }
            let pruned = sweeper.prune_idle(max_idle);
            if pruned > 0 {
                dash_debug!("Pruned {} idle sessions, {} left", pruned, sweeper.len());
            }
        }
    });

    let listener = TcpListener::bind(&server.bind)
        .with_context(|| format!("binding {}", server.bind))?;
    dash_info!("Dashboard listening on http://{}", server.bind);

    let active_connections = Arc::new(AtomicUsize::new(0));
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let Some(slot) =
                    http::try_acquire_connection_slot(&active_connections, server.max_connections)
                else {
                    dash_warn!("All {} connection slots busy", server.max_connections);
                    let _ = http::reject_busy(stream);
                    continue;
                };
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    let _slot = slot;
                    if let Err(err) = http::serve_connection(stream, &registry) {
                        dash_warn!("Connection error: {}", err);
                    }
                });
            }
            Err(err) => dash_warn!("Failed to accept connection: {}", err),
        }
    }
    Ok(())
}
