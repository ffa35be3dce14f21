// FICHIER : engine/src/utils/logger.rs

use crate::utils::config::LogConfig;
use std::sync::Once;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

// Sécurité pour éviter la double initialisation (crash fréquent en tests)
static INIT: Once = Once::new();

pub fn init_logging(config: &LogConfig) {
    INIT.call_once(|| {
        // =========================================================================
        // LAYER 1 : FICHIER JSON (optionnel, rotation quotidienne)
        // =========================================================================
        let file_layer = config.log_dir.as_ref().map(|log_dir| {
            std::fs::create_dir_all(log_dir).ok();
            let file_appender = rolling::daily(log_dir, "evolve.log");

            fmt::layer()
                .json()
                .with_writer(file_appender)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
        });

        // =========================================================================
        // LAYER 2 : CONSOLE (stderr, pour garder stdout aux rapports)
        // =========================================================================
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

        let console_layer = fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(env_filter);

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        if registry.try_init().is_err() {
            tracing::warn!("[Logger] Tentative de ré-initialisation ignorée (subscriber global déjà actif).");
            return;
        }

        tracing::info!(log_dir = ?config.log_dir, "Logger initialisé");
    });
}
