//! HK Map Share Server.
//!
//! Dünner CRUD-Durchreicher für geteilte Punkte — das Gegenstück zum
//! Remote-Modus des Annotation-Cores.

use hk_map_annotator::server;
use hk_map_annotator::AnnotatorOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "HK Map Share Server v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let options = AnnotatorOptions::load_from_file(&AnnotatorOptions::config_path());
    let data_file = options.data_dir.join("shared-points.json");

    server::serve(options.server_port, data_file).await
}
