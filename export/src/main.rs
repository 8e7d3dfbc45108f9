use wzs_core::WzsServiceClient;
use wzs_export::telemetry::init_tracing;
use wzs_export::{AppConfig, CommandLauncher, ExportError, ExportSummary, ResidentExport};

fn run() -> Result<ExportSummary, ExportError> {
    let config = AppConfig::load()?;
    let client = WzsServiceClient::new(&config.uri);
    ResidentExport::new(config, client, CommandLauncher)?.run()
}

fn main() {
    init_tracing("warn");

    match run() {
        Ok(summary) => tracing::info!(
            residents = summary.residents,
            written = summary.file_written,
            "export finished"
        ),
        // The exit status stays 0; the message is the only failure signal.
        Err(err) => println!("{err}"),
    }
}
