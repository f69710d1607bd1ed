use component_info::adapters::inbound::http;
use component_info::adapters::outbound::filesystem::JsonFileRecordStore;
use component_info::application::{ComponentInfoService, RecordSnapshot};
use component_info::cli::Args;
use component_info::config::{load_settings, Settings};
use component_info::logging::init_tracing;
use component_info::ports::inbound::ComponentInfoPort;
use component_info::shared::error::ExitCode;
use component_info::shared::Result;
use std::process;
use std::sync::Arc;

fn main() {
    // clap exits with InvalidArguments (2) on its own
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let settings = load_settings(&args, &current_dir)?;

    init_tracing(&settings.log_level, settings.log_format)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(settings))
}

async fn serve(settings: Settings) -> Result<()> {
    tracing::info!(
        host = %settings.host,
        port = settings.port,
        db_path = %settings.db_path.display(),
        "Starting component-info"
    );

    let store = JsonFileRecordStore::new(settings.db_path.clone());
    let snapshot = Arc::new(RecordSnapshot::load(store, settings.reload_per_request).await?);

    #[cfg(unix)]
    let _reload_task = http::spawn_reload_on_hangup(Arc::clone(&snapshot))?;

    let service: Arc<dyn ComponentInfoPort> =
        Arc::new(ComponentInfoService::new(settings.api_key.clone(), snapshot));
    let router = http::create_router(service);

    let listener = http::bind(&settings.host, settings.port).await?;
    http::serve(listener, router).await
}
