use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use avatar_ml::config::{LoggingSettings, Settings};
use avatar_ml::routes::{self, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Configuration loaded successfully");

    let app_state = AppState::from_settings(&settings);

    info!(
        "Classifier initialized with thresholds: {:?}",
        app_state.classifier.thresholds()
    );

    let (host, port) = settings.bind_address();

    info!("Starting {} on {}:{}", settings.service.name, host, port);

    let workers = settings.server.workers;

    let mut server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(routes::internal_error_handlers())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
            .default_service(routes::default_service())
    });

    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
