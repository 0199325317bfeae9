pub mod handlers;
pub mod routes;
pub mod shared;
pub mod usecases;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::extract::DefaultBodyLimit;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use contracts::shared::format::format_number;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Отключаем логи SQL запросов, но оставляем логи приложения
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Простой middleware для логирования запросов
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use axum::body::to_bytes;
        use chrono::Local;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let (parts, body) = response.into_parts();

        // Читаем тело ответа, чтобы узнать реальный размер
        let bytes = match to_bytes(body, usize::MAX).await {
            Ok(b) => b,
            Err(_) => {
                println!(
                    "\x1b[33m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
                    Local::now().format("%H:%M:%S"),
                    start.elapsed().as_millis(),
                    "error",
                    parts.status.as_u16(),
                    method,
                    uri.path()
                );
                return Response::from_parts(parts, Body::default());
            }
        };

        // Голубой для 2xx, коричневый для остальных
        let color_code = if parts.status.is_success() { "36" } else { "33" };

        println!(
            "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
            color_code,
            Local::now().format("%H:%M:%S"),
            start.elapsed().as_millis(),
            format_number(bytes.len() as u64),
            parts.status.as_u16(),
            method,
            uri.path()
        );

        Response::from_parts(parts, Body::from(bytes))
    }

    let config = shared::config::load_config()?;
    shared::config::install_forms(config.forms.clone());

    let db_path = shared::config::get_database_path(&config);
    shared::data::db::initialize_database(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let content_path = config
        .content
        .path
        .as_deref()
        .map(shared::config::resolve_path);
    shared::content::initialize(content_path.as_deref())
        .map_err(|e| anyhow::anyhow!("content load failed: {e}"))?;

    let static_dir = shared::config::get_static_dir(&config);
    tracing::info!("Serving frontend from {}", static_dir.display());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes()
        .fallback_service(ServeDir::new(&static_dir))
        .layer(DefaultBodyLimit::max(config.forms.body_limit_bytes()))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
