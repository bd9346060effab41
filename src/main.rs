use axum::{
    extract::FromRef,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::routing::RouterExt;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type Result<T, E = ServerError> = std::result::Result<T, E>;

#[derive(Clone, FromRef)]
struct AppState {
    redirect: pages::RedirectKind,
}

mod config;
mod model;
mod pages;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::load()?;
    init_logging(&config.log_filter);

    let app_state = AppState {
        redirect: config.redirect,
    };

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, redirect = ?config.redirect, "listening");
    axum::serve(listener, router(app_state, &config.assets_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn router(app_state: AppState, assets_dir: &std::path::Path) -> axum::Router {
    axum::Router::new()
        .typed_get(pages::get)
        .typed_get(pages::spot_prices::get)
        .typed_get(pages::spot_prices::yearly::get)
        .typed_get(pages::spot_prices::period::get)
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(%err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}

#[derive(Debug)]
struct ServerError(anyhow::Error);

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!(err = ?self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{
        header::{HeaderName, HeaderValue, LOCATION},
        StatusCode,
    };
    use axum_test::TestServer;

    use super::*;

    fn server(redirect: pages::RedirectKind) -> TestServer {
        let app = router(AppState { redirect }, std::path::Path::new("assets"));
        TestServer::new(app).unwrap()
    }

    async fn assert_redirect(server: &TestServer, from: &str, to: &str) {
        let response = server.get(from).await;
        response.assert_status(StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.header(LOCATION), to);
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn entry_points_redirect_to_periods() {
        let server = server(pages::RedirectKind::Temporary);
        assert_redirect(&server, "/", "/spotPrices/PT1H").await;
        assert_redirect(&server, "/spotPrices", "/spotPrices/PT1H").await;
        assert_redirect(&server, "/spotPrices/yearly", "/spotPrices/P1Y").await;
    }

    #[tokio::test]
    async fn query_and_headers_do_not_change_target() {
        let server = server(pages::RedirectKind::Temporary);
        for path in ["/", "/spotPrices", "/spotPrices/yearly"] {
            let plain = server.get(path).await;
            let decorated = server
                .get(path)
                .add_query_param("period", "P1Y")
                .add_header(
                    HeaderName::from_static("x-requested-with"),
                    HeaderValue::from_static("fetch"),
                )
                .await;
            decorated.assert_status(StatusCode::TEMPORARY_REDIRECT);
            assert_eq!(decorated.header(LOCATION), plain.header(LOCATION));
            assert!(decorated.text().is_empty());
        }
    }

    #[tokio::test]
    async fn repeated_requests_yield_same_target() {
        let server = server(pages::RedirectKind::Temporary);
        for _ in 0..3 {
            assert_redirect(&server, "/spotPrices/yearly", "/spotPrices/P1Y").await;
            assert_redirect(&server, "/", "/spotPrices/PT1H").await;
        }
    }

    #[tokio::test]
    async fn configured_redirect_kind_sets_status() {
        let server = server(pages::RedirectKind::Permanent);
        let response = server.get("/spotPrices").await;
        response.assert_status(StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.header(LOCATION), "/spotPrices/PT1H");
    }

    #[tokio::test]
    async fn destination_pages_render() {
        let server = server(pages::RedirectKind::Temporary);

        let hourly = server.get("/spotPrices/PT1H").await;
        hourly.assert_status_ok();
        assert!(hourly.text().contains("Hourly spot prices"));

        let yearly = server.get("/spotPrices/P1Y").await;
        yearly.assert_status_ok();
        assert!(yearly.text().contains("Yearly spot prices"));
    }

    #[tokio::test]
    async fn unknown_period_is_a_client_error() {
        let server = server(pages::RedirectKind::Temporary);
        let response = server.get("/spotPrices/P1D").await;
        assert!(response.status_code().is_client_error());
    }

    #[test]
    fn server_error_is_internal_server_error() {
        let err: ServerError = model::Error::MalformedRedirect("/spotPrices/".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
