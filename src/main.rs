mod app;
mod models;
mod service;

use color_eyre::Result;
use tokio::sync::mpsc;

use crate::{
    app::App,
    models::{ServiceReq, ServiceResp, configs::Config},
    service::ServiceBuilder,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = init_logging();

    let cfg = Config::load()?;

    // frontend <> backend channels
    let (req_tx, req_rx) = mpsc::unbounded_channel::<ServiceReq>();
    let (resp_tx, resp_rx) = mpsc::unbounded_channel::<ServiceResp>();

    let service = ServiceBuilder::new(cfg.service, req_rx, resp_tx).build()?;

    // spawn backend service and tui app both *should* only return on irrecoverable error
    let svc_fut = async move { service.run().await };
    let app_fut = async move {
        let mut app = App::new(req_tx, resp_rx);
        app.run(cfg.form).await
        // req_tx is dropped here and will shutdown backend service
    };

    // return either when both complete with Ok or when the first complete with Err
    let res = tokio::try_join!(svc_fut, app_fut);

    ratatui::restore();

    // propagate the first error
    res.map(|(_svc_ok, _tui_ok)| ())
}

fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    // creates logs/foodrec.log.YYYY-MM-DD rotating daily
    let file_appender = tracing_appender::rolling::daily("logs", "foodrec.log");
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    guard // keep guard alive so logs are flushed on drop
}
