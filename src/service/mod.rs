pub mod client;

use std::sync::Arc;

use color_eyre::{Result, eyre::eyre};
use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use tokio::{
    sync::mpsc::{UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

use crate::{
    models::{
        Fetched, RequestParams, ServiceReq, ServiceResp,
        configs::{ClientKind, ServiceConfig},
    },
    service::client::{HttpClientImpl, RecommendationClient},
};

pub struct ServiceBuilder {
    config: ServiceConfig,
    req_rx: UnboundedReceiver<ServiceReq>,
    resp_tx: UnboundedSender<ServiceResp>,
}

impl ServiceBuilder {
    pub fn new(
        config: ServiceConfig,
        req_rx: UnboundedReceiver<ServiceReq>,
        resp_tx: UnboundedSender<ServiceResp>,
    ) -> Self {
        Self {
            config,
            req_rx,
            resp_tx,
        }
    }

    pub fn build(self) -> Result<Service> {
        let client: Arc<dyn RecommendationClient> = match self.config.client {
            ClientKind::Http => Arc::new(HttpClientImpl::new(
                reqwest::Client::new(),
                self.config.endpoint,
            )),
            ClientKind::Mock => {
                #[cfg(debug_assertions)]
                {
                    Arc::new(client::mock::MockClientImpl {
                        latency: std::time::Duration::from_millis(800),
                    })
                }
                #[cfg(not(debug_assertions))]
                color_eyre::eyre::bail!("mock recommendation client requires a debug build")
            }
        };
        Ok(Service::new(self.req_rx, self.resp_tx, client))
    }
}

pub struct Service {
    req_rx: UnboundedReceiver<ServiceReq>,
    resp_tx: UnboundedSender<ServiceResp>,

    client: Arc<dyn RecommendationClient>,
}

impl Service {
    pub fn new(
        req_rx: UnboundedReceiver<ServiceReq>,
        resp_tx: UnboundedSender<ServiceResp>,
        client: Arc<dyn RecommendationClient>,
    ) -> Self {
        Self {
            req_rx,
            resp_tx,
            client,
        }
    }

    /// Serves requests until the request channel closes. Every request runs in its own task so a
    /// newer submit is never queued behind an older call.
    pub async fn run(mut self) -> Result<()> {
        let mut fetch_handles = FuturesUnordered::<JoinHandle<()>>::new();
        loop {
            tokio::select! {
                maybe_req = self.req_rx.recv() => {
                    match maybe_req {
                        None => break,
                        Some(ServiceReq::Recommend { seq, params }) => {
                            let client = self.client.clone();
                            let resp_tx = self.resp_tx.clone();
                            fetch_handles.push(tokio::spawn(fetch(client, seq, params, resp_tx)));
                        }
                    }
                }
                Some(res) = fetch_handles.next(), if !fetch_handles.is_empty() => {
                    if let Err(join_err) = res {
                        return Err(eyre!("fetch panicked: {:?}", join_err));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Performs one call and reports its settlement. Client errors are logged and collapsed into
/// `Fetched::Failed`. A closed response channel means the app has quit, so the outcome is dropped.
async fn fetch(
    client: Arc<dyn RecommendationClient>,
    seq: u64,
    params: RequestParams,
    resp_tx: UnboundedSender<ServiceResp>,
) {
    tracing::info!(
        seq,
        city = %params.city,
        preference = ?params.preference,
        cuisine_type = %params.cuisine_type,
        "fetching recommendations"
    );

    let fetched = match client.recommend(&params).await {
        Ok(fetched) => fetched,
        Err(e) => {
            tracing::warn!(seq, "fetching recommendations failed: {e:?}");
            Fetched::Failed
        }
    };
    tracing::debug!(seq, ?fetched, "settled");

    if resp_tx
        .send(ServiceResp::Recommendations { seq, fetched })
        .is_err()
    {
        tracing::debug!(seq, "app closed before the fetch settled");
    }
}
