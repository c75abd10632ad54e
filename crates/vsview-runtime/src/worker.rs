use crate::fetch::{FetchRequest, FetchResponse};
use crate::{Error, Result};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use vsview_client::TreeClient;

/// Background thread that runs fetch requests off the event loop.
///
/// Responses come back on the receiver returned by [`FetchWorker::spawn`],
/// in request order. Requests still queued behind a newer one are skipped
/// without touching the network.
pub struct FetchWorker {
    tx: Sender<FetchRequest>,
    _handle: JoinHandle<()>,
}

impl FetchWorker {
    pub fn spawn(client: Arc<dyn TreeClient>) -> Result<(Self, Receiver<FetchResponse>)> {
        let (tx_req, rx_req) = channel::<FetchRequest>();
        let (tx_out, rx_out) = channel();

        let handle = std::thread::Builder::new()
            .name("vsview-fetch".to_string())
            .spawn(move || {
                while let Ok(mut request) = rx_req.recv() {
                    while let Ok(newer) = rx_req.try_recv() {
                        tracing::debug!(id = request.id.0, path = %request.path, "skipping queued request");
                        request = newer;
                    }

                    let response = request.run(client.as_ref());
                    if tx_out.send(response).is_err() {
                        break;
                    }
                }
                tracing::debug!("fetch worker exiting");
            })?;

        Ok((
            Self {
                tx: tx_req,
                _handle: handle,
            },
            rx_out,
        ))
    }

    pub fn submit(&self, request: FetchRequest) -> Result<()> {
        tracing::debug!(id = request.id.0, path = %request.path, "submitting fetch");
        self.tx.send(request).map_err(|_| Error::WorkerStopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationController;
    use std::time::Duration;
    use vsview_testing::ScriptedTreeClient;
    use vsview_types::StoragePath;

    #[test]
    fn test_worker_delivers_response() {
        let client = Arc::new(ScriptedTreeClient::new().with_children("published", &["a"]));
        let (worker, rx) = FetchWorker::spawn(client.clone()).unwrap();
        let mut nav = NavigationController::new(StoragePath::default(), 2);

        worker.submit(nav.start()).unwrap();
        let response = rx.recv_timeout(Duration::from_secs(5)).unwrap();

        assert!(nav.complete(response));
        assert_eq!(nav.columns().column(0).unwrap().len(), 1);
    }

    #[test]
    fn test_latest_request_is_always_answered() {
        let client = Arc::new(
            ScriptedTreeClient::new()
                .with_children("published", &["a", "b"])
                .with_children("published.a", &["x"])
                .with_children("published.b", &["y"]),
        );
        let mut nav = NavigationController::new(StoragePath::default(), 3);
        let root = nav.start();
        nav.complete(root.run(client.as_ref()));

        let (worker, rx) = FetchWorker::spawn(client.clone()).unwrap();
        worker.submit(nav.select(0, "a").unwrap()).unwrap();
        worker.submit(nav.select(0, "b").unwrap()).unwrap();

        // The first request may or may not have been skipped; the last one
        // always arrives and is the only one applied.
        let mut applied = 0;
        while let Ok(response) = rx.recv_timeout(Duration::from_secs(5)) {
            let last = response.path.as_str() == "published.b";
            if nav.complete(response) {
                applied += 1;
            }
            if last {
                break;
            }
        }

        assert_eq!(applied, 1);
        assert_eq!(
            nav.columns().column(1).unwrap().labels().to_vec(),
            vec!["y".to_string()]
        );
    }
}
