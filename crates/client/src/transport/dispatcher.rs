//! Background dispatcher driving the HTTP client
//!
//! Requests reach the dispatcher over a bounded channel. Each one runs as its
//! own task so a slow endpoint never holds up the queue. Synchronous callers
//! get the outcome back on a oneshot channel; fire-and-forget requests only
//! log failures.

use std::thread;

use reqwest::header::CONTENT_TYPE;
use tokio::runtime::{Builder, Handle};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;
use tracing::{debug, trace, warn};

use super::TransportConfig;
use crate::error::{ClientError, TransportError};

type Reply = oneshot::Sender<Result<(), TransportError>>;

/// A request as seen by the dispatcher
#[derive(Debug)]
pub(crate) enum Outgoing {
    Get { url: String },
    Post { url: String, body: String, charset: String },
}

impl Outgoing {
    fn url(&self) -> &str {
        match self {
            Self::Get { url } | Self::Post { url, .. } => url,
        }
    }
}

struct Dispatch {
    outgoing: Outgoing,
    reply: Option<Reply>,
}

/// Sending side of the dispatcher
///
/// Dropping the handle stops the dispatcher once the queued requests are
/// done.
pub(crate) struct DispatcherHandle {
    tx: mpsc::Sender<Dispatch>,
}

impl DispatcherHandle {
    /// Queue a request and block until its response headers arrive
    ///
    /// Must not be called from inside an async context.
    pub(crate) fn send(&self, outgoing: Outgoing) -> Result<(), TransportError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .blocking_send(Dispatch {
                outgoing,
                reply: Some(reply_tx),
            })
            .map_err(|_| TransportError::DispatcherClosed)?;

        reply_rx
            .blocking_recv()
            .map_err(|_| TransportError::DispatcherClosed)?
    }

    /// Queue a request without waiting (non-blocking)
    ///
    /// Returns `ChannelFull` when the queue is at capacity. The request is
    /// dropped in that case.
    pub(crate) fn try_send(&self, outgoing: Outgoing) -> Result<(), TransportError> {
        self.tx
            .try_send(Dispatch {
                outgoing,
                reply: None,
            })
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => TransportError::ChannelFull,
                mpsc::error::TrySendError::Closed(_) => TransportError::DispatcherClosed,
            })
    }
}

struct Dispatcher {
    rx: mpsc::Receiver<Dispatch>,
    http: reqwest::Client,
    in_flight: JoinSet<()>,
}

impl Dispatcher {
    fn new(config: &TransportConfig) -> Result<(Self, DispatcherHandle), ClientError> {
        let (tx, rx) = mpsc::channel(config.channel_capacity.max(1));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ClientError::Init(e.to_string()))?;

        let dispatcher = Self {
            rx,
            http,
            in_flight: JoinSet::new(),
        };

        Ok((dispatcher, DispatcherHandle { tx }))
    }

    async fn run(mut self) {
        debug!("dispatcher started");

        loop {
            tokio::select! {
                dispatch = self.rx.recv() => {
                    let Some(Dispatch { outgoing, reply }) = dispatch else {
                        break;
                    };
                    let http = self.http.clone();
                    self.in_flight.spawn(async move {
                        let url = outgoing.url().to_string();
                        let result = execute(&http, outgoing).await;
                        match reply {
                            Some(reply) => {
                                let _ = reply.send(result);
                            }
                            None => match result {
                                Ok(()) => trace!(%url, "async request delivered"),
                                Err(e) => warn!(error = %e, %url, "async request failed"),
                            },
                        }
                    });
                }
                Some(joined) = self.in_flight.join_next(), if !self.in_flight.is_empty() => {
                    if let Err(e) = joined {
                        warn!(error = %e, "dispatch task aborted");
                    }
                }
            }
        }

        while let Some(joined) = self.in_flight.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "dispatch task aborted");
            }
        }

        debug!("dispatcher stopped");
    }
}

/// Perform one request, reading only the status line and headers
async fn execute(http: &reqwest::Client, outgoing: Outgoing) -> Result<(), TransportError> {
    let request = match outgoing {
        Outgoing::Get { url } => http.get(url),
        Outgoing::Post { url, body, charset } => http
            .post(url)
            .header(
                CONTENT_TYPE,
                format!("application/x-www-form-urlencoded; charset={charset}"),
            )
            .body(body),
    };

    let response = request
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(TransportError::Server(status.as_u16()))
    }
}

/// Start the dispatcher
///
/// Inside a tokio runtime the dispatcher becomes a task on that runtime.
/// Otherwise it gets a dedicated thread with a current-thread runtime, whose
/// join handle is returned.
pub(crate) fn spawn(
    config: &TransportConfig,
) -> Result<(DispatcherHandle, Option<thread::JoinHandle<()>>), ClientError> {
    let (dispatcher, handle) = Dispatcher::new(config)?;

    if let Ok(runtime) = Handle::try_current() {
        runtime.spawn(dispatcher.run());
        return Ok((handle, None));
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ClientError::Init(e.to_string()))?;

    let worker = thread::Builder::new()
        .name("measure-dispatch".to_string())
        .spawn(move || runtime.block_on(dispatcher.run()))
        .map_err(|e| ClientError::Init(e.to_string()))?;

    Ok((handle, Some(worker)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outgoing() -> Outgoing {
        Outgoing::Get {
            url: "http://127.0.0.1:9/collect?v=1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_try_send_channel_full() {
        let config = TransportConfig {
            channel_capacity: 2,
            ..Default::default()
        };

        // Dispatcher is never run, so the queue only fills up
        let (_dispatcher, handle) = Dispatcher::new(&config).unwrap();

        assert!(handle.try_send(outgoing()).is_ok());
        assert!(handle.try_send(outgoing()).is_ok());
        assert_eq!(
            handle.try_send(outgoing()),
            Err(TransportError::ChannelFull)
        );
    }

    #[tokio::test]
    async fn test_try_send_after_stop() {
        let (dispatcher, handle) = Dispatcher::new(&TransportConfig::default()).unwrap();
        drop(dispatcher);

        assert_eq!(
            handle.try_send(outgoing()),
            Err(TransportError::DispatcherClosed)
        );
    }

    #[test]
    fn test_send_after_stop() {
        let (dispatcher, handle) = Dispatcher::new(&TransportConfig::default()).unwrap();
        drop(dispatcher);

        assert_eq!(handle.send(outgoing()), Err(TransportError::DispatcherClosed));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let config = TransportConfig {
            channel_capacity: 0,
            ..Default::default()
        };
        assert!(Dispatcher::new(&config).is_ok());
    }

    #[test]
    fn test_dedicated_thread_stops_when_handle_dropped() {
        let (handle, worker) = spawn(&TransportConfig::default()).unwrap();
        let worker = worker.expect("no runtime, so a dedicated thread is used");

        drop(handle);
        worker.join().unwrap();
    }
}
