//! HTML front end for the kennel adoption catalog
//!
//! Pages:
//! - `/` a random selection of dogs, `/dogs/{id}` one dog
//! - `/breeds` and `/breeds/{breed}` from the breed catalog
//! - `/admin` bulk generation, inline edit, status change and delete
//!
//! Can be used as:
//! - An embedded server (via `start_server_on`)
//! - A standalone binary (`kennel`)

mod form;
pub mod handlers;
pub mod logging;
pub mod pages;
mod routes;
pub mod state;

pub use handlers::dispatch;
pub use state::AppState;

use http_body_util::BodyExt;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::Request;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{error, info, warn};

/// Handle to a running server that can be used to stop it
pub struct ServerHandle {
    shutdown_tx: oneshot::Sender<()>,
    addr: SocketAddr,
}

impl ServerHandle {
    /// Get the port the server is running on
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Get the URL of the home page
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Stop the server
    pub fn stop(self) {
        let _ = self.shutdown_tx.send(());
    }
}

/// Start serving on the specified host and port
///
/// Use port 0 to get a random available port.
pub async fn start_server_on(state: Arc<AppState>, host: &str, port: u16) -> anyhow::Result<ServerHandle> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    info!("Starting kennel server on {}", local_addr);

    let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = &mut shutdown_rx => {
                    info!("Shutting down kennel server");
                    break;
                }
                result = listener.accept() => {
                    match result {
                        Ok((stream, _)) => {
                            let io = TokioIo::new(stream);
                            let state = state.clone();

                            tokio::spawn(async move {
                                if let Err(err) = http1::Builder::new()
                                    .serve_connection(
                                        io,
                                        hyper::service::service_fn(move |req: Request<Incoming>| {
                                            let state = state.clone();
                                            async move {
                                                let (parts, body) = req.into_parts();
                                                let body = match body.collect().await {
                                                    Ok(collected) => collected.to_bytes(),
                                                    Err(err) => {
                                                        warn!(error = %err, "Failed to read request body");
                                                        Bytes::new()
                                                    }
                                                };
                                                Ok::<_, Infallible>(
                                                    dispatch(&state, &parts.method, &parts.uri, body).await,
                                                )
                                            }
                                        }),
                                    )
                                    .await
                                {
                                    error!("Error serving connection: {:?}", err);
                                }
                            });
                        }
                        Err(e) => {
                            error!("Failed to accept connection: {}", e);
                        }
                    }
                }
            }
        }
    });

    Ok(ServerHandle {
        shutdown_tx,
        addr: local_addr,
    })
}
