//! Thread-per-connection listener.

use super::{route, HttpError, Request, Response};
use std::io::{BufReader, BufWriter};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tp_rules::Dispatcher;
use tp_time::{Calendar, Colombia};
use tracing::{debug, info, warn};

const READ_TIMEOUT: Duration = Duration::from_secs(30);
const WRITE_TIMEOUT: Duration = Duration::from_secs(30);

/// Default cap on connections handled at once.
pub const DEFAULT_MAX_CONNECTIONS: usize = 256;

/// A bound server sharing one dispatcher across connections.
#[derive(Debug)]
pub struct Server<C: Calendar + 'static = Colombia> {
    listener: TcpListener,
    dispatcher: Arc<Dispatcher<C>>,
    max_connections: usize,
    active: Arc<AtomicUsize>,
}

/// Releases a connection slot when the handler thread ends.
struct Slot(Arc<AtomicUsize>);

impl Drop for Slot {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

impl<C: Calendar + 'static> Server<C> {
    /// Bind `addr`.
    pub fn bind<A: ToSocketAddrs>(addr: A, dispatcher: Dispatcher<C>) -> Result<Self, HttpError> {
        let listener = TcpListener::bind(addr)?;
        Ok(Self {
            listener,
            dispatcher: Arc::new(dispatcher),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            active: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Cap the number of connections handled at once. Connections beyond
    /// the cap are answered with 503 and closed.
    pub fn with_max_connections(mut self, max: usize) -> Self {
        self.max_connections = max;
        self
    }

    /// The bound address (useful after binding port 0).
    pub fn local_addr(&self) -> Result<SocketAddr, HttpError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until the listener fails.
    pub fn run(self) -> Result<(), HttpError> {
        info!(addr = %self.local_addr()?, max_connections = self.max_connections, "listening");
        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    if self.active.fetch_add(1, Ordering::AcqRel) >= self.max_connections {
                        self.active.fetch_sub(1, Ordering::AcqRel);
                        warn!(max_connections = self.max_connections, "connection limit reached");
                        if let Err(e) = reject_busy(stream) {
                            debug!(error = %e, "busy response not delivered");
                        }
                        continue;
                    }
                    let slot = Slot(Arc::clone(&self.active));
                    let dispatcher = Arc::clone(&self.dispatcher);
                    thread::spawn(move || {
                        let _slot = slot;
                        if let Err(e) = handle_connection(stream, &dispatcher) {
                            debug!(error = %e, "connection dropped");
                        }
                    });
                }
                Err(e) => warn!(error = %e, "accept failed"),
            }
        }
        Ok(())
    }
}

/// Read one request from `stream`, answer it and close.
pub fn handle_connection<C: Calendar>(
    stream: TcpStream,
    dispatcher: &Dispatcher<C>,
) -> Result<(), HttpError> {
    stream.set_read_timeout(Some(READ_TIMEOUT))?;
    stream.set_write_timeout(Some(WRITE_TIMEOUT))?;
    let peer = stream.peer_addr().ok();
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut writer = BufWriter::new(stream);

    let response = match Request::read_from(&mut reader) {
        Ok(request) => {
            let started = Instant::now();
            let response = route(&request, dispatcher);
            info!(
                peer = ?peer,
                method = %request.method,
                path = %request.path,
                status = response.status,
                elapsed_us = started.elapsed().as_micros() as u64,
                "request"
            );
            response
        }
        Err(e) => match e.status() {
            Some(status) => {
                warn!(peer = ?peer, error = %e, "bad request");
                Response::json(
                    status,
                    &serde_json::json!({ "error": "Petición HTTP inválida", "detalle": e.to_string() }),
                )
            }
            None => return Err(e),
        },
    };
    response.write_to(&mut writer)?;
    Ok(())
}

fn reject_busy(mut stream: TcpStream) -> Result<(), HttpError> {
    stream.set_write_timeout(Some(WRITE_TIMEOUT))?;
    Response::error(503, "Servidor ocupado, intente de nuevo").write_to(&mut stream)?;
    Ok(())
}
