use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use anyhow::Context;
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

/// Backlog matching the original listen queue size.
const LISTEN_BACKLOG: i32 = 5;

/// A bound listening socket plus the document root served from it.
pub struct Server {
    listener: TcpListener,
    docroot: PathBuf,
}

impl Server {
    /// Binds the listening socket with `SO_REUSEADDR` and a backlog of 5.
    ///
    /// The host is resolved via the system resolver, so names like
    /// `localhost` are accepted as well as literal addresses.
    pub fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let addr = (cfg.host.as_str(), cfg.port)
            .to_socket_addrs()
            .with_context(|| format!("cannot resolve {}:{}", cfg.host, cfg.port))?
            .next()
            .with_context(|| format!("no address for {}:{}", cfg.host, cfg.port))?;

        let listener = bind_reusable(addr)?;

        Ok(Self {
            listener,
            docroot: cfg.docroot.clone(),
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Runs the accept loop, spawning one detached task per connection.
    ///
    /// Tasks own their socket end-to-end and are not waited on; the loop
    /// only ends when accept itself fails.
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = self.listener.accept().await?;
            info!("Accepted connection from {}", peer);

            let docroot = self.docroot.clone();
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, peer, docroot);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}

fn bind_reusable(addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    // Non-blocking mode is required before handing the socket to tokio.
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;

    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
