//! The placeholder web endpoint.
//!
//! This is glue, not domain: it constructs a demo transaction and embeds its rendered
//! form in the response body of a single catch-all route. There is no routing and no
//! business surface; the domain core takes no dependency on anything in this module.

use crate::model::{uyu, Money, Transaction, TransactionKind};
use crate::Result;
use anyhow::Context;
use chrono::{TimeZone, Utc};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use rust_decimal::Decimal;
use std::convert::Infallible;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Serves the placeholder endpoint until the process is stopped.
pub async fn serve(port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Unable to bind to {addr}"))?;
    info!("Server is listening from port {port}");

    loop {
        let (stream, peer) = listener
            .accept()
            .await
            .context("Failed to accept a connection")?;
        let io = TokioIo::new(stream);
        tokio::task::spawn(async move {
            let service = service_fn(greet);
            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                warn!("Error serving connection from {peer}: {e}");
            }
        });
    }
}

async fn greet(_: Request<Incoming>) -> std::result::Result<Response<Full<Bytes>>, Infallible> {
    Ok(Response::new(Full::new(Bytes::from(greeting()))))
}

fn greeting() -> String {
    format!("Greetings, earthlings<br>{}", demo_transaction())
}

/// A canned transaction proving the domain is wired up.
fn demo_transaction() -> Transaction {
    Transaction::new(
        Money::new(Decimal::from(100), uyu()),
        TransactionKind::PointOfSale,
        "Compra en el supermercado",
        Utc.with_ymd_and_hms(2023, 10, 22, 0, 0, 0).unwrap(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_renders_the_demo_transaction() {
        let body = greeting();
        assert!(body.starts_with("Greetings, earthlings<br>"));
        assert!(body.contains("type = Point of sale"));
        assert!(body.contains("notes = Compra en el supermercado"));
        assert!(body.contains("date = Sun Oct 22 2023"));
        assert!(body.contains("money = UYU 100"));
    }
}
