use bytes::Bytes;
use exolines_http::{Handler, Request, Response};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper_util::rt::TokioIo;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

/// HTTP/1.1 server over a single root handler
pub struct HttpServer {
	handler: Arc<dyn Handler>,
}

impl HttpServer {
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self { handler }
	}

	/// Bind the listening socket without accepting yet
	///
	/// Splitting bind from serve lets callers (and tests) learn the bound
	/// address before the accept loop starts, which matters with port 0.
	pub async fn bind(self, addr: SocketAddr) -> std::io::Result<BoundServer> {
		let listener = TcpListener::bind(addr).await?;
		Ok(BoundServer {
			listener,
			handler: self.handler,
		})
	}
}

/// A server with its socket bound, ready to accept connections
pub struct BoundServer {
	listener: TcpListener,
	handler: Arc<dyn Handler>,
}

impl BoundServer {
	pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
		self.listener.local_addr()
	}

	/// Accept connections until the task is cancelled
	pub async fn serve(self) -> std::io::Result<()> {
		if let Ok(addr) = self.listener.local_addr() {
			tracing::info!(%addr, "listening");
		}
		loop {
			let (stream, peer) = self.listener.accept().await?;
			let handler = Arc::clone(&self.handler);
			tokio::task::spawn(async move {
				if let Err(error) = handle_connection(stream, handler).await {
					tracing::debug!(%error, %peer, "connection ended with error");
				}
			});
		}
	}
}

async fn handle_connection(
	stream: TcpStream,
	handler: Arc<dyn Handler>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let io = TokioIo::new(stream);
	let service = RequestService { handler };
	http1::Builder::new().serve_connection(io, service).await?;
	Ok(())
}

/// Service adapter between hyper and the catalog's [`Handler`] seam
struct RequestService {
	handler: Arc<dyn Handler>,
}

impl Service<hyper::Request<Incoming>> for RequestService {
	type Response = hyper::Response<Full<Bytes>>;
	type Error = Box<dyn std::error::Error + Send + Sync>;
	type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

	fn call(&self, req: hyper::Request<Incoming>) -> Self::Future {
		let handler = Arc::clone(&self.handler);

		Box::pin(async move {
			let (parts, body) = req.into_parts();
			let body_bytes = body.collect().await?.to_bytes();

			let request = Request::builder()
				.method(parts.method)
				.uri(parts.uri.to_string())
				.headers(parts.headers)
				.body(body_bytes)
				.build();

			let response = match handler.handle(request).await {
				Ok(response) => response,
				Err(error) => {
					tracing::error!(%error, "handler failed");
					Response::internal_server_error()
				}
			};

			let mut hyper_response = hyper::Response::builder().status(response.status);
			for (key, value) in response.headers.iter() {
				hyper_response = hyper_response.header(key, value);
			}
			Ok(hyper_response.body(Full::new(response.body))?)
		})
	}
}

/// Bind and run in one call
pub async fn serve(addr: SocketAddr, handler: Arc<dyn Handler>) -> std::io::Result<()> {
	HttpServer::new(handler).bind(addr).await?.serve().await
}
