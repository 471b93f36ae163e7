//! Network helpers for testing

use std::net::TcpListener;

/// Base URL of a local port that nothing listens on.
///
/// The port is bound and immediately released, so connecting to it fails with
/// a transport error instead of an HTTP response.
pub fn unreachable_base_url() -> String {
  let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind a local port");
  let addr = listener.local_addr().expect("Failed to read local address");
  drop(listener);
  format!("http://{addr}")
}
