//! One-shot http/1.1 server for exercising the engines.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};

/// Accept a single connection, read the request head and reply with `response` verbatim.
pub(crate) fn serve_raw(response: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local address");

    std::thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => head.extend_from_slice(&buf[..n]),
            }
        }

        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    addr
}

/// Reply with a json `body` and the given status.
pub(crate) fn serve_once(status: u16, reason: &str, body: &str) -> SocketAddr {
    let head = format!("HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\n");
    serve_raw(format!(
        "{head}Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    ))
}

/// An address nothing is listening on.
pub(crate) fn refused_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().expect("local address")
}
