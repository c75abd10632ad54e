//! One-shot HTTP server on loopback for exercising the real client.

use anyhow::Result;
use std::collections::VecDeque;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub reason: &'static str,
    pub body: String,
}

impl CannedResponse {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            reason: "OK",
            body: body.to_string(),
        }
    }

    pub fn server_error(body: &str) -> Self {
        Self {
            status: 500,
            reason: "Internal Server Error",
            body: body.to_string(),
        }
    }
}

/// Answers one connection per canned response, in order, then stops.
pub struct StubServer {
    base_url: String,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    pub fn serve(responses: Vec<CannedResponse>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let mut queue = VecDeque::from(responses);

        let handle = thread::spawn(move || {
            while let Some(response) = queue.pop_front() {
                let Ok((mut stream, _)) = listener.accept() else {
                    break;
                };
                if read_request_head(&mut stream).is_err() {
                    break;
                }
                if write_response(&mut stream, &response).is_err() {
                    break;
                }
                let _ = stream.shutdown(Shutdown::Both);
            }
        });

        Ok(Self {
            base_url: format!("http://{}/agoric/vstorage", addr),
            handle: Some(handle),
        })
    }

    /// vstorage base URL pointing at this server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Wait until every canned response has been served.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn read_request_head(stream: &mut TcpStream) -> std::io::Result<()> {
    let mut buf = [0_u8; 1024];
    let mut request = Vec::new();
    loop {
        let read = stream.read(&mut buf)?;
        if read == 0 {
            break;
        }
        request.extend_from_slice(&buf[..read]);
        if request.windows(4).any(|window| window == b"\r\n\r\n") {
            break;
        }
    }
    Ok(())
}

fn write_response(stream: &mut TcpStream, response: &CannedResponse) -> std::io::Result<()> {
    write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.reason,
        response.body.len()
    )?;
    stream.write_all(response.body.as_bytes())?;
    stream.flush()
}
