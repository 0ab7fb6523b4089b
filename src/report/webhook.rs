use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::{
    error::ReportError,
    report::{Collector, Record},
};

/// Service answering with `{"ip": "<address>"}` for the caller's address.
pub const IP_LOOKUP_URL: &str = "https://api.ipify.org?format=json";
/// Address reported when the public IP cannot be determined.
pub const UNKNOWN_IP: &str = "0.0.0.0";

/// Posts each record as a JSON body to a fixed URL.
#[derive(Debug, Clone)]
pub struct WebhookCollector {
    client: Client,
    url:    String,
}

impl WebhookCollector {
    /// Creates a collector whose requests give up after `timeout`.
    ///
    /// # Errors
    /// Returns `Transport` when the HTTP client cannot be initialised.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ReportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client,
                  url: url.into() })
    }

    /// The underlying client, for reuse by [`public_ip`].
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Collector for WebhookCollector {
    fn send(&self, record: &Record) -> Result<(), ReportError> {
        let response = self.client.post(&self.url).json(record).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::Status { status: status.as_u16() });
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct IpResponse {
    ip: Option<String>,
}

/// Looks up the public IP address of this machine at [`IP_LOOKUP_URL`].
///
/// Never fails: any transport, status or decoding problem yields
/// [`UNKNOWN_IP`] and is logged.
pub fn public_ip(client: &Client) -> String {
    public_ip_from(client, IP_LOOKUP_URL)
}

/// Like [`public_ip`], asking the service at `url`, which must answer with
/// `{"ip": "<address>"}`.
pub fn public_ip_from(client: &Client, url: &str) -> String {
    lookup_ip(client, url).unwrap_or_else(|e| {
                              log::warn!("public IP lookup failed: {e}");
                              UNKNOWN_IP.to_string()
                          })
}

fn lookup_ip(client: &Client, url: &str) -> Result<String, ReportError> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(ReportError::Status { status: status.as_u16() });
    }
    let body: IpResponse = response.json()?;
    Ok(body.ip
           .filter(|ip| !ip.is_empty())
           .unwrap_or_else(|| UNKNOWN_IP.to_string()))
}

#[cfg(test)]
mod tests {
    use std::{
        io::{BufRead, BufReader, Read, Write},
        net::TcpListener,
        thread,
    };

    use super::*;

    /// Serves `response` to a single request on a local port and returns the
    /// server's URL.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut length = 0;
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    length = value.trim().parse().unwrap();
                }
            }
            let mut body = vec![0; length];
            reader.read_exact(&mut body).unwrap();
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{address}")
    }

    /// A URL on which nothing is listening.
    fn refused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{address}")
    }

    fn client() -> Client {
        Client::builder().timeout(Duration::from_secs(5)).build().unwrap()
    }

    fn record() -> Record {
        Record { description: "area".to_string(),
                 expression:  "3 * 4".to_string(),
                 result:      12.0,
                 ip:          UNKNOWN_IP.to_string(), }
    }

    const SERVER_ERROR: &str =
        "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

    #[test]
    fn lookup_reads_the_address() {
        let url = serve_once("HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
                              Content-Length: 20\r\nConnection: close\r\n\r\n\
                              {\"ip\":\"203.0.113.9\"}");
        assert_eq!(public_ip_from(&client(), &url), "203.0.113.9");
    }

    #[test]
    fn lookup_falls_back_on_error_status() {
        let url = serve_once(SERVER_ERROR);
        assert_eq!(public_ip_from(&client(), &url), UNKNOWN_IP);
    }

    #[test]
    fn lookup_falls_back_on_malformed_body() {
        let url = serve_once("HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
                              Content-Length: 8\r\nConnection: close\r\n\r\nnot json");
        assert_eq!(public_ip_from(&client(), &url), UNKNOWN_IP);
    }

    #[test]
    fn lookup_falls_back_when_unreachable() {
        assert_eq!(public_ip_from(&client(), &refused_url()), UNKNOWN_IP);
    }

    #[test]
    fn send_accepts_success_status() {
        let url = serve_once("HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n");
        let collector = WebhookCollector::new(url, Duration::from_secs(5)).unwrap();
        assert!(collector.send(&record()).is_ok());
    }

    #[test]
    fn send_reports_error_status() {
        let url = serve_once(SERVER_ERROR);
        let collector = WebhookCollector::new(url, Duration::from_secs(5)).unwrap();
        assert!(matches!(collector.send(&record()),
                         Err(ReportError::Status { status: 500 })));
    }

    #[test]
    fn send_reports_transport_failure() {
        let collector = WebhookCollector::new(refused_url(), Duration::from_secs(5)).unwrap();
        assert!(matches!(collector.send(&record()), Err(ReportError::Transport(_))));
    }
}
