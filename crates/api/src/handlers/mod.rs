pub mod health;
pub mod qr;
pub mod upload;

use axum::http::{header, HeaderMap};

use crate::config::ServerConfig;

/// Resolve the externally reachable base URL for links embedded in
/// generated pages and upload responses.
///
/// Precedence: configured `PUBLIC_URL`, then `x-forwarded-proto` /
/// `x-forwarded-host` headers (reverse-proxy and tunnel deployments), then
/// the inbound `Host` header with an `http` scheme. The bind address is a
/// last resort when even `Host` is missing.
pub(crate) fn resolve_base_url(config: &ServerConfig, headers: &HeaderMap) -> String {
    if let Some(url) = &config.public_url {
        return url.clone();
    }

    let fwd_proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok());
    let fwd_host = headers.get("x-forwarded-host").and_then(|v| v.to_str().ok());
    if let (Some(proto), Some(host)) = (fwd_proto, fwd_host) {
        return format!("{proto}://{host}");
    }

    match headers.get(header::HOST).and_then(|v| v.to_str().ok()) {
        Some(host) => format!("http://{host}"),
        None => format!("http://{}:{}", config.host, config.port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(public_url: Option<&str>) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9091,
            public_url: public_url.map(String::from),
            pages_dir: PathBuf::from("pages"),
            uploads_dir: PathBuf::from("uploads"),
            cors_origins: vec![],
            request_timeout_secs: 30,
        }
    }

    #[test]
    fn public_url_wins() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-proto", "https".parse().unwrap());
        headers.insert("x-forwarded-host", "tunnel.example".parse().unwrap());
        headers.insert(header::HOST, "localhost:9091".parse().unwrap());

        let base = resolve_base_url(&config(Some("https://qr.example.com")), &headers);
        assert_eq!(base, "https://qr.example.com");
    }

    #[test]
    fn forwarded_headers_beat_host() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-proto", "https".parse().unwrap());
        headers.insert("x-forwarded-host", "tunnel.example".parse().unwrap());
        headers.insert(header::HOST, "localhost:9091".parse().unwrap());

        assert_eq!(
            resolve_base_url(&config(None), &headers),
            "https://tunnel.example"
        );
    }

    #[test]
    fn host_header_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, "localhost:9091".parse().unwrap());

        assert_eq!(
            resolve_base_url(&config(None), &headers),
            "http://localhost:9091"
        );
    }

    #[test]
    fn bind_address_as_last_resort() {
        assert_eq!(
            resolve_base_url(&config(None), &HeaderMap::new()),
            "http://127.0.0.1:9091"
        );
    }
}
