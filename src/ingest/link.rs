//! Remote spreadsheet link ingestion: a published sheet's CSV export,
//! fetched over HTTPS and handed to the CSV parser.

use crate::errors::{AppError, AppResult};
use http::{Request, Uri, header};
use http_body_util::BodyExt;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;

/// Marker the URL must carry to count as a shared-spreadsheet host.
pub const SHEET_HOST_MARKER: &str = "docs.google.com/spreadsheets";
/// Marker the URL must carry to count as a CSV export.
pub const CSV_EXPORT_MARKER: &str = "output=csv";

const MAX_REDIRECTS: usize = 5;

/// Check the link shape before any network traffic: both the
/// spreadsheet-host marker and the CSV-export marker must be present.
pub fn validate_link(url: &str) -> AppResult<()> {
    if !url.contains(SHEET_HOST_MARKER) {
        return Err(AppError::InvalidLink(format!(
            "expected a published Google Sheets link (containing \"{SHEET_HOST_MARKER}\")"
        )));
    }
    if !url.contains(CSV_EXPORT_MARKER) {
        return Err(AppError::InvalidLink(format!(
            "link is not a CSV export (missing \"{CSV_EXPORT_MARKER}\"); \
             use File > Share > Publish to web > CSV"
        )));
    }
    Ok(())
}

fn https_client() -> AppResult<Client<hyper_rustls::HttpsConnector<HttpConnector>, String>> {
    let mut root_store = rustls::RootCertStore::empty();
    let result = rustls_native_certs::load_native_certs();
    root_store.add_parsable_certificates(result.certs);
    if root_store.is_empty() {
        return Err(AppError::Fetch(
            "no valid system certificates found".to_string(),
        ));
    }

    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let https_connector = HttpsConnectorBuilder::new()
        .with_tls_config(tls_config)
        .https_or_http()
        .enable_http1()
        .build();

    Ok(Client::builder(TokioExecutor::new()).build(https_connector))
}

/// Resolve a `Location` header against the URI it redirected from.
fn resolve_location(current: &Uri, location: &str) -> AppResult<Uri> {
    if let Ok(uri) = location.parse::<Uri>()
        && uri.scheme().is_some()
    {
        return Ok(uri);
    }

    let mut builder = Uri::builder();
    if let Some(scheme) = current.scheme() {
        builder = builder.scheme(scheme.clone());
    }
    if let Some(authority) = current.authority() {
        builder = builder.authority(authority.clone());
    }
    builder
        .path_and_query(location)
        .build()
        .map_err(|e| AppError::Fetch(format!("bad redirect location {location:?}: {e}")))
}

/// Fetch the link and return the response body as text. Follows a
/// bounded number of redirects; anything but a final 2xx is an error,
/// as is a body that is evidently an HTML page rather than CSV.
pub async fn fetch_csv_text(url: &str) -> AppResult<String> {
    validate_link(url)?;

    let client = https_client()?;
    let mut uri: Uri = url
        .parse()
        .map_err(|e: http::uri::InvalidUri| AppError::InvalidLink(e.to_string()))?;

    for _ in 0..=MAX_REDIRECTS {
        let request = Request::builder()
            .uri(uri.clone())
            .header(
                header::USER_AGENT,
                concat!("taskdiary/", env!("CARGO_PKG_VERSION")),
            )
            .body(String::new())
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        let response = client
            .request(request)
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        let status = response.status();

        if status.is_redirection() {
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| {
                    AppError::Fetch(format!("redirect ({status}) without a Location header"))
                })?;
            log::debug!("following redirect to {location}");
            uri = resolve_location(&uri, location)?;
            continue;
        }

        if !status.is_success() {
            return Err(AppError::Fetch(format!("server returned {status}")));
        }

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?
            .to_bytes();

        let text = String::from_utf8_lossy(&body).into_owned();

        if text.trim_start().starts_with('<') {
            return Err(AppError::NonCsvResponse(
                "the server sent an HTML page; is the sheet published as CSV?".to_string(),
            ));
        }

        return Ok(text);
    }

    Err(AppError::Fetch(format!(
        "too many redirects (more than {MAX_REDIRECTS})"
    )))
}
