//! HttpVehicleSource against a one-shot local HTTP server

use etc_domain::repository::VehicleSource;
use etc_infra::HttpVehicleSource;
use etc_types::{Error, TagStatus};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve a single canned response and return the endpoint URL
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{}/api/Vehicle", addr)
}

#[tokio::test]
async fn test_fetch_all_decodes_records() {
    let url = serve_once(
        "200 OK",
        r#"[{"id":1,"vehicleType":"car","licensePlateNumber":"ABC1","vehicleOwnerId":"o1",
            "tollTag":{"id":9,"activationDate":"2024-01-01T00:00:00","expiredDate":null,"status":"active","vehicleId":1}},
           {"id":2,"vehicleType":"van","licensePlateNumber":"XYZ2"}]"#,
    )
    .await;

    let source = HttpVehicleSource::new(url).unwrap();
    let records = source.fetch_all().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].status(), Some(&TagStatus::Active));
    assert!(records[1].toll_tag.is_none());
}

#[tokio::test]
async fn test_server_error_status() {
    let url = serve_once("500 Internal Server Error", "oops").await;
    let source = HttpVehicleSource::new(url).unwrap();
    let err = source.fetch_all().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_null_body_is_empty_response() {
    let url = serve_once("200 OK", "null").await;
    let source = HttpVehicleSource::new(url).unwrap();
    let err = source.fetch_all().await.unwrap_err();
    assert!(matches!(err, Error::EmptyResponse));
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let url = serve_once("200 OK", r#"{"not": "an array"}"#).await;
    let source = HttpVehicleSource::new(url).unwrap();
    let err = source.fetch_all().await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_unreachable_host() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpVehicleSource::new(format!("http://{}/api/Vehicle", addr)).unwrap();
    assert!(matches!(source.fetch_all().await, Err(Error::Http(_))));
}
