// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use jobdash_api::Client;
use jobdash_app::{ApiReply, ApplicationDraft, ApplicationId, ApplicationStatus, ErrorKind};
use jobdash_testkit::ApplicationFaker;
use std::io::Read;
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Method, Response, Server};

struct Captured {
    method: Method,
    url: String,
    body: String,
}

/// Serves one canned response and hands back what the client sent.
fn serve_once(status: u16, body: &'static str) -> Result<(String, thread::JoinHandle<Captured>)> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let mut request = server.recv().expect("request expected");
        let mut received = String::new();
        request
            .as_reader()
            .read_to_string(&mut received)
            .expect("request body should be readable");
        let captured = Captured {
            method: request.method().clone(),
            url: request.url().to_owned(),
            body: received,
        };
        let response = Response::from_string(body)
            .with_status_code(status)
            .with_header(
                Header::from_bytes("Content-Type", "application/json")
                    .expect("valid content type header"),
            );
        request.respond(response).expect("response should succeed");
        captured
    });

    Ok((addr, handle))
}

fn client(addr: &str) -> Result<Client> {
    Client::new(addr, Some(Duration::from_secs(2)))
}

#[test]
fn list_decodes_applications_in_server_order() -> Result<()> {
    let (addr, handle) = serve_once(
        200,
        r#"[
            {"id":2,"companyName":"Beta","role":"SRE","source":"Referral","status":"OFFER"},
            {"id":1,"companyName":"Acme","role":"Dev","source":"LinkedIn","status":"APPLIED"}
        ]"#,
    )?;

    let apps = client(&addr)?.list()?;
    let captured = handle.join().expect("server thread should join");

    assert_eq!(captured.method, Method::Get);
    assert_eq!(captured.url, "/applications");
    assert_eq!(
        apps.iter().map(|app| app.id.get()).collect::<Vec<_>>(),
        vec![2, 1]
    );
    assert_eq!(apps[0].status, ApplicationStatus::Offer);
    Ok(())
}

#[test]
fn list_with_malformed_body_is_unexpected() -> Result<()> {
    let (addr, handle) = serve_once(200, r#"{"not":"a list"}"#)?;
    let error = client(&addr)?
        .list()
        .expect_err("object body should not decode as a list");
    handle.join().expect("server thread should join");

    assert_eq!(error.kind(), ErrorKind::Unexpected);
    Ok(())
}

#[test]
fn create_posts_camel_case_draft_and_decodes_record() -> Result<()> {
    let (addr, handle) = serve_once(
        201,
        r#"{"id":9,"companyName":"Acme","role":"SRE","source":"Referral","status":"APPLIED"}"#,
    )?;
    let draft = ApplicationDraft {
        company_name: "Acme".to_owned(),
        role: "SRE".to_owned(),
        source: "Referral".to_owned(),
    };

    let reply = client(&addr)?.create(&draft)?;
    let captured = handle.join().expect("server thread should join");

    assert_eq!(captured.method, Method::Post);
    assert_eq!(captured.url, "/applications");
    let sent: serde_json::Value = serde_json::from_str(&captured.body)?;
    assert_eq!(
        sent,
        serde_json::json!({"companyName": "Acme", "role": "SRE", "source": "Referral"})
    );
    let record = reply.record().expect("reply should carry the created record");
    assert_eq!(record.id, ApplicationId::new(9));
    Ok(())
}

#[test]
fn create_accepts_plain_success_body() -> Result<()> {
    let (addr, handle) = serve_once(200, "Application saved")?;
    let mut faker = ApplicationFaker::new(17);

    let reply = client(&addr)?.create(&faker.draft())?;
    handle.join().expect("server thread should join");

    assert_eq!(reply, ApiReply::Ack("Application saved".to_owned()));
    Ok(())
}

#[test]
fn create_validation_failure_carries_message() -> Result<()> {
    let (addr, handle) = serve_once(400, r#"{"message":"Company name is required"}"#)?;
    let mut faker = ApplicationFaker::new(3);

    let error = client(&addr)?
        .create(&faker.draft())
        .expect_err("400 should fail");
    handle.join().expect("server thread should join");

    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(error.status(), Some(400));
    assert_eq!(
        error.body_message(),
        Some("Company name is required".to_owned())
    );
    Ok(())
}

#[test]
fn set_status_sends_query_parameter_and_empty_body() -> Result<()> {
    let (addr, handle) = serve_once(
        200,
        r#"{"id":7,"companyName":"Acme","role":"SRE","source":"Referral","status":"OFFER"}"#,
    )?;

    let reply = client(&addr)?.set_status(ApplicationId::new(7), ApplicationStatus::Offer)?;
    let captured = handle.join().expect("server thread should join");

    assert_eq!(captured.method, Method::Put);
    assert_eq!(captured.url, "/applications/7/status?status=OFFER");
    assert!(captured.body.is_empty());
    assert!(matches!(reply, ApiReply::Record(record) if record.status == ApplicationStatus::Offer));
    Ok(())
}

#[test]
fn remove_issues_delete() -> Result<()> {
    let (addr, handle) = serve_once(204, "")?;

    client(&addr)?.remove(ApplicationId::new(12))?;
    let captured = handle.join().expect("server thread should join");

    assert_eq!(captured.method, Method::Delete);
    assert_eq!(captured.url, "/applications/12");
    Ok(())
}

#[test]
fn server_error_is_unexpected_with_status() -> Result<()> {
    let (addr, handle) = serve_once(500, "")?;

    let error = client(&addr)?
        .remove(ApplicationId::new(1))
        .expect_err("500 should fail");
    handle.join().expect("server thread should join");

    assert_eq!(error.kind(), ErrorKind::Unexpected);
    assert_eq!(error.status(), Some(500));
    assert_eq!(error.to_string(), "request failed with status code 500");
    Ok(())
}

#[test]
fn unreachable_backend_is_a_network_error() -> Result<()> {
    let client = Client::new("http://127.0.0.1:1", Some(Duration::from_millis(200)))?;
    let error = client.list().expect_err("nothing listens on port 1");
    assert_eq!(error.kind(), ErrorKind::Network);
    assert!(error.to_string().contains("cannot reach http://127.0.0.1:1"));
    Ok(())
}

#[test]
fn ping_reports_count() -> Result<()> {
    let (addr, handle) = serve_once(
        200,
        r#"[{"id":1,"companyName":"Acme","role":"Dev","source":"LinkedIn","status":"APPLIED"}]"#,
    )?;

    let count = client(&addr)?.ping()?;
    handle.join().expect("server thread should join");

    assert_eq!(count, 1);
    Ok(())
}

#[test]
fn ping_error_contains_actionable_remediation() {
    let client = Client::new("http://127.0.0.1:1", Some(Duration::from_millis(200)))
        .expect("client should initialize");
    let error = client
        .ping()
        .expect_err("ping should fail for unreachable endpoint");
    assert!(error.to_string().contains("backend running"));
}
