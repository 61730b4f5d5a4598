/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use smugmug_legacy::v1_2::{Client, Config, Creds};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a client whose API and upload origins both point at the mock
/// server.
#[allow(dead_code)]
pub(crate) fn client_for(server: &MockServer) -> Client {
    let config = Config {
        api_origin: server.uri(),
        upload_origin: server.uri(),
        ..Config::default()
    };
    Client::with_config(Creds::from_api_key("test-key"), config).unwrap()
}

/// Starts a mock server answering every POST with the given reply text.
#[allow(dead_code)]
pub(crate) async fn post_server(reply: &str) -> (MockServer, Client) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(reply))
        .mount(&server)
        .await;
    let client = client_for(&server);
    (server, client)
}

/// Starts a mock server answering every PUT with the given reply text.
#[allow(dead_code)]
pub(crate) async fn put_server(reply: &str) -> (MockServer, Client) {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_string(reply))
        .mount(&server)
        .await;
    let client = client_for(&server);
    (server, client)
}

/// The single request the mock server received.
#[allow(dead_code)]
pub(crate) async fn only_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.pop().unwrap()
}

/// Splits a form-urlencoded body into its pairs, in wire order.
#[allow(dead_code)]
pub(crate) fn form_pairs(request: &wiremock::Request) -> Vec<String> {
    let body = String::from_utf8(request.body.clone()).unwrap();
    body.split('&').map(str::to_string).collect()
}
