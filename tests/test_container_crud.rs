// OpenSwift Rust Library for OpenStack Swift Compatible Object Storage
// Copyright 2025 OpenSwift Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod common;

use common::MockSwiftServer;
use openswift::swift::error::Error;
use openswift::swift::response_traits::HasContainer;
use openswift::swift::types::SwiftApi;

#[tokio::test]
async fn create_container_returns_the_name() {
    let server = MockSwiftServer::spawn().await;

    let resp = server
        .client()
        .create_container("albums")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.container().name(), Some("albums"));
    assert_eq!(resp.container_name(), "albums");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/v1/AUTH_test/albums");
    assert_eq!(
        requests[0].header("X-Auth-Token"),
        Some(common::TEST_AUTH_TOKEN)
    );
}

#[tokio::test]
async fn create_accepts_204_for_existing_container() {
    let server = MockSwiftServer::spawn().await;
    server.force_status("PUT", "albums", 204);

    let resp = server
        .client()
        .create_container("albums")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.container().name(), Some("albums"));
}

#[tokio::test]
async fn create_forbidden_surfaces_the_status() {
    let server = MockSwiftServer::spawn().await;
    server.force_status("PUT", "secret", 403);

    let err = server
        .client()
        .create_container("secret")
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnexpectedStatus { status: 403, .. }));
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn invalid_container_name_fails_before_any_request() {
    let server = MockSwiftServer::spawn().await;

    let err = server
        .client()
        .create_container("a/b")
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidContainerName(_)));
    assert_eq!(server.request_count(), 0);
}

#[tokio::test]
async fn container_name_is_percent_encoded_in_the_path() {
    let server = MockSwiftServer::spawn().await;

    server
        .client()
        .create_container("old photos")
        .send()
        .await
        .unwrap();
    let requests = server.requests();
    assert_eq!(requests[0].path, "/v1/AUTH_test/old%20photos");
}

#[tokio::test]
async fn delete_container_succeeds_on_204() {
    let server = MockSwiftServer::spawn().await;

    let resp = server
        .client()
        .delete_container("albums")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.container_name(), "albums");

    let requests = server.requests();
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/v1/AUTH_test/albums");
}

#[tokio::test]
async fn double_delete_surfaces_404_the_same_way_as_other_statuses() {
    let server = MockSwiftServer::spawn().await;

    server
        .client()
        .delete_container("albums")
        .send()
        .await
        .unwrap();

    server.force_status("DELETE", "albums", 404);
    let err = server
        .client()
        .delete_container("albums")
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnexpectedStatus { status: 404, .. }));
}

#[tokio::test]
async fn update_container_posts_and_succeeds_on_204() {
    let server = MockSwiftServer::spawn().await;

    server
        .client()
        .update_container("albums")
        .send()
        .await
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/v1/AUTH_test/albums");
}

#[tokio::test]
async fn get_container_reads_standard_headers() {
    let server = MockSwiftServer::spawn().await;
    server.set_container_headers(
        "albums",
        &[
            ("X-Container-Object-Count", "42"),
            ("X-Container-Bytes-Used", "1048576"),
            ("X-Timestamp", "1461948230.46023"),
        ],
    );

    let resp = server
        .client()
        .get_container("albums")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.object_count().unwrap(), Some(42));
    assert_eq!(resp.bytes_used().unwrap(), Some(1048576));
    assert_eq!(
        resp.timestamp().unwrap().as_deref(),
        Some("1461948230.46023")
    );

    let requests = server.requests();
    assert_eq!(requests[0].method, "HEAD");
}

#[tokio::test]
async fn get_missing_container_surfaces_404() {
    let server = MockSwiftServer::spawn().await;
    server.force_status("HEAD", "nope", 404);

    let err = server
        .client()
        .get_container("nope")
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnexpectedStatus { status: 404, .. }));
}
