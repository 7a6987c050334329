//! Organizations list screen tests: gate-then-fetch sequencing and
//! creation feedback.

mod common;

use common::*;
use portal_client::nav::NavTarget;
use portal_client::screens::{Feedback, OrganizationsScreen};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn list_is_not_fetched_when_the_gate_rejects() {
    let mut portal = TestPortal::spawn().await;

    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&portal.gateway)
        .await;
    // Sequenced, not raced: an unauthenticated visit never asks for the list.
    Mock::given(method("GET"))
        .and(path("/orgs/get-all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&portal.gateway)
        .await;

    let mut screen = OrganizationsScreen::new();
    let target = screen
        .load(&portal.portal.gate, &mut portal.portal.memberships)
        .await;

    assert_eq!(target, Some(NavTarget::Login));
}

#[tokio::test]
async fn list_loads_after_the_session_resolves() {
    let mut portal = TestPortal::spawn().await;
    let creator = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(ResponseTemplate::new(200).set_body_json(introspection_json(
            creator,
            "user@example.com",
            "User",
            json!("writer"),
        )))
        .mount(&portal.gateway)
        .await;
    Mock::given(method("GET"))
        .and(path("/orgs/get-all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            org_json("org-1", "One", creator, vec![]),
        ])))
        .expect(1)
        .mount(&portal.gateway)
        .await;

    let mut screen = OrganizationsScreen::new();
    assert!(screen
        .load(&portal.portal.gate, &mut portal.portal.memberships)
        .await
        .is_none());

    assert!(screen.state().ready().is_some());
    assert_eq!(portal.portal.memberships.organizations().len(), 1);
}

#[tokio::test]
async fn creation_failure_is_reported_as_feedback() {
    let mut portal = TestPortal::spawn().await;

    Mock::given(method("POST"))
        .and(path("/orgs/create"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"error": "Failed to create organization"})),
        )
        .mount(&portal.gateway)
        .await;

    let mut screen = OrganizationsScreen::new();
    let feedback = screen
        .create_organization(&mut portal.portal.memberships, "Acme", "a workspace")
        .await;

    assert_eq!(
        feedback,
        Feedback::Error("Failed to create organization".to_string())
    );
}

#[tokio::test]
async fn caller_created_orgs_come_from_their_own_endpoint() {
    let portal = TestPortal::spawn().await;
    let creator = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/orgs/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            org_json("org-mine", "Mine", creator, vec![]),
        ])))
        .expect(1)
        .mount(&portal.gateway)
        .await;

    let created = portal.portal.memberships.list_created().await.unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].id, "org-mine");
}
