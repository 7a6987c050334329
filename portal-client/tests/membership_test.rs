//! Membership store tests: list ordering, detail patching, invites, and
//! role-gated controls.

mod common;

use common::*;
use portal_client::models::Role;
use portal_client::screens::{Feedback, OrgDetailScreen};
use portal_client::services::MutationOutcome;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn detail_path(org_id: &str) -> String {
    format!("/orgs/get/{org_id}")
}

async fn mock_session(portal: &TestPortal, role: &str) -> Uuid {
    let user_id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(ResponseTemplate::new(200).set_body_json(introspection_json(
            user_id,
            "viewer@example.com",
            "Viewer",
            json!(role),
        )))
        .mount(&portal.gateway)
        .await;
    user_id
}

#[tokio::test]
async fn membership_list_preserves_gateway_order() {
    let mut portal = TestPortal::spawn().await;
    let creator = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/orgs/get-all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            org_json("org-b", "Beta", creator, vec![]),
            org_json("org-a", "Alpha", creator, vec![]),
            org_json("org-c", "Gamma", creator, vec![]),
        ])))
        .mount(&portal.gateway)
        .await;

    portal.portal.memberships.refresh().await.unwrap();

    let ids: Vec<&str> = portal
        .portal
        .memberships
        .organizations()
        .iter()
        .map(|o| o.id.as_str())
        .collect();
    assert_eq!(ids, vec!["org-b", "org-a", "org-c"]);
}

#[tokio::test]
async fn role_update_patches_the_cached_detail_without_a_refetch() {
    let mut portal = TestPortal::spawn().await;
    let viewer = Uuid::new_v4();
    let member = Uuid::new_v4();

    let org = org_json(
        "org-1",
        "Acme",
        viewer,
        vec![
            member_json(viewer, "viewer@example.com", "admin"),
            member_json(member, "member@example.com", "reader"),
        ],
    );
    Mock::given(method("GET"))
        .and(path(detail_path("org-1")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(org_detail_json(org, viewer, "viewer@example.com", "admin")),
        )
        .expect(1)
        .mount(&portal.gateway)
        .await;

    Mock::given(method("POST"))
        .and(path("/orgs/update-role/org-1"))
        .and(body_partial_json(json!({"user_id": member, "role": "writer"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "User role updated successfully"})),
        )
        .expect(1)
        .mount(&portal.gateway)
        .await;

    portal.portal.memberships.load_detail("org-1").await.unwrap();
    let outcome = portal
        .portal
        .memberships
        .update_member_role("org-1", member, Role::Writer)
        .await
        .unwrap();
    assert!(outcome.is_applied());

    // Read back from the cache: the one member's role was replaced, and the
    // expect(1) on the detail mock proves no second fetch happened.
    let detail = portal.portal.memberships.detail().unwrap();
    assert_eq!(detail.member_role(member), Some(Role::Writer));
    assert_eq!(detail.member_role(viewer), Some(Role::Admin));
}

#[tokio::test]
async fn invite_sends_the_org_and_email_then_clears_the_panel() {
    let mut portal = TestPortal::spawn().await;
    let viewer = mock_session(&portal, "admin").await;

    let org = org_json(
        "acme",
        "Acme",
        viewer,
        vec![member_json(viewer, "viewer@example.com", "admin")],
    );
    Mock::given(method("GET"))
        .and(path(detail_path("acme")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(org_detail_json(org, viewer, "viewer@example.com", "admin")),
        )
        .mount(&portal.gateway)
        .await;

    Mock::given(method("POST"))
        .and(path("/orgs/invite/acme"))
        .and(body_partial_json(json!({
            "email": "user@example.com",
            "org_id": "acme"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Invite sent successfully"})),
        )
        .expect(1)
        .mount(&portal.gateway)
        .await;

    let mut screen = OrgDetailScreen::new("acme");
    assert!(screen
        .load(&portal.portal.gate, &mut portal.portal.memberships)
        .await
        .is_none());

    screen.open_invite_panel();
    screen.invite_email = "user@example.com".to_string();
    let feedback = screen.send_invite(&mut portal.portal.memberships).await;

    assert!(matches!(feedback, Some(Feedback::Success(_))));
    assert!(screen.invite_email.is_empty());
    assert!(!screen.is_invite_panel_open());
}

#[tokio::test]
async fn admin_changes_a_member_role_through_the_screen() {
    let mut portal = TestPortal::spawn().await;
    let viewer = mock_session(&portal, "admin").await;
    let member = Uuid::new_v4();

    let org = org_json(
        "org-5",
        "Team",
        viewer,
        vec![
            member_json(viewer, "viewer@example.com", "admin"),
            member_json(member, "member@example.com", "reader"),
        ],
    );
    Mock::given(method("GET"))
        .and(path(detail_path("org-5")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(org_detail_json(org, viewer, "viewer@example.com", "admin")),
        )
        .mount(&portal.gateway)
        .await;
    Mock::given(method("POST"))
        .and(path("/orgs/update-role/org-5"))
        .and(body_partial_json(json!({"user_id": member, "role": "writer"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&portal.gateway)
        .await;

    let mut screen = OrgDetailScreen::new("org-5");
    assert!(screen
        .load(&portal.portal.gate, &mut portal.portal.memberships)
        .await
        .is_none());

    // The viewer's own row stays locked even for an admin.
    assert!(!screen.role_button_enabled(&portal.portal.memberships, viewer, Role::Reader));
    assert!(screen.role_button_enabled(&portal.portal.memberships, member, Role::Writer));

    let feedback = screen
        .change_member_role(&mut portal.portal.memberships, member, Role::Writer)
        .await;
    assert!(matches!(feedback, Feedback::Success(_)));

    let detail = portal.portal.memberships.detail().unwrap();
    assert_eq!(detail.member_role(member), Some(Role::Writer));
}

#[tokio::test]
async fn reader_viewer_gets_no_invite_or_role_controls() {
    let mut portal = TestPortal::spawn().await;
    let viewer = mock_session(&portal, "reader").await;
    let other = Uuid::new_v4();

    let org = org_json(
        "org-2",
        "Plain",
        other,
        vec![
            member_json(viewer, "viewer@example.com", "reader"),
            member_json(other, "owner@example.com", "admin"),
        ],
    );
    Mock::given(method("GET"))
        .and(path(detail_path("org-2")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(org_detail_json(org, viewer, "viewer@example.com", "reader")),
        )
        .mount(&portal.gateway)
        .await;

    let mut screen = OrgDetailScreen::new("org-2");
    assert!(screen
        .load(&portal.portal.gate, &mut portal.portal.memberships)
        .await
        .is_none());

    let gates = screen.state().ready().expect("screen should be ready");
    assert!(!gates.can_invite);
    assert!(!gates.can_manage_roles);
    for candidate in Role::ALL {
        assert!(!screen.role_button_enabled(&portal.portal.memberships, other, candidate));
    }
}

#[tokio::test]
async fn server_denial_is_a_reported_outcome_and_leaves_the_cache_alone() {
    let mut portal = TestPortal::spawn().await;
    let viewer = Uuid::new_v4();
    let member = Uuid::new_v4();

    let org = org_json(
        "org-3",
        "Locked",
        viewer,
        vec![member_json(member, "member@example.com", "reader")],
    );
    Mock::given(method("GET"))
        .and(path(detail_path("org-3")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(org_detail_json(org, viewer, "viewer@example.com", "admin")),
        )
        .mount(&portal.gateway)
        .await;
    Mock::given(method("POST"))
        .and(path("/orgs/update-role/org-3"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "Access denied"})))
        .mount(&portal.gateway)
        .await;

    portal.portal.memberships.load_detail("org-3").await.unwrap();
    let outcome = portal
        .portal
        .memberships
        .update_member_role("org-3", member, Role::Admin)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        MutationOutcome::Rejected {
            message: "Access denied".to_string()
        }
    );
    let detail = portal.portal.memberships.detail().unwrap();
    assert_eq!(detail.member_role(member), Some(Role::Reader));
}

#[tokio::test]
async fn invalid_invite_email_never_reaches_the_network() {
    let mut portal = TestPortal::spawn().await;
    let viewer = Uuid::new_v4();

    let org = org_json("org-4", "Strict", viewer, vec![]);
    Mock::given(method("GET"))
        .and(path(detail_path("org-4")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(org_detail_json(org, viewer, "viewer@example.com", "admin")),
        )
        .mount(&portal.gateway)
        .await;
    Mock::given(method("POST"))
        .and(path("/orgs/invite/org-4"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&portal.gateway)
        .await;

    portal.portal.memberships.load_detail("org-4").await.unwrap();
    let outcome = portal
        .portal
        .memberships
        .invite("org-4", "not-an-email")
        .await
        .unwrap();

    assert!(matches!(outcome, MutationOutcome::Rejected { .. }));
}

#[tokio::test]
async fn created_organization_is_prepended_to_the_cached_list() {
    let mut portal = TestPortal::spawn().await;
    let creator = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/orgs/get-all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            org_json("org-old", "Old", creator, vec![]),
        ])))
        .mount(&portal.gateway)
        .await;
    Mock::given(method("POST"))
        .and(path("/orgs/create"))
        .and(body_partial_json(json!({"name": "Fresh", "description": "brand new"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(org_json(
            "org-new",
            "Fresh",
            creator,
            vec![member_json(creator, "creator@example.com", "admin")],
        )))
        .mount(&portal.gateway)
        .await;

    portal.portal.memberships.refresh().await.unwrap();
    portal
        .portal
        .memberships
        .create("Fresh", "brand new")
        .await
        .unwrap();

    let ids: Vec<&str> = portal
        .portal
        .memberships
        .organizations()
        .iter()
        .map(|o| o.id.as_str())
        .collect();
    assert_eq!(ids, vec!["org-new", "org-old"]);
}
