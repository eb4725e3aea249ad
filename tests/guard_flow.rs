//! End-to-end guard behavior over a realistic route table.

use lms_router::nav::{active_index, NavItem};
use lms_router::{GuardDecision, Role, RouteGuard, Session, SharedGuard};

mod common;

fn guard() -> RouteGuard {
    RouteGuard::from_config(&common::app_config())
}

#[test]
fn test_anonymous_browsing_the_catalog() {
    let guard = guard();
    let visitor = Session::Anonymous;

    // The catalog and nested course pages are public.
    assert_eq!(guard.evaluate("/courses", &visitor), GuardDecision::Render);
    assert_eq!(
        guard.evaluate("/courses/101", &visitor),
        GuardDecision::Render
    );
    assert_eq!(
        guard.evaluate("/courses/101/reviews", &visitor),
        GuardDecision::Render
    );

    // The player behind a course requires a session.
    assert_eq!(
        guard.evaluate("/courses/101/learn", &visitor),
        GuardDecision::Redirect {
            to: "/login".to_string()
        }
    );
}

#[test]
fn test_student_session_flow() {
    let guard = guard();
    let student = Session::with_role(Role::Student);

    assert_eq!(
        guard.evaluate("/courses/101/learn", &student),
        GuardDecision::Render
    );
    assert_eq!(guard.evaluate("/dashboard", &student), GuardDecision::Render);

    // Signed-in users are bounced off the auth pages.
    assert_eq!(
        guard.evaluate("/login", &student),
        GuardDecision::Redirect {
            to: "/dashboard".to_string()
        }
    );
    assert_eq!(
        guard.evaluate("/register", &student),
        GuardDecision::Redirect {
            to: "/dashboard".to_string()
        }
    );

    // Role-gated areas: instructor rule names its own redirect, the admin
    // rule renders nothing permanently.
    assert_eq!(
        guard.evaluate("/instructor", &student),
        GuardDecision::Redirect {
            to: "/become-instructor".to_string()
        }
    );
    assert_eq!(guard.evaluate("/admin", &student), GuardDecision::Deny);
    assert_eq!(guard.evaluate("/admin/messages", &student), GuardDecision::Deny);
}

#[test]
fn test_admin_session_flow() {
    let guard = guard();
    let admin = Session::with_role(Role::Admin);

    assert_eq!(guard.evaluate("/admin", &admin), GuardDecision::Render);
    assert_eq!(
        guard.evaluate("/admin/messages", &admin),
        GuardDecision::Render
    );
    assert_eq!(guard.evaluate("/admin", &Session::Anonymous),
        GuardDecision::Redirect { to: "/login".to_string() });
}

#[test]
fn test_unlisted_path_falls_back_to_public() {
    let guard = guard();
    assert_eq!(
        guard.evaluate("/contact", &Session::Anonymous),
        GuardDecision::Render
    );
}

#[test]
fn test_nav_highlighting_follows_the_matcher() {
    let config = common::app_config();
    let items: Vec<NavItem> = config
        .nav
        .iter()
        .map(|n| NavItem::new(n.label.clone(), &n.pattern))
        .collect();

    assert_eq!(active_index(&items, "/"), Some(0));
    assert_eq!(active_index(&items, "/courses"), Some(1));
    assert_eq!(active_index(&items, "/courses/101"), Some(1));
    assert_eq!(active_index(&items, "/dashboard"), Some(2));
    assert_eq!(active_index(&items, "/coursesX"), None);
}

#[test]
fn test_hot_swap_changes_decisions_for_existing_handles() {
    let shared = SharedGuard::new(guard());
    let render_side = shared.clone();

    assert_eq!(
        render_side.evaluate("/contact", &Session::Anonymous),
        GuardDecision::Render
    );

    // Tighten the table: everything unmatched now requires a session.
    let tightened = common::load_from_str(
        r#"
        [defaults]
        fallback_access = "require-auth"
        "#,
    )
    .unwrap();
    shared.replace(RouteGuard::from_config(&tightened));

    assert_eq!(
        render_side.evaluate("/contact", &Session::Anonymous),
        GuardDecision::Redirect {
            to: "/login".to_string()
        }
    );
}
