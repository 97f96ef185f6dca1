use chrono::{Duration, Utc};
use maestro_client::application::auth::{Auth, Session};
use maestro_client::application::config::Config;
use std::sync::Arc;
use tokio_test::block_on;

fn make_session(validity_secs: i64) -> Session {
    Session::new(
        "tok".to_string(),
        "org".to_string(),
        Utc::now(),
        Duration::seconds(validity_secs),
    )
}

#[test]
fn test_session_expiry_is_issue_time_plus_validity() {
    let issued = Utc::now();
    let session = Session::new("t".into(), "o".into(), issued, Duration::seconds(3600));
    assert_eq!(session.expires_at - session.issued_at, Duration::seconds(3600));
}

#[test]
fn test_session_inside_skew_window_is_stale() {
    let session = make_session(3600);
    let skew = Duration::seconds(10);
    assert!(session.is_valid(skew));
    assert!(!session.is_valid_at(session.expires_at - Duration::seconds(5), skew));
    assert!(session.is_valid_at(session.expires_at - Duration::seconds(11), skew));
}

#[test]
fn test_session_from_the_future_is_not_valid() {
    let session = make_session(3600);
    let before = session.issued_at - Duration::seconds(1);
    assert!(!session.is_valid_at(before, Duration::zero()));
}

#[test]
fn test_auth_logout_without_session_is_noop() {
    let auth = Auth::new(
        Arc::new(Config::with_credentials("a", "b")),
        reqwest::Client::new(),
    );
    block_on(async {
        auth.logout().await;
        assert!(!auth.is_valid().await);
        assert!(auth.current_session().await.is_none());
    });
}
