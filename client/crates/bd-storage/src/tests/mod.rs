
use bd_core::{Session, User};

pub(crate) fn sample_session() -> Session {
    Session::new(
        "t1".to_string(),
        Some("r1".to_string()),
        Some(User::new("1", "a@b.com", "Ann")),
    )
}
