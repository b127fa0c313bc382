//! Session bootstrap: one status check against the backend decides whether
//! the client starts out signed in, and the result is reconciled into the
//! shared [`AuthStore`].
//!
//! The old client spread this over three independently scheduled effects;
//! here the whole lifecycle is a single [`Machine`] with guarded
//! transitions, so ordering is explicit and the logic tests as a plain
//! value. The UI component ([`crate::view::components::auth_gate`]) is
//! only wiring around it.

use std::future::Future;

use mockall::automock;
use tracing::debug;

use crate::{
    api::{CheckAuthResponse, Error},
    store::{AuthStore, User},
};

/// What the status check concluded about the viewer.
///
/// Anything short of a positive, well-formed answer collapses to
/// `Unauthenticated`: negative responses, missing users, transport
/// failures, bad statuses and malformed bodies alike. Absence of proof
/// of authentication is treated as absence of authentication.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Authenticated(User),
    Unauthenticated,
}

impl Outcome {
    pub fn from_response(result: Result<CheckAuthResponse, Error>) -> Self {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                debug!("session status check failed: {e}");
                return Outcome::Unauthenticated;
            }
        };

        match response {
            CheckAuthResponse {
                success: true,
                user: Some(user),
            } => Outcome::Authenticated(user),
            _ => Outcome::Unauthenticated,
        }
    }
}

/// The transport seam for the status check, so the bootstrap logic can be
/// driven against a mock.
#[automock]
pub trait StatusCheck {
    fn check_auth(&self) -> impl Future<Output = Result<CheckAuthResponse, Error>>;
}

/// Issues exactly one status request and interprets it. No retry: a
/// failed check proceeds as unauthenticated rather than blocking the app.
pub async fn run_check<C: StatusCheck>(client: &C) -> Outcome {
    Outcome::from_response(client.check_auth().await)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Checking,
    Resolved,
}

/// Store mutation performed by a settle. Never more than one.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    LoggedIn(User),
    LoggedOut,
    None,
}

/// The bootstrap state machine: `Idle` → `Checking` → `Resolved`.
///
/// `Resolved` is terminal for rendering purposes. Navigation re-runs the
/// status check, and the machine re-settles from `Resolved` so the store
/// is still reconciled, but the gate never blocks again.
#[derive(Debug)]
pub struct Machine {
    phase: Phase,
}

impl Machine {
    pub fn new() -> Self {
        Machine { phase: Phase::Idle }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_resolved(&self) -> bool {
        self.phase == Phase::Resolved
    }

    /// Begins the check: raises the global loading flag. A no-op unless
    /// the machine is still `Idle`.
    pub fn start(&mut self, store: &mut AuthStore) {
        if self.phase != Phase::Idle {
            return;
        }

        store.set_loading(true);
        self.phase = Phase::Checking;
    }

    /// Applies one settled outcome to the store and clears the global
    /// loading flag. A no-op from `Idle`: nothing can settle before it
    /// was started.
    pub fn settle(&mut self, outcome: Outcome, store: &mut AuthStore) -> Action {
        if self.phase == Phase::Idle {
            return Action::None;
        }

        let action = Self::reconcile(outcome, store);
        match &action {
            Action::LoggedIn(user) => debug!("session restored for {}", user.id),
            Action::LoggedOut => debug!("stale session cleared"),
            Action::None => {}
        }

        store.set_loading(false);
        self.phase = Phase::Resolved;
        action
    }

    fn reconcile(outcome: Outcome, store: &mut AuthStore) -> Action {
        match outcome {
            Outcome::Authenticated(user) => {
                let same_identity =
                    store.user().map(|u| u.id.as_str()) == Some(user.id.as_str());
                if store.is_authenticated() && same_identity {
                    return Action::None;
                }

                store.login(user.clone());
                Action::LoggedIn(user)
            }
            Outcome::Unauthenticated => {
                // never force a logout mid-signup
                if store.signup_in_progress() {
                    return Action::None;
                }

                if !store.is_authenticated() {
                    return Action::None;
                }

                store.logout();
                Action::LoggedOut
            }
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{run_check, Action, Machine, MockStatusCheck, Outcome, Phase};
    use crate::{
        api::{CheckAuthResponse, Error},
        store::{AuthStore, User},
    };
    use test_case::test_case;

    fn user(id: &str) -> User {
        User {
            id: id.to_owned(),
            name: "Dana".to_owned(),
            email: "dana@atrium.example".to_owned(),
        }
    }

    fn authenticated_store(id: &str) -> AuthStore {
        let mut store = AuthStore::default();
        store.login(user(id));
        store
    }

    enum FromResponseTest {
        PositiveWithUser,
        PositiveWithoutUser,
        NegativeWithUser,
        TransportError,
        BadStatus,
        MalformedBody,
    }

    #[test_case(FromResponseTest::PositiveWithUser; "positive_with_user")]
    #[test_case(FromResponseTest::PositiveWithoutUser; "positive_without_user")]
    #[test_case(FromResponseTest::NegativeWithUser; "negative_with_user")]
    #[test_case(FromResponseTest::TransportError; "transport_error")]
    #[test_case(FromResponseTest::BadStatus; "bad_status")]
    #[test_case(FromResponseTest::MalformedBody; "malformed_body")]
    fn from_response(test_name: FromResponseTest) {
        struct TestCase {
            result: Result<CheckAuthResponse, Error>,
            expected: Outcome,
        }

        let tc = match test_name {
            FromResponseTest::PositiveWithUser => TestCase {
                result: Ok(CheckAuthResponse {
                    success: true,
                    user: Some(user("u1")),
                }),
                expected: Outcome::Authenticated(user("u1")),
            },
            FromResponseTest::PositiveWithoutUser => TestCase {
                result: Ok(CheckAuthResponse {
                    success: true,
                    user: None,
                }),
                expected: Outcome::Unauthenticated,
            },
            FromResponseTest::NegativeWithUser => TestCase {
                result: Ok(CheckAuthResponse {
                    success: false,
                    user: Some(user("u1")),
                }),
                expected: Outcome::Unauthenticated,
            },
            FromResponseTest::TransportError => TestCase {
                result: Err(Error::Transport("connection refused".to_owned())),
                expected: Outcome::Unauthenticated,
            },
            FromResponseTest::BadStatus => TestCase {
                result: Err(Error::Status(503)),
                expected: Outcome::Unauthenticated,
            },
            FromResponseTest::MalformedBody => TestCase {
                result: Err(Error::Decode("expected value at line 1".to_owned())),
                expected: Outcome::Unauthenticated,
            },
        };

        assert_eq!(Outcome::from_response(tc.result), tc.expected);
    }

    #[test]
    fn start_raises_the_loading_flag() {
        let mut machine = Machine::new();
        let mut store = AuthStore::default();

        machine.start(&mut store);

        assert_eq!(machine.phase(), Phase::Checking);
        assert!(store.is_loading());
    }

    #[test]
    fn start_is_guarded_after_resolution() {
        let mut machine = Machine::new();
        let mut store = AuthStore::default();

        machine.start(&mut store);
        machine.settle(Outcome::Unauthenticated, &mut store);
        machine.start(&mut store);

        assert_eq!(machine.phase(), Phase::Resolved);
        assert!(!store.is_loading());
    }

    enum SettleTest {
        FreshLogin,
        AlreadyAuthenticated,
        DifferentIdentity,
        StaleSession,
        SignupInProgress,
        AnonymousStaysAnonymous,
    }

    #[test_case(SettleTest::FreshLogin; "fresh_login")]
    #[test_case(SettleTest::AlreadyAuthenticated; "already_authenticated")]
    #[test_case(SettleTest::DifferentIdentity; "different_identity")]
    #[test_case(SettleTest::StaleSession; "stale_session")]
    #[test_case(SettleTest::SignupInProgress; "signup_in_progress")]
    #[test_case(SettleTest::AnonymousStaysAnonymous; "anonymous_stays_anonymous")]
    fn settle(test_name: SettleTest) {
        struct TestCase {
            store: AuthStore,
            outcome: Outcome,
            expected_action: Action,
            expected_user: Option<&'static str>,
        }

        let signup_store = {
            let mut store = authenticated_store("u1");
            store.set_signup_in_progress(true);
            store
        };

        let tc = match test_name {
            SettleTest::FreshLogin => TestCase {
                store: AuthStore::default(),
                outcome: Outcome::Authenticated(user("u1")),
                expected_action: Action::LoggedIn(user("u1")),
                expected_user: Some("u1"),
            },
            SettleTest::AlreadyAuthenticated => TestCase {
                store: authenticated_store("u1"),
                outcome: Outcome::Authenticated(user("u1")),
                expected_action: Action::None,
                expected_user: Some("u1"),
            },
            SettleTest::DifferentIdentity => TestCase {
                store: authenticated_store("u1"),
                outcome: Outcome::Authenticated(user("u2")),
                expected_action: Action::LoggedIn(user("u2")),
                expected_user: Some("u2"),
            },
            SettleTest::StaleSession => TestCase {
                store: authenticated_store("u1"),
                outcome: Outcome::Unauthenticated,
                expected_action: Action::LoggedOut,
                expected_user: None,
            },
            SettleTest::SignupInProgress => TestCase {
                store: signup_store,
                outcome: Outcome::Unauthenticated,
                expected_action: Action::None,
                expected_user: Some("u1"),
            },
            SettleTest::AnonymousStaysAnonymous => TestCase {
                store: AuthStore::default(),
                outcome: Outcome::Unauthenticated,
                expected_action: Action::None,
                expected_user: None,
            },
        };

        let mut machine = Machine::new();
        let mut store = tc.store;
        machine.start(&mut store);

        let action = machine.settle(tc.outcome, &mut store);

        assert_eq!(action, tc.expected_action);
        assert_eq!(
            store.user().map(|u| u.id.as_str()),
            tc.expected_user,
            "store identity after settle"
        );
        assert_eq!(machine.phase(), Phase::Resolved);
        assert!(!store.is_loading(), "loading must clear on resolution");
    }

    #[test]
    fn settle_before_start_is_a_no_op() {
        let mut machine = Machine::new();
        let mut store = AuthStore::default();

        let action = machine.settle(Outcome::Authenticated(user("u1")), &mut store);

        assert_eq!(action, Action::None);
        assert_eq!(machine.phase(), Phase::Idle);
        assert!(store.user().is_none());
    }

    #[test]
    fn background_resettle_reconciles_without_reblocking() {
        let mut machine = Machine::new();
        let mut store = AuthStore::default();

        machine.start(&mut store);
        machine.settle(Outcome::Authenticated(user("u1")), &mut store);
        assert!(machine.is_resolved());

        // a navigation-triggered re-check found the session expired
        let action = machine.settle(Outcome::Unauthenticated, &mut store);

        assert_eq!(action, Action::LoggedOut);
        assert!(machine.is_resolved(), "the gate never re-blocks");
        assert!(!store.is_loading());
    }

    #[test]
    fn abandoned_check_still_clears_loading() {
        let mut machine = Machine::new();
        let mut store = AuthStore::default();
        machine.start(&mut store);

        // unmount before the query settles: the scoped cleanup only
        // touches the loading flag
        store.set_loading(false);

        assert!(!store.is_loading());
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn run_check_issues_exactly_one_request() {
        let mut client = MockStatusCheck::new();
        client.expect_check_auth().times(1).returning(|| {
            Box::pin(async {
                Ok(CheckAuthResponse {
                    success: true,
                    user: Some(User {
                        id: "u1".to_owned(),
                        name: String::new(),
                        email: String::new(),
                    }),
                })
            })
        });

        let outcome = run_check(&client).await;
        assert!(matches!(outcome, Outcome::Authenticated(u) if u.id == "u1"));
    }

    #[tokio::test]
    async fn run_check_treats_failure_as_unauthenticated() {
        let mut client = MockStatusCheck::new();
        client
            .expect_check_auth()
            .times(1)
            .returning(|| Box::pin(async { Err(Error::Transport("connection refused".to_owned())) }));

        assert_eq!(run_check(&client).await, Outcome::Unauthenticated);
    }
}
