//! Route guards: pure decisions over a session snapshot.

use crate::navigation::{DASHBOARD_ROUTE, FORBIDDEN_ROUTE, LOGIN_ROUTE, RETURN_URL_PARAM, Redirect};
use crate::session::SessionSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(Redirect),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    /// Signed-in users only.
    Authenticated,
    /// Signed-in users holding at least one of the roles.
    AnyRole(Vec<String>),
    /// Anonymous users only (login and register screens).
    Guest,
}

impl Guard {
    pub fn any_role<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Guard::AnyRole(roles.into_iter().map(Into::into).collect())
    }

    pub fn check(&self, session: &SessionSnapshot, target: &str) -> Decision {
        match self {
            Guard::Authenticated => {
                if session.is_authenticated() {
                    Decision::Allow
                } else {
                    login_redirect(target)
                }
            }
            Guard::AnyRole(roles) => {
                if !session.is_authenticated() {
                    login_redirect(target)
                } else if session.has_any_role(roles) {
                    Decision::Allow
                } else {
                    Decision::Redirect(Redirect::to(FORBIDDEN_ROUTE))
                }
            }
            Guard::Guest => {
                if session.is_authenticated() {
                    Decision::Redirect(Redirect::to(DASHBOARD_ROUTE))
                } else {
                    Decision::Allow
                }
            }
        }
    }
}

/// Runs guards in order; the first redirect wins.
pub fn check_all(guards: &[Guard], session: &SessionSnapshot, target: &str) -> Decision {
    guards
        .iter()
        .map(|guard| guard.check(session, target))
        .find(|decision| !decision.is_allowed())
        .unwrap_or(Decision::Allow)
}

fn login_redirect(target: &str) -> Decision {
    Decision::Redirect(Redirect::to(LOGIN_ROUTE).with_param(RETURN_URL_PARAM, target))
}
