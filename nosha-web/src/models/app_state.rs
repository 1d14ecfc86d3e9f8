use crate::session::Session;
use yewdux::Store;

/// Process-wide application state, hydrated from the session store on mount
/// and rewritten only by the login, registration and logout flows.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// The persisted session, if any.
    pub session: Session,
    /// Whether the signed-in vendor still has onboarding to finish.
    pub is_new_user: bool,
}

impl AppState {
    /// Whether a vendor is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }
}
