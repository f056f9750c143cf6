use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    SignedOut,
    SignedIn { email: String, remember_me: bool },
}

impl Session {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Session::SignedIn { .. })
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Session::SignedIn { email, .. } => Some(email),
            Session::SignedOut => None,
        }
    }

    /// Opens the dashboard. There is no account backend, so every attempt
    /// succeeds; the password is never stored.
    pub fn sign_in(&mut self, credentials: Credentials) {
        info!(email = %credentials.email, remember_me = credentials.remember_me, "signed in");
        *self = Session::SignedIn {
            email: credentials.email,
            remember_me: credentials.remember_me,
        };
    }

    pub fn sign_out(&mut self) {
        if let Session::SignedIn { email, .. } = self {
            info!(email = %email, "signed out");
        }
        *self = Session::SignedOut;
    }
}
