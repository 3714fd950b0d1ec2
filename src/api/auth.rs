use super::{path, ApiClient};
use crate::error::ApiError;
use crate::models::{Credentials, Registration, TokenPair, User};
use crate::session::Session;

impl ApiClient {
    /// Exchanges credentials for a token pair and decodes it into a session.
    /// A token the client cannot read never becomes a session.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        credentials.validate()?;
        let pair: TokenPair = self.post(&path(&["auth", "jwt", "create"]), credentials).await?;
        Ok(Session::from_pair(pair)?)
    }

    pub async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        registration.validate()?;
        self.post(&path(&["auth", "users"]), registration).await
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.require_session()?;
        self.get(&path(&["auth", "users", "me"])).await
    }
}
