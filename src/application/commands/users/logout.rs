use super::{UserCommandService, policy};
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

impl UserCommandService {
    /// Tokens are stateless, so there is nothing to revoke; the call only
    /// checks the caller is signed in and records the event.
    pub fn logout(&self, actor: Option<&AuthenticatedUser>) -> ApplicationResult<()> {
        let actor = policy::AUTHENTICATED.require(actor)?;
        tracing::info!(user_id = %actor.id, "user logged out");
        Ok(())
    }
}
