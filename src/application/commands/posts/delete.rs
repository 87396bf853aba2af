use super::{PostCommandService, policy};
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        policy::OWNER.authorize_request(actor)?;
        let post = self.load(command.id).await?;
        policy::OWNER.authorize_object(actor, &post)?;

        self.post_repo.delete(post.id).await?;
        tracing::info!(post_id = command.id, "post deleted");
        Ok(())
    }
}
