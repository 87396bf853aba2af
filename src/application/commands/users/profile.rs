use super::{UserCommandService, policy};
use crate::{
    application::{
        commands::uploads::{discard, store_image},
        dto::{AuthenticatedUser, ProfileDto},
        error::ApplicationResult,
    },
    domain::{
        errors::{DomainResult, bounded_text},
        media::UploadedFile,
        portfolio::{PortfolioInfoChanges, value_objects::INFO_TITLE_MAX},
        user::{Email, ProfileFields},
    },
};

/// Partial profile update. Absent fields are left as they are; empty strings
/// clear optional fields.
#[derive(Default)]
pub struct UpdateProfileCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub about_me: Option<String>,
    pub about_me_ar: Option<String>,
    pub portfolio_title: Option<String>,
    pub portfolio_title_ar: Option<String>,
    pub background_image: Option<UploadedFile>,
}

const BACKGROUND_PREFIX: &str = "portfolio_background";

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<ProfileDto> {
        let actor = policy::AUTHENTICATED.require(actor)?;
        let now = self.clock.now();

        let fields = profile_fields(&command)?;
        let portfolio_title = command
            .portfolio_title
            .map(|t| bounded_text("portfolio_title", t, INFO_TITLE_MAX, false))
            .transpose()?;
        let portfolio_title_ar = command
            .portfolio_title_ar
            .map(|t| bounded_text("portfolio_title_ar", t, INFO_TITLE_MAX, false))
            .transpose()?;
        let background = command
            .background_image
            .map(|file| file.into_image("background_image"))
            .transpose()?;

        let previous_background = match &background {
            Some(_) => self
                .info_repo
                .find_by_user(actor.id)
                .await?
                .and_then(|info| info.background_image),
            None => None,
        };

        let stored = match &background {
            Some(upload) => {
                Some(store_image(self.storage.as_ref(), BACKGROUND_PREFIX, upload, now).await?)
            }
            None => None,
        };

        let changes = PortfolioInfoChanges {
            portfolio_title,
            portfolio_title_ar,
            background_image: stored.clone(),
            now,
        };
        let info_changes = (!changes.is_empty()).then_some(changes);

        let result = self
            .profile_repo
            .update_profile(actor.id, fields, info_changes)
            .await;

        let (user, info) = match result {
            Ok(saved) => saved,
            Err(err) => {
                if let Some(object) = &stored {
                    discard(self.storage.as_ref(), &object.name).await;
                }
                return Err(err.into());
            }
        };

        if let (Some(old), Some(new)) = (&previous_background, &stored) {
            if old.name != new.name {
                discard(self.storage.as_ref(), &old.name).await;
            }
        }
        tracing::info!(user_id = %user.id, "profile updated");

        Ok(ProfileDto::from_parts(&user, info.as_ref()))
    }
}

fn profile_fields(command: &UpdateProfileCommand) -> DomainResult<ProfileFields> {
    Ok(ProfileFields {
        first_name: command
            .first_name
            .clone()
            .map(|v| bounded_text("first_name", v.trim(), ProfileFields::NAME_MAX, true))
            .transpose()?,
        last_name: command
            .last_name
            .clone()
            .map(|v| bounded_text("last_name", v.trim(), ProfileFields::NAME_MAX, true))
            .transpose()?,
        email: command.email.clone().map(Email::new).transpose()?,
        job_title: ProfileFields::optional(
            "job_title",
            command.job_title.clone(),
            ProfileFields::JOB_TITLE_MAX,
        )?,
        phone_number: ProfileFields::optional(
            "phone_number",
            command.phone_number.clone(),
            ProfileFields::PHONE_MAX,
        )?,
        location: ProfileFields::optional(
            "location",
            command.location.clone(),
            ProfileFields::LOCATION_MAX,
        )?,
        about_me: ProfileFields::optional(
            "about_me",
            command.about_me.clone(),
            ProfileFields::ABOUT_MAX,
        )?,
        about_me_ar: ProfileFields::optional(
            "about_me_ar",
            command.about_me_ar.clone(),
            ProfileFields::ABOUT_MAX,
        )?,
    })
}
