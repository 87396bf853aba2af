use crate::domain::errors::DomainError;
use crate::domain::message::MessageKey;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_CATEGORY_USER_SLUG: &str = "categories_user_slug_key";
const CNT_CATEGORY_ORDER_CHECK: &str = "categories_display_order_chk";
const CNT_PORTFOLIO_CATEGORY: &str = "portfolios_category_id_fkey";
const CNT_PORTFOLIO_IMAGE_PORTFOLIO: &str = "portfolio_images_portfolio_id_fkey";
const CNT_POST_CATEGORY_CHECK: &str = "posts_category_chk";

const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Maps the failure of a DELETE on a row that others reference with
/// `ON DELETE RESTRICT`. A foreign key violation there can only mean the row
/// is still in use, so the SQLSTATE alone decides; the server's message text
/// is localized and never inspected.
pub fn map_restricted_delete(err: sqlx::Error, in_use: MessageKey) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) =>
        {
            DomainError::Protected(in_use.into())
        }
        _ => map_sqlx(err),
    }
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => DomainError::Conflict(MessageKey::UsernameTaken.into()),
                    CNT_CATEGORY_USER_SLUG => {
                        DomainError::Conflict(MessageKey::CategoryAlreadyExists.into())
                    }
                    CNT_CATEGORY_ORDER_CHECK => DomainError::invalid("order", MessageKey::FieldNegative),
                    // deletes go through `map_restricted_delete`
                    CNT_PORTFOLIO_CATEGORY => {
                        DomainError::invalid("category", MessageKey::PortfolioCategoryMissing)
                    }
                    CNT_PORTFOLIO_IMAGE_PORTFOLIO => {
                        DomainError::not_found(MessageKey::PortfolioNotFound)
                    }
                    CNT_POST_CATEGORY_CHECK => {
                        DomainError::invalid("category", MessageKey::PostCategoryInvalid)
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = code {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Persistence("unique constraint violated".into());
                    }
                    FOREIGN_KEY_VIOLATION => {
                        return DomainError::Persistence("foreign key violated".into());
                    }
                    "23514" => {
                        return DomainError::Persistence("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;

    #[derive(Debug, thiserror::Error)]
    #[error("{message}")]
    struct ServerError {
        code: &'static str,
        constraint: &'static str,
        message: &'static str,
    }

    impl DatabaseError for ServerError {
        fn message(&self) -> &str {
            self.message
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn constraint(&self) -> Option<&str> {
            Some(self.constraint)
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::ForeignKeyViolation
        }
    }

    fn fk_violation(message: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(ServerError {
            code: FOREIGN_KEY_VIOLATION,
            constraint: CNT_PORTFOLIO_CATEGORY,
            message,
        }))
    }

    #[test]
    fn restricted_delete_is_protected_whatever_the_server_language() {
        for message in [
            "update or delete on table \"categories\" violates foreign key constraint",
            "UPDATE oder DELETE in Tabelle »categories« verletzt Fremdschlüssel-Constraint",
        ] {
            let err = map_restricted_delete(fk_violation(message), MessageKey::CategoryProtected);
            assert!(
                matches!(err, DomainError::Protected(ref m) if m.key() == MessageKey::CategoryProtected),
                "{err:?}"
            );
        }
    }

    #[test]
    fn insert_with_unknown_category_names_the_field() {
        let err = map_sqlx(fk_violation("insert or update on table \"portfolios\""));
        match err {
            DomainError::Validation { field, message } => {
                assert_eq!(field, Some("category"));
                assert_eq!(message.key(), MessageKey::PortfolioCategoryMissing);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
