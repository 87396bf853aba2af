// src/domain/message.rs
use std::fmt;

/// Stable identifiers for every user-facing message. The text itself lives in
/// the translation catalog; the domain only ever hands out keys and arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // auth
    InvalidCredentials,
    AccountDisabled,
    NotAuthenticated,
    PermissionDenied,
    TokenInvalid,
    TokenExpired,
    TokenWrongType,
    InvalidRefreshToken,
    OldPasswordIncorrect,
    PasswordChanged,
    PasswordTooShort,
    PasswordEntirelyNumeric,
    PasswordTooCommon,
    PasswordTooSimilar,
    // users
    UserNotFound,
    UsernameInvalid,
    UsernameTaken,
    EmailInvalid,
    // categories
    CategoryNameNotEnglish,
    CategoryArabicNameNotArabic,
    CategoryNotFound,
    CategoryAlreadyExists,
    CategoryProtected,
    // portfolios
    PortfolioNotFound,
    PortfolioImageNotFound,
    PortfolioInfoNotFound,
    PortfolioCategoryMissing,
    // posts
    PostNotFound,
    PostCategoryInvalid,
    // media
    ImageTooLarge,
    ImageInvalid,
    // generic
    FieldRequired,
    FieldBlank,
    FieldTooLong,
    FieldNegative,
    InvalidId,
    InvalidPage,
    MalformedRequest,
    InternalError,
}

impl MessageKey {
    pub const ALL: [Self; 39] = [
        Self::InvalidCredentials,
        Self::AccountDisabled,
        Self::NotAuthenticated,
        Self::PermissionDenied,
        Self::TokenInvalid,
        Self::TokenExpired,
        Self::TokenWrongType,
        Self::InvalidRefreshToken,
        Self::OldPasswordIncorrect,
        Self::PasswordChanged,
        Self::PasswordTooShort,
        Self::PasswordEntirelyNumeric,
        Self::PasswordTooCommon,
        Self::PasswordTooSimilar,
        Self::UserNotFound,
        Self::UsernameInvalid,
        Self::UsernameTaken,
        Self::EmailInvalid,
        Self::CategoryNameNotEnglish,
        Self::CategoryArabicNameNotArabic,
        Self::CategoryNotFound,
        Self::CategoryAlreadyExists,
        Self::CategoryProtected,
        Self::PortfolioNotFound,
        Self::PortfolioImageNotFound,
        Self::PortfolioInfoNotFound,
        Self::PortfolioCategoryMissing,
        Self::PostNotFound,
        Self::PostCategoryInvalid,
        Self::ImageTooLarge,
        Self::ImageInvalid,
        Self::FieldRequired,
        Self::FieldBlank,
        Self::FieldTooLong,
        Self::FieldNegative,
        Self::InvalidId,
        Self::InvalidPage,
        Self::MalformedRequest,
        Self::InternalError,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "auth.invalid_credentials",
            Self::AccountDisabled => "auth.account_disabled",
            Self::NotAuthenticated => "auth.not_authenticated",
            Self::PermissionDenied => "auth.permission_denied",
            Self::TokenInvalid => "auth.token_invalid",
            Self::TokenExpired => "auth.token_expired",
            Self::TokenWrongType => "auth.token_wrong_type",
            Self::InvalidRefreshToken => "auth.invalid_refresh_token",
            Self::OldPasswordIncorrect => "auth.old_password_incorrect",
            Self::PasswordChanged => "auth.password_changed",
            Self::PasswordTooShort => "auth.password_too_short",
            Self::PasswordEntirelyNumeric => "auth.password_entirely_numeric",
            Self::PasswordTooCommon => "auth.password_too_common",
            Self::PasswordTooSimilar => "auth.password_too_similar",
            Self::UserNotFound => "users.not_found",
            Self::UsernameInvalid => "users.username_invalid",
            Self::UsernameTaken => "users.username_taken",
            Self::EmailInvalid => "users.email_invalid",
            Self::CategoryNameNotEnglish => "categories.name_not_english",
            Self::CategoryArabicNameNotArabic => "categories.name_ar_not_arabic",
            Self::CategoryNotFound => "categories.not_found",
            Self::CategoryAlreadyExists => "categories.already_exists",
            Self::CategoryProtected => "categories.protected",
            Self::PortfolioNotFound => "portfolios.not_found",
            Self::PortfolioImageNotFound => "portfolios.image_not_found",
            Self::PortfolioInfoNotFound => "portfolios.info_not_found",
            Self::PortfolioCategoryMissing => "portfolios.category_missing",
            Self::PostNotFound => "posts.not_found",
            Self::PostCategoryInvalid => "posts.category_invalid",
            Self::ImageTooLarge => "media.image_too_large",
            Self::ImageInvalid => "media.image_invalid",
            Self::FieldRequired => "fields.required",
            Self::FieldBlank => "fields.blank",
            Self::FieldTooLong => "fields.too_long",
            Self::FieldNegative => "fields.negative",
            Self::InvalidId => "fields.invalid_id",
            Self::InvalidPage => "pagination.invalid_page",
            Self::MalformedRequest => "request.malformed",
            Self::InternalError => "server.internal_error",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message key together with the positional arguments substituted into the
/// localized template (`{}` placeholders, in order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    key: MessageKey,
    args: Vec<String>,
}

impl Message {
    pub const fn new(key: MessageKey) -> Self {
        Self {
            key,
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_arg(mut self, arg: impl ToString) -> Self {
        self.args.push(arg.to_string());
        self
    }

    pub const fn key(&self) -> MessageKey {
        self.key
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl From<MessageKey> for Message {
    fn from(key: MessageKey) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            f.write_str(self.key.as_str())
        } else {
            write!(f, "{} ({})", self.key.as_str(), self.args.join(", "))
        }
    }
}
