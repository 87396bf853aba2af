// src/infrastructure/i18n/catalog.rs
use crate::application::ports::i18n::{Locale, Translator};
use crate::domain::message::{Message, MessageKey};

/// Compiled-in English and Arabic message templates. `{}` placeholders are
/// filled from the message arguments in order.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub const fn template(key: MessageKey, locale: Locale) -> &'static str {
        match locale {
            Locale::En => english(key),
            Locale::Ar => arabic(key),
        }
    }
}

impl Translator for StaticCatalog {
    fn translate(&self, message: &Message, locale: Locale) -> String {
        render(Self::template(message.key(), locale), message.args())
    }
}

fn render(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        if let Some(arg) = args.next() {
            out.push_str(arg);
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

const fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::InvalidCredentials => "Invalid credentials",
        MessageKey::AccountDisabled => "User account is disabled.",
        MessageKey::NotAuthenticated => "Authentication credentials were not provided.",
        MessageKey::PermissionDenied => "You do not have permission to perform this action.",
        MessageKey::TokenInvalid => "Token is invalid or expired",
        MessageKey::TokenExpired => "Token has expired",
        MessageKey::TokenWrongType => "Token has wrong type",
        MessageKey::InvalidRefreshToken => "Invalid refresh token",
        MessageKey::OldPasswordIncorrect => "Old password is not correct",
        MessageKey::PasswordChanged => "Password changed successfully",
        MessageKey::PasswordTooShort => {
            "This password is too short. It must contain at least {} characters."
        }
        MessageKey::PasswordEntirelyNumeric => "This password is entirely numeric.",
        MessageKey::PasswordTooCommon => "This password is too common.",
        MessageKey::PasswordTooSimilar => "The password is too similar to your personal information.",
        MessageKey::UserNotFound => "User not found.",
        MessageKey::UsernameInvalid => {
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
        }
        MessageKey::UsernameTaken => "A user with that username already exists.",
        MessageKey::EmailInvalid => "Enter a valid email address.",
        MessageKey::CategoryNameNotEnglish => {
            "Category name must contain only English letters and spaces."
        }
        MessageKey::CategoryArabicNameNotArabic => {
            "Arabic category name must contain only Arabic letters and spaces."
        }
        MessageKey::CategoryNotFound => "Category not found.",
        MessageKey::CategoryAlreadyExists => "A category with this name already exists.",
        MessageKey::CategoryProtected => "Cannot delete category with {} existing portfolio(s).",
        MessageKey::PortfolioNotFound => "Portfolio not found.",
        MessageKey::PortfolioImageNotFound => "Portfolio image not found.",
        MessageKey::PortfolioInfoNotFound => "Portfolio info not found",
        MessageKey::PortfolioCategoryMissing => "Invalid pk \"{}\" - object does not exist.",
        MessageKey::PostNotFound => "Post not found.",
        MessageKey::PostCategoryInvalid => "\"{}\" is not a valid choice.",
        MessageKey::ImageTooLarge => "Image size ({}MB) exceeds 5MB limit",
        MessageKey::ImageInvalid => {
            "Upload a valid image. The file you uploaded was either not an image or a corrupted image."
        }
        MessageKey::FieldRequired => "This field is required.",
        MessageKey::FieldBlank => "This field may not be blank.",
        MessageKey::FieldTooLong => "Ensure this field has no more than {} characters.",
        MessageKey::FieldNegative => "Ensure this value is greater than or equal to 0.",
        MessageKey::InvalidId => "A valid positive integer is required.",
        MessageKey::InvalidPage => "Invalid page.",
        MessageKey::MalformedRequest => "Malformed request: {}",
        MessageKey::InternalError => "A server error occurred.",
    }
}

const fn arabic(key: MessageKey) -> &'static str {
    match key {
        MessageKey::InvalidCredentials => "بيانات الدخول غير صحيحة",
        MessageKey::AccountDisabled => "حساب المستخدم معطل.",
        MessageKey::NotAuthenticated => "لم يتم تقديم بيانات الاعتماد.",
        MessageKey::PermissionDenied => "ليس لديك صلاحية للقيام بهذا الإجراء.",
        MessageKey::TokenInvalid => "الرمز غير صالح أو منتهي الصلاحية",
        MessageKey::TokenExpired => "انتهت صلاحية الرمز",
        MessageKey::TokenWrongType => "نوع الرمز غير صحيح",
        MessageKey::InvalidRefreshToken => "رمز التحديث غير صالح",
        MessageKey::OldPasswordIncorrect => "كلمة المرور القديمة غير صحيحة",
        MessageKey::PasswordChanged => "تم تغيير كلمة المرور بنجاح",
        MessageKey::PasswordTooShort => {
            "كلمة المرور هذه قصيرة جدًا. يجب أن تحتوي على {} أحرف على الأقل."
        }
        MessageKey::PasswordEntirelyNumeric => "كلمة المرور هذه تتكون من أرقام فقط.",
        MessageKey::PasswordTooCommon => "كلمة المرور هذه شائعة جدًا.",
        MessageKey::PasswordTooSimilar => "كلمة المرور مشابهة جدًا لمعلوماتك الشخصية.",
        MessageKey::UserNotFound => "المستخدم غير موجود.",
        MessageKey::UsernameInvalid => {
            "أدخل اسم مستخدم صالحًا. يمكن أن يحتوي على أحرف وأرقام و @/./+/-/_ فقط."
        }
        MessageKey::UsernameTaken => "يوجد مستخدم بهذا الاسم بالفعل.",
        MessageKey::EmailInvalid => "أدخل عنوان بريد إلكتروني صالحًا.",
        MessageKey::CategoryNameNotEnglish => {
            "يجب أن يحتوي اسم الفئة على أحرف إنجليزية وفراغات فقط."
        }
        MessageKey::CategoryArabicNameNotArabic => {
            "يجب أن يحتوي الاسم العربي للفئة على أحرف عربية وفراغات فقط."
        }
        MessageKey::CategoryNotFound => "الفئة غير موجودة.",
        MessageKey::CategoryAlreadyExists => "توجد فئة بهذا الاسم بالفعل.",
        MessageKey::CategoryProtected => "لا يمكن حذف الفئة لوجود {} عمل/أعمال مرتبطة بها.",
        MessageKey::PortfolioNotFound => "العمل غير موجود.",
        MessageKey::PortfolioImageNotFound => "صورة العمل غير موجودة.",
        MessageKey::PortfolioInfoNotFound => "لم يتم العثور على معلومات العمل",
        MessageKey::PortfolioCategoryMissing => "المعرّف \"{}\" غير صالح - العنصر غير موجود.",
        MessageKey::PostNotFound => "المنشور غير موجود.",
        MessageKey::PostCategoryInvalid => "\"{}\" ليس خيارًا صالحًا.",
        MessageKey::ImageTooLarge => "حجم الصورة ({} MB) يتجاوز حد 5MB",
        MessageKey::ImageInvalid => "ارفع صورة صالحة. الملف المرفوع ليس صورة أو أنه تالف.",
        MessageKey::FieldRequired => "هذا الحقل مطلوب.",
        MessageKey::FieldBlank => "لا يمكن ترك هذا الحقل فارغًا.",
        MessageKey::FieldTooLong => "تأكد من أن هذا الحقل لا يتجاوز {} حرفًا.",
        MessageKey::FieldNegative => "تأكد من أن هذه القيمة أكبر من أو تساوي 0.",
        MessageKey::InvalidId => "مطلوب عدد صحيح موجب.",
        MessageKey::InvalidPage => "صفحة غير صالحة.",
        MessageKey::MalformedRequest => "طلب غير صالح: {}",
        MessageKey::InternalError => "حدث خطأ في الخادم.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_both_translations_with_matching_placeholders() {
        for key in MessageKey::ALL {
            let en = StaticCatalog::template(key, Locale::En);
            let ar = StaticCatalog::template(key, Locale::Ar);
            assert!(!en.is_empty() && !ar.is_empty(), "{key} is empty");
            assert_ne!(en, ar, "{key} is not translated");
            assert_eq!(
                en.matches("{}").count(),
                ar.matches("{}").count(),
                "{key} placeholder mismatch"
            );
        }
    }

    #[test]
    fn arguments_fill_placeholders_in_order() {
        let catalog = StaticCatalog;
        let message = Message::new(MessageKey::ImageTooLarge).with_arg("6.50");
        assert_eq!(
            catalog.translate(&message, Locale::En),
            "Image size (6.50MB) exceeds 5MB limit"
        );
        assert_eq!(
            catalog.translate(&message, Locale::Ar),
            "حجم الصورة (6.50 MB) يتجاوز حد 5MB"
        );

        let protected = Message::new(MessageKey::CategoryProtected).with_arg(3);
        assert_eq!(
            catalog.translate(&protected, Locale::En),
            "Cannot delete category with 3 existing portfolio(s)."
        );
    }

    #[test]
    fn missing_arguments_leave_placeholder_empty() {
        assert_eq!(render("a {} b {}", &["x".to_string()]), "a x b ");
    }
}
