use std::borrow::Cow;

/// Settings slice error type.
#[relay_derive::relay_error]
pub enum SettingsError {
    #[error("Unknown line{}: {message}", format_context(.context))]
    UnknownLine { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
