use std::borrow::Cow;

/// Reasons [`crate::LoggerBuilder::init`] can fail.
#[relay_derive::relay_error]
pub enum LoggerError {
    /// The log directory could not be opened for rolling files.
    #[error("Cannot open log files{}: {source}", format_context(.context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// Another subscriber already owns this process.
    #[error("Logger already installed{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// Bad level, rotation, filter or output combination.
    #[error("Invalid logger configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal logger error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
