use relay_derive::relay_error;
use std::borrow::Cow;

#[relay_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<std::borrow::Cow<'static, str>> },
}

fn main() {
    let err: DemoError = "boom".into();
    drop(err);
}
