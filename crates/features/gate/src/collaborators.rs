use relay_kernel::domain::line::Line;
use std::sync::Arc;

/// Reports whether a user session is authenticated for a context.
pub trait SessionStateProvider<C: ?Sized> {
    fn is_logged_in(&self, context: &C) -> bool;
}

/// Reports the activation state of each SIM line for a context.
pub trait LineActivationRegistry<C: ?Sized> {
    fn active_status(&self, context: &C, line: Line) -> bool;
}

macro_rules! forward_collaborators {
    ($($wrapper:ty),+ $(,)?) => {$(
        impl<C: ?Sized, T: SessionStateProvider<C> + ?Sized> SessionStateProvider<C> for $wrapper {
            #[inline]
            fn is_logged_in(&self, context: &C) -> bool {
                (**self).is_logged_in(context)
            }
        }

        impl<C: ?Sized, T: LineActivationRegistry<C> + ?Sized> LineActivationRegistry<C> for $wrapper {
            #[inline]
            fn active_status(&self, context: &C, line: Line) -> bool {
                (**self).active_status(context, line)
            }
        }
    )+};
}

forward_collaborators!(&T, Box<T>, Arc<T>);
