use std::fmt::Debug;

/// The banner surfacing errors to the user.
pub trait ErrorBanner: Debug + Send + Sync {
    fn show(&self, message: &str);

    fn hide(&self);
}
