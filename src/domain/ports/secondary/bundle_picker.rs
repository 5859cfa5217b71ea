use crate::domain::entities::application::ApplicationBundle;

pub trait BundlePicker: Send + Sync {
    /// Lets the user pick a bundle file from disk. Returns `None` when the
    /// dialog is dismissed or the file cannot be read.
    fn pick_bundle(&self) -> Option<ApplicationBundle>;
}
