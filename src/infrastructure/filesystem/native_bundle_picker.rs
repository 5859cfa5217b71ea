use crate::domain::entities::application::ApplicationBundle;
use crate::domain::ports::secondary::bundle_picker::BundlePicker;
use crate::utils::dialogs::popup_error;
use std::path::PathBuf;

const BUNDLE_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

pub struct NativeBundlePicker;

impl BundlePicker for NativeBundlePicker {
    fn pick_bundle(&self) -> Option<ApplicationBundle> {
        let path = pick_bundle_path()?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())?;

        match std::fs::read_to_string(&path) {
            Ok(content) => Some(ApplicationBundle { file_name, content }),
            Err(err) => {
                popup_error(err);
                None
            }
        }
    }
}

#[cfg(target_os = "linux")]
fn pick_bundle_path() -> Option<PathBuf> {
    use crate::config::constants::TOKIO_RUNTIME;

    // The xdg-portal backend is async only. `pick_bundle` always runs on a
    // blocking thread, so driving the dialog to completion here is safe.
    TOKIO_RUNTIME.handle().block_on(async {
        rfd::AsyncFileDialog::new()
            .add_filter("Application bundle", &BUNDLE_EXTENSIONS)
            .pick_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    })
}

#[cfg(not(target_os = "linux"))]
fn pick_bundle_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Application bundle", &BUNDLE_EXTENSIONS)
        .pick_file()
}
