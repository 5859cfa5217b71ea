use crate::domain::ports::secondary::deployment_prompt::DeploymentPrompt;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Native confirmation dialog standing in front of the deployment backend.
/// What happens after the user confirms is the backend's concern, not ours.
pub struct NativeDeploymentPrompt;

impl DeploymentPrompt for NativeDeploymentPrompt {
    fn open(&self, application_file: &str, deploy: bool) {
        let intent = if deploy { "Deploy" } else { "Undeploy" };
        let size = application_file.len();

        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(format!("{intent} application"))
            .set_description(format!(
                "{intent} the selected application bundle ({size} bytes)?"
            ))
            .set_buttons(MessageButtons::OkCancel)
            .show();
    }
}
