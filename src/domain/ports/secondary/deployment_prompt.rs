/// Confirmation-modal collaborator for row-level actions. The listing only
/// opens the prompt with the stored file and the requested intent; the
/// deployment backend owns everything that happens after confirmation.
pub trait DeploymentPrompt: Send + Sync {
    fn open(&self, application_file: &str, deploy: bool);
}
