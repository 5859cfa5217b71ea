use crate::domain::entities::application::{ApplicationBundle, ApplicationRecord};
use crate::domain::errors::domain_error::DomainError;
use crate::domain::ports::primary::application_import_use_case::ApplicationImportUseCase;
use crate::domain::ports::secondary::repositories::ApplicationCommandRepository;
use std::sync::Arc;

pub struct ApplicationImportService {
    command_repo: Arc<dyn ApplicationCommandRepository>,
}

impl ApplicationImportService {
    pub fn new(command_repo: Arc<dyn ApplicationCommandRepository>) -> Self {
        Self { command_repo }
    }

    fn validate(bundle: &ApplicationBundle) -> Result<(), DomainError> {
        if bundle.application_name().is_empty() {
            return Err(DomainError::InvalidBundle(
                "the bundle has no usable file name".to_string(),
            ));
        }
        if bundle.content.trim().is_empty() {
            return Err(DomainError::InvalidBundle(format!(
                "{} is empty",
                bundle.file_name
            )));
        }
        if bundle.is_json() {
            serde_json::from_str::<serde_json::Value>(&bundle.content).map_err(|err| {
                DomainError::InvalidBundle(format!("{}: {err}", bundle.file_name))
            })?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ApplicationImportUseCase for ApplicationImportService {
    async fn import(&self, bundle: ApplicationBundle) -> Result<ApplicationRecord, DomainError> {
        Self::validate(&bundle)?;

        let record = self
            .command_repo
            .upsert_application(bundle.application_name(), bundle.content)
            .await?;
        Ok(record)
    }
}
