use crate::config::constants::DATABASE_URL;
use crate::domain::ports::primary::application_import_use_case::ApplicationImportUseCase;
use crate::domain::ports::primary::application_query_use_case::ApplicationQueryUseCase;
use crate::domain::ports::secondary::bundle_picker::BundlePicker;
use crate::domain::ports::secondary::deployment_prompt::DeploymentPrompt;
use crate::domain::ports::secondary::repositories::SettingsRepository;
use crate::domain::ports::secondary::session::SessionProvider;
use crate::domain::services::application_import_service::ApplicationImportService;
use crate::domain::services::application_query_service::ApplicationQueryService;
use crate::infrastructure::database::command_repository::CommandRepository;
use crate::infrastructure::database::pool::SqliteRepositoryPool;
use crate::infrastructure::database::query_repository::QueryRepository;
use crate::infrastructure::database::settings_repository::SqliteSettingsRepository;
use crate::infrastructure::dialogs::native_deployment_prompt::NativeDeploymentPrompt;
use crate::infrastructure::filesystem::native_bundle_picker::NativeBundlePicker;
use crate::infrastructure::session::env_session::EnvSessionProvider;
use crate::utils::dialogs::popup_error_and_exit;
use std::sync::Arc;

/// Wired-up collaborators for the console, one instance per process.
pub struct AppdockService {
    pub query_use_case: Arc<dyn ApplicationQueryUseCase>,
    pub import_use_case: Arc<dyn ApplicationImportUseCase>,
    pub bundle_picker: Arc<dyn BundlePicker>,
    pub deployment_prompt: Arc<dyn DeploymentPrompt>,
    pub settings: Arc<dyn SettingsRepository>,
    pub session: Arc<dyn SessionProvider>,
}

impl AppdockService {
    #[must_use]
    pub fn create() -> Self {
        let pool = SqliteRepositoryPool::new(DATABASE_URL)
            .unwrap_or_else(|error| popup_error_and_exit(error));

        let query_repository = Arc::new(QueryRepository::new(pool.clone()));
        let command_repository = Arc::new(CommandRepository::new(pool.clone()));

        Self {
            query_use_case: Arc::new(ApplicationQueryService::new(query_repository)),
            import_use_case: Arc::new(ApplicationImportService::new(command_repository)),
            bundle_picker: Arc::new(NativeBundlePicker),
            deployment_prompt: Arc::new(NativeDeploymentPrompt),
            settings: Arc::new(SqliteSettingsRepository::new(pool)),
            session: Arc::new(EnvSessionProvider),
        }
    }
}
