use appdock::domain::entities::application::ApplicationBundle;
use appdock::domain::entities::query::{
    ApplicationQuery, SortColumn, SortDirection, SortState,
};
use appdock::domain::errors::domain_error::DomainError;
use appdock::domain::ports::primary::application_import_use_case::ApplicationImportUseCase;
use appdock::domain::ports::primary::application_query_use_case::ApplicationQueryUseCase;
use appdock::domain::ports::secondary::repositories::SettingsRepository;
use appdock::domain::services::application_import_service::ApplicationImportService;
use appdock::domain::services::application_query_service::ApplicationQueryService;
use appdock::infrastructure::database::command_repository::CommandRepository;
use appdock::infrastructure::database::pool::SqliteRepositoryPool;
use appdock::infrastructure::database::query_repository::QueryRepository;
use appdock::infrastructure::database::settings_repository::SqliteSettingsRepository;
use std::sync::Arc;
use tempfile::TempDir;

// Test helpers and fixtures
struct TestFixture {
    _temp_dir: TempDir, // Store it to prevent its disposal
    query_service: Arc<dyn ApplicationQueryUseCase>,
    import_service: Arc<dyn ApplicationImportUseCase>,
    settings: Arc<dyn SettingsRepository>,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_url = db_path.display().to_string();

        let pool =
            SqliteRepositoryPool::new(&db_url).expect("Failed to create test database");

        let query_service = Arc::new(ApplicationQueryService::new(Arc::new(
            QueryRepository::new(pool.clone()),
        )));
        let import_service = Arc::new(ApplicationImportService::new(Arc::new(
            CommandRepository::new(pool.clone()),
        )));
        let settings = Arc::new(SqliteSettingsRepository::new(pool));

        Self {
            _temp_dir: temp_dir,
            query_service,
            import_service,
            settings,
        }
    }

    async fn import_named(&self, name: &str) {
        self.import_service
            .import(yaml_bundle(name, &format!("name: {name}\nreplicas: 1")))
            .await
            .expect("import should succeed");
    }

    async fn list(
        &self,
        query: ApplicationQuery,
        page: usize,
        page_size: usize,
    ) -> appdock::domain::entities::pagination::PaginatedApplications {
        self.query_service
            .list_applications(query, page, page_size)
            .await
            .expect("listing should succeed")
    }
}

fn yaml_bundle(name: &str, content: &str) -> ApplicationBundle {
    ApplicationBundle {
        file_name: format!("{name}.yaml"),
        content: content.to_string(),
    }
}

fn search_for(term: &str) -> ApplicationQuery {
    ApplicationQuery {
        search: Some(term.to_string()),
        sort: None,
    }
}

fn sorted_by(column: SortColumn, direction: SortDirection) -> ApplicationQuery {
    ApplicationQuery {
        search: None,
        sort: Some(SortState { column, direction }),
    }
}

#[tokio::test]
async fn imported_records_come_back_verbatim() {
    let fixture = TestFixture::new();

    let record = fixture
        .import_service
        .import(yaml_bundle("billing-api", "name: billing-api\nreplicas: 2"))
        .await
        .unwrap();

    assert_eq!(record.name, "billing-api");
    assert_eq!(record.application_file, "name: billing-api\nreplicas: 2");
    assert_eq!(record.created_at, record.updated_at);

    let page = fixture.list(ApplicationQuery::default(), 0, 10).await;
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items, vec![record]);
}

#[tokio::test]
async fn empty_store_lists_an_empty_page() {
    let fixture = TestFixture::new();

    let page = fixture.list(ApplicationQuery::default(), 0, 10).await;

    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn pages_never_exceed_the_page_size() {
    let fixture = TestFixture::new();
    for i in 0..12 {
        fixture.import_named(&format!("app-{i:02}")).await;
    }

    let first = fixture.list(ApplicationQuery::default(), 0, 10).await;
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_count, 12);

    let second = fixture.list(ApplicationQuery::default(), 1, 10).await;
    assert_eq!(second.items.len(), 2);
    assert_eq!(second.total_count, 12);
}

#[tokio::test]
async fn deep_pages_report_the_full_count() {
    let fixture = TestFixture::new();
    for i in 0..57 {
        fixture.import_named(&format!("app-{i:02}")).await;
    }

    let page = fixture.list(ApplicationQuery::default(), 2, 20).await;

    assert_eq!(page.items.len(), 17);
    assert_eq!(page.total_count, 57);
}

#[tokio::test]
async fn search_narrows_both_items_and_count() {
    let fixture = TestFixture::new();
    fixture.import_named("payments-v1").await;
    fixture.import_named("payments-v2").await;
    fixture.import_named("frontend").await;

    let hits = fixture.list(search_for("payments"), 0, 10).await;
    assert_eq!(hits.total_count, 2);
    assert!(hits.items.iter().all(|item| item.name.contains("payments")));

    let misses = fixture.list(search_for("no-such-app"), 0, 10).await;
    assert!(misses.items.is_empty());
    assert_eq!(misses.total_count, 0);
}

#[tokio::test]
async fn sorting_by_name_honors_both_directions() {
    let fixture = TestFixture::new();
    fixture.import_named("charlie").await;
    fixture.import_named("alpha").await;
    fixture.import_named("bravo").await;

    let ascending = fixture
        .list(sorted_by(SortColumn::Name, SortDirection::Ascending), 0, 10)
        .await;
    let names: Vec<&str> = ascending.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "bravo", "charlie"]);

    let descending = fixture
        .list(sorted_by(SortColumn::Name, SortDirection::Descending), 0, 10)
        .await;
    let names: Vec<&str> = descending.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["charlie", "bravo", "alpha"]);
}

#[tokio::test]
async fn default_order_is_most_recently_updated_first() {
    let fixture = TestFixture::new();
    fixture.import_named("older").await;
    fixture.import_named("newer").await;

    let page = fixture.list(ApplicationQuery::default(), 0, 10).await;

    assert_eq!(page.items[0].name, "newer");
    assert_eq!(page.items[1].name, "older");
}

#[tokio::test]
async fn sorting_by_upload_timestamp_keeps_insertion_order() {
    let fixture = TestFixture::new();
    fixture.import_named("first").await;
    fixture.import_named("second").await;
    fixture.import_named("third").await;

    let page = fixture
        .list(
            sorted_by(SortColumn::CreatedAt, SortDirection::Ascending),
            0,
            10,
        )
        .await;

    let names: Vec<&str> = page.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn reimporting_replaces_the_file_and_bumps_only_updated_at() {
    let fixture = TestFixture::new();

    let original = fixture
        .import_service
        .import(yaml_bundle("site", "version: 1"))
        .await
        .unwrap();

    let replaced = fixture
        .import_service
        .import(yaml_bundle("site", "version: 2"))
        .await
        .unwrap();

    assert_eq!(replaced.name, "site");
    assert_eq!(replaced.application_file, "version: 2");
    assert_eq!(replaced.created_at, original.created_at);
    assert!(replaced.updated_at >= original.updated_at);

    let page = fixture.list(ApplicationQuery::default(), 0, 10).await;
    assert_eq!(page.total_count, 1);
}

#[tokio::test]
async fn malformed_json_bundles_are_rejected() {
    let fixture = TestFixture::new();

    let result = fixture
        .import_service
        .import(ApplicationBundle {
            file_name: "broken.json".to_string(),
            content: "{ this is not json".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DomainError::InvalidBundle(_))));

    let page = fixture.list(ApplicationQuery::default(), 0, 10).await;
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn well_formed_json_bundles_are_accepted() {
    let fixture = TestFixture::new();

    let record = fixture
        .import_service
        .import(ApplicationBundle {
            file_name: "service.json".to_string(),
            content: r#"{"name": "service", "replicas": 3}"#.to_string(),
        })
        .await
        .unwrap();

    assert_eq!(record.name, "service");
}

#[tokio::test]
async fn empty_bundles_are_rejected() {
    let fixture = TestFixture::new();

    let result = fixture
        .import_service
        .import(yaml_bundle("hollow", "   \n"))
        .await;

    assert!(matches!(result, Err(DomainError::InvalidBundle(_))));
}

#[test]
fn page_size_preference_round_trips() {
    let fixture = TestFixture::new();

    assert_eq!(fixture.settings.get_page_size().unwrap(), None);

    fixture.settings.set_page_size(25).unwrap();
    assert_eq!(fixture.settings.get_page_size().unwrap(), Some(25));

    fixture.settings.set_page_size(10).unwrap();
    assert_eq!(fixture.settings.get_page_size().unwrap(), Some(10));
}
