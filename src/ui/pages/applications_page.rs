use crate::config::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, TOKIO_RUNTIME};
use crate::domain::entities::application::ApplicationBundle;
use crate::domain::entities::pagination::PaginatedApplications;
use crate::domain::entities::query::{ApplicationQuery, SortColumn, SortDirection, SortState};
use crate::domain::entities::user::CurrentUser;
use crate::domain::ports::primary::application_import_use_case::ApplicationImportUseCase;
use crate::domain::ports::primary::application_query_use_case::ApplicationQueryUseCase;
use crate::domain::ports::secondary::bundle_picker::BundlePicker;
use crate::domain::ports::secondary::deployment_prompt::DeploymentPrompt;
use crate::domain::ports::secondary::repositories::SettingsRepository;
use crate::domain::ports::secondary::session::SessionProvider;
use crate::ui::app_factory::AppdockService;
use crate::ui::components::pagination::Pagination;
use crate::ui::components::search::Search;
use crate::ui::components::table::ApplicationTable;
use crate::ui::components::upload::{ImportState, UploadControl};
use crate::ui::messages::applications_message::ApplicationsMessage;
use crate::utils::dialogs::popup_error;
use iced::keyboard::key::Named;
use iced::widget::{column, row, text, Space};
use iced::{keyboard, Element, Length, Subscription, Task};
use std::sync::Arc;

/// The Applications listing: a server-paginated, sortable, searchable table
/// of stored bundles with per-row deploy/undeploy actions and an import
/// control. All slicing, ordering, and matching happens in the store; this
/// page only holds transient view state.
pub struct ApplicationsPage {
    query_use_case: Arc<dyn ApplicationQueryUseCase>,
    import_use_case: Arc<dyn ApplicationImportUseCase>,
    bundle_picker: Arc<dyn BundlePicker>,
    deployment_prompt: Arc<dyn DeploymentPrompt>,
    settings: Arc<dyn SettingsRepository>,
    current_user: CurrentUser,
    search: Search,
    pagination: Pagination,
    table: ApplicationTable,
    upload: UploadControl,
    sort: Option<SortState>,
    task_counter: u64,
}

impl ApplicationsPage {
    pub fn new(service: AppdockService) -> (Self, Task<ApplicationsMessage>) {
        let current_user = service.session.current_user();
        let page_size = service
            .settings
            .get_page_size()
            .ok()
            .flatten()
            .filter(|size| PAGE_SIZE_OPTIONS.contains(size))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let (search, search_task) = Search::new();
        let mut page = Self {
            query_use_case: service.query_use_case,
            import_use_case: service.import_use_case,
            bundle_picker: service.bundle_picker,
            deployment_prompt: service.deployment_prompt,
            settings: service.settings,
            current_user,
            search,
            pagination: Pagination::new(page_size),
            table: ApplicationTable::new(),
            upload: UploadControl::new(),
            sort: None,
            task_counter: 0,
        };
        let load_task = page.load_current_page();

        (page, Task::batch([search_task, load_task]))
    }

    #[must_use]
    pub fn title() -> String {
        "Applications".to_string()
    }

    fn interactive(&self) -> bool {
        !self.current_user.is_read_only()
    }

    pub fn view(&'_ self) -> Element<'_, ApplicationsMessage> {
        let heading = row![
            text(Self::title()).size(24),
            Space::new().width(Length::Fill),
            self.upload.view(),
        ];

        let search_section: Element<'_, ApplicationsMessage> = if self.interactive() {
            self.search.view()
        } else {
            Space::new().height(0).into()
        };

        let table_section = self.table.view(self.sort, self.interactive());
        let pagination_section = self.pagination.view();

        column![heading, search_section, table_section, pagination_section]
            .spacing(20)
            .padding(20)
            .into()
    }

    pub fn update(&mut self, message: ApplicationsMessage) -> Task<ApplicationsMessage> {
        match message {
            ApplicationsMessage::FirstPage => self.navigate(Pagination::first_page),
            ApplicationsMessage::PrevPage => self.navigate(Pagination::prev),
            ApplicationsMessage::NextPage => self.navigate(Pagination::next),
            ApplicationsMessage::LastPage => self.navigate(Pagination::last_page),
            ApplicationsMessage::PageInputChanged(value) => {
                self.pagination.page_input_value = value;
                Task::none()
            }
            ApplicationsMessage::PageInputSubmit => self.process_page_input(),
            ApplicationsMessage::PageSizeSelected(page_size) => self.change_page_size(page_size),
            ApplicationsMessage::SearchSubmit => {
                if self.interactive() {
                    self.process_new_search()
                } else {
                    Task::none()
                }
            }
            ApplicationsMessage::ContentChanged(content) => {
                if self.interactive() {
                    self.search.query = content;
                }
                Task::none()
            }
            ApplicationsMessage::SearchClear => {
                self.search.clear();
                self.process_new_search()
            }
            ApplicationsMessage::HeaderClicked(column) => self.toggle_sort(column),
            ApplicationsMessage::RowSelectionToggled(row_index) => {
                self.table.toggle_selection(row_index);
                Task::none()
            }
            ApplicationsMessage::DeployClicked(row_index) => {
                self.request_deployment(row_index, true)
            }
            ApplicationsMessage::UndeployClicked(row_index) => {
                self.request_deployment(row_index, false)
            }
            ApplicationsMessage::ApplicationsLoaded { task_id, result } => {
                self.handle_applications_loaded(task_id, result)
            }
            ApplicationsMessage::LoadFailed { task_id, error } => {
                if task_id == self.task_counter {
                    popup_error(error);
                }
                Task::none()
            }
            ApplicationsMessage::ImportPressed => self.pick_bundle(),
            ApplicationsMessage::BundlePicked(None) => {
                self.upload.state = ImportState::Ready;
                Task::none()
            }
            ApplicationsMessage::BundlePicked(Some(bundle)) => self.import_bundle(bundle),
            ApplicationsMessage::ImportFinished(Ok(name)) => {
                self.upload.state = ImportState::Completed { name };
                self.load_current_page()
            }
            ApplicationsMessage::ImportFinished(Err(error)) => {
                self.upload.state = ImportState::Ready;
                popup_error(error);
                Task::none()
            }
            ApplicationsMessage::ArrowLeftPressed { shift } => {
                if shift {
                    self.navigate(Pagination::first_page)
                } else {
                    self.navigate(Pagination::prev)
                }
            }
            ApplicationsMessage::ArrowRightPressed { shift } => {
                if shift {
                    self.navigate(Pagination::last_page)
                } else {
                    self.navigate(Pagination::next)
                }
            }
        }
    }

    pub fn subscription() -> Subscription<ApplicationsMessage> {
        iced::event::listen_with(|event, status, _window| {
            let (
                iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
                iced::event::Status::Ignored,
            ) = (event, status)
            else {
                return None;
            };
            let keyboard::Key::Named(key) = key else {
                return None;
            };
            match key {
                Named::ArrowLeft => Some(ApplicationsMessage::ArrowLeftPressed {
                    shift: modifiers.shift(),
                }),
                Named::ArrowRight => Some(ApplicationsMessage::ArrowRightPressed {
                    shift: modifiers.shift(),
                }),
                _ => None,
            }
        })
    }

    fn navigate(
        &mut self,
        mover: fn(&mut Pagination) -> Option<usize>,
    ) -> Task<ApplicationsMessage> {
        if mover(&mut self.pagination).is_some() {
            self.load_current_page()
        } else {
            Task::none()
        }
    }

    fn process_page_input(&mut self) -> Task<ApplicationsMessage> {
        if let Ok(requested) = self.pagination.page_input_value.parse::<usize>() {
            if requested > 0 && self.pagination.navigate_to(requested - 1).is_some() {
                return self.load_current_page();
            }
        }
        Task::none()
    }

    fn change_page_size(&mut self, page_size: usize) -> Task<ApplicationsMessage> {
        if !self.pagination.set_page_size(page_size) {
            return Task::none();
        }
        if let Err(err) = self.settings.set_page_size(page_size) {
            popup_error(err);
        }
        self.load_current_page()
    }

    fn process_new_search(&mut self) -> Task<ApplicationsMessage> {
        self.pagination.reset();
        self.load_current_page()
    }

    fn toggle_sort(&mut self, column: SortColumn) -> Task<ApplicationsMessage> {
        if !self.interactive() {
            return Task::none();
        }

        self.sort = Some(match self.sort {
            Some(state) if state.column == column => SortState {
                column,
                direction: state.direction.toggled(),
            },
            _ => SortState {
                column,
                direction: SortDirection::Ascending,
            },
        });
        self.pagination.reset();
        self.load_current_page()
    }

    fn request_deployment(&self, row_index: usize, deploy: bool) -> Task<ApplicationsMessage> {
        if let Some(record) = self.table.applications.get(row_index) {
            self.deployment_prompt.open(&record.application_file, deploy);
        }
        Task::none()
    }

    fn load_current_page(&mut self) -> Task<ApplicationsMessage> {
        self.task_counter += 1;
        let task_id = self.task_counter;

        let query = ApplicationQuery {
            search: if self.interactive() {
                self.search.term()
            } else {
                None
            },
            sort: self.sort,
        };
        let page = self.pagination.current_page_index;
        let page_size = self.pagination.page_size;
        let use_case = self.query_use_case.clone();

        Task::perform(
            async move { use_case.list_applications(query, page, page_size).await },
            move |outcome| match outcome {
                Ok(result) => ApplicationsMessage::ApplicationsLoaded { task_id, result },
                Err(err) => ApplicationsMessage::LoadFailed {
                    task_id,
                    error: err.to_string(),
                },
            },
        )
    }

    fn handle_applications_loaded(
        &mut self,
        task_id: u64,
        result: PaginatedApplications,
    ) -> Task<ApplicationsMessage> {
        // A newer request is in flight; this response is stale.
        if task_id != self.task_counter {
            return Task::none();
        }

        self.pagination.total_count = result.total_count;
        self.table.set_applications(result.items);
        self.table.snap_to_top()
    }

    fn pick_bundle(&mut self) -> Task<ApplicationsMessage> {
        self.upload.state = ImportState::Importing;
        let picker = self.bundle_picker.clone();

        Task::perform(
            async move {
                TOKIO_RUNTIME
                    .handle()
                    .spawn_blocking(move || picker.pick_bundle())
                    .await
                    .unwrap_or_default()
            },
            ApplicationsMessage::BundlePicked,
        )
    }

    fn import_bundle(&mut self, bundle: ApplicationBundle) -> Task<ApplicationsMessage> {
        self.upload.state = ImportState::Importing;
        let use_case = self.import_use_case.clone();

        Task::perform(
            async move {
                use_case
                    .import(bundle)
                    .await
                    .map(|record| record.name)
                    .map_err(|err| err.to_string())
            },
            ApplicationsMessage::ImportFinished,
        )
    }
}
