use crate::domain::entities::application::ApplicationBundle;
use crate::domain::entities::pagination::PaginatedApplications;
use crate::domain::entities::query::SortColumn;

#[derive(Clone, Debug)]
pub enum ApplicationsMessage {
    FirstPage,
    PrevPage,
    PageInputChanged(String),
    PageInputSubmit,
    NextPage,
    LastPage,
    PageSizeSelected(usize),
    SearchSubmit,
    ContentChanged(String),
    SearchClear,
    HeaderClicked(SortColumn),
    RowSelectionToggled(usize),
    DeployClicked(usize),
    UndeployClicked(usize),
    ApplicationsLoaded {
        task_id: u64,
        result: PaginatedApplications,
    },
    LoadFailed {
        task_id: u64,
        error: String,
    },
    ImportPressed,
    BundlePicked(Option<ApplicationBundle>),
    ImportFinished(Result<String, String>),
    ArrowLeftPressed {
        shift: bool,
    },
    ArrowRightPressed {
        shift: bool,
    },
}
