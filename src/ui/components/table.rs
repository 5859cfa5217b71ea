use crate::domain::entities::application::ApplicationRecord;
use crate::domain::entities::query::{SortDirection, SortState};
use crate::ui::components::columns::COLUMNS;
use crate::ui::messages::applications_message::ApplicationsMessage;
use crate::ui::utils::format_date_time::format_timestamp;
use iced::widget::{button, checkbox, column, operation, row, rule, scrollable, text, Id, Space};
use iced::{Element, Length};
use std::collections::HashSet;

const SELECTION_COLUMN_WIDTH: f32 = 30.0;

pub struct ApplicationTable {
    pub applications: Vec<ApplicationRecord>,
    pub selected: HashSet<usize>,
    pub scroll_bar_id: Id,
}

impl ApplicationTable {
    pub fn new() -> Self {
        Self {
            applications: Vec::new(),
            selected: HashSet::new(),
            scroll_bar_id: Id::unique(),
        }
    }

    /// Replaces the rendered page. Selection never survives a reload.
    pub fn set_applications(&mut self, applications: Vec<ApplicationRecord>) {
        self.applications = applications;
        self.selected.clear();
    }

    pub fn toggle_selection(&mut self, row_index: usize) {
        if row_index >= self.applications.len() {
            return;
        }
        if !self.selected.insert(row_index) {
            self.selected.remove(&row_index);
        }
    }

    pub fn view(
        &'_ self,
        sort: Option<SortState>,
        sorting_enabled: bool,
    ) -> Element<'_, ApplicationsMessage> {
        let header = self.header(sort, sorting_enabled);
        let rows: Vec<Element<'_, ApplicationsMessage>> = self
            .applications
            .iter()
            .enumerate()
            .map(|(index, application)| self.table_row(index, application))
            .collect();

        column![
            header,
            rule::horizontal(1),
            scrollable(column(rows))
                .id(self.scroll_bar_id.clone())
                .height(Length::Fill),
            rule::horizontal(1),
            self.selection_label(),
        ]
        .spacing(5)
        .into()
    }

    fn header(
        &'_ self,
        sort: Option<SortState>,
        sorting_enabled: bool,
    ) -> Element<'_, ApplicationsMessage> {
        let mut cells: Vec<Element<'_, ApplicationsMessage>> =
            vec![Space::new().width(Length::Fixed(SELECTION_COLUMN_WIDTH)).into()];

        for column in &COLUMNS {
            let caret = match (column.sort_column(), sort) {
                (Some(sort_column), Some(state)) if state.column == sort_column => {
                    match state.direction {
                        SortDirection::Ascending => " \u{25b2}",
                        SortDirection::Descending => " \u{25bc}",
                    }
                }
                _ => "",
            };

            let label = text(format!("{}{caret}", column.label)).size(14);
            let cell: Element<'_, ApplicationsMessage> = match column.sort_column() {
                Some(sort_column) if sorting_enabled => button(label)
                    .on_press(ApplicationsMessage::HeaderClicked(sort_column))
                    .style(button::text)
                    .padding(0)
                    .width(Length::FillPortion(column.width_portion))
                    .into(),
                _ => label.width(Length::FillPortion(column.width_portion)).into(),
            };
            cells.push(cell);
        }

        iced::widget::Row::with_children(cells).padding(3).into()
    }

    fn table_row<'a>(
        &'a self,
        index: usize,
        application: &'a ApplicationRecord,
    ) -> Element<'a, ApplicationsMessage> {
        let selector = checkbox(self.selected.contains(&index))
            .on_toggle(move |_| ApplicationsMessage::RowSelectionToggled(index))
            .width(Length::Fixed(SELECTION_COLUMN_WIDTH));

        let actions = row![
            button(text("Deploy").size(14))
                .on_press(ApplicationsMessage::DeployClicked(index))
                .padding(5),
            button(text("Undeploy").size(14))
                .on_press(ApplicationsMessage::UndeployClicked(index))
                .padding(5)
                .style(button::secondary),
        ]
        .spacing(5)
        .width(Length::FillPortion(COLUMNS[3].width_portion));

        row![
            selector,
            text(&application.name).width(Length::FillPortion(COLUMNS[0].width_portion)),
            text(format_timestamp(application.created_at))
                .width(Length::FillPortion(COLUMNS[1].width_portion)),
            text(format_timestamp(application.updated_at))
                .width(Length::FillPortion(COLUMNS[2].width_portion)),
            actions,
        ]
        .padding(3)
        .into()
    }

    fn selection_label(&'_ self) -> Element<'_, ApplicationsMessage> {
        if self.selected.is_empty() {
            Space::new().height(0).into()
        } else {
            text(format!("{} application(s) selected", self.selected.len()))
                .size(14)
                .into()
        }
    }

    pub fn snap_to_top(&self) -> iced::Task<ApplicationsMessage> {
        operation::snap_to(
            self.scroll_bar_id.clone(),
            scrollable::RelativeOffset::START,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(name: &str) -> ApplicationRecord {
        let stamp = NaiveDate::from_ymd_opt(2026, 1, 10)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        ApplicationRecord {
            name: name.to_string(),
            application_file: format!("name: {name}"),
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[test]
    fn loading_a_page_clears_the_selection() {
        let mut table = ApplicationTable::new();
        table.set_applications(vec![record("a"), record("b")]);
        table.toggle_selection(0);
        table.toggle_selection(1);
        assert_eq!(table.selected.len(), 2);

        table.set_applications(vec![record("c")]);
        assert!(table.selected.is_empty());
    }

    #[test]
    fn toggling_twice_deselects() {
        let mut table = ApplicationTable::new();
        table.set_applications(vec![record("a")]);

        table.toggle_selection(0);
        assert!(table.selected.contains(&0));
        table.toggle_selection(0);
        assert!(table.selected.is_empty());
    }

    #[test]
    fn out_of_range_rows_cannot_be_selected() {
        let mut table = ApplicationTable::new();
        table.set_applications(vec![record("a")]);

        table.toggle_selection(5);
        assert!(table.selected.is_empty());
    }
}
