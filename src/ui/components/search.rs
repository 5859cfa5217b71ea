use crate::ui::messages::applications_message::ApplicationsMessage;
use iced::widget::operation::focus_next;
use iced::widget::{button, column, row, text, text_input};
use iced::{Element, Length, Task};

pub struct Search {
    pub query: String,
}

impl Search {
    pub fn new() -> (Self, Task<ApplicationsMessage>) {
        (
            Self {
                query: String::new(),
            },
            focus_next(),
        )
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// The active search term, if any. Whitespace-only input counts as no
    /// search.
    #[must_use]
    pub fn term(&self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn view(&'_ self) -> Element<'_, ApplicationsMessage> {
        let search_input = text_input("Search applications...", &self.query)
            .on_input(ApplicationsMessage::ContentChanged)
            .on_submit(ApplicationsMessage::SearchSubmit)
            .padding(10)
            .width(Length::Fill);

        let search_button = button(text("Search"))
            .on_press(ApplicationsMessage::SearchSubmit)
            .padding(10);

        let clear_button = button(text("Clear"))
            .on_press(ApplicationsMessage::SearchClear)
            .padding(10);

        column![row![search_input, search_button, clear_button].spacing(10)].into()
    }
}
