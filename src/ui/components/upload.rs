use crate::ui::messages::applications_message::ApplicationsMessage;
use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element};
use iced_aw::Spinner;

#[derive(PartialEq)]
pub enum ImportState {
    Ready,
    Importing,
    Completed { name: String },
}

/// The "Import Application" control rendered above the table.
pub struct UploadControl {
    pub state: ImportState,
}

impl UploadControl {
    pub const fn new() -> Self {
        Self {
            state: ImportState::Ready,
        }
    }

    pub fn view(&'_ self) -> Element<'_, ApplicationsMessage> {
        let import_button = button(text("Import Application"))
            .on_press_maybe(if self.state == ImportState::Importing {
                None
            } else {
                Some(ApplicationsMessage::ImportPressed)
            })
            .padding(10);

        let status: Element<'_, ApplicationsMessage> = match &self.state {
            ImportState::Ready => Space::new().width(0).into(),
            ImportState::Importing => row![
                Spinner::new(),
                text("Importing application bundle...").size(14),
            ]
            .spacing(10)
            .align_y(Alignment::Center)
            .into(),
            ImportState::Completed { name } => text(format!("Imported {name}"))
                .style(text::success)
                .size(14)
                .into(),
        };

        row![import_button, status]
            .spacing(10)
            .align_y(Alignment::Center)
            .into()
    }
}
