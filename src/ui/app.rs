use crate::ui::app_factory::AppdockService;
use crate::ui::messages::app_message::AppMessage;
use crate::ui::pages::applications_page::ApplicationsPage;
use iced::keyboard::key::Named;
use iced::{keyboard, widget, Element, Subscription, Task};

pub struct AppdockApp {
    page: ApplicationsPage,
}

impl AppdockApp {
    pub fn new(service: AppdockService) -> (Self, Task<AppMessage>) {
        let (page, task) = ApplicationsPage::new(service);
        (Self { page }, task.map(AppMessage::Applications))
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{} (v{})",
            ApplicationsPage::title(),
            env!("CARGO_PKG_VERSION")
        )
    }

    pub fn view(&'_ self) -> Element<'_, AppMessage> {
        self.page.view().map(AppMessage::Applications)
    }

    pub fn update(&mut self, message: AppMessage) -> Task<AppMessage> {
        match message {
            AppMessage::Applications(msg) => {
                self.page.update(msg).map(AppMessage::Applications)
            }
            AppMessage::TabPressed { shift } => {
                if shift {
                    widget::operation::focus_previous()
                } else {
                    widget::operation::focus_next()
                }
            }
        }
    }

    pub fn subscription(&self) -> Subscription<AppMessage> {
        let app_subscription = iced::event::listen_with(|event, status, _window| {
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
                Named::Tab => Some(AppMessage::TabPressed {
                    shift: modifiers.shift(),
                }),
                _ => None,
            }
        });
        let page_subscription = ApplicationsPage::subscription().map(AppMessage::Applications);

        Subscription::batch(vec![app_subscription, page_subscription])
    }
}
