use crate::ui::messages::applications_message::ApplicationsMessage;

#[derive(Clone, Debug)]
pub enum AppMessage {
    Applications(ApplicationsMessage),
    TabPressed { shift: bool },
}
