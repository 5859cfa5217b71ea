use appdock::ui::app::AppdockApp;
use appdock::ui::app_factory::AppdockService;

fn main() -> iced::Result {
    iced::application(
        || AppdockApp::new(AppdockService::create()),
        AppdockApp::update,
        AppdockApp::view,
    )
    .title(AppdockApp::title)
    .subscription(AppdockApp::subscription)
    .run()
}
