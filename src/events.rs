/// Events delivered to the GUI from background services.
#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigReload,
}
