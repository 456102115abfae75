use web_sys::window;

/// Show a modal browser alert. Blocks the page until dismissed.
pub fn blocking_alert(message: &str) {
    log::debug!("Showing alert: {}", message);
    match window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("Failed to show alert '{}': {:?}", message, e);
            }
        }
        None => log::error!("No window available for alert: {}", message),
    }
}
