use gloo::console;

/// Component-tagged logging to the browser console
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log("debug", message, component);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log("info", message, component);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log("warn", message, component);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log("error", message, component);
    }

    fn log(level: &str, message: &str, component: &str) {
        let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
        let line = format_line(&timestamp, level, component, message);

        match level {
            "error" => console::error!(line),
            "warn" => console::warn!(line),
            "debug" => console::debug!(line),
            _ => console::info!(line),
        }
    }
}

fn format_line(timestamp: &str, level: &str, component: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}", timestamp, level.to_uppercase(), component, message)
}
