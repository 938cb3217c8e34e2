// Formatting, clock and console helpers shared by the components.
use crate::model::SessionEvent;

/// Seconds with two decimals, or an em dash when no time is recorded.
pub fn format_duration_ms(ms: Option<f64>) -> String {
    match ms {
        Some(ms) => format!("{:.2}s", ms / 1000.0),
        None => "\u{2014}".to_string(),
    }
}

/// Wall clock in epoch milliseconds.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

pub fn event_json(event: &SessionEvent) -> String {
    serde_json::to_string(event).unwrap_or_else(|err| {
        format!("{{\"event\":\"unserializable\",\"error\":\"{}\"}}", err)
    })
}

pub fn log_event(event: &SessionEvent) {
    clog(&event_json(event));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;

    #[test]
    fn missing_duration_renders_dash() {
        assert_eq!(format_duration_ms(None), "—");
    }

    #[test]
    fn durations_use_two_decimal_seconds() {
        assert_eq!(format_duration_ms(Some(50.0)), "0.05s");
        assert_eq!(format_duration_ms(Some(1234.0)), "1.23s");
        assert_eq!(format_duration_ms(Some(11_999.0)), "12.00s");
    }

    #[test]
    fn events_serialize_with_tag() {
        let caught = SessionEvent::Caught { session: 3, elapsed_ms: 420.5, best_ms: 300.0 };
        let json: serde_json::Value = serde_json::from_str(&event_json(&caught)).unwrap();
        assert_eq!(json["event"], "caught");
        assert_eq!(json["session"], 3);
        assert_eq!(json["elapsed_ms"], 420.5);

        let started = SessionEvent::Started { session: 1, position: Position { x: 10.0, y: 90.0 } };
        let json: serde_json::Value = serde_json::from_str(&event_json(&started)).unwrap();
        assert_eq!(json["event"], "started");
        assert_eq!(json["position"]["y"], 90.0);
    }
}
