use std::sync::Mutex;

use dashboard_charts_wasm::domain::chart::ChartPayload;
use dashboard_charts_wasm::domain::logging::{
    LogComponent, LogEntry, LogLevel, Logger, get_logger, init_logger,
};

static ENTRIES: Mutex<Vec<LogEntry>> = Mutex::new(Vec::new());

struct Capture;

impl Logger for Capture {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= LogLevel::Info
    }

    fn log(&self, entry: LogEntry) {
        ENTRIES.lock().unwrap().push(entry);
    }
}

fn install() {
    init_logger(Box::new(Capture));
}

fn captured(component: LogComponent) -> Vec<LogEntry> {
    ENTRIES
        .lock()
        .unwrap()
        .iter()
        .filter(|entry| entry.component == component)
        .cloned()
        .collect()
}

#[test]
fn misaligned_wallet_payload_is_warned_about() {
    install();
    let payload = ChartPayload {
        series: vec![1.0, 2.0],
        labels: vec!["BTC".to_string()],
    };
    payload.warn_on_misalignment();

    let entries = captured(LogComponent::Domain("WalletPayload"));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, LogLevel::Warn);
    assert_eq!(entries[0].message, "2 balances for 1 currencies");
}

#[test]
fn levels_below_the_logger_threshold_are_dropped() {
    install();
    get_logger().debug(LogComponent::Presentation("Threshold"), "hidden");
    get_logger().info(LogComponent::Presentation("Threshold"), "shown");
    get_logger().log_with_metadata(
        LogLevel::Error,
        LogComponent::Presentation("Threshold"),
        "failed",
        "/get_chart_data/",
    );

    let entries = captured(LogComponent::Presentation("Threshold"));
    let messages: Vec<&str> = entries.iter().map(|entry| entry.message.as_str()).collect();
    assert_eq!(messages, ["shown", "failed"]);
    assert_eq!(entries[1].metadata.as_deref(), Some("/get_chart_data/"));
}
