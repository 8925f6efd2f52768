use portainer_client::utils::logger::{parse_log_level, setup_logger};
use tracing::Level;

#[test]
fn log_level_names_are_case_insensitive() {
    assert_eq!(parse_log_level("trace"), Level::TRACE);
    assert_eq!(parse_log_level("WARN"), Level::WARN);
    assert_eq!(parse_log_level(""), Level::INFO);
}

#[test]
fn setup_logger_can_be_called_repeatedly() {
    setup_logger();
    setup_logger();
    tracing::info!("logger ready");
}
