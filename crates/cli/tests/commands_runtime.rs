use std::env;
use std::sync::{Mutex, OnceLock};

use campus_cli::commands::{ask, config, doctor, quick_actions};
use serde_json::Value;

#[test]
fn ask_prints_plain_reply_by_default() {
    with_env(&[], || {
        let result = ask::run("Where is the library?", Some(9), false);
        assert_eq!(result.exit_code, 0);
        assert!(result.output.starts_with("📚 **Main Library**"));
    });
}

#[test]
fn ask_with_hour_selects_meal_period() {
    with_env(&[], || {
        let breakfast = ask::run("dining menu", Some(8), false);
        let lunch = ask::run("dining menu", Some(13), false);
        let dinner = ask::run("dining menu", Some(19), false);

        assert!(breakfast.output.contains("BREAKFAST"));
        assert!(lunch.output.contains("LUNCH"));
        assert!(dinner.output.contains("DINNER"));
    });
}

#[test]
fn ask_json_mirrors_chat_envelope() {
    with_env(&[], || {
        let result = ask::run("hello", Some(13), true);
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["success"], true);
        assert_eq!(payload["topic"], "greeting");
        assert_eq!(payload["timestamp"], "3/15/2024, 1:00:00 PM");
        assert!(payload["response"].as_str().expect("response").starts_with("Hello!"));
    });
}

#[test]
fn ask_rejects_empty_message() {
    with_env(&[], || {
        let result = ask::run("", None, false);
        assert_eq!(result.exit_code, 2);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "ask");
        assert_eq!(payload["error_class"], "missing_message");
    });
}

#[test]
fn ask_reports_config_failure() {
    with_env(&[("CAMPUS_LOG_LEVEL", "loud")], || {
        let result = ask::run("hello", None, false);
        assert_eq!(result.exit_code, 2);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "config_validation");
    });
}

#[test]
fn quick_actions_prints_ordered_json() {
    let result = quick_actions::run();
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let actions = payload.as_array().expect("array");
    assert_eq!(actions.len(), 5);
    assert_eq!(actions[0]["text"], "Where is the library?");
    assert_eq!(actions[4]["text"], "Emergency contacts");
}

#[test]
fn config_attributes_env_sources() {
    with_env(&[("PORT", "8081")], || {
        let result = config::run();
        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("- server.port = 8081 (source: env (PORT))"));
        assert!(result.output.contains("- logging.level = info (source: default)"));
    });
}

#[test]
fn doctor_passes_with_default_config() {
    with_env(&[], || {
        let result = doctor::run(true);
        assert_eq!(result.exit_code, 0, "doctor output: {}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["overall_status"], "pass");
        let names: Vec<&str> = payload["checks"]
            .as_array()
            .expect("checks")
            .iter()
            .filter_map(|check| check["name"].as_str())
            .collect();
        assert_eq!(names, vec!["config_validation", "dataset_integrity", "responder_routing"]);
    });
}

#[test]
fn doctor_fails_on_invalid_config() {
    with_env(&[("CAMPUS_UTC_OFFSET_MINUTES", "5000")], || {
        let result = doctor::run(false);
        assert_eq!(result.exit_code, 1);
        assert!(result.output.starts_with("doctor: one or more readiness checks failed"));
        assert!(result.output.contains("- [fail] config_validation:"));
        assert!(result.output.contains("- [ok] dataset_integrity:"));
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "PORT",
        "CAMPUS_SERVER_BIND_ADDRESS",
        "CAMPUS_SERVER_PORT",
        "CAMPUS_SERVER_GRACEFUL_SHUTDOWN_SECS",
        "CAMPUS_SERVER_CORS_PERMISSIVE",
        "CAMPUS_UTC_OFFSET_MINUTES",
        "CAMPUS_LOGGING_LEVEL",
        "CAMPUS_LOGGING_FORMAT",
        "CAMPUS_LOG_LEVEL",
        "CAMPUS_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
