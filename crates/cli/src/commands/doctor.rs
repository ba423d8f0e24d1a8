use std::sync::Arc;

use campus_agent::{Responder, Topic};
use campus_core::clock::FixedClock;
use campus_core::config::{AppConfig, LoadOptions};
use campus_core::CAMPUS;
use serde::Serialize;

use super::CommandResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> CommandResult {
    let report = build_report();
    let exit_code = if report.overall_status == CheckStatus::Pass { 0 } else { 1 };

    if json_output {
        let output = serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
            )
        });
        return CommandResult { exit_code, output };
    }

    CommandResult { exit_code, output: render_human(&report) }
}

fn build_report() -> DoctorReport {
    let checks = vec![check_config(), check_dataset(), check_routing()];

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_config() -> DoctorCheck {
    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Pass,
            details: format!(
                "configuration loaded; server would listen on {}",
                config.listen_address()
            ),
        },
        Err(error) => DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn check_dataset() -> DoctorCheck {
    let issues = CAMPUS.integrity_issues();
    if issues.is_empty() {
        DoctorCheck {
            name: "dataset_integrity",
            status: CheckStatus::Pass,
            details: format!(
                "{} buildings, {} courses, {} events, {} quick actions",
                CAMPUS.buildings().len(),
                CAMPUS.courses.len(),
                CAMPUS.events.len(),
                CAMPUS.quick_actions.len()
            ),
        }
    } else {
        DoctorCheck {
            name: "dataset_integrity",
            status: CheckStatus::Fail,
            details: issues.join("; "),
        }
    }
}

/// Every quick action must land on a real topic and gibberish must fall back.
fn check_routing() -> DoctorCheck {
    let responder = Responder::new(Arc::new(FixedClock::at_hour(12)));

    let misrouted: Vec<&str> = CAMPUS
        .quick_actions
        .iter()
        .filter(|action| {
            responder.classify(action.text) == Topic::Fallback
                || responder.respond(action.text).is_empty()
        })
        .map(|action| action.text)
        .collect();
    let fallback_ok = responder.classify("xyzzy") == Topic::Fallback;

    if misrouted.is_empty() && fallback_ok {
        DoctorCheck {
            name: "responder_routing",
            status: CheckStatus::Pass,
            details: "quick actions route to topics; unmatched input falls back".to_string(),
        }
    } else {
        let mut problems: Vec<String> =
            misrouted.iter().map(|text| format!("`{text}` fell through to fallback")).collect();
        if !fallback_ok {
            problems.push("unmatched input did not fall back".to_string());
        }
        DoctorCheck {
            name: "responder_routing",
            status: CheckStatus::Fail,
            details: problems.join("; "),
        }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}
