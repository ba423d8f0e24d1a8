use campus_core::CAMPUS;

use super::CommandResult;

pub fn run() -> CommandResult {
    match serde_json::to_string_pretty(CAMPUS.quick_actions) {
        Ok(output) => CommandResult::text(output),
        Err(error) => CommandResult::failure("quick-actions", "serialization", error.to_string(), 1),
    }
}
