use std::sync::Arc;

use campus_agent::{Responder, Topic};
use campus_core::clock::{locale_timestamp, Clock, FixedClock};
use campus_core::config::{AppConfig, LoadOptions};
use serde::Serialize;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct AskEnvelope {
    success: bool,
    response: String,
    timestamp: String,
    topic: Topic,
}

pub fn run(message: &str, hour: Option<u32>, json_output: bool) -> CommandResult {
    if message.is_empty() {
        return CommandResult::failure("ask", "missing_message", "Message is required", 2);
    }

    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure("ask", "config_validation", error.to_string(), 2)
        }
    };

    let clock: Arc<dyn Clock> = match hour {
        Some(hour) => Arc::new(FixedClock::at_hour(hour)),
        None => Arc::new(config.campus.system_clock()),
    };
    let responder = Responder::new(Arc::clone(&clock));
    let reply = responder.reply(message);

    if !json_output {
        return CommandResult::text(reply.text);
    }

    let envelope = AskEnvelope {
        success: true,
        response: reply.text,
        timestamp: locale_timestamp(&clock.now()),
        topic: reply.topic,
    };
    match serde_json::to_string_pretty(&envelope) {
        Ok(output) => CommandResult::text(output),
        Err(error) => CommandResult::failure("ask", "serialization", error.to_string(), 1),
    }
}
