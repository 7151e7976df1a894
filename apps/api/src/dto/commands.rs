use rolegate_application::CommandSuccess;
use rolegate_domain::Intent;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming free-text command.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/command-request.ts"
)]
pub struct CommandRequest {
    pub command: String,
}

/// Result of an executed command.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/command-response.ts"
)]
pub struct CommandResponse {
    pub action: String,
    pub role_name: Option<String>,
    pub permission_name: Option<String>,
    pub changed: bool,
    pub message: String,
}

impl From<CommandSuccess> for CommandResponse {
    fn from(success: CommandSuccess) -> Self {
        Self {
            action: success.action.as_str().to_owned(),
            message: success.message(),
            role_name: success.role_name,
            permission_name: success.permission_name,
            changed: success.changed,
        }
    }
}

/// Parsed command shown before execution.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/interpreted-command-response.ts"
)]
pub struct InterpretedCommandResponse {
    pub action: String,
    pub label: String,
    pub role_name: Option<String>,
    pub permission_name: Option<String>,
    pub description: Option<String>,
}

impl From<Intent> for InterpretedCommandResponse {
    fn from(intent: Intent) -> Self {
        let action = intent.action();
        Self {
            action: action.as_str().to_owned(),
            label: action.label().to_owned(),
            role_name: intent.role_name().map(|name| name.as_str().to_owned()),
            permission_name: intent
                .permission_name()
                .map(|name| name.as_str().to_owned()),
            description: intent.description().map(ToOwned::to_owned),
        }
    }
}
