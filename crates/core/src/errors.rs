use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("chat request is missing a message")]
    MissingMessage,
    #[error("chat request body could not be read: {0}")]
    MalformedRequest(String),
    #[error("responder failed: {0}")]
    Responder(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, correlation_id: String },
    #[error("malformed request: {message}")]
    MalformedRequest { message: String, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Message is required",
            Self::MalformedRequest { .. } => {
                "Request body must be a JSON object with a `message` field"
            }
            Self::Internal { .. } => "Something went wrong. Please try again.",
        }
    }

    pub fn correlation_id(&self) -> &str {
        match self {
            Self::BadRequest { correlation_id, .. }
            | Self::MalformedRequest { correlation_id, .. }
            | Self::Internal { correlation_id, .. } => correlation_id,
        }
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }
}

impl ApplicationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadRequest { correlation_id: id, .. }
            | InterfaceError::MalformedRequest { correlation_id: id, .. }
            | InterfaceError::Internal { correlation_id: id, .. } => *id = correlation_id,
        }
        mapped
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        match value {
            ApplicationError::MissingMessage => Self::BadRequest {
                message: "message field is absent or empty".to_owned(),
                correlation_id: "unassigned".to_owned(),
            },
            ApplicationError::MalformedRequest(message) => {
                Self::MalformedRequest { message, correlation_id: "unassigned".to_owned() }
            }
            ApplicationError::Responder(message) => {
                Self::Internal { message, correlation_id: "unassigned".to_owned() }
            }
        }
    }
}
