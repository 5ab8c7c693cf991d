use graph_preview::PreviewError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preview error: {0}")]
    Preview(#[from] PreviewError),

    #[error("Failed to serialize JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid preview parameter: {0}")]
    InvalidParam(String),

    #[error("Preview failed: {0}")]
    PreviewFailed(String),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Preview(PreviewError::MissingEnv { var }) => {
                format!("{var} is not set. Add it to your environment or .env file.")
            }
            Self::Preview(err) => err.to_string(),
            Self::JsonError(err) => format!("Failed to serialize JSON: {err}"),
            Self::InvalidParam(param) => {
                format!("Invalid preview parameter '{param}', expected KEY=VALUE")
            }
            Self::PreviewFailed(message) => format!("Preview failed: {message}"),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<CliError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let cli_err: CliError = err.into();
            cli_err.with_context(context())
        })
    }
}
