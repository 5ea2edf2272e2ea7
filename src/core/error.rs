use crate::i18n::TranslationError;
use std::io;

#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Validation(String),
    Config(String),
    Translation(TranslationError),
    Clipboard(String),
    Server(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<TranslationError> for AppError {
    fn from(err: TranslationError) -> Self {
        AppError::Translation(err)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "IO Error: {}", err),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Config(msg) => write!(f, "Config Error: {}", msg),
            AppError::Translation(err) => write!(f, "Translation Error: {}", err),
            AppError::Clipboard(msg) => write!(f, "Clipboard Error: {}", msg),
            AppError::Server(msg) => write!(f, "Server Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_keep_their_kind() {
        let err: AppError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, AppError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
        assert!(err.to_string().starts_with("IO Error"));
    }
}
