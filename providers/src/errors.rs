use std::path::PathBuf;

#[derive(Debug)]
pub enum ProviderError {
    FetchError(reqwest::Error),
    IoError(std::io::Error),
    EmptySession(PathBuf),
    MissingSession(&'static str),
    InvalidPuzzle { year: u16, day: u8 },
    MarkerNotFound(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::FetchError(err)
    }
}

impl From<std::io::Error> for ProviderError {
    fn from(err: std::io::Error) -> Self {
        ProviderError::IoError(err)
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::FetchError(e) => write!(f, "Fetch error: {}", e),
            ProviderError::IoError(e) => write!(f, "IO error: {}", e),
            ProviderError::EmptySession(path) => {
                write!(f, "Session file {} is empty", path.display())
            }
            ProviderError::MissingSession(var) => {
                write!(f, "Environment variable {} is not set", var)
            }
            ProviderError::InvalidPuzzle { year, day } => {
                write!(f, "No puzzle for year {} day {}", year, day)
            }
            ProviderError::MarkerNotFound(prefix) => {
                write!(f, "No <code> block found after {:?}", prefix)
            }
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::FetchError(e) => Some(e),
            ProviderError::IoError(e) => Some(e),
            _ => None,
        }
    }
}
