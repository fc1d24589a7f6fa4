use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    MissingDatacenter,
    InvalidChimpTime { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MissingDatacenter => {
                write!(f, "api key has no datacenter suffix (expected e.g. `-us1`)")
            }
            Self::InvalidChimpTime { input } => {
                write!(
                    f,
                    "invalid MailChimp time: {input:?} (expected YYYY-MM, YYYY-MM-DD or YYYY-MM-DD HH:MM:SS)"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
