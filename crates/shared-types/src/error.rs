use std::path::PathBuf;

/// Failures while turning a dotenv file into shell exports.
#[derive(Debug, thiserror::Error)]
pub enum EnvExportError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("{key} is not set in {}", path.display())]
    MissingKey { key: String, path: PathBuf },

    #[error("{0:?} is not a valid shell variable name")]
    InvalidKey(String),
}

impl EnvExportError {
    pub(crate) fn from_dotenv(path: PathBuf, err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::Io(source) => EnvExportError::Io { path, source },
            other => EnvExportError::Parse { path, source: other },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_message_names_key_and_file() {
        let err = EnvExportError::MissingKey {
            key: "PORT".to_string(),
            path: PathBuf::from(".env"),
        };
        assert_eq!(err.to_string(), "PORT is not set in .env");
    }

    #[test]
    fn dotenv_io_errors_map_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = EnvExportError::from_dotenv(PathBuf::from("x.env"), dotenvy::Error::Io(io));
        assert!(matches!(err, EnvExportError::Io { .. }));
    }

    #[test]
    fn dotenv_line_errors_map_to_parse() {
        let err = EnvExportError::from_dotenv(
            PathBuf::from("x.env"),
            dotenvy::Error::LineParse("=oops".to_string(), 0),
        );
        assert!(matches!(err, EnvExportError::Parse { .. }));
        assert!(err.to_string().starts_with("cannot parse x.env"));
    }
}
