use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but its value cannot be used.
    ///
    /// Check the documentation or `.env.example` file for the accepted values of
    /// each configuration variable.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },

    /// `NOTES_DB_URL` combined with its connection parts does not form a valid URL.
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(#[from] url::ParseError),
}
