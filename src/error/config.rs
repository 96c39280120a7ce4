use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the README
    /// or `.env.example` for the list of variables.
    #[error("This bot requires ${0} to be set.")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Environment variable ${name} has an invalid value '{value}': {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value as found in the environment
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}
