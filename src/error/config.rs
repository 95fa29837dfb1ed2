use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Context resolution itself never fails; this is raised by the component
    /// that first needs the missing value. See `.env.example` for the
    /// recognized variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
