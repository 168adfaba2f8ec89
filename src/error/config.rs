use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot cannot authenticate without a token. Set the variable in the
    /// environment or in a `.env` file next to the binary.
    #[error("{0} environment variable not set")]
    MissingEnvVar(String),

    /// The bot token is not structurally valid.
    ///
    /// Checked locally before connecting, so a malformed token never reaches
    /// the Discord gateway.
    #[error("Invalid Discord bot token: {0}")]
    InvalidToken(#[source] serenity::utils::token::InvalidToken),

    /// The target channel id is not a Discord snowflake.
    #[error("Failed to parse channel ID from String '{value}'")]
    InvalidChannelId {
        /// The raw value read from the environment
        value: String,
    },
}
