use anyhow::{Context as _, Result};
use std::{env::VarError, fmt, net::SocketAddr, str::FromStr, time::Duration};

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_environment() -> Result<Self> {
        Ok(Self {
            server_addr: env("EDGESTASH_SERVER_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?,
            request_timeout: Duration::from_secs(env("EDGESTASH_REQUEST_TIMEOUT_SECS", 30u64)?),
            log_format: env("EDGESTASH_LOG_FORMAT", LogFormat::default())?,
        })
    }
}

pub(crate) fn env<T>(var: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(maybe_env(var)?.unwrap_or(default))
}

pub(crate) fn maybe_env<T>(var: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(var) {
        Ok(value) => Ok(Some(
            value
                .parse::<T>()
                .with_context(|| format!("failed to parse configuration variable {var}"))?,
        )),
        Err(VarError::NotPresent) => {
            tracing::trace!("optional configuration variable {} is not set", var);
            Ok(None)
        }
        Err(VarError::NotUnicode(_)) => {
            Err(anyhow::anyhow!("configuration variable {var} is not valid unicode"))
        }
    }
}

/// Output format of the log lines.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid log format: {0}")]
pub struct InvalidLogFormat(String);

impl FromStr for LogFormat {
    type Err = InvalidLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pretty") {
            Ok(Self::Pretty)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(InvalidLogFormat(s.to_string()))
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("pretty", LogFormat::Pretty)]
    #[test_case("JSON", LogFormat::Json; "case insensitive")]
    fn parse_log_format(value: &str, expected: LogFormat) {
        assert_eq!(value.parse::<LogFormat>().unwrap(), expected);
    }

    #[test]
    fn invalid_log_format() {
        let err = "yaml".parse::<LogFormat>().unwrap_err();
        assert_eq!(err.to_string(), "invalid log format: yaml");
    }

    #[test_case(LogFormat::Pretty)]
    #[test_case(LogFormat::Json)]
    fn log_format_display_roundtrip(format: LogFormat) {
        assert_eq!(format.to_string().parse::<LogFormat>().unwrap(), format);
    }

    #[test]
    fn missing_variable_uses_default() -> anyhow::Result<()> {
        let value: u64 = env("EDGESTASH_TEST_SURELY_UNSET_VARIABLE", 42)?;
        assert_eq!(value, 42);
        Ok(())
    }
}
