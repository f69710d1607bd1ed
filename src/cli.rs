use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Serve component licenses and vulnerabilities to a security scanner
#[derive(Parser, Debug)]
#[command(name = "component-info")]
#[command(version)]
#[command(
    about = "Serve component licenses and vulnerabilities to a security scanner",
    long_about = None
)]
pub struct Args {
    /// API key callers must send in the `apiKey` header
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub api_key: String,

    /// Path to the JSON record store (defaults to db.json)
    pub db_path: Option<PathBuf>,

    /// Address to listen on (defaults to 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (defaults to 8080)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Path to a config file (defaults to ./component-info.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log output format: pretty or json
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_only() {
        let args = Args::try_parse_from(["component-info", "secret"]).unwrap();
        assert_eq!(args.api_key, "secret");
        assert!(args.db_path.is_none());
        assert!(args.port.is_none());
        assert!(args.log_format.is_none());
    }

    #[test]
    fn test_all_arguments() {
        let args = Args::try_parse_from([
            "component-info",
            "secret",
            "data/db.json",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--config",
            "custom.yml",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.db_path, Some(PathBuf::from("data/db.json")));
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(9090));
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert_eq!(args.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn test_missing_api_key() {
        assert!(Args::try_parse_from(["component-info"]).is_err());
    }

    #[test]
    fn test_empty_api_key() {
        assert!(Args::try_parse_from(["component-info", ""]).is_err());
    }

    #[test]
    fn test_invalid_port() {
        assert!(Args::try_parse_from(["component-info", "secret", "--port", "0"]).is_err());
        assert!(Args::try_parse_from(["component-info", "secret", "--port", "70000"]).is_err());
        assert!(Args::try_parse_from(["component-info", "secret", "--port", "http"]).is_err());
    }

    #[test]
    fn test_invalid_log_format() {
        let result = Args::try_parse_from(["component-info", "secret", "--log-format", "xml"]);
        assert!(result.is_err());
    }
}
