use anyhow::Error;

/// Failure classes of a listing fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404
    ClientError,  // other HTTP 4xx
    ServerError,  // HTTP 500+
    Decode,       // body is not a listing
    NetworkError, // DNS, routing, TLS
    Other,
}

impl ErrorType {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorType::ConnectionRefused => "connection refused",
            ErrorType::Timeout => "timeout",
            ErrorType::NotFound => "not found",
            ErrorType::ClientError => "client error",
            ErrorType::ServerError => "server error",
            ErrorType::Decode => "decode error",
            ErrorType::NetworkError => "network error",
            ErrorType::Other => "error",
        }
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if let Some(status) = reqwest_err.status() {
                return match status.as_u16() {
                    404 => ErrorType::NotFound,
                    400..=499 => ErrorType::ClientError,
                    500..=599 => ErrorType::ServerError,
                    _ => ErrorType::Other,
                };
            }
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if reqwest_err.is_decode() {
                return ErrorType::Decode;
            }
        }
        if cause.downcast_ref::<serde_json::Error>().is_some() {
            return ErrorType::Decode;
        }
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") || error_msg.contains("tls") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Root cause of an error, the most informative line for a log
pub fn format_error_message(error: &Error) -> String {
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    error.root_cause().to_string()
}
