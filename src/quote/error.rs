use reqwest::StatusCode;
use std::error;
use std::fmt;

#[derive(Debug)]
pub enum QuoteRequestError {
    HttpRequest(reqwest::Error),
    HttpStatus(StatusCode),
    JsonParse(serde_json::Error),
    ParseBigDecimal(bigdecimal::ParseBigDecimalError),
    Other(String),
}

impl QuoteRequestError {
    /// True when the provider answered 429 and the call may be retried after a pause.
    pub fn is_rate_limited(&self) -> bool {
        match *self {
            QuoteRequestError::HttpStatus(status) => status == StatusCode::TOO_MANY_REQUESTS,
            _ => false,
        }
    }
}

impl fmt::Display for QuoteRequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QuoteRequestError::HttpRequest(ref err) => write!(f, "HTTP Request Error: {}", err),
            QuoteRequestError::HttpStatus(status) => write!(f, "HTTP Status Error: {}", status),
            QuoteRequestError::JsonParse(ref err) => write!(f, "JSON Parse Error: {}", err),
            QuoteRequestError::ParseBigDecimal(ref err) => {
                write!(f, "BigDecimal Parse Error: {}", err)
            }
            QuoteRequestError::Other(ref err) => write!(f, "Other Error: {}", err),
        }
    }
}

impl error::Error for QuoteRequestError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            QuoteRequestError::HttpRequest(ref err) => Some(err),
            QuoteRequestError::JsonParse(ref err) => Some(err),
            QuoteRequestError::ParseBigDecimal(ref err) => Some(err),
            QuoteRequestError::HttpStatus(_) | QuoteRequestError::Other(_) => None,
        }
    }
}

impl From<reqwest::Error> for QuoteRequestError {
    fn from(err: reqwest::Error) -> QuoteRequestError {
        // error_for_status() folds the status into a reqwest::Error; keep it visible
        match err.status() {
            Some(status) => QuoteRequestError::HttpStatus(status),
            None => QuoteRequestError::HttpRequest(err),
        }
    }
}

impl From<StatusCode> for QuoteRequestError {
    fn from(status: StatusCode) -> QuoteRequestError {
        QuoteRequestError::HttpStatus(status)
    }
}

impl From<serde_json::Error> for QuoteRequestError {
    fn from(err: serde_json::Error) -> QuoteRequestError {
        QuoteRequestError::JsonParse(err)
    }
}

impl From<bigdecimal::ParseBigDecimalError> for QuoteRequestError {
    fn from(err: bigdecimal::ParseBigDecimalError) -> QuoteRequestError {
        QuoteRequestError::ParseBigDecimal(err)
    }
}

impl From<&str> for QuoteRequestError {
    fn from(err: &str) -> QuoteRequestError {
        QuoteRequestError::Other(err.to_string())
    }
}

impl From<String> for QuoteRequestError {
    fn from(err: String) -> QuoteRequestError {
        QuoteRequestError::Other(err)
    }
}
