use std::convert::From;
use std::io;

/// Fatal failures of an inspection run. Each one ends the run; the binary maps all of them to
/// exit status 1.
#[derive(Debug, PartialEq, Fail)]
pub enum InspectError {
    #[fail(display = "HTTP error {} at {}", status_code, url)]
    Http { status_code: u16, url: String },
    #[fail(display = "Connection error: {}", reason)]
    Connection { reason: String },
    #[fail(display = "Schema shape error: {}", reason)]
    SchemaShape { reason: String },
}

impl InspectError {
    pub fn connection<R: ToString>(reason: R) -> InspectError {
        InspectError::Connection {
            reason: reason.to_string(),
        }
    }

    pub fn schema_shape<R: ToString>(reason: R) -> InspectError {
        InspectError::SchemaShape {
            reason: reason.to_string(),
        }
    }
}

impl From<io::Error> for InspectError {
    fn from(err: io::Error) -> InspectError {
        InspectError::connection(err)
    }
}

impl From<::hyper::Error> for InspectError {
    fn from(err: ::hyper::Error) -> InspectError {
        InspectError::connection(err)
    }
}
