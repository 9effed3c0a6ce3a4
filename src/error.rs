use snafu::Snafu;
use std::num::ParseIntError;

pub type RollcallResult<T> = Result<T, RollcallError>;

///Startup-only error taxonomy; the request path has no fallible operations.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RollcallError {
    #[snafu(display("Unable to parse IP port"))]
    ParsePort { source: ParseIntError },
}
