use crate::error::{ParsePortSnafu, RollcallResult};
use dotenvy::var;
use snafu::ResultExt;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    host: String,
    port: u16,
}

impl RuntimeConfiguration {
    ///Reads `ROLLCALL_HOST` and `ROLLCALL_PORT`, falling back to defaults
    ///when unset. A set-but-unparseable port is an error rather than a
    ///silent fallback.
    pub fn new() -> RollcallResult<Self> {
        let host = var("ROLLCALL_HOST").unwrap_or_else(|_| DEFAULT_HOST.into());
        let port = match var("ROLLCALL_PORT") {
            Ok(raw) => raw.parse().context(ParsePortSnafu)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn server_ip(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
