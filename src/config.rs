use anyhow::bail;

pub const DEFAULT_PORT: u16 = 8080;

/// Startup configuration, resolved once in `main` and passed in. Immutable
/// for the process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        let port = resolve_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Config { port })
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// An absent or empty `PORT` means the default. A value that is present but
/// not a usable port is a startup error, never a silent fallback, so a typo
/// cannot bind the wrong port.
fn resolve_port(raw: Option<&str>) -> anyhow::Result<u16> {
    let raw = match raw {
        None => return Ok(DEFAULT_PORT),
        Some(s) if s.is_empty() => return Ok(DEFAULT_PORT),
        Some(s) => s,
    };

    match raw.parse::<u16>() {
        Ok(0) => bail!("PORT must be in range 1-65535, got 0"),
        Ok(port) => Ok(port),
        Err(_) => bail!("PORT must be an integer in range 1-65535, got {:?}", raw),
    }
}
