use super::DomainError;

pub const DEFAULT_SOURCE_PORT: u16 = 12345;

/// Contiguous, inclusive range of UDP source ports swept by one run.
///
/// Enumerating `n` paths from `start` covers `[start, start + n]`, i.e.
/// `n + 1` exchanges; no enumeration means a single exchange on `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    start: u16,
    len: u32,
}

impl PortRange {
    pub fn single(port: u16) -> Self {
        Self { start: port, len: 1 }
    }

    pub fn empty(start: u16) -> Self {
        Self { start, len: 0 }
    }

    pub fn inclusive(start: u16, end: u16) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::ConfigError(format!(
                "Port range end {} is below start {}",
                end, start
            )));
        }
        Ok(Self {
            start,
            len: u32::from(end - start) + 1,
        })
    }

    pub fn from_enumeration(start: u16, paths: Option<u32>) -> Result<Self, DomainError> {
        if start == 0 {
            return Err(DomainError::ConfigError(
                "Source port must be a number between 1 and 65535".to_string(),
            ));
        }
        match paths {
            None => Ok(Self::single(start)),
            Some(n) => {
                let end = u32::from(start)
                    .checked_add(n)
                    .and_then(|end| u16::try_from(end).ok())
                    .ok_or_else(|| {
                        DomainError::ConfigError(format!(
                            "Source port + paths must be <= 65535 (got {} + {})",
                            start, n
                        ))
                    })?;
                Self::inclusive(start, end)
            }
        }
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn ports(&self) -> impl Iterator<Item = u16> + Send + 'static {
        let start = u32::from(self.start);
        (start..start + self.len).map(|port| port as u16)
    }
}
