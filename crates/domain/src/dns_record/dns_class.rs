use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnsClass {
    IN,
    CH,
    HS,
    NONE,
    ANY,
}

impl DnsClass {
    pub fn to_u16(&self) -> u16 {
        match self {
            DnsClass::IN => 1,
            DnsClass::CH => 3,
            DnsClass::HS => 4,
            DnsClass::NONE => 254,
            DnsClass::ANY => 255,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(DnsClass::IN),
            3 => Some(DnsClass::CH),
            4 => Some(DnsClass::HS),
            254 => Some(DnsClass::NONE),
            255 => Some(DnsClass::ANY),
            _ => None,
        }
    }
}

impl fmt::Display for DnsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsClass::IN => write!(f, "IN"),
            DnsClass::CH => write!(f, "CH"),
            DnsClass::HS => write!(f, "HS"),
            DnsClass::NONE => write!(f, "NONE"),
            DnsClass::ANY => write!(f, "ANY"),
        }
    }
}

impl FromStr for DnsClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        match upper.as_str() {
            "IN" | "INTERNET" => Ok(DnsClass::IN),
            "CH" | "CHAOS" => Ok(DnsClass::CH),
            "HS" | "HESIOD" => Ok(DnsClass::HS),
            "NONE" => Ok(DnsClass::NONE),
            "ANY" | "*" => Ok(DnsClass::ANY),
            other => other
                .strip_prefix("CLASS")
                .and_then(|code| code.parse::<u16>().ok())
                .and_then(DnsClass::from_u16)
                .ok_or_else(|| format!("Unknown record class: {}", s)),
        }
    }
}
