//! CVSS standard versions and severity families

use serde::{Deserialize, Serialize};

/// Supported CVSS standard versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Version {
    /// CVSS v2 (headerless vectors, `ND` sentinel)
    #[serde(rename = "2.0")]
    V2,
    /// CVSS v3.0
    #[serde(rename = "3.0")]
    V30,
    /// CVSS v3.1
    #[serde(rename = "3.1")]
    V31,
    /// CVSS v4.0
    #[serde(rename = "4.0")]
    V40,
}

/// Severity banding family shared by the rating mapper
///
/// V2 predates the Critical label and uses a three-tier banding;
/// every later version uses the four-tier banding with Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityFamily {
    /// V2: None / Low / Medium / High
    Legacy,
    /// V3.x, V4.0: None / Low / Medium / High / Critical
    Modern,
}

impl Version {
    /// Detect version from a vector header token
    ///
    /// Returns `None` for anything that is not a recognized `CVSS:x.y`
    /// token. V2 vectors carry no header and are detected elsewhere.
    pub fn from_header_token(token: &str) -> Option<Self> {
        match token {
            "CVSS:3.0" => Some(Version::V30),
            "CVSS:3.1" => Some(Version::V31),
            "CVSS:4.0" => Some(Version::V40),
            _ => None,
        }
    }

    /// Header token emitted by the serializer (`None` for V2)
    pub fn header_token(&self) -> Option<&'static str> {
        match self {
            Version::V2 => None,
            Version::V30 => Some("CVSS:3.0"),
            Version::V31 => Some("CVSS:3.1"),
            Version::V40 => Some("CVSS:4.0"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V2 => "2.0",
            Version::V30 => "3.0",
            Version::V31 => "3.1",
            Version::V40 => "4.0",
        }
    }

    /// Sentinel option code meaning "not defined" for this version
    pub fn sentinel(&self) -> &'static str {
        match self {
            Version::V2 => "ND",
            _ => "X",
        }
    }

    pub fn severity_family(&self) -> SeverityFamily {
        match self {
            Version::V2 => SeverityFamily::Legacy,
            _ => SeverityFamily::Modern,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
