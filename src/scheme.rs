/// Schemes with a well-known default port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    Other,
}

impl SchemeType {
    /// Get the scheme type from a lowercased scheme string.
    /// Uses length + first byte to minimize comparisons.
    pub fn from_scheme(scheme: &str) -> Self {
        let bytes = scheme.as_bytes();

        match (bytes.len(), bytes.first()) {
            (2, Some(b'w')) if bytes == b"ws" => Self::Ws,
            (3, Some(b'w')) if bytes == b"wss" => Self::Wss,
            (3, Some(b'f')) if bytes == b"ftp" => Self::Ftp,
            (4, Some(b'h')) if bytes == b"http" => Self::Http,
            (5, Some(b'h')) if bytes == b"https" => Self::Https,
            _ => Self::Other,
        }
    }

    /// Get the default port, as it appears in a URL
    pub fn default_port(self) -> Option<&'static str> {
        match self {
            Self::Http | Self::Ws => Some("80"),
            Self::Https | Self::Wss => Some("443"),
            Self::Ftp => Some("21"),
            Self::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_type() {
        assert_eq!(SchemeType::from_scheme("http"), SchemeType::Http);
        assert_eq!(SchemeType::from_scheme("https"), SchemeType::Https);
        assert_eq!(SchemeType::from_scheme("ftp"), SchemeType::Ftp);
        assert_eq!(SchemeType::from_scheme("file"), SchemeType::Other);
        assert_eq!(SchemeType::from_scheme(""), SchemeType::Other);
    }

    #[test]
    fn test_default_port() {
        assert_eq!(SchemeType::Http.default_port(), Some("80"));
        assert_eq!(SchemeType::Wss.default_port(), Some("443"));
        assert_eq!(SchemeType::Other.default_port(), None);
    }
}
