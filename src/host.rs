use crate::error::Result;
use crate::patterns::{group, patterns};
use crate::url::Userinfo;

/// Split userinfo off an authority at its last `@`.
///
/// Using the last `@` keeps unescaped `@` inside credentials with the
/// credentials: `j@ne:p@ss@host` has username `j@ne`, password `p@ss`.
fn split_userinfo(authority: &str) -> (Userinfo, &str) {
    let Some(at) = memchr::memrchr(b'@', authority.as_bytes()) else {
        return (Userinfo::default(), authority);
    };

    let (username, password) = match authority[..at].split_once(':') {
        Some((username, password)) => (username, password),
        None => (&authority[..at], ""),
    };
    // An empty password and a missing one are indistinguishable here
    let userinfo = Userinfo {
        username: username.to_string(),
        password: (!password.is_empty()).then(|| password.to_string()),
    };

    (userinfo, &authority[at + 1..])
}

/// Split an authority into userinfo, host and port.
///
/// Host is either the content of a bracketed literal (`[::1]` gives `::1`) or
/// a run of non-`:` characters. Port is kept only when it is all digits.
pub(crate) fn split_host(authority: &str) -> Result<(Userinfo, &str, &str)> {
    let (userinfo, host_port) = split_userinfo(authority);

    let caps = patterns()?.host_port.captures(host_port);
    let caps = caps.as_ref();

    let mut host = group(caps, "host");
    if host.is_empty() {
        host = group(caps, "host6");
    }

    Ok((userinfo, host, group(caps, "port")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_authority() {
        let (user, host, port) = split_host("user:pass@google.com:80").unwrap();
        assert_eq!(user.username(), "user");
        assert_eq!(user.password(), Some("pass"));
        assert!(user.password_set());
        assert_eq!(host, "google.com");
        assert_eq!(port, "80");
    }

    #[test]
    fn test_last_at_wins() {
        let (user, host, _) = split_host("j@ne:p@ssword@google.com").unwrap();
        assert_eq!(user.username(), "j@ne");
        assert_eq!(user.password(), Some("p@ssword"));
        assert_eq!(host, "google.com");
    }

    #[test]
    fn test_password_keeps_later_colons() {
        let (user, _, _) = split_host("user:pa:ss@host").unwrap();
        assert_eq!(user.username(), "user");
        assert_eq!(user.password(), Some("pa:ss"));
    }

    #[test]
    fn test_password_presence_is_conflated() {
        let (user, _, _) = split_host("user:@host").unwrap();
        assert_eq!(user.username(), "user");
        assert_eq!(user.password(), None);
        assert!(!user.password_set());

        let (user, _, _) = split_host("user@host").unwrap();
        assert_eq!(user.password(), None);
        assert!(!user.password_set());
    }

    #[test]
    fn test_empty_username() {
        let (user, host, _) = split_host(":secret@host").unwrap();
        assert_eq!(user.username(), "");
        assert_eq!(user.password(), Some("secret"));
        assert_eq!(host, "host");
    }

    #[test]
    fn test_bracketed_host() {
        let (_, host, port) = split_host("[2001:db8:1f70::999:de8:7648:6e8]:9090").unwrap();
        assert_eq!(host, "2001:db8:1f70::999:de8:7648:6e8");
        assert_eq!(port, "9090");

        let (_, host, port) = split_host("[::1]").unwrap();
        assert_eq!(host, "::1");
        assert_eq!(port, "");
    }

    #[test]
    fn test_non_digit_port_dropped() {
        let (_, host, port) = split_host("example.com:http").unwrap();
        assert_eq!(host, "example.com");
        assert_eq!(port, "");
    }

    #[test]
    fn test_port_without_host() {
        let (_, host, port) = split_host(":8080").unwrap();
        assert_eq!(host, "");
        assert_eq!(port, "8080");
    }

    #[test]
    fn test_empty_authority() {
        let (user, host, port) = split_host("").unwrap();
        assert_eq!(user, Userinfo::default());
        assert_eq!(host, "");
        assert_eq!(port, "");
    }
}
