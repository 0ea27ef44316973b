//! HTTP Basic authentication credentials.

use crate::to_base64;

/// Builds the value of an HTTP `Authorization` header for Basic
/// authentication: `Basic ` followed by the base64 of `user:password`.
///
/// # Example
///
/// ```
/// use cdmi_base64::basic_credentials;
///
/// assert_eq!(basic_credentials("restadmin", "restadmin"), "Basic cmVzdGFkbWluOnJlc3RhZG1pbg==");
/// ```
pub fn basic_credentials(user: &str, password: &str) -> String {
    let pair = format!("{user}:{password}");
    format!("Basic {}", to_base64(pair.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_base64;

    #[test]
    fn rfc7617_example() {
        assert_eq!(
            basic_credentials("Aladdin", "open sesame"),
            "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
        );
    }

    #[test]
    fn credentials_round_trip() {
        let header = basic_credentials("user1", "p:ss word");
        let token = header.strip_prefix("Basic ").unwrap();
        assert_eq!(from_base64(token).unwrap(), b"user1:p:ss word");
    }

    #[test]
    fn empty_password() {
        assert_eq!(basic_credentials("a", ""), "Basic YTo=");
    }
}
