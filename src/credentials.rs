//! Bearer token lookup.

use crate::config::TOKEN_ENV;
use crate::error::{DispatchError, Result};
use secrecy::SecretString;
use std::ffi::OsString;

/// Read the bearer token from `GITHUB_TOKEN`.
///
/// Never returns an empty token.
pub fn read_token() -> Result<SecretString> {
    token_from(std::env::var_os(TOKEN_ENV))
}

fn token_from(value: Option<OsString>) -> Result<SecretString> {
    let token = value
        .and_then(|v| v.into_string().ok())
        .filter(|v| !v.is_empty())
        .ok_or(DispatchError::MissingCredential)?;
    Ok(SecretString::from(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;

    struct EnvGuard {
        original: Option<OsString>,
    }

    impl EnvGuard {
        fn set(value: Option<&str>) -> Self {
            let original = std::env::var_os(TOKEN_ENV);
            // SAFETY: tests touching the environment are #[serial].
            unsafe {
                match value {
                    Some(v) => std::env::set_var(TOKEN_ENV, v),
                    None => std::env::remove_var(TOKEN_ENV),
                }
            }
            Self { original }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // SAFETY: see EnvGuard::set.
            unsafe {
                match &self.original {
                    Some(v) => std::env::set_var(TOKEN_ENV, v),
                    None => std::env::remove_var(TOKEN_ENV),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn unset_token_is_missing_credential() {
        let _env = EnvGuard::set(None);
        assert!(matches!(read_token(), Err(DispatchError::MissingCredential)));
    }

    #[test]
    #[serial]
    fn empty_token_is_missing_credential() {
        let _env = EnvGuard::set(Some(""));
        assert!(matches!(read_token(), Err(DispatchError::MissingCredential)));
    }

    #[test]
    #[serial]
    fn token_is_read_from_environment() {
        let _env = EnvGuard::set(Some("ghp_example"));
        let token = read_token().unwrap();
        assert_eq!(token.expose_secret(), "ghp_example");
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_token_is_missing_credential() {
        use std::os::unix::ffi::OsStringExt;
        let value = OsString::from_vec(vec![0x67, 0xff, 0x68]);
        assert!(matches!(
            token_from(Some(value)),
            Err(DispatchError::MissingCredential)
        ));
    }
}
