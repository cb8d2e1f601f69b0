//! Domain argument handling

use crate::error::CliError;
use std::ffi::OsStr;

/// Turn a raw command-line argument into the domain string to classify
///
/// Arguments that are not valid UTF-8 are converted lossily rather than
/// rejected. Empty and whitespace-only arguments are rejected.
pub fn domain_from_arg(arg: &OsStr) -> Result<String, CliError> {
    let domain = arg.to_string_lossy().into_owned();
    if domain.trim().is_empty() {
        return Err(CliError::InvalidDomain(domain));
    }
    Ok(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_domain() {
        let domain = domain_from_arg(OsStr::new("example.com")).unwrap();
        assert_eq!(domain, "example.com");
    }

    #[test]
    fn test_unicode_domain_kept_verbatim() {
        let domain = domain_from_arg(OsStr::new(" café.com")).unwrap();
        assert_eq!(domain, " café.com");
    }

    #[test]
    fn test_empty_domain_rejected() {
        assert!(matches!(
            domain_from_arg(OsStr::new("")),
            Err(CliError::InvalidDomain(_))
        ));
        assert!(matches!(
            domain_from_arg(OsStr::new(" \t")),
            Err(CliError::InvalidDomain(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_is_lossy() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let arg = OsString::from_vec(vec![b'a', 0xFF, b'b']);
        let domain = domain_from_arg(&arg).unwrap();
        assert_eq!(domain, "a\u{FFFD}b");
    }
}
