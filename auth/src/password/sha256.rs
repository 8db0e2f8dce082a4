use sha2::Digest;
use sha2::Sha256;

/// Password digest used for stored credentials.
///
/// A single unsalted SHA-256 pass over the raw password bytes, hex-encoded.
/// This is weak against offline attacks; it is kept so that existing user
/// records keep matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordDigest;

impl PasswordDigest {
    pub fn new() -> Self {
        Self
    }

    /// Digest a plaintext password.
    ///
    /// # Returns
    /// Lowercase hex SHA-256 of the password bytes
    pub fn digest(&self, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_plain_sha256() {
        let digest = PasswordDigest::new();

        assert_eq!(
            digest.digest("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            digest.digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_is_deterministic() {
        let digest = PasswordDigest::new();

        assert_eq!(digest.digest("pw1"), digest.digest("pw1"));
        assert_ne!(digest.digest("pw1"), digest.digest("pw2"));
    }
}
