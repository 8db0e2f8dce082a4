use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// JWT token handler for issuing and parsing tokens.
///
/// Uses HS256 (HMAC with SHA-256) with a process-wide shared secret.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    ///
    /// # Errors
    /// * `MissingSecret` - The secret is empty
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature and structure and return its claims.
    ///
    /// Expired tokens are rejected here, with no leeway.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `TokenExpired` - The `exp` claim is in the past
    /// * `Malformed` - Token could not be decoded
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::Malformed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(SECRET).unwrap();
        let claims = Claims::for_user("alice", Duration::minutes(10));

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        assert!(matches!(JwtHandler::new(b""), Err(JwtError::MissingSecret)));
    }

    #[test]
    fn test_decode_malformed_token() {
        let handler = JwtHandler::new(SECRET).unwrap();

        let result = handler.decode("invalid.token.here");
        assert!(matches!(result, Err(JwtError::Malformed(_))));

        let result = handler.decode("");
        assert!(matches!(result, Err(JwtError::Malformed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!").unwrap();
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!").unwrap();

        let token = handler1
            .encode(&Claims::for_user("alice", Duration::minutes(10)))
            .unwrap();

        assert_eq!(handler2.decode(&token), Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_decode_tampered_payload() {
        let handler = JwtHandler::new(SECRET).unwrap();
        let token = handler
            .encode(&Claims::for_user("alice", Duration::minutes(10)))
            .unwrap();
        let forged = handler
            .encode(&Claims::for_user("mallory", Duration::minutes(10)))
            .unwrap();

        // Splice the forged payload onto the original signature.
        let parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        let tampered = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

        assert_eq!(handler.decode(&tampered), Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_tampered_expired_token_reports_signature() {
        let handler = JwtHandler::new(SECRET).unwrap();
        let other = JwtHandler::new(b"another_secret_at_least_32_bytes!!").unwrap();
        let token = other
            .encode(&Claims::for_user("alice", Duration::minutes(-10)))
            .unwrap();

        assert_eq!(handler.decode(&token), Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(SECRET).unwrap();
        let token = handler
            .encode(&Claims::for_user("alice", Duration::seconds(-5)))
            .unwrap();

        assert_eq!(handler.decode(&token), Err(JwtError::TokenExpired));
    }
}
