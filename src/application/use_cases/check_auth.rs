use crate::application::dto::CheckAuthResponse;

/// CheckAuthUseCase - validates the API key presented by a caller
///
/// A missing key is treated like a wrong one.
pub struct CheckAuthUseCase {
    api_key: String,
}

impl CheckAuthUseCase {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn execute(&self, presented: Option<&str>) -> CheckAuthResponse {
        match presented {
            Some(key) if key == self.api_key => CheckAuthResponse::valid(),
            _ => CheckAuthResponse::invalid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::INVALID_API_KEY_MESSAGE;

    #[test]
    fn test_matching_key_is_valid() {
        let use_case = CheckAuthUseCase::new("secret");
        let response = use_case.execute(Some("secret"));
        assert!(response.valid);
        assert!(response.error.is_empty());
    }

    #[test]
    fn test_wrong_key_is_invalid() {
        let use_case = CheckAuthUseCase::new("secret");
        let response = use_case.execute(Some("Secret"));
        assert!(!response.valid);
        assert_eq!(response.error, INVALID_API_KEY_MESSAGE);
    }

    #[test]
    fn test_missing_key_is_invalid() {
        let use_case = CheckAuthUseCase::new("secret");
        assert!(!use_case.execute(None).valid);
        assert!(!use_case.execute(Some("")).valid);
    }
}
