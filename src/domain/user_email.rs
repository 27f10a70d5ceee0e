#[derive(Debug, Clone)]
pub struct UserEmail(String);

impl UserEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        let is_empty = s.trim().is_empty();
        let valid_email = validator::validate_email(s.clone());

        if is_empty || !valid_email {
            Err(format!("{s} is not a valid email"))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for UserEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
