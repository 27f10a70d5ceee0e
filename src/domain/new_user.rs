use secrecy::Secret;

use crate::domain::{UserEmail, UserName};
use crate::routes::RegisterFormBody;

pub struct NewUser {
    pub full_name: UserName,
    pub email: UserEmail,
    /// Raw submitted password; hashed by the registration handler before it
    /// ever reaches the store.
    pub password: Secret<String>,
}

impl TryFrom<RegisterFormBody> for NewUser {
    type Error = String;

    fn try_from(value: RegisterFormBody) -> Result<Self, Self::Error> {
        let full_name = UserName::parse(value.full_name)?;
        let email = UserEmail::parse(value.email)?;

        Ok(Self {
            full_name,
            email,
            password: value.password,
        })
    }
}
