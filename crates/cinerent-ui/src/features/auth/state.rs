//! Login and registration form state.

/// Login form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
}

impl LoginFormState {
    /// Whether every field has a non-blank value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        filled(&self.email) && filled(&self.password)
    }
}

/// Registration form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFormState {
    /// Display name input.
    pub username: String,
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
}

impl RegisterFormState {
    /// Whether every field has a non-blank value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        filled(&self.username) && filled(&self.email) && filled(&self.password)
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}
