use std::fmt;

/// A single entry in the contact book.
///
/// `given_name` is the lookup key: it picks the bucket and orders the
/// contacts inside it. Nothing stops two contacts from sharing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub given_name: String,
    pub family_name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            given_name: given_name.into(),
            family_name: family_name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    /// Serializes the contact as one dump line (without the terminator).
    ///
    /// Fields are joined by a single space in the order given, family,
    /// phone, email. Embedded spaces are written as-is.
    pub fn to_line(&self) -> String {
        format!(
            "{} {} {} {}",
            self.given_name, self.family_name, self.phone, self.email
        )
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.given_name, self.family_name)
    }
}
