use subtle::ConstantTimeEq;

/// Shared-secret check in front of the store.
///
/// Every request carries the password in a `password` header; the
/// comparison is constant-time for equal-length values.
pub struct RequestGate {
    password: String,
}

impl RequestGate {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Whether the presented header value matches the configured
    /// password. A missing header counts as an empty value.
    pub fn authorize(&self, presented: Option<&str>) -> bool {
        let presented = presented.unwrap_or("");
        presented
            .as_bytes()
            .ct_eq(self.password.as_bytes())
            .into()
    }
}
