/// Configuration for the web renderer.
///
/// # Example
///
/// ```rust
/// # use lattice_web::WebConfig;
/// let mut cfg = WebConfig::default();
/// cfg.commit_key("Tab").autocomplete("current-password");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebConfig {
    pub(crate) commit_key: String,
    pub(crate) autocomplete: Option<String>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            commit_key: "Enter".to_string(),
            autocomplete: None,
        }
    }
}

impl WebConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key that commits a text field. Defaults to `Enter`.
    ///
    /// The key is compared against the `key` of `keypress` events, so it must be a key identifier like `"Enter"`
    /// rather than a key code.
    pub fn commit_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.commit_key = key.into();
        self
    }

    /// Add an `autocomplete` hint to rendered secure fields, for example `"current-password"` or `"new-password"`.
    ///
    /// No hint is written by default.
    pub fn autocomplete(&mut self, hint: impl Into<String>) -> &mut Self {
        self.autocomplete = Some(hint.into());
        self
    }
}
