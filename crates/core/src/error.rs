#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One or more required input fields were absent, `null`, or empty.
    ///
    /// `message` is the fixed client-facing text; `fields` lists every
    /// missing field by its wire (camelCase) name.
    #[error("{message}")]
    MissingFields {
        message: &'static str,
        fields: Vec<&'static str>,
    },
}
