/// One data row extracted from a record source: column name to raw string
/// value, in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    source: String,
    fields: Vec<(String, String)>,
}

impl SourceRow {
    pub fn new(source: &str, fields: Vec<(String, String)>) -> Self {
        SourceRow {
            source: source.to_string(),
            fields,
        }
    }

    /// Name of the record source this row came from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}
