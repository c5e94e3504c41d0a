/// Data of a text node
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextData {
    value: String,
}

impl TextData {
    pub(crate) fn with_value(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
