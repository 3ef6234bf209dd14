/// Non-standard attribute, kept as raw bytes
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Attribute name (eg. `Synthetic`, `org.example.Custom`)
    pub kind: String,
    pub content: Vec<u8>,
}

impl Attribute {
    pub fn new(kind: &str, content: &[u8]) -> Attribute {
        Attribute {
            kind: kind.to_owned(),
            content: content.to_vec(),
        }
    }
}
