#[derive(Debug, Clone)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}
