#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
}
