// Domain records the screen renders, decoupled from the wire DTOs

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    /// Raw timestamp as delivered by the API, e.g. "2023-01-05T00:00:00Z"
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    /// Stable identity used for list keys and expansion tracking
    pub id: String,
    pub title: String,
    pub author: Author,
    pub is_published: bool,
    pub is_arabic: bool,
    pub description: String,
    /// Relative path joined onto the cover base URL; `None` when the API sent nothing usable
    pub cover_photo_uri: Option<String>,
}
