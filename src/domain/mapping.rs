// Mapping from books API DTOs to domain models

use super::models::{Author, Book};
use crate::books_client::{AuthorDto, BookDto};

pub fn map_author(author: Option<AuthorDto>) -> Author {
    let author = author.unwrap_or_default();
    Author {
        name: author.name.unwrap_or_default(),
        created_at: author.created_at.unwrap_or_default(),
    }
}

pub fn map_book(dto: BookDto) -> Book {
    let cover_photo_uri = dto
        .cover_photo_uri
        .map(|uri| uri.trim().to_string())
        .filter(|uri| !uri.is_empty());

    Book {
        id: dto.id,
        title: dto.title.unwrap_or_default(),
        author: map_author(dto.author),
        is_published: dto.is_published.unwrap_or(false),
        is_arabic: dto.is_arabic.unwrap_or(false),
        description: dto.description.unwrap_or_default(),
        cover_photo_uri,
    }
}

pub fn map_books(dtos: Vec<BookDto>) -> Vec<Book> {
    dtos.into_iter().map(map_book).collect()
}
