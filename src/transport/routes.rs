use reqwest::Method;

use crate::domain::{ContactBookId, ContactId, EmailId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One API operation's HTTP method and path, kept as data so path quirks
/// stay visible in a single place.
pub struct Route {
    pub method: Method,
    pub path: String,
}

pub fn send_email() -> Route {
    Route {
        method: Method::POST,
        path: "/api/v1/emails".to_owned(),
    }
}

pub fn email(id: &EmailId) -> Route {
    Route {
        method: Method::GET,
        path: format!("/api/v1/emails/{}", id.as_str()),
    }
}

pub fn update_schedule(id: &EmailId) -> Route {
    Route {
        method: Method::PATCH,
        path: format!("/api/v1/emails/{}", id.as_str()),
    }
}

pub fn cancel_schedule(id: &EmailId) -> Route {
    Route {
        method: Method::POST,
        path: format!("/api/v1/emails/{}/cancel", id.as_str()),
    }
}

/// Contact creation goes out as a `POST`. Sending a body on a read verb is
/// stripped or rejected by several HTTP stacks, so no other verb is offered.
pub fn create_contact(book: &ContactBookId) -> Route {
    Route {
        method: Method::POST,
        path: format!("/api/v1/contactBooks/{}/contacts", book.as_str()),
    }
}

pub fn contact(book: &ContactBookId, id: &ContactId) -> Route {
    Route {
        method: Method::GET,
        path: contact_path(book, id),
    }
}

pub fn update_contact(book: &ContactBookId, id: &ContactId) -> Route {
    Route {
        method: Method::PATCH,
        path: contact_path(book, id),
    }
}

pub fn upsert_contact(book: &ContactBookId, id: &ContactId) -> Route {
    Route {
        method: Method::PUT,
        path: contact_path(book, id),
    }
}

pub fn delete_contact(book: &ContactBookId, id: &ContactId) -> Route {
    Route {
        method: Method::DELETE,
        path: contact_path(book, id),
    }
}

/// The domains listing lives at an unversioned path, unlike the `/api/v1`
/// resources. Preserved as-is.
pub fn domains() -> Route {
    Route {
        method: Method::GET,
        path: "/v1/domains".to_owned(),
    }
}

fn contact_path(book: &ContactBookId, id: &ContactId) -> String {
    format!(
        "/api/v1/contactBooks/{}/contacts/{}",
        book.as_str(),
        id.as_str()
    )
}
