//! Server-rendered pages

use std::{borrow::Cow, fmt::Write};

use axum::{http::StatusCode, response::Html};

use crate::{
    forms::FormState,
    models::book::Book,
};

/// Escape text placed in element content
pub fn escape(input: &str) -> Cow<'_, str> {
    html_escape::encode_text(input)
}

/// Escape text placed inside a double-quoted attribute
pub fn escape_attr(input: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(input)
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    ))
}

pub fn book_list(books: &[Book]) -> Html<String> {
    let mut body = String::from("<h1>Books</h1>\n<ul>\n");
    for book in books {
        let _ = writeln!(
            body,
            r#"<li><a href="/view/{id}">{name}</a> ({pages} pages) <a href="/edit/{id}">edit</a> <a href="/delete/{id}">delete</a></li>"#,
            id = book.id,
            name = escape(&book.name),
            pages = book.pages,
        );
    }
    body.push_str("</ul>\n<a href=\"/new\">New book</a>\n");
    layout("Books", &body)
}

pub fn book_detail(book: &Book) -> Html<String> {
    let body = format!(
        r#"<h1>{name}</h1>
<p>Pages: {pages}</p>
<a href="/edit/{id}">Edit</a> <a href="/delete/{id}">Delete</a> <a href="/">Back to list</a>
"#,
        id = book.id,
        name = escape(&book.name),
        pages = book.pages,
    );
    layout(&book.name, &body)
}

/// Create and edit share one form page; `action` is where it posts back to
pub fn book_form(state: &FormState, action: &str) -> Html<String> {
    let form = state.form();
    let field_errors = |field: &str| -> String {
        let mut html = String::new();
        if let Some(errors) = state.errors() {
            let messages = errors.field(field);
            if !messages.is_empty() {
                html.push_str("<ul class=\"errorlist\">");
                for message in messages {
                    let _ = write!(html, "<li>{}</li>", escape(message));
                }
                html.push_str("</ul>");
            }
        }
        html
    };

    let body = format!(
        r#"<h1>Book</h1>
<form method="post" action="{action}">
<p>{name_errors}<label for="id_name">Name:</label> <input type="text" name="name" id="id_name" maxlength="200" value="{name}" required></p>
<p>{pages_errors}<label for="id_pages">Pages:</label> <input type="number" name="pages" id="id_pages" value="{pages}" required></p>
<input type="submit" value="Submit">
</form>
<a href="/">Back to list</a>
"#,
        action = escape_attr(action),
        name_errors = field_errors("name"),
        name = escape_attr(&form.name),
        pages_errors = field_errors("pages"),
        pages = escape_attr(&form.pages),
    );
    layout("Book", &body)
}

pub fn book_confirm_delete(book: &Book) -> Html<String> {
    let body = format!(
        r#"<h1>Delete book</h1>
<form method="post" action="/delete/{id}">
<p>Are you sure you want to delete "{name}"?</p>
<input type="submit" value="Confirm">
</form>
<a href="/">Cancel</a>
"#,
        id = book.id,
        name = escape(&book.name),
    );
    layout("Delete book", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<a href=\"/\">Back to list</a>\n",
        escape(&title),
        escape(message)
    );
    layout(&title, &body)
}
