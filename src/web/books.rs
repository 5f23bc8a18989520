//! HTML book pages

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    error::AppResult,
    forms::{BookForm, FormState},
    services::books::FormOutcome,
    AppState,
};

use super::{templates, BookId};

const LIST_URL: &str = "/";

fn form_response(outcome: FormOutcome, form: BookForm, action: &str) -> Response {
    match outcome {
        FormOutcome::Saved(_) => Redirect::to(LIST_URL).into_response(),
        FormOutcome::Invalid(errors) => {
            templates::book_form(&FormState::Submitted { form, errors }, action).into_response()
        }
    }
}

/// GET /
pub async fn book_list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let books = state.services.books.list().await?;
    Ok(templates::book_list(&books))
}

/// GET /view/:id
pub async fn book_view(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Html<String>> {
    let book = state.services.books.get(id).await?;
    Ok(templates::book_detail(&book))
}

/// GET /new
pub async fn book_new_form() -> Html<String> {
    templates::book_form(&FormState::AwaitingInput(BookForm::default()), "/new")
}

/// POST /new
pub async fn book_create(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    let outcome = state.services.books.create(&form).await?;
    Ok(form_response(outcome, form, "/new"))
}

/// GET /edit/:id
pub async fn book_edit_form(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Html<String>> {
    let book = state.services.books.get(id).await?;
    let form = FormState::AwaitingInput(BookForm::from_book(&book));
    Ok(templates::book_form(&form, &format!("/edit/{}", id)))
}

/// POST /edit/:id
pub async fn book_update(
    State(state): State<AppState>,
    BookId(id): BookId,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    let outcome = state.services.books.update(id, &form).await?;
    Ok(form_response(outcome, form, &format!("/edit/{}", id)))
}

/// GET /delete/:id
pub async fn book_delete_confirm(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Html<String>> {
    let book = state.services.books.get(id).await?;
    Ok(templates::book_confirm_delete(&book))
}

/// POST /delete/:id
pub async fn book_delete(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Redirect> {
    state.services.books.delete(id).await?;
    Ok(Redirect::to(LIST_URL))
}
