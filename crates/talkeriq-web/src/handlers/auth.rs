//! Sign-in and sign-out handlers

use crate::{
    components::{Notice, render_document},
    error::WebError,
    pages::login::LoginPage,
    state::AppState,
};
use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use leptos::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use talkeriq_core::{
    Credentials, Error,
    auth::login_with_timeout,
    navigation::{HOME_PATH, LOGIN_PATH},
};
use tracing::info;

/// Query string of the sign-in page
#[derive(Debug, Default, Deserialize)]
pub struct LoginParams {
    /// Render the password in clear text
    #[serde(default)]
    pub show_password: bool,
    /// One-shot toast to show
    pub notice: Option<String>,
}

fn login_document(email: String, show_password: bool, notice: Option<Notice>) -> Html<String> {
    Html(render_document(
        "Sign In",
        view! { <LoginPage email=email show_password=show_password notice=notice/> },
    ))
}

/// Sign-in form
pub async fn login_page(Query(params): Query<LoginParams>) -> Html<String> {
    let notice = params.notice.as_deref().and_then(Notice::from_query);
    login_document(String::new(), params.show_password, notice)
}

/// Check the submitted credentials
///
/// Success redirects to the dashboard with a welcome toast. Rejected
/// credentials re-render the form with HTTP 401 and the email kept.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(credentials): Form<Credentials>,
) -> Result<Response, WebError> {
    match login_with_timeout(&state.authenticator, &credentials, state.login_timeout()).await {
        Ok(_session) => {
            let target = format!("{HOME_PATH}?notice={}", Notice::SIGNED_IN);
            Ok(Redirect::to(&target).into_response())
        }
        Err(Error::Authentication(_)) => {
            let page = login_document(credentials.email, false, Some(Notice::LoginFailed));
            Ok((StatusCode::UNAUTHORIZED, page).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// End the session and return to the sign-in form
pub async fn logout() -> Redirect {
    info!("User signed out");
    Redirect::to(LOGIN_PATH)
}
