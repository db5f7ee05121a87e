//! User registration and profile endpoints.
//!
//! These stay local to the frontend: the pages render and the write
//! endpoints acknowledge with a fixed message, nothing is forwarded to
//! the backend.

use crate::{handlers::pages::render_page, models::MessageResponse};
use actix_web::{Error, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

/// User registration page
#[api_v2_operation(
    summary = "User Registration Page",
    description = "Renders the user registration form.",
    tags("Users"),
    responses((status = 200, description = "Successful response"))
)]
pub async fn user_register() -> HttpResponse {
    let body = r#"<h1>User Registration</h1>
<form method="post" action="/user/register">
    <label for="name">Name</label>
    <input id="name" name="name" type="text">
    <label for="email">Email</label>
    <input id="email" name="email" type="email">
    <button type="submit">Register</button>
</form>"#;

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page("Register", body))
}

/// User registration submission
#[api_v2_operation(
    summary = "User Registration Endpoint",
    description = "Acknowledges a registration submission.",
    tags("Users"),
    responses((status = 200, description = "Registration acknowledged", body = MessageResponse))
)]
pub async fn user_register_submit() -> Result<web::Json<MessageResponse>, Error> {
    Ok(web::Json(MessageResponse::new(
        "User registration completed",
    )))
}

/// User profile page
#[api_v2_operation(
    summary = "User Profile Page",
    description = "Renders the user profile page.",
    tags("Users"),
    responses((status = 200, description = "Successful response"))
)]
pub async fn user_profile() -> HttpResponse {
    let body = r#"<h1>User Profile</h1>
<form id="profile-form">
    <label for="name">Name</label>
    <input id="name" name="name" type="text">
    <label for="email">Email</label>
    <input id="email" name="email" type="email">
    <button type="submit">Update</button>
</form>"#;

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page("Profile", body))
}

/// User profile update
#[api_v2_operation(
    summary = "User Profile Update Endpoint",
    description = "Acknowledges a profile update.",
    tags("Users"),
    responses((status = 200, description = "Update acknowledged", body = MessageResponse))
)]
pub async fn user_profile_update() -> Result<web::Json<MessageResponse>, Error> {
    Ok(web::Json(MessageResponse::new("Profile updated")))
}
