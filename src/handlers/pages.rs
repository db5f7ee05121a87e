//! Static page handlers and the shared page shell.

use crate::utils::escape_html;
use actix_web::HttpResponse;
use paperclip::actix::api_v2_operation;

/// Wrap page content in the shared HTML shell.
pub(crate) fn render_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title} - Symptom Checker</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 0;
            background: #f5f5f5;
            color: #333;
        }}
        .container {{
            max-width: 800px;
            margin: 40px auto;
            padding: 20px;
            background: #fff;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
            border-radius: 8px;
        }}
        h1 {{
            text-align: center;
        }}
        nav {{
            text-align: center;
            margin-bottom: 20px;
        }}
        nav a {{
            margin: 0 10px;
        }}
        label {{
            display: block;
            margin-top: 12px;
        }}
        input, textarea {{
            width: 100%;
            padding: 6px;
            box-sizing: border-box;
        }}
        button {{
            margin-top: 16px;
            padding: 8px 24px;
        }}
        pre {{
            background: #eee;
            padding: 20px;
            border-radius: 4px;
            overflow-x: auto;
        }}
    </style>
</head>
<body>
    <div class="container">
        <nav>
            <a href="/">Home</a>
            <a href="/symptom/">Symptom Check</a>
            <a href="/hospital/">Hospitals</a>
            <a href="/news/">News</a>
        </nav>
        {body}
    </div>
</body>
</html>"#
    )
}

/// Render the generic error page used when a page cannot be built.
pub(crate) fn error_page(message: &str) -> HttpResponse {
    let body = format!(
        "<h1>Something went wrong</h1><p>{}</p>",
        escape_html(message)
    );
    HttpResponse::InternalServerError()
        .content_type("text/html; charset=utf-8")
        .body(render_page("Error", &body))
}

/// Landing page
#[api_v2_operation(
    summary = "Landing Page",
    description = "Renders the landing page.",
    tags("Pages"),
    responses((status = 200, description = "Successful response"))
)]
pub async fn home() -> HttpResponse {
    let body = r#"<h1>Symptom Checker</h1>
<p>Check your symptoms, get guidance on which specialty to visit, and find nearby hospitals.</p>
<ul>
    <li><a href="/symptom/">Start a symptom check</a></li>
    <li><a href="/hospital/">Search hospitals</a></li>
    <li><a href="/news/">Health news and updates</a></li>
</ul>"#;

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page("Home", body))
}

/// Health news page
#[api_v2_operation(
    summary = "Health News Page",
    description = "Renders the health news and information page.",
    tags("Pages"),
    responses((status = 200, description = "Successful response"))
)]
pub async fn news_page() -> HttpResponse {
    let body = r#"<h1>Health News</h1>
<p>Seasonal health information and announcements are published here.</p>
<div id="news-list"><p>No articles available right now.</p></div>"#;

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page("News", body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page_wraps_body() {
        let page = render_page("Home", "<h1>hi</h1>");
        assert!(page.contains("<title>Home - Symptom Checker</title>"));
        assert!(page.contains("<h1>hi</h1>"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let res = error_page("<broken>");
        assert_eq!(res.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
