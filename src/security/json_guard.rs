use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::{Method, header},
    middleware::Next,
};

/// Media type the contact API accepts.
const JSON: &str = "application/json";

/// A POSTed body is only let through when it is declared as JSON.
fn declares_json(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|v| v.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(JSON))
}

/// Guard for the `/api` scope: contact inquiries must arrive as JSON.
///
/// A cross-site HTML form can only post urlencoded, multipart or plain
/// text bodies, so the content type alone keeps forged submissions out.
pub async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if req.method() == Method::POST {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok());

        if !declares_json(content_type) {
            log::warn!(
                "Rejected {} {} with content type {:?}",
                req.method(),
                req.path(),
                content_type.unwrap_or("")
            );
            let body = serde_json::json!({ "error": "Content-Type must be application/json" });
            let response = HttpResponse::BadRequest().json(body);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_with_parameters_is_accepted() {
        assert!(declares_json(Some("application/json")));
        assert!(declares_json(Some("application/json; charset=utf-8")));
        assert!(declares_json(Some("Application/JSON")));
    }

    #[test]
    fn form_encodings_are_rejected() {
        assert!(!declares_json(Some("application/x-www-form-urlencoded")));
        assert!(!declares_json(Some("multipart/form-data; boundary=x")));
        assert!(!declares_json(Some("text/plain")));
        assert!(!declares_json(Some("application/jsonp")));
        assert!(!declares_json(None));
    }
}
