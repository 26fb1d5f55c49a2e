use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::HttpResponse;

use crate::shared::persistence::PageResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Created,
    Updated,
    Deleted,
}

impl AuditAction {
    fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Created => "created",
            AuditAction::Updated => "updated",
            AuditAction::Deleted => "deleted",
        }
    }
}

/// Notification headers attached to every mutating response, e.g.
/// `X-cvmakerApp-alert: cvmakerApp.cv.updated` and `X-cvmakerApp-params: <id>`.
#[derive(Debug, Clone)]
pub struct AuditHeaders {
    application_name: String,
}

impl AuditHeaders {
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
        }
    }

    pub fn apply(
        &self,
        mut response: HttpResponse,
        action: AuditAction,
        entity: &str,
        param: &str,
    ) -> HttpResponse {
        let app = &self.application_name;
        let alert = format!("{app}.{entity}.{}", action.as_str());

        insert(&mut response, &format!("X-{app}-alert"), &alert);
        insert(&mut response, &format!("X-{app}-params"), param);
        response
    }
}

/// Adds `X-Total-Count` and an RFC 5988 `Link` header to a list response.
pub fn with_pagination<T>(mut response: HttpResponse, path: &str, page: &PageResult<T>) -> HttpResponse {
    insert(&mut response, "X-Total-Count", &page.total.to_string());
    insert(&mut response, "Link", &link_header(path, page));
    response
}

fn link_header<T>(path: &str, page: &PageResult<T>) -> String {
    let last = page.total_pages().max(1);
    let link = |p: u64, rel: &str| format!("<{path}?page={p}&per_page={}>; rel=\"{rel}\"", page.per_page);

    let mut links = Vec::with_capacity(4);
    if page.page < last {
        links.push(link(page.page + 1, "next"));
    }
    if page.page > 1 {
        links.push(link(page.page - 1, "prev"));
    }
    links.push(link(last, "last"));
    links.push(link(1, "first"));
    links.join(",")
}

fn insert(response: &mut HttpResponse, name: &str, value: &str) {
    // illegal names or values are skipped
    if let (Ok(name), Ok(value)) = (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        response.headers_mut().insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u64, per_page: u64, total: u64) -> PageResult<()> {
        PageResult {
            items: vec![],
            page,
            per_page,
            total,
        }
    }

    #[test]
    fn audit_headers_name_application_entity_and_action() {
        let headers = AuditHeaders::new("cvmakerApp");

        let response = headers.apply(
            HttpResponse::Ok().finish(),
            AuditAction::Updated,
            "cv",
            "42",
        );

        assert_eq!(
            response.headers().get("x-cvmakerapp-alert").unwrap(),
            "cvmakerApp.cv.updated"
        );
        assert_eq!(response.headers().get("x-cvmakerapp-params").unwrap(), "42");
    }

    #[test]
    fn link_header_on_middle_page_has_all_relations() {
        let link = link_header("/api/skills", &page(2, 10, 35));

        assert_eq!(
            link,
            "</api/skills?page=3&per_page=10>; rel=\"next\",\
             </api/skills?page=1&per_page=10>; rel=\"prev\",\
             </api/skills?page=4&per_page=10>; rel=\"last\",\
             </api/skills?page=1&per_page=10>; rel=\"first\""
        );
    }

    #[test]
    fn link_header_on_single_page_has_only_bounds() {
        let link = link_header("/api/cvs", &page(1, 20, 0));

        assert!(!link.contains("rel=\"next\""));
        assert!(!link.contains("rel=\"prev\""));
        assert!(link.contains("rel=\"last\""));
        assert!(link.contains("rel=\"first\""));
    }

    #[test]
    fn pagination_sets_total_count() {
        let response = with_pagination(HttpResponse::Ok().finish(), "/api/cvs", &page(1, 20, 7));

        assert_eq!(response.headers().get("x-total-count").unwrap(), "7");
        assert!(response.headers().contains_key("link"));
    }
}
