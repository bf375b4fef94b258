//! HTTP span helpers.

use uuid::Uuid;

/// Segments whose child segment is an identifier.
const ID_PARENTS: [&str; 1] = ["cart"];

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = route_for_path(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Replace identifier segments with `{id}` so spans and metrics group by route.
fn route_for_path(path: &str) -> String {
    let mut segments = Vec::new();
    let mut previous = "";

    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        if ID_PARENTS.contains(&previous) || Uuid::parse_str(segment).is_ok() {
            segments.push("{id}");
        } else {
            segments.push(segment);
        }

        previous = segment;
    }

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_stays_root() {
        assert_eq!(route_for_path("/"), "/");
    }

    #[test]
    fn cart_item_ids_are_collapsed() {
        assert_eq!(route_for_path("/cart/not-a-uuid"), "/cart/{id}");
        assert_eq!(
            route_for_path("/api/cart/0190f7a2-5d3e-7c1a-9b4e-2f6d8a1c3e5b"),
            "/api/cart/{id}"
        );
    }

    #[test]
    fn span_name_combines_method_and_route() {
        let names = request_span_name("PUT", "/cart/abc");

        assert_eq!(names.otel_span_name, "PUT /cart/{id}");
        assert_eq!(names.otel_path, "/cart/{id}");
    }

    #[test]
    fn static_paths_are_unchanged() {
        assert_eq!(route_for_path("/products/categories"), "/products/categories");
    }
}
