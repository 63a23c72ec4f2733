/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const ADMIN_ROUTE_COMPONENT: &str = "admin";
pub const ADMIN_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", ADMIN_ROUTE_COMPONENT);

/// Namespace under which admin templates are registered with the template
/// engine and later looked up for rendering.
pub const VIEW_NAMESPACE: &str = "simpleAdmin";

/// Application-relative directory whose presence overrides the bundled
/// templates. Also the destination of the publish mapping.
pub const VIEW_OVERRIDE_DIR: &str = "resources/views/gocanto/simpleAdmin";

/// File name of the admin page template.
pub const ADMIN_TEMPLATE_FILE: &str = "admin.html";
