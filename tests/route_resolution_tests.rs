use actix_web::http::Method;
use route_metrics::{
    RequestScope, RoutePattern, RouteResolver, RouteTree, RouteTreeError, RouterConfig,
    SlashLabel, resolve_route_name,
};

fn resolver(tree: RouteTree) -> RouteResolver {
    RouteResolver::new(tree, &RouterConfig::default())
}

fn label(resolver: &RouteResolver, path: &str) -> Option<String> {
    resolver.resolve(&Method::GET, path)
}

#[test]
fn test_flat_routes_resolve_to_their_template() {
    let resolver = resolver(
        RouteTree::builder()
            .get("/")
            .get("/{id:int}")
            .get("/{id:int}/edit")
            .build()
            .unwrap(),
    );

    assert_eq!(label(&resolver, "/42/edit").as_deref(), Some("/{id:int}/edit"));
    assert_eq!(label(&resolver, "/42").as_deref(), Some("/{id:int}"));
    assert_eq!(label(&resolver, "/").as_deref(), Some("/"));
}

#[test]
fn test_earlier_registration_wins() {
    let resolver = resolver(
        RouteTree::builder()
            .get("/users/{name}")
            .get("/users/me")
            .build()
            .unwrap(),
    );
    assert_eq!(label(&resolver, "/users/me").as_deref(), Some("/users/{name}"));

    let resolver_reversed = self::resolver(
        RouteTree::builder()
            .get("/users/me")
            .get("/users/{name}")
            .build()
            .unwrap(),
    );
    assert_eq!(label(&resolver_reversed, "/users/me").as_deref(), Some("/users/me"));
}

#[test]
fn test_mount_labels_concatenate() {
    let resolver = resolver(
        RouteTree::builder()
            .mount("/api", |api| api.get("/{id}").get("/"))
            .build()
            .unwrap(),
    );

    assert_eq!(label(&resolver, "/api/42").as_deref(), Some("/api/{id}"));
    assert_eq!(label(&resolver, "/api/").as_deref(), Some("/api/"));
    // `/api` only reaches the mount once the slash is added
    assert_eq!(label(&resolver, "/api").as_deref(), Some("/api/"));
}

#[test]
fn test_mount_rejection_is_final() {
    let tree = RouteTree::builder()
        .mount("/api", |api| api.get("/{id:int}"))
        .post("/api/{slug}")
        .build()
        .unwrap();

    let scope = RequestScope::new(Method::GET, "/api/hello");
    assert_eq!(resolve_route_name(&scope, tree.routes()), None);
    assert_eq!(label(&resolver(tree), "/api/hello"), None);
}

#[test]
fn test_trailing_slash_variants_share_a_label() {
    let resolver = resolver(RouteTree::builder().get("/items/").build().unwrap());
    assert_eq!(label(&resolver, "/items"), label(&resolver, "/items/"));
    assert_eq!(label(&resolver, "/items").as_deref(), Some("/items/"));
}

#[test]
fn test_requested_slash_policy_keeps_request_shape() {
    let config = RouterConfig {
        redirect_slashes: true,
        slash_label: SlashLabel::Requested,
    };
    let resolver = RouteResolver::new(
        RouteTree::builder().get("/items/").build().unwrap(),
        &config,
    );
    assert_eq!(label(&resolver, "/items").as_deref(), Some("/items"));
    assert_eq!(label(&resolver, "/items/").as_deref(), Some("/items/"));
}

#[test]
fn test_no_slash_retry_when_redirects_disabled() {
    let config = RouterConfig {
        redirect_slashes: false,
        ..RouterConfig::default()
    };
    let resolver = RouteResolver::new(
        RouteTree::builder().get("/items/").build().unwrap(),
        &config,
    );
    assert_eq!(label(&resolver, "/items"), None);
}

#[test]
fn test_resolution_is_idempotent() {
    let resolver = resolver(
        RouteTree::builder()
            .get("/")
            .mount("/api", |api| api.get("/{id:int}"))
            .build()
            .unwrap(),
    );

    let paths = ["/", "/api/1", "/api/x", "/nope", "/api/2/"];
    let first: Vec<_> = paths.iter().map(|p| label(&resolver, p)).collect();
    for _ in 0..5 {
        let again: Vec<_> = paths.iter().map(|p| label(&resolver, p)).collect();
        assert_eq!(again, first);
    }
}

#[test]
fn test_unmatched_path_is_absent() {
    let resolver = resolver(
        RouteTree::builder()
            .get("/")
            .get("/{id:int}")
            .get("/{id:int}/edit")
            .build()
            .unwrap(),
    );
    assert_eq!(label(&resolver, "/totally/unknown"), None);
}

#[test]
fn test_resolver_is_shareable_across_threads() {
    let resolver = std::sync::Arc::new(resolver(
        RouteTree::builder().get("/{id:int}").build().unwrap(),
    ));

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let resolver = resolver.clone();
            std::thread::spawn(move || resolver.resolve(&Method::GET, &format!("/{n}")))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("/{id:int}"));
    }
}

#[test]
fn test_malformed_routes_fail_at_registration() {
    assert!(matches!(
        RouteTree::builder().get("/{id:bogus}").build(),
        Err(RouteTreeError::UnknownConvertor { .. })
    ));
    assert!(matches!(
        RoutePattern::mount("/api/", vec![]),
        Err(RouteTreeError::MountTrailingSlash { .. })
    ));
}
