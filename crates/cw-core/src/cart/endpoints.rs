//! Cart mutation endpoint set.
//!
//! A network call whose resolved URL lands on one of these paths implies the
//! cart's contents changed. Matching is exact string equality of
//! origin + path; there is no prefix or pattern matching.

/// The four logical cart operations, each reachable with and without the
/// `.js` suffix.
pub const CART_MUTATION_PATHS: [&str; 8] = [
    "/cart/add",
    "/cart/update",
    "/cart/change",
    "/cart/clear",
    "/cart/add.js",
    "/cart/update.js",
    "/cart/change.js",
    "/cart/clear.js",
];

/// Full mutation URL set for a page origin.
pub fn mutation_endpoints(origin: &str) -> Vec<String> {
    CART_MUTATION_PATHS
        .iter()
        .map(|path| format!("{origin}{path}"))
        .collect()
}

/// Exact-match check of a resolved response URL against the mutation set.
pub fn is_cart_mutation_url(origin: &str, url: &str) -> bool {
    match url.strip_prefix(origin) {
        Some(path) => CART_MUTATION_PATHS.contains(&path),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://shop.example";

    #[test]
    fn all_eight_paths_match() {
        for path in CART_MUTATION_PATHS {
            let url = format!("{ORIGIN}{path}");
            assert!(is_cart_mutation_url(ORIGIN, &url), "{url} should match");
        }
    }

    #[test]
    fn near_misses_do_not_match() {
        assert!(!is_cart_mutation_url(
            ORIGIN,
            "https://shop.example/cart/add/extra"
        ));
        assert!(!is_cart_mutation_url(ORIGIN, "https://shop.example/cart.js"));
        assert!(!is_cart_mutation_url(ORIGIN, "https://shop.example/cart"));
        assert!(!is_cart_mutation_url(
            ORIGIN,
            "https://shop.example/cart/add.json"
        ));
    }

    #[test]
    fn other_origins_do_not_match() {
        assert!(!is_cart_mutation_url(
            ORIGIN,
            "https://other.example/cart/add"
        ));
        // An origin embedded mid-URL must not fool the matcher.
        assert!(!is_cart_mutation_url(
            ORIGIN,
            "https://evil.example/https://shop.example/cart/add"
        ));
    }

    #[test]
    fn endpoint_set_is_origin_qualified() {
        let endpoints = mutation_endpoints(ORIGIN);
        assert_eq!(endpoints.len(), 8);
        assert!(endpoints.contains(&"https://shop.example/cart/add".to_string()));
        assert!(endpoints.contains(&"https://shop.example/cart/clear.js".to_string()));
    }
}
