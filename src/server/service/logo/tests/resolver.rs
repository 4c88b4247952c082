use super::*;

/// Expected: base URL, container and file name joined with single slashes
#[test]
fn joins_base_container_and_file() {
    let resolver = StorageBlobUrlResolver::new("https://blobs.example.com/", "/uploads/");

    assert_eq!(
        resolver.resolve("/logos/acme.png"),
        "https://blobs.example.com/uploads/logos/acme.png"
    );
}

/// Expected: no empty path segment when the container is blank
#[test]
fn omits_blank_container() {
    let resolver = StorageBlobUrlResolver::new("https://blobs.example.com", "");

    assert_eq!(
        resolver.resolve("acme.png"),
        "https://blobs.example.com/acme.png"
    );
}

/// Expected: resolver built from configuration uses its base URL and container
#[test]
fn builds_from_config() {
    let config = Config::from_vars(|name| match name {
        "DATABASE_URL" => Some("postgres://localhost/consent".to_string()),
        "BLOB_BASE_URL" => Some("https://blobs.example.com".to_string()),
        _ => None,
    })
    .unwrap();

    let resolver = StorageBlobUrlResolver::from_config(&config);

    assert_eq!(
        resolver.resolve("acme.png"),
        "https://blobs.example.com/uploads/acme.png"
    );
}
