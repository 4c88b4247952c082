mod resolver;

use super::*;

use consent_hub_test_utils::prelude::*;

use crate::server::error::kind::ErrorKind;

/// Resolver prefixing file names with a fixed CDN host.
struct CdnResolver;

impl BlobUrlResolver for CdnResolver {
    fn resolve(&self, file_name: &str) -> String {
        format!("https://cdn.example.com/{}", file_name)
    }
}

fn identity() -> Option<Identity> {
    Some(Identity {
        company_id: 1,
        user_id: 7,
    })
}
