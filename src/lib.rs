//! Consent management backend.
//!
//! Records data-subject consent events tied to collection points and serves paginated,
//! enriched consent records to administrative clients.

pub mod server;
