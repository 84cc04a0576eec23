//! Domain-level widget features. Routes and components import these modules
//! so view code stays focused on rendering while entry logic and API
//! handling live in dedicated feature areas.

pub mod otp;
