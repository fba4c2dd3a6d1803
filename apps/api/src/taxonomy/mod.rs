// Taxonomy Store: static, read-only lookup tables shared by every analysis.
// Nothing in here is mutated after process start, so concurrent requests read
// it without synchronization.

pub mod handlers;
pub mod patterns;
pub mod roles;
pub mod skills;
pub mod verbs;

pub use roles::RoleProfile;
