use thiserror::Error;

/// Failures raised by the member registry and report ledger.
///
/// Both are deterministic consequences of caller input and are never retried.
#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    /// A create operation collided with an existing key.
    ///
    /// Raised for a duplicate member `id`, `activision_id` or `twitter_name`, and
    /// for a duplicate report `id`.
    #[error("A {entity} with {field} '{value}' already exists")]
    UniquenessViolation {
        /// Kind of record being created ("member" or "report")
        entity: &'static str,
        /// Column whose value collided
        field: &'static str,
        /// The colliding value
        value: String,
    },

    /// A report referenced a member ID with no matching record.
    #[error("No registered member with id {0}, use the register command first")]
    UnknownMember(u64),
}
