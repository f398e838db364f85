use uuid::Uuid;

/// Source of record ids.
///
/// Ids are used both as collection keys and as the `customer_id` / `hotel_id`
/// references held by reservations. Uniqueness is probabilistic.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Ids;

impl IdGenerator for UuidV4Ids {
    fn next_id(&self) -> String {
        generate_id()
    }
}

pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
