// ABOUTME: Shared utility functions for Trygo
// ABOUTME: Entity ID generation used by the storage layers

/// Generate a unique entity ID (nanoid format, matches stored id columns)
pub fn generate_entity_id() -> String {
    nanoid::nanoid!()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = generate_entity_id();
        let b = generate_entity_id();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }
}
