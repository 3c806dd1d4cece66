/// Opaque identifier assigned to a WebSocket connection when it opens
pub type ConnectionId = String;

/// Allocate a fresh connection id
pub fn new_connection_id() -> ConnectionId {
    ulid::Ulid::new().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_ids_are_unique() {
        let a = new_connection_id();
        let b = new_connection_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 26);
    }
}
