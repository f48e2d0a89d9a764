pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn welcome_serializes_message_field() {
        let w = types::Welcome::salon();
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["message"], "Услуги парикмахерской");
    }
}
