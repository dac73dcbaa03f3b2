use crate::domain::constants::{SYSTEM_KEY, SYSTEM_NAME};
use crate::domain::models::SessionMeta;

pub fn session_meta() -> SessionMeta {
    let mut meta = SessionMeta::default();
    meta.insert(SYSTEM_KEY, SYSTEM_NAME);
    meta
}

#[cfg(test)]
mod tests {
    use super::session_meta;
    use crate::domain::models::MetaValue;

    #[test]
    fn holds_only_the_system_entry() {
        let meta = session_meta();
        assert_eq!(meta.keys().count(), 1);
        assert_eq!(meta.get("system"), Some(&MetaValue::from("kikku")));
    }

    #[test]
    fn any_other_key_resolves_to_empty() {
        let meta = session_meta();
        for key in ["name", "id", "", "System"] {
            assert_eq!(meta.lookup(key), MetaValue::default(), "key {key:?}");
        }
    }
}
