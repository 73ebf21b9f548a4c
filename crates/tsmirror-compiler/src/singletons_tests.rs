use crate::SingletonRegistry;

#[test]
fn default_registry() {
    let registry = SingletonRegistry::default();
    assert_eq!(registry.len(), 13);
    assert_eq!(registry.get("AbstractNpcAPI"), Some("API"));
    assert_eq!(registry.get("AbstractExtendedAPI"), Some("extAPI"));
    assert_eq!(registry.get("IColorCode"), Some("Color"));
    assert_eq!(registry.get("IMouseButton"), Some("MouseButton"));
    assert_eq!(registry.get("IPos"), None);
}

#[test]
fn custom_registry() {
    let registry = SingletonRegistry::empty().with("IServer", "Server");
    assert!(registry.contains("IServer"));
    assert!(!registry.contains("IColorCode"));
    assert_eq!(registry.iter().collect::<Vec<_>>(), [("IServer", "Server")]);
}

#[test]
fn later_entry_replaces_global() {
    let registry = SingletonRegistry::empty()
        .with("IKeys", "Key")
        .with("IKeys", "Keys");
    assert_eq!(registry.get("IKeys"), Some("Keys"));
    assert_eq!(registry.len(), 1);
}
