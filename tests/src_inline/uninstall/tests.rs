use super::{UninstallDialog, UninstallRequest};
use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::model::uninstall::{UninstallScope, UninstallTarget};

const UUID: &str = "9f3c1a2e-5b7d-4e0a-8c61-2d4f6a8b0c13";

#[test]
fn test_dialog_defaults() {
    let dialog = UninstallDialog::new(UUID, "android");
    assert!(!dialog.is_visible());
    assert!(!dialog.is_loading());
    assert_eq!(dialog.active_tab(), UninstallScope::Device);
    assert_eq!(dialog.device_type(), "android");
}

#[test]
fn test_tab_order_and_keys() {
    let keys: Vec<_> = UninstallScope::TABS.iter().map(|s| s.tab_key()).collect();
    assert_eq!(keys, vec!["device", "user", "role", "group"]);
    let titles: Vec<_> = UninstallScope::TABS.iter().map(|s| s.tab_title()).collect();
    assert_eq!(titles, vec!["Device", "User", "Role", "Group"]);
}

#[test]
fn test_select_tab_and_close_resets() {
    let mut dialog = UninstallDialog::new(UUID, "android");
    dialog.open();
    assert_eq!(dialog.select_tab("role").unwrap(), UninstallScope::Role);
    dialog.set_loading(true);
    dialog.close();
    assert!(!dialog.is_visible());
    assert!(!dialog.is_loading());
    assert_eq!(dialog.active_tab(), UninstallScope::Device);
}

#[test]
fn test_select_unknown_tab_fails() {
    let mut dialog = UninstallDialog::new(UUID, "android");
    assert!(matches!(
        dialog.select_tab("tenant"),
        Err(ReportError::UnknownScope(_))
    ));
    assert_eq!(dialog.active_tab(), UninstallScope::Device);
}

#[test]
fn test_device_request_endpoint_and_payload() {
    let dialog = UninstallDialog::new(UUID, "android");
    let request = dialog.request(&["dev-1", "dev-2"]).unwrap();
    let config = ReportConfig::default();

    assert_eq!(
        request.endpoint(&config),
        format!("/store/api/application-mgt-store/v1.0/subscription/{UUID}/devices/uninstall")
    );
    assert_eq!(
        request.payload().unwrap(),
        r#"[{"id":"dev-1","type":"android"},{"id":"dev-2","type":"android"}]"#
    );
}

#[test]
fn test_named_scopes_payload() {
    let mut dialog = UninstallDialog::new(UUID, "android");
    let config = ReportConfig::default();
    for (tab, subscription) in [("user", "user"), ("role", "role"), ("group", "group")] {
        dialog.select_tab(tab).unwrap();
        let request = dialog.request(&["admin", "Internal/devicemgt-user"]).unwrap();
        assert!(
            request
                .endpoint(&config)
                .ends_with(&format!("/{subscription}/uninstall"))
        );
        assert_eq!(
            request.payload().unwrap(),
            r#"["admin","Internal/devicemgt-user"]"#
        );
    }
}

#[test]
fn test_request_validation() {
    assert!(matches!(
        UninstallRequest::new(UUID, UninstallScope::User, vec![]),
        Err(ReportError::InvalidUninstall(_))
    ));
    assert!(matches!(
        UninstallRequest::new(" ", UninstallScope::User, vec![UninstallTarget::name("a")]),
        Err(ReportError::InvalidUninstall(_))
    ));
    assert!(matches!(
        UninstallRequest::new(
            UUID,
            UninstallScope::Group,
            vec![UninstallTarget::device("dev-1", "ios")]
        ),
        Err(ReportError::InvalidUninstall(_))
    ));
    assert!(matches!(
        UninstallRequest::new(UUID, UninstallScope::Role, vec![UninstallTarget::name("")]),
        Err(ReportError::InvalidUninstall(_))
    ));
}

#[test]
fn test_scope_parses_subscription_type() {
    assert_eq!("devices".parse::<UninstallScope>().unwrap(), UninstallScope::Device);
    assert_eq!("device".parse::<UninstallScope>().unwrap(), UninstallScope::Device);
    assert!("devs".parse::<UninstallScope>().is_err());
}
