use super::Notifier;

/// Blocking `window.alert`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}
