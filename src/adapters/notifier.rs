use crate::core::Notifier;

/// Surfaces messages on stderr, the terminal's stand-in for a toast.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn error(&self, message: &str) {
        tracing::warn!("Notified user: {}", message);
        eprintln!("❌ {}", message);
    }
}
