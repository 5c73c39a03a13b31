//! Desktop notification sink.
use indicator_feed::Notification;
use log::warn;

/// Something that can show a notification to the user.
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

/// Writes notifications to the log and to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        warn!("{}: {}", notification.title, notification.body);
        eprintln!("*** {} ***\n{}", notification.title, notification.body);
    }
}
