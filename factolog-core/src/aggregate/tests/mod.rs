
use crate::notify::Notifier;
use std::sync::Mutex;

#[derive(Default)]
pub(super) struct RecordingNotifier {
    pub sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, content: String) {
        self.sent.lock().unwrap().push(content);
    }
}
