//! Fakes shared by the store tests.

use std::sync::{Arc, Mutex};

use api::testing::MockTransport;
use api::ApiClient;

use crate::notify::{Notifier, ToastLevel};

#[derive(Clone, Debug, Default)]
pub(crate) struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<(ToastLevel, String)>>>,
}

impl RecordingNotifier {
    pub(crate) fn toasts(&self) -> Vec<(ToastLevel, String)> {
        self.toasts.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> Option<(ToastLevel, String)> {
        self.toasts().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: ToastLevel, message: &str) {
        self.toasts.lock().unwrap().push((level, message.to_string()));
    }
}

pub(crate) fn mock_client() -> (MockTransport, ApiClient<MockTransport>) {
    let mock = MockTransport::new();
    let client = ApiClient::new(mock.clone(), "http://farm.test");
    (mock, client)
}
