use async_trait::async_trait;
use std::sync::Mutex;
use tracing::info;

use crate::modules::sms::application::ports::outgoing::{SmsError, SmsSender};

/// Records every dispatch instead of hitting the gateway. Used in local
/// development (`SMS_MODE=mock`) and in tests.
#[derive(Default)]
pub struct MockSmsSender {
    pub sent: Mutex<Vec<(String, Vec<String>)>>,
}

impl MockSmsSender {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SmsSender for MockSmsSender {
    async fn send_template(
        &self,
        mobile: &str,
        datas: &[String],
        _template_id: &str,
    ) -> Result<(), SmsError> {
        info!(mobile = %mobile, "Mock SMS dispatch: {:?}", datas);
        self.sent
            .lock()
            .expect("mock sender lock poisoned")
            .push((mobile.to_string(), datas.to_vec()));
        Ok(())
    }
}
