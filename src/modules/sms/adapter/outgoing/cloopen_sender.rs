use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::modules::sms::application::ports::outgoing::{SmsError, SmsSender};

const CLOOPEN_SUCCESS: &str = "000000";

/// Cloopen (容联云通讯) template-SMS REST client.
///
/// Every request is signed per the gateway contract:
/// - `sig` query parameter: uppercase `MD5(accountSid + authToken + timestamp)`
/// - `Authorization` header: `base64(accountSid:timestamp)`
///
/// where `timestamp` is the local wall clock formatted `yyyyMMddHHmmss` and
/// must match between the two.
#[derive(Clone)]
pub struct CloopenSmsSender {
    http: reqwest::Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
    app_id: String,
}

#[derive(Serialize)]
struct TemplateSmsBody<'a> {
    to: &'a str,
    #[serde(rename = "appId")]
    app_id: &'a str,
    #[serde(rename = "templateId")]
    template_id: &'a str,
    datas: &'a [String],
}

#[derive(Deserialize)]
struct TemplateSmsResponse {
    #[serde(rename = "statusCode")]
    status_code: String,
    #[serde(rename = "statusMsg")]
    status_msg: Option<String>,
}

impl CloopenSmsSender {
    pub fn new(base_url: &str, account_sid: &str, auth_token: &str, app_id: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            account_sid: account_sid.to_string(),
            auth_token: auth_token.to_string(),
            app_id: app_id.to_string(),
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var("SMS_BASE_URL")
            .unwrap_or_else(|_| "https://app.cloopen.com:8883".to_string());
        let account_sid = std::env::var("SMS_ACCOUNT_SID").expect("SMS_ACCOUNT_SID not set");
        let auth_token = std::env::var("SMS_AUTH_TOKEN").expect("SMS_AUTH_TOKEN not set");
        let app_id = std::env::var("SMS_APP_ID").expect("SMS_APP_ID not set");

        Self::new(&base_url, &account_sid, &auth_token, &app_id)
    }

    fn sig(account_sid: &str, auth_token: &str, timestamp: &str) -> String {
        let digest = md5::compute(format!("{account_sid}{auth_token}{timestamp}"));
        format!("{digest:x}").to_uppercase()
    }

    fn auth_header(account_sid: &str, timestamp: &str) -> String {
        general_purpose::STANDARD.encode(format!("{account_sid}:{timestamp}"))
    }

    fn timestamp() -> String {
        Local::now().format("%Y%m%d%H%M%S").to_string()
    }
}

#[async_trait]
impl SmsSender for CloopenSmsSender {
    async fn send_template(
        &self,
        mobile: &str,
        datas: &[String],
        template_id: &str,
    ) -> Result<(), SmsError> {
        let timestamp = Self::timestamp();
        let sig = Self::sig(&self.account_sid, &self.auth_token, &timestamp);

        let url = format!(
            "{}/2013-12-26/Accounts/{}/SMS/TemplateSMS?sig={}",
            self.base_url, self.account_sid, sig
        );

        let body = TemplateSmsBody {
            to: mobile,
            app_id: &self.app_id,
            template_id,
            datas,
        };

        let response = self
            .http
            .post(&url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json;charset=utf-8")
            .header(
                "Authorization",
                Self::auth_header(&self.account_sid, &timestamp),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| SmsError::Transport(e.to_string()))?;

        let parsed: TemplateSmsResponse = response
            .json()
            .await
            .map_err(|e| SmsError::Transport(e.to_string()))?;

        if parsed.status_code != CLOOPEN_SUCCESS {
            let msg = parsed.status_msg.unwrap_or_default();
            error!(
                status = %parsed.status_code,
                msg = %msg,
                "Cloopen gateway rejected SMS"
            );
            return Err(SmsError::GatewayStatus(parsed.status_code));
        }

        debug!(mobile = %mobile, "Template SMS dispatched");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sig_is_uppercase_md5_of_sid_token_timestamp() {
        // MD5("abc") = 900150983cd24fb0d6963f7d28e17f72
        let sig = CloopenSmsSender::sig("a", "b", "c");
        assert_eq!(sig, "900150983CD24FB0D6963F7D28E17F72");
    }

    #[test]
    fn auth_header_is_base64_of_sid_colon_timestamp() {
        let header = CloopenSmsSender::auth_header("sid", "20250101120000");
        let decoded = general_purpose::STANDARD.decode(header).unwrap();
        assert_eq!(decoded, b"sid:20250101120000");
    }

    #[test]
    fn timestamp_has_fixed_width() {
        assert_eq!(CloopenSmsSender::timestamp().len(), 14);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let sender = CloopenSmsSender::new("https://gw.example.com/", "sid", "tok", "app");
        assert_eq!(sender.base_url, "https://gw.example.com");
    }

    #[test]
    fn body_serializes_with_gateway_field_names() {
        let datas = vec!["123456".to_string(), "5".to_string()];
        let body = TemplateSmsBody {
            to: "13800000000",
            app_id: "app",
            template_id: "1",
            datas: &datas,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["to"], "13800000000");
        assert_eq!(json["appId"], "app");
        assert_eq!(json["templateId"], "1");
        assert_eq!(json["datas"][0], "123456");
    }
}
