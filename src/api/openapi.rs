use utoipa::OpenApi;

use crate::api::schemas::{ErrorEnvelope, SuccessEnvelope};
use crate::modules::passport::adapter::incoming::web::routes::login::{
    self, LoginRequestDto,
};
use crate::modules::passport::adapter::incoming::web::routes::register::{
    self, RegisterRequestDto,
};
use crate::modules::passport::adapter::incoming::web::routes::sms_code::{
    self, SmsCodeRequestDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "News portal API",
        description = "Credential flow and social-graph endpoints. All JSON \
                       endpoints answer with the `{errno, errmsg, data?}` envelope."
    ),
    paths(
        sms_code::send_sms_code_handler,
        register::register_user_handler,
        login::login_user_handler,
    ),
    components(schemas(
        SmsCodeRequestDto,
        RegisterRequestDto,
        LoginRequestDto,
        SuccessEnvelope,
        ErrorEnvelope,
    )),
    tags(
        (name = "passport", description = "Captcha, SMS codes, registration and login")
    )
)]
pub struct ApiDoc;
