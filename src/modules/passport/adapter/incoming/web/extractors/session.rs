use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;

use crate::modules::passport::application::ports::outgoing::{
    SessionBlacklist, SessionTokenProvider,
};
use crate::modules::passport::application::services::token_hasher::hash_token;
use crate::shared::api::{ApiResponse, ErrCode};

/// Everything the extractors need to resolve a principal. Registered once as
/// `web::Data<SessionGuard>` during app wiring.
#[derive(Clone)]
pub struct SessionGuard {
    pub tokens: Arc<dyn SessionTokenProvider>,
    pub blacklist: Arc<dyn SessionBlacklist>,
}

/// The authenticated principal attached to a request.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: i32,
    pub mobile: String,
    pub nick_name: String,
    pub is_admin: bool,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

pub fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for SessionUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let guard = req.app_data::<web::Data<SessionGuard>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let guard = guard
                .ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            let token =
                token.ok_or_else(|| create_api_error(ApiResponse::session_err()))?;

            let claims = guard
                .tokens
                .verify_session_token(&token)
                .map_err(|_| create_api_error(ApiResponse::session_err()))?;

            // Logged-out tokens stay blacklisted until their natural expiry.
            let revoked = guard
                .blacklist
                .is_revoked(&hash_token(&token))
                .await
                .map_err(|_| create_api_error(ApiResponse::internal_error()))?;

            if revoked {
                return Err(create_api_error(ApiResponse::session_err()));
            }

            Ok(SessionUser {
                user_id: claims.sub,
                mobile: claims.mobile,
                nick_name: claims.nick_name,
                is_admin: claims.is_admin,
            })
        })
    }
}

/// An authenticated principal that also carries the admin flag.
///
/// Every admin route except the admin login takes this extractor; a valid
/// session without the flag is rejected before the handler runs.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: i32,
    pub mobile: String,
    pub nick_name: String,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let user = SessionUser::extract(&req).await?;

            if !user.is_admin {
                return Err(create_api_error(ApiResponse::err_default(ErrCode::RoleErr)));
            }

            Ok(AdminUser {
                user_id: user.user_id,
                mobile: user.mobile,
                nick_name: user.nick_name,
            })
        })
    }
}
