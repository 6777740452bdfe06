//! Auth Calls

use serde::Serialize;
use urbanease_domain::{paths, Ack, ApiResult, LoginRequest, LoginResponse, SignupRequest};

use super::send_json;

#[derive(Serialize)]
struct OtpArgs<'a> {
    otp: &'a str,
}

pub async fn login(req: &LoginRequest) -> ApiResult<LoginResponse> {
    send_json("POST", paths::LOGIN, req).await
}

/// Creates the pending account and emails an OTP
pub async fn signup(req: &SignupRequest) -> ApiResult<Ack> {
    send_json("POST", paths::SIGNUP, req).await
}

pub async fn verify_otp(otp: &str) -> ApiResult<Ack> {
    send_json("POST", paths::VERIFY_OTP, &OtpArgs { otp }).await
}
