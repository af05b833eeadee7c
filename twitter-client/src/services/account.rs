use common::Result;

use crate::models::User;
use crate::transport::Params;

twitter_service!(
    /// 账户接口
    AccountService,
    "account"
);

impl AccountService {
    /// 校验当前会话凭证并返回对应用户
    pub async fn verify_credentials(
        &self,
        include_entities: Option<bool>,
        skip_status: Option<bool>,
        include_email: Option<bool>,
    ) -> Result<User> {
        let params = Params::new()
            .push_opt("include_entities", include_entities)
            .push_opt("skip_status", skip_status)
            .push_opt("include_email", include_email);
        self.adapter
            .get("/1.1/account/verify_credentials.json", &params)
            .await
    }
}
