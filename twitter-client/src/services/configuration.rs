use common::Result;

use crate::models::Configuration;
use crate::transport::Params;

twitter_service!(
    /// 服务端配置接口
    ConfigurationService,
    "configuration"
);

impl ConfigurationService {
    pub async fn configuration(&self) -> Result<Configuration> {
        self.adapter
            .get("/1.1/help/configuration.json", &Params::new())
            .await
    }
}
