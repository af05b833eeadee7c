use std::path::Path;

use reqwest::multipart::{Form, Part};
use tracing::debug;

use common::{Error, Result};

use crate::models::Media;

twitter_service!(
    /// 媒体上传接口，绑定上传专用地址
    MediaService,
    "media",
    Upload
);

impl MediaService {
    /// 上传图片，返回的 `media_id_string` 可用于发推
    pub async fn upload(
        &self,
        media: Vec<u8>,
        file_name: &str,
        additional_owners: Option<&str>,
    ) -> Result<Media> {
        debug!("上传媒体 {} ({} 字节)", file_name, media.len());
        let mut form = Form::new().part("media", Part::bytes(media).file_name(file_name.to_string()));
        if let Some(owners) = additional_owners {
            form = form.text("additional_owners", owners.to_string());
        }
        self.adapter.post_multipart("/1.1/media/upload.json", form).await
    }

    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Result<Media> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::InvalidArgument(format!("无效的文件路径: {}", path.display())))?
            .to_string();
        let media = tokio::fs::read(path).await?;
        self.upload(media, &file_name, None).await
    }
}
