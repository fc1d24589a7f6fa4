use super::{MailChimpClient, MailChimpError};
use crate::domain::{Folder, Method, Params};

impl MailChimpClient {
    /// Create a folder and return its id.
    pub async fn folder_add(&self, params: Option<&Params>) -> Result<i64, MailChimpError> {
        self.call_int(Method::FolderAdd, params).await
    }

    /// Delete a folder; its campaigns become unfiled.
    pub async fn folder_del(&self, params: Option<&Params>) -> Result<bool, MailChimpError> {
        self.call_bool(Method::FolderDel, params).await
    }

    /// Rename a folder (`fid`, `name`).
    pub async fn folder_update(&self, params: Option<&Params>) -> Result<bool, MailChimpError> {
        self.call_bool(Method::FolderUpdate, params).await
    }

    /// Campaign folders, or autoresponder folders with `type = "autoresponder"`.
    pub async fn folders(&self, params: Option<&Params>) -> Result<Vec<Folder>, MailChimpError> {
        self.call_json(Method::Folders, params).await
    }
}
