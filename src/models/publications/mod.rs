use serde::Serialize;
use serde_json::Value;

// 论文功能尚未落地，始终返回空列表
#[derive(Debug, Default, Serialize)]
pub struct PublicationListResponse {
    pub publications: Vec<Value>,
}
