use serde::Serialize;

// 作业列表项，due_date 以文本形式返回
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssignmentListItem {
    pub assignment_id: i64,
    pub course_id: i64,
    pub course_code: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    // 暂无提交记录表，以下两项固定为 0
    pub total_submissions: i64,
    pub pending_grading: i64,
}

#[derive(Debug, Serialize)]
pub struct AssignmentListResponse {
    pub assignments: Vec<AssignmentListItem>,
}
